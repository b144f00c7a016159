use crate::geometry::RectPatch;

/// Index of an element in creation order.
pub type ElementId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// The playhead bar (`id="bar"`)
    Bar,
    /// One note rectangle (`class="note"`)
    Note,
}

/// CSS `display` of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}

impl Display {
    pub fn visible(visible: bool) -> Self {
        if visible {
            Display::Block
        } else {
            Display::None
        }
    }

    pub fn as_css(&self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::None => "none",
        }
    }
}

/// Where render drivers put their rectangles.
///
/// Elements are created once per note set, in note order, and afterwards
/// only patched. The surface is never queried by the drivers.
pub trait DisplaySurface {
    /// Drop every element (a new note set is coming).
    fn clear(&mut self);

    fn create_rect(&mut self, kind: ElementKind) -> ElementId;

    fn apply_patch(&mut self, id: ElementId, patch: &RectPatch);

    fn set_display(&mut self, id: ElementId, display: Display);
}

/// Allow boxed surfaces to be used as surfaces (for dynamic dispatch)
impl DisplaySurface for Box<dyn DisplaySurface> {
    fn clear(&mut self) {
        (**self).clear()
    }

    fn create_rect(&mut self, kind: ElementKind) -> ElementId {
        (**self).create_rect(kind)
    }

    fn apply_patch(&mut self, id: ElementId, patch: &RectPatch) {
        (**self).apply_patch(id, patch)
    }

    fn set_display(&mut self, id: ElementId, display: Display) {
        (**self).set_display(id, display)
    }
}

/// Current attributes of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectElement {
    pub kind: ElementKind,
    /// Last applied geometry (`None` until first patched)
    pub patch: Option<RectPatch>,
    pub display: Display,
}

impl RectElement {
    pub fn is_shown(&self) -> bool {
        self.display == Display::Block && self.patch.is_some()
    }
}

/// In-memory element list, the backing store of the SVG and terminal surfaces.
#[derive(Debug, Clone, Default)]
pub struct ElementList {
    elements: Vec<RectElement>,
}

impl ElementList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ElementId) -> Option<&RectElement> {
        self.elements.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RectElement> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Note elements only, in creation order.
    pub fn notes(&self) -> impl Iterator<Item = &RectElement> {
        self.elements.iter().filter(|e| e.kind == ElementKind::Note)
    }
}

impl DisplaySurface for ElementList {
    fn clear(&mut self) {
        self.elements.clear();
    }

    fn create_rect(&mut self, kind: ElementKind) -> ElementId {
        self.elements.push(RectElement {
            kind,
            patch: None,
            display: Display::Block,
        });
        self.elements.len() - 1
    }

    fn apply_patch(&mut self, id: ElementId, patch: &RectPatch) {
        if let Some(element) = self.elements.get_mut(id) {
            element.patch = Some(*patch);
        }
    }

    fn set_display(&mut self, id: ElementId, display: Display) {
        if let Some(element) = self.elements.get_mut(id) {
            element.display = display;
        }
    }
}
