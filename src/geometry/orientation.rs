use super::note_rect::RectPatch;
use crate::model::Size;

/// Which screen axis carries time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Time along x, pitch along y
    #[default]
    Horizontal,
    /// Time along y, pitch along x
    Vertical,
}

impl Orientation {
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// Size the geometry should be computed against.
    pub fn layout_size(self, screen: Size) -> Size {
        match self {
            Orientation::Horizontal => screen,
            Orientation::Vertical => flip_size(screen),
        }
    }

    /// Move a rectangle computed against `layout_size(screen)` onto the screen.
    ///
    /// Call exactly once per rectangle: the flip is not its own inverse.
    pub fn to_screen(self, rect: RectPatch, screen: Size) -> RectPatch {
        match self {
            Orientation::Horizontal => rect,
            Orientation::Vertical => flip_rect(rect, screen),
        }
    }
}

pub fn flip_size(size: Size) -> Size {
    Size::new(size.height, size.width)
}

/// Rotate a layout-space rectangle into screen space.
///
/// `rect` was computed against `flip_size(screen)`; `screen` is the real size.
pub fn flip_rect(rect: RectPatch, screen: Size) -> RectPatch {
    RectPatch {
        x: screen.width - rect.y - rect.height,
        y: screen.height - rect.x - rect.width,
        width: rect.height,
        height: rect.width,
        fill: rect.fill,
    }
}
