//! Render Driver B: fixed-rate incremental updates.
//!
//! The playback session's interval task calls `tick` about 60 times a second
//! with the elapsed time; only on-screen notes are patched. Whenever the size,
//! the note set, the enabled tracks or the play state change, the host runs
//! one forced `sync` pass so hidden/visible state and geometry stay consistent
//! while nothing is ticking.
//!
//! Geometry is the lightness-only look: full-height rectangles, one envelope.

use super::cull::patch_if_visible;
use super::surface::{Display, DisplaySurface, ElementId, ElementKind};
use crate::config::RenderConfig;
use crate::geometry::bar_rect;
use crate::model::{track_enabled, Note, Size};

#[derive(Debug)]
pub struct TimerRenderer {
    config: RenderConfig,
    bar: Option<ElementId>,
    elements: Vec<ElementId>,
}

impl TimerRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            bar: None,
            elements: Vec::new(),
        }
    }

    /// Lightness-only look over the full MIDI range.
    pub fn with_defaults() -> Self {
        Self::new(RenderConfig::default_lightness_only())
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Swap the config (pitch range edits). Follow with a `sync`.
    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
    }

    pub fn init<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S, notes: &[Note], size: Size) {
        surface.clear();
        let bar = surface.create_rect(ElementKind::Bar);
        surface.apply_patch(bar, &bar_rect(size));
        self.bar = Some(bar);
        self.elements = notes.iter().map(|_| surface.create_rect(ElementKind::Note)).collect();
        log::debug!("timer renderer: created {} note elements", notes.len());
    }

    /// Forced full pass over every note.
    ///
    /// A note is hidden when its track is disabled or its pitch lies outside
    /// the configured range.
    pub fn sync<S: DisplaySurface + ?Sized>(
        &mut self,
        surface: &mut S,
        notes: &[Note],
        size: Size,
        enabled_tracks: &[bool],
        elapsed_sec: f64,
    ) {
        debug_assert_eq!(notes.len(), self.elements.len(), "note set changed without init");

        if let Some(bar) = self.bar {
            surface.apply_patch(bar, &bar_rect(size));
        }

        if let Some(missing) = notes.iter().find(|n| n.track_index >= enabled_tracks.len()) {
            log::warn!(
                "no enabled flag for track {} ({} flags): its notes stay hidden",
                missing.track_index,
                enabled_tracks.len()
            );
        }

        let scale = self.config.scale();
        for (note, &id) in notes.iter().zip(&self.elements) {
            let hidden = !track_enabled(enabled_tracks, note.track_index) || !scale.contains(note.note_number);
            if let Some(patch) = patch_if_visible(size, note, elapsed_sec, &self.config, true) {
                surface.apply_patch(id, &patch);
            }
            surface.set_display(id, Display::visible(!hidden));
        }
        log::debug!("timer renderer: synced {} notes at {:.3}s", notes.len(), elapsed_sec);
    }

    /// One timer tick: patch on-screen notes only. Returns how many were patched.
    pub fn tick<S: DisplaySurface + ?Sized>(
        &mut self,
        surface: &mut S,
        notes: &[Note],
        size: Size,
        elapsed_sec: f64,
    ) -> usize {
        let mut patched = 0;
        for (note, &id) in notes.iter().zip(&self.elements) {
            if let Some(patch) = patch_if_visible(size, note, elapsed_sec, &self.config, false) {
                surface.apply_patch(id, &patch);
                patched += 1;
            }
        }
        patched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{note_rect, Fill};
    use crate::render::surface::ElementList;

    const SIZE: Size = Size::new(512.0, 288.0);

    fn notes() -> Vec<Note> {
        vec![
            Note::new(60, 0.0, 1.0, 0),
            Note::new(20, 1.0, 2.0, 1),
            Note::new(72, 40.0, 41.0, 0),
        ]
    }

    #[test]
    fn sync_patches_every_note_and_hides_by_track_and_range() {
        let notes = notes();
        let mut surface = ElementList::new();
        let config = RenderConfig::lightness_only(36.0, 96.0).unwrap();
        let mut renderer = TimerRenderer::new(config);
        renderer.init(&mut surface, &notes, SIZE);
        renderer.sync(&mut surface, &notes, SIZE, &[true, true], 0.0);

        // forced: the far-future note gets geometry too
        assert_eq!(surface.get(3).unwrap().patch, Some(note_rect(SIZE, &notes[2], 0.0, &config)));
        assert_eq!(surface.get(1).unwrap().display, Display::Block);
        // pitch 20 is below the range
        assert_eq!(surface.get(2).unwrap().display, Display::None);

        renderer.sync(&mut surface, &notes, SIZE, &[false, true], 0.0);
        assert_eq!(surface.get(1).unwrap().display, Display::None);
        assert_eq!(surface.get(3).unwrap().display, Display::None);
    }

    #[test]
    fn tick_only_touches_visible_notes() {
        let notes = notes();
        let mut surface = ElementList::new();
        let mut renderer = TimerRenderer::with_defaults();
        renderer.init(&mut surface, &notes, SIZE);

        assert_eq!(renderer.tick(&mut surface, &notes, SIZE, 0.5), 2);
        assert_eq!(surface.get(3).unwrap().patch, None);
        assert!(surface.get(1).unwrap().patch.is_some());
    }

    #[test]
    fn rectangles_are_full_height_and_lightness_animated() {
        let notes = notes();
        let mut surface = ElementList::new();
        let mut renderer = TimerRenderer::with_defaults();
        renderer.init(&mut surface, &notes, SIZE);
        renderer.tick(&mut surface, &notes, SIZE, 0.0);

        let patch = surface.get(1).unwrap().patch.unwrap();
        assert!((patch.height - SIZE.height / 127.0).abs() < 1e-9);
        match patch.fill {
            Fill::Hsl(hsl) => assert_eq!(hsl.lightness, 100.0),
            Fill::Css(_) => panic!("expected hsl fill"),
        }
    }

    #[test]
    fn bar_follows_size_on_sync() {
        let notes = notes();
        let mut surface = ElementList::new();
        let mut renderer = TimerRenderer::with_defaults();
        renderer.init(&mut surface, &notes, SIZE);
        assert_eq!(surface.get(0).unwrap().patch.unwrap().x, 256.0);

        renderer.sync(&mut surface, &notes, Size::new(800.0, 450.0), &[true, true], 0.0);
        assert_eq!(surface.get(0).unwrap().patch.unwrap().x, 400.0);
    }
}
