//! Render Driver A: whole-note-set update once per animation frame.
//!
//! The host calls `init` once per note set and `update` every frame with a
//! fresh `FrameContext`. Each frame the bar is re-placed, every note's
//! visibility is re-evaluated from its track flag, and the rectangles that
//! survive culling are recomputed from scratch. Nothing is read back from the
//! surface: culling works from a per-note cache of the last applied extent.

use super::cull::{self, RectState};
use super::surface::{Display, DisplaySurface, ElementId, ElementKind};
use crate::config::RenderConfig;
use crate::geometry::{bar_rect, note_rect, Orientation};
use crate::model::{FrameContext, Note, Size};

/// Counts from one `update` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Notes whose rectangle was recomputed and applied
    pub updated: usize,
    /// Notes skipped by culling
    pub culled: usize,
}

#[derive(Debug, Default)]
pub struct DeclarativeRenderer {
    bar: Option<ElementId>,
    /// One element per note, index-aligned with the note set
    elements: Vec<ElementId>,
    /// Last applied layout-space extent per note
    cache: Vec<Option<RectState>>,
    /// Highest track index referenced by a note, plus one
    track_count: usize,
    /// Enabled-flag count already checked against `track_count`
    checked_flags: Option<usize>,
}

impl DeclarativeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the bar and one element per note, in note order.
    pub fn init<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S, notes: &[Note]) {
        surface.clear();
        self.bar = Some(surface.create_rect(ElementKind::Bar));
        self.elements = notes.iter().map(|_| surface.create_rect(ElementKind::Note)).collect();
        self.cache = vec![None; notes.len()];
        self.track_count = notes.iter().map(|n| n.track_index + 1).max().unwrap_or(0);
        self.checked_flags = None;
        log::debug!("declarative renderer: created {} note elements", notes.len());
    }

    /// Forget cached extents so every note is recomputed on the next frame.
    ///
    /// Needed after seeking backwards, since culling assumes forward playback.
    pub fn invalidate(&mut self) {
        self.cache.iter_mut().for_each(|entry| *entry = None);
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Recompute and apply everything for one frame.
    pub fn update<S: DisplaySurface + ?Sized>(
        &mut self,
        surface: &mut S,
        notes: &[Note],
        size: Size,
        config: &RenderConfig,
        frame: &FrameContext,
    ) -> FrameStats {
        debug_assert_eq!(notes.len(), self.elements.len(), "note set changed without init");

        self.check_flags(frame.enabled_tracks.len());

        let orientation = Orientation::from_vertical(config.is_vertical());
        let layout = orientation.layout_size(size);

        if let Some(bar) = self.bar {
            surface.apply_patch(bar, &orientation.to_screen(bar_rect(layout), size));
        }

        let mut stats = FrameStats::default();
        for ((note, &id), cached) in notes.iter().zip(&self.elements).zip(self.cache.iter_mut()) {
            // Visibility follows the track flag every frame, culled or not
            surface.set_display(id, Display::visible(frame.is_track_enabled(note.track_index)));

            if cull::frozen(frame.playing, cached.as_ref()) {
                stats.culled += 1;
                continue;
            }
            let patch = note_rect(layout, note, frame.elapsed_sec, config);
            if cull::not_yet_visible(frame.playing, &patch, layout) {
                stats.culled += 1;
                continue;
            }

            *cached = Some(RectState::from(&patch));
            surface.apply_patch(id, &orientation.to_screen(patch, size));
            stats.updated += 1;
        }

        log::trace!(
            "frame at {:.3}s: {} updated, {} culled",
            frame.elapsed_sec,
            stats.updated,
            stats.culled
        );
        stats
    }

    fn check_flags(&mut self, flags: usize) {
        if self.checked_flags == Some(flags) {
            return;
        }
        self.checked_flags = Some(flags);
        if flags < self.track_count {
            log::warn!(
                "{} track flags for {} tracks: notes on unflagged tracks stay hidden",
                flags,
                self.track_count
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::flip_size;
    use crate::render::surface::ElementList;

    const SIZE: Size = Size::new(512.0, 288.0);

    fn notes() -> Vec<Note> {
        vec![
            Note::new(60, 0.0, 1.0, 0),   // on screen early, gone later
            Note::new(64, 2.0, 3.0, 1),   // on screen throughout
            Note::new(67, 30.0, 31.0, 0), // far in the future
        ]
    }

    fn setup(notes: &[Note]) -> (DeclarativeRenderer, ElementList) {
        let mut renderer = DeclarativeRenderer::new();
        let mut surface = ElementList::new();
        renderer.init(&mut surface, notes);
        (renderer, surface)
    }

    #[test]
    fn init_creates_bar_and_one_element_per_note() {
        let notes = notes();
        let (renderer, surface) = setup(&notes);
        assert_eq!(surface.len(), notes.len() + 1);
        assert_eq!(surface.get(0).unwrap().kind, ElementKind::Bar);
        assert_eq!(renderer.element_count(), notes.len());
    }

    #[test]
    fn paused_frame_updates_every_note() {
        let notes = notes();
        let (mut renderer, mut surface) = setup(&notes);
        let config = RenderConfig::default();
        let frame = FrameContext::new(0.0, vec![true, true], false);

        let stats = renderer.update(&mut surface, &notes, SIZE, &config, &frame);
        assert_eq!(stats, FrameStats { updated: 3, culled: 0 });
        for (i, note) in notes.iter().enumerate() {
            assert_eq!(
                surface.get(i + 1).unwrap().patch,
                Some(note_rect(SIZE, note, 0.0, &config))
            );
        }
    }

    #[test]
    fn playing_frame_skips_future_and_past_notes() {
        let notes = notes();
        let (mut renderer, mut surface) = setup(&notes);
        let config = RenderConfig::default();

        let first = renderer.update(&mut surface, &notes, SIZE, &config, &FrameContext::new(0.0, vec![true, true], true));
        assert_eq!(first, FrameStats { updated: 2, culled: 1 });
        assert_eq!(surface.get(3).unwrap().patch, None);

        // note 0 scrolls past the left edge at 6 s+, gets one last update, then freezes
        renderer.update(&mut surface, &notes, SIZE, &config, &FrameContext::new(7.0, vec![true, true], true));
        let frozen_patch = surface.get(1).unwrap().patch;
        let later = renderer.update(&mut surface, &notes, SIZE, &config, &FrameContext::new(8.0, vec![true, true], true));
        assert_eq!(later.culled, 2);
        assert_eq!(surface.get(1).unwrap().patch, frozen_patch);
    }

    #[test]
    fn pausing_recomputes_frozen_notes() {
        let notes = notes();
        let (mut renderer, mut surface) = setup(&notes);
        let config = RenderConfig::default();
        renderer.update(&mut surface, &notes, SIZE, &config, &FrameContext::new(7.0, vec![true, true], true));
        renderer.update(&mut surface, &notes, SIZE, &config, &FrameContext::new(8.0, vec![true, true], true));

        let paused = renderer.update(&mut surface, &notes, SIZE, &config, &FrameContext::new(8.0, vec![true, true], false));
        assert_eq!(paused.updated, 3);
        assert_eq!(surface.get(1).unwrap().patch, Some(note_rect(SIZE, &notes[0], 8.0, &config)));
    }

    #[test]
    fn invalidate_unfreezes_after_seeking_back() {
        let notes = notes();
        let (mut renderer, mut surface) = setup(&notes);
        let config = RenderConfig::default();
        renderer.update(&mut surface, &notes, SIZE, &config, &FrameContext::new(7.0, vec![true, true], true));

        renderer.invalidate();
        renderer.update(&mut surface, &notes, SIZE, &config, &FrameContext::new(0.5, vec![true, true], true));
        assert_eq!(surface.get(1).unwrap().patch, Some(note_rect(SIZE, &notes[0], 0.5, &config)));
    }

    #[test]
    fn disabled_track_is_hidden_even_when_culled() {
        let notes = notes();
        let (mut renderer, mut surface) = setup(&notes);
        let config = RenderConfig::default();
        let frame = FrameContext::new(0.0, vec![false, true], true);

        renderer.update(&mut surface, &notes, SIZE, &config, &frame);
        assert_eq!(surface.get(1).unwrap().display, Display::None);
        assert_eq!(surface.get(2).unwrap().display, Display::Block);
        // culled (far future) but still hidden
        assert_eq!(surface.get(3).unwrap().patch, None);
        assert_eq!(surface.get(3).unwrap().display, Display::None);
    }

    #[test]
    fn vertical_mode_computes_against_flipped_size() {
        let notes = notes();
        let (mut renderer, mut surface) = setup(&notes);
        let config = RenderConfig::default().with_vertical(true);
        renderer.update(&mut surface, &notes, SIZE, &config, &FrameContext::new(1.0, vec![true, true], false));

        let layout = flip_size(SIZE);
        let expected_bar = Orientation::Vertical.to_screen(bar_rect(layout), SIZE);
        assert_eq!(surface.get(0).unwrap().patch, Some(expected_bar));
        let expected_note = Orientation::Vertical.to_screen(note_rect(layout, &notes[1], 1.0, &config), SIZE);
        assert_eq!(surface.get(2).unwrap().patch, Some(expected_note));
    }

    #[test]
    fn vertical_playing_culls_in_layout_space() {
        // layout is 288 wide, so 28.8 per second over the 10 s window
        let notes = vec![
            Note::new(60, 0.0, 1.0, 0), // scrolls past at 7 s
            Note::new(64, 2.0, 3.0, 1), // on screen at 0 s
            Note::new(67, 6.0, 7.0, 0), // layout x = 316.8: past 288, inside 512
        ];
        let (mut renderer, mut surface) = setup(&notes);
        let config = RenderConfig::default().with_vertical(true);
        let layout = flip_size(SIZE);
        let playing = |elapsed| FrameContext::new(elapsed, vec![true, true], true);

        let first = renderer.update(&mut surface, &notes, SIZE, &config, &playing(0.0));
        assert_eq!(first, FrameStats { updated: 2, culled: 1 });
        assert!(note_rect(layout, &notes[2], 0.0, &config).x > layout.width);
        assert!(note_rect(layout, &notes[2], 0.0, &config).x <= SIZE.width);
        assert_eq!(surface.get(3).unwrap().patch, None);
        assert_eq!(
            surface.get(2).unwrap().patch,
            Some(Orientation::Vertical.to_screen(note_rect(layout, &notes[1], 0.0, &config), SIZE))
        );

        renderer.update(&mut surface, &notes, SIZE, &config, &playing(7.0));
        let frozen_patch = surface.get(1).unwrap().patch;
        let later = renderer.update(&mut surface, &notes, SIZE, &config, &playing(8.0));
        assert_eq!(later, FrameStats { updated: 2, culled: 1 });
        assert_eq!(surface.get(1).unwrap().patch, frozen_patch);
        assert_eq!(
            surface.get(3).unwrap().patch,
            Some(Orientation::Vertical.to_screen(note_rect(layout, &notes[2], 8.0, &config), SIZE))
        );
    }

    #[test]
    fn size_is_reread_every_frame() {
        let notes = notes();
        let (mut renderer, mut surface) = setup(&notes);
        let config = RenderConfig::default();
        let frame = FrameContext::new(1.0, vec![true, true], false);

        renderer.update(&mut surface, &notes, SIZE, &config, &frame);
        let wider = Size::new(1024.0, 288.0);
        renderer.update(&mut surface, &notes, wider, &config, &frame);
        assert_eq!(surface.get(0).unwrap().patch.unwrap().x, 512.0);
        assert_eq!(surface.get(2).unwrap().patch, Some(note_rect(wider, &notes[1], 1.0, &config)));
    }
}
