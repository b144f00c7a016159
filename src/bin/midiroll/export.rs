//! Single-frame SVG export.

use std::path::Path;

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use midiroll::{
    render::{to_svg, DeclarativeRenderer, ElementList},
    FrameContext, NoteSet, RenderConfig, Size,
};

/// Render the paused frame at `elapsed_sec` with every track enabled.
pub fn write_frame(
    out: &Path,
    note_set: &NoteSet,
    config: &RenderConfig,
    size: Size,
    elapsed_sec: f64,
    background: Option<&str>,
) -> EyreResult<()> {
    let mut surface = ElementList::new();
    let mut renderer = DeclarativeRenderer::new();
    renderer.init(&mut surface, &note_set.notes);

    let frame = FrameContext::new(elapsed_sec, note_set.all_enabled(), false);
    let stats = renderer.update(&mut surface, &note_set.notes, size, config, &frame);

    std::fs::write(out, to_svg(&surface, size, background))
        .wrap_err_with(|| format!("failed to write {}", out.display()))?;
    log::info!(
        "wrote {} ({} notes at {:.2}s, {}x{})",
        out.display(),
        stats.updated,
        elapsed_sec,
        size.width,
        size.height
    );
    Ok(())
}
