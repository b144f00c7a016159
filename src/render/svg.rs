//! Serialize an element list as a standalone SVG document.

use std::fmt::Write;

use super::surface::{ElementKind, ElementList, RectElement};
use crate::model::Size;

/// Darkening laid over the background image so the notes stay readable.
const BACKGROUND_OVERLAY: &str = "rgba(0, 0, 0, 0.6)";

/// Render `elements` into an SVG string of the given size.
///
/// With a `background` href the image is stretched to cover the canvas under
/// a 60 % black overlay.
pub fn to_svg(elements: &ElementList, size: Size, background: Option<&str>) -> String {
    let mut out = String::new();
    write_document(&mut out, elements, size, background).expect("writing to a String cannot fail");
    out
}

fn write_document(
    out: &mut String,
    elements: &ElementList,
    size: Size,
    background: Option<&str>,
) -> std::fmt::Result {
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = size.width,
        h = size.height
    )?;

    if let Some(href) = background {
        writeln!(
            out,
            r#"  <image href="{}" x="0" y="0" width="{}" height="{}" preserveAspectRatio="xMidYMid slice"/>"#,
            escape_attr(href),
            size.width,
            size.height
        )?;
        writeln!(
            out,
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            size.width, size.height, BACKGROUND_OVERLAY
        )?;
    }

    for element in elements.iter() {
        write_rect(out, element)?;
    }

    writeln!(out, "</svg>")
}

fn write_rect(out: &mut String, element: &RectElement) -> std::fmt::Result {
    out.push_str("  <rect");
    match element.kind {
        ElementKind::Bar => out.push_str(r#" id="bar""#),
        ElementKind::Note => out.push_str(r#" class="note""#),
    }
    if let Some(patch) = &element.patch {
        write!(
            out,
            r#" x="{}" y="{}" width="{}" height="{}" fill="{}""#,
            patch.x, patch.y, patch.width, patch.height, patch.fill
        )?;
    }
    if element.kind == ElementKind::Note {
        write!(out, r#" style="display: {}""#, element.display.as_css())?;
    }
    writeln!(out, "/>")
}

fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
