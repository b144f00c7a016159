//! Piano roll widget - paints the element list onto a half-block canvas

use midiroll::{geometry::RectPatch, render::ElementList, Size};
use ratatui::{
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::canvas::{Canvas, Painter, Shape},
    Frame,
};

/// A solid rectangle in surface coordinates (y grows downwards).
struct FilledRect<'a> {
    patch: &'a RectPatch,
    size: Size,
}

impl Shape for FilledRect<'_> {
    fn draw(&self, painter: &mut Painter) {
        let Size { width, height } = self.size;
        let left = self.patch.x.clamp(0.0, width);
        let right = self.patch.right().clamp(0.0, width);
        // Canvas y grows upwards
        let top = (height - self.patch.y).clamp(0.0, height);
        let bottom = (height - self.patch.bottom()).clamp(0.0, height);
        if right < left || top < bottom {
            return;
        }

        let (Some((x0, y0)), Some((x1, y1))) = (painter.get_point(left, top), painter.get_point(right, bottom))
        else {
            return;
        };
        let [r, g, b] = self.patch.fill.to_rgb();
        let color = Color::Rgb(r, g, b);
        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                painter.paint(x, y, color);
            }
        }
    }
}

/// Render every shown element, bar first, notes in load order.
pub fn render_roll(frame: &mut Frame, area: Rect, elements: &ElementList, size: Size) {
    let canvas = Canvas::default()
        .marker(Marker::HalfBlock)
        .background_color(Color::Black)
        .x_bounds([0.0, size.width])
        .y_bounds([0.0, size.height])
        .paint(|ctx| {
            for element in elements.iter().filter(|e| e.is_shown()) {
                if let Some(patch) = &element.patch {
                    ctx.draw(&FilledRect { patch, size });
                }
            }
        });
    frame.render_widget(canvas, area);
}
