//! Transport bar and track list widgets

use midiroll::{playback::format_time, Track};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// What the transport bar shows for one frame.
pub struct TransportView {
    pub playing: bool,
    pub elapsed_sec: f64,
    pub duration_sec: f64,
    pub driver: &'static str,
    pub time_range_sec: f64,
    pub vertical: bool,
}

/// Render the transport bar
pub fn render_transport(frame: &mut Frame, area: Rect, view: &TransportView) {
    let block = Block::default().title(" midiroll ").borders(Borders::ALL);

    let play_symbol = if view.playing { "▶" } else { "⏸" };
    let play_state_str = if view.playing { "Playing" } else { "Paused" };
    let duration = (view.duration_sec > 0.0).then_some(view.duration_sec);

    let line = Line::from(vec![
        Span::styled(
            format!(" {} {}  ", play_symbol, play_state_str),
            Style::default().fg(if view.playing { Color::Green } else { Color::Yellow }),
        ),
        Span::styled(
            format!("{} / {}  ", format_time(Some(view.elapsed_sec)), format_time(duration)),
            Style::default().fg(Color::White),
        ),
        Span::styled(format!("Driver: {}  ", view.driver), Style::default().fg(Color::Cyan)),
        Span::styled(
            format!("Range: {:.0}s  ", view.time_range_sec),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            if view.vertical { "Vertical" } else { "Horizontal" },
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

/// One entry per track, numbered by its toggle key
pub fn render_tracks(frame: &mut Frame, area: Rect, tracks: &[Track], enabled: &[bool]) {
    let mut spans = vec![Span::raw(" ")];
    for (i, track) in tracks.iter().enumerate() {
        let on = enabled.get(i).copied().unwrap_or(false);
        let style = if on {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let key = if i < 9 { format!("{}", i + 1) } else { "-".to_owned() };
        spans.push(Span::styled(format!("[{}] {}  ", key, track.name), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
