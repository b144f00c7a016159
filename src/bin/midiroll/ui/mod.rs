//! TUI module for midiroll
//!
//! Hosts either render driver over a terminal canvas and maps keys to
//! transport and track controls.

mod canvas;
mod transport;

use std::time::{Duration, Instant};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use midiroll::{
    playback::{AudioHandle, PlaybackSession, Transport},
    render::{DeclarativeRenderer, ElementList, TimerRenderer},
    FrameContext, NoteSet, RenderConfig, Size,
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};

use super::audio::WavPlayer;
use canvas::render_roll;
use transport::{render_tracks, render_transport, TransportView};

/// Longest the loop sleeps waiting for input (~60 fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Seconds added or removed per time-range key press
const TIME_RANGE_STEP: f64 = 1.0;

enum Driver {
    Declarative {
        renderer: DeclarativeRenderer,
        config: RenderConfig,
        transport: Transport,
        audio: Option<WavPlayer>,
    },
    Timer {
        renderer: TimerRenderer,
        session: Option<PlaybackSession<WavPlayer>>,
        /// Audio parked between sessions
        idle_audio: Option<WavPlayer>,
        /// Position of the last tick, shown while stopped too
        elapsed_sec: f64,
    },
}

/// UI application state
pub struct UiApp {
    note_set: NoteSet,
    enabled_tracks: Vec<bool>,
    surface: ElementList,
    driver: Driver,
    /// Canvas size seen by the last draw
    size: Size,
    /// Timer driver only: run a forced sync pass on the next draw
    needs_sync: bool,
    duration_sec: f64,
    should_quit: bool,
}

impl UiApp {
    pub fn declarative(note_set: NoteSet, config: RenderConfig, audio: Option<WavPlayer>) -> Self {
        let mut surface = ElementList::new();
        let mut renderer = DeclarativeRenderer::new();
        renderer.init(&mut surface, &note_set.notes);
        let driver = Driver::Declarative {
            renderer,
            config,
            transport: Transport::new(),
            audio,
        };
        Self::with_driver(note_set, surface, driver)
    }

    pub fn timer(note_set: NoteSet, config: RenderConfig, audio: Option<WavPlayer>) -> Self {
        let mut surface = ElementList::new();
        let mut renderer = TimerRenderer::new(config);
        renderer.init(&mut surface, &note_set.notes, Size::default());
        let driver = Driver::Timer {
            renderer,
            session: None,
            idle_audio: audio,
            elapsed_sec: 0.0,
        };
        Self::with_driver(note_set, surface, driver)
    }

    fn with_driver(note_set: NoteSet, surface: ElementList, driver: Driver) -> Self {
        let audio_duration = match &driver {
            Driver::Declarative { audio, .. } => audio.as_ref(),
            Driver::Timer { idle_audio, .. } => idle_audio.as_ref(),
        }
        .map_or(0.0, WavPlayer::duration_sec);

        Self {
            enabled_tracks: note_set.all_enabled(),
            duration_sec: note_set.duration_sec().max(audio_duration),
            note_set,
            surface,
            driver,
            size: Size::default(),
            needs_sync: true,
            should_quit: false,
        }
    }

    /// Run the UI event loop
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            let now = Instant::now();
            self.tick(now);

            terminal.draw(|frame| self.render(frame, now))?;

            if event::poll(self.poll_timeout(Instant::now()))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, Instant::now());
                    }
                }
            }
        }

        self.stop_playback();
        Ok(())
    }

    /// Run a due timer tick, if any.
    fn tick(&mut self, now: Instant) {
        if let Driver::Timer {
            renderer,
            session: Some(session),
            elapsed_sec,
            ..
        } = &mut self.driver
        {
            if let Some(elapsed) = session.poll(now) {
                *elapsed_sec = elapsed;
                renderer.tick(&mut self.surface, &self.note_set.notes, self.size, elapsed);
            }
        }
    }

    fn poll_timeout(&self, now: Instant) -> Duration {
        match &self.driver {
            Driver::Timer {
                session: Some(session), ..
            } => session.time_until_tick(now).min(FRAME_INTERVAL),
            _ => FRAME_INTERVAL,
        }
    }

    fn is_playing(&self) -> bool {
        match &self.driver {
            Driver::Declarative { transport, .. } => transport.is_playing(),
            Driver::Timer { session, .. } => session.is_some(),
        }
    }

    fn elapsed_sec(&self, now: Instant) -> f64 {
        match &self.driver {
            Driver::Declarative { transport, .. } => transport.elapsed_sec(now),
            Driver::Timer { elapsed_sec, .. } => *elapsed_sec,
        }
    }

    fn toggle_playback(&mut self, now: Instant) {
        match &mut self.driver {
            Driver::Declarative { transport, audio, .. } => {
                if transport.is_playing() {
                    transport.pause(now);
                    if let Some(audio) = audio.as_mut() {
                        audio.stop();
                    }
                } else {
                    transport.play(now);
                    if let Some(audio) = audio.as_mut() {
                        audio.start(transport.elapsed_sec(now));
                    }
                }
            }
            Driver::Timer {
                session,
                idle_audio,
                elapsed_sec,
                ..
            } => {
                match session.take() {
                    Some(running) => *idle_audio = running.stop(),
                    None => *session = Some(PlaybackSession::start(now, idle_audio.take())),
                }
                // Sessions always start from the top
                *elapsed_sec = 0.0;
            }
        }
        self.needs_sync = true;
    }

    fn rewind(&mut self, now: Instant) {
        match &mut self.driver {
            Driver::Declarative {
                renderer,
                transport,
                audio,
                ..
            } => {
                transport.rewind(now);
                renderer.invalidate();
                if transport.is_playing() {
                    if let Some(audio) = audio.as_mut() {
                        audio.start(0.0);
                    }
                }
            }
            Driver::Timer { session, elapsed_sec, .. } => {
                *elapsed_sec = 0.0;
                if let Some(running) = session.take() {
                    *session = Some(PlaybackSession::start(now, running.stop()));
                }
            }
        }
        self.needs_sync = true;
    }

    fn stop_playback(&mut self) {
        if let Driver::Timer { session, idle_audio, .. } = &mut self.driver {
            if let Some(running) = session.take() {
                *idle_audio = running.stop();
            }
        }
    }

    fn toggle_track(&mut self, index: usize) {
        if let Some(enabled) = self.enabled_tracks.get_mut(index) {
            *enabled = !*enabled;
            log::debug!("track {} {}", index + 1, if *enabled { "enabled" } else { "disabled" });
            self.needs_sync = true;
        }
    }

    fn toggle_vertical(&mut self) {
        if let Driver::Declarative { config, renderer, .. } = &mut self.driver {
            *config = config.with_vertical(!config.is_vertical());
            renderer.invalidate();
        }
    }

    fn change_time_range(&mut self, delta: f64) {
        let current = match &self.driver {
            Driver::Declarative { config, .. } => *config,
            Driver::Timer { renderer, .. } => *renderer.config(),
        };
        let range = current.scale().time_range_sec + delta;
        match current.with_time_range(range) {
            Ok(updated) => {
                match &mut self.driver {
                    Driver::Declarative { config, renderer, .. } => {
                        *config = updated;
                        renderer.invalidate();
                    }
                    Driver::Timer { renderer, .. } => renderer.set_config(updated),
                }
                self.needs_sync = true;
            }
            Err(err) => log::warn!("time range unchanged: {err}"),
        }
    }

    /// Handle keyboard input
    fn handle_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => self.toggle_playback(now),
            KeyCode::Char('r') | KeyCode::Char('R') => self.rewind(now),
            KeyCode::Char('v') | KeyCode::Char('V') => self.toggle_vertical(),
            KeyCode::Char('[') => self.change_time_range(-TIME_RANGE_STEP),
            KeyCode::Char(']') => self.change_time_range(TIME_RANGE_STEP),
            KeyCode::Char(c @ '1'..='9') => self.toggle_track(c as usize - '1' as usize),
            _ => {}
        }
    }

    /// Bring the surface up to date for `size`, then let the drivers do their part.
    fn update_surface(&mut self, size: Size, now: Instant) {
        if size != self.size {
            self.size = size;
            self.needs_sync = true;
        }

        let elapsed_sec = self.elapsed_sec(now);
        match &mut self.driver {
            Driver::Declarative {
                renderer,
                config,
                transport,
                ..
            } => {
                let frame = FrameContext::new(elapsed_sec, self.enabled_tracks.clone(), transport.is_playing());
                renderer.update(&mut self.surface, &self.note_set.notes, size, config, &frame);
            }
            Driver::Timer { renderer, .. } => {
                if self.needs_sync {
                    renderer.sync(&mut self.surface, &self.note_set.notes, size, &self.enabled_tracks, elapsed_sec);
                }
            }
        }
        self.needs_sync = false;
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame, now: Instant) {
        let area = frame.area();

        // Main layout: transport, piano roll, track list, help
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Transport bar
                Constraint::Min(6),    // Piano roll
                Constraint::Length(1), // Tracks
                Constraint::Length(1), // Help bar
            ])
            .split(area);

        let view = self.transport_view(now);
        render_transport(frame, chunks[0], &view);

        let roll_block = Block::default().title(" Notes ").borders(Borders::ALL);
        let roll_inner = roll_block.inner(chunks[1]);
        frame.render_widget(roll_block, chunks[1]);

        // Half-block cells are twice as tall as they are wide
        let size = Size::new(roll_inner.width as f64, roll_inner.height as f64 * 2.0);
        self.update_surface(size, now);
        render_roll(frame, roll_inner, &self.surface, size);

        render_tracks(frame, chunks[2], &self.note_set.tracks, &self.enabled_tracks);

        let help = Paragraph::new(" [Q] Quit  [Space] Play/Pause  [R] Rewind  [1-9] Tracks  [V] Vertical  [ [ ] ] Range")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }

    fn transport_view(&self, now: Instant) -> TransportView {
        let (driver, vertical, time_range_sec) = match &self.driver {
            Driver::Declarative { config, .. } => ("declarative", config.is_vertical(), config.scale().time_range_sec),
            Driver::Timer { renderer, .. } => ("timer", false, renderer.config().scale().time_range_sec),
        };
        TransportView {
            playing: self.is_playing(),
            elapsed_sec: self.elapsed_sec(now),
            duration_sec: self.duration_sec,
            driver,
            time_range_sec,
            vertical,
        }
    }
}
