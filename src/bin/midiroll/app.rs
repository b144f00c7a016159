//! Midiroll - application builder and runner

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use midiroll::{NoteSet, RenderConfig};

use super::audio::WavPlayer;
use super::ui::UiApp;
use super::DriverKind;

/// Read and validate a note set file.
pub fn load_note_set(path: &Path) -> EyreResult<NoteSet> {
    let text = std::fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let note_set: NoteSet =
        serde_json::from_str(&text).wrap_err_with(|| format!("failed to parse note set {}", path.display()))?;
    note_set
        .validate()
        .wrap_err_with(|| format!("invalid note set {}", path.display()))?;
    log::info!(
        "loaded {} notes on {} tracks ({:.1}s) from {}",
        note_set.notes.len(),
        note_set.tracks.len(),
        note_set.duration_sec(),
        path.display()
    );
    Ok(note_set)
}

/// Main application builder
pub struct Midiroll {
    note_set: NoteSet,
    config: RenderConfig,
    driver: DriverKind,
    audio: Option<PathBuf>,
}

impl Midiroll {
    pub fn new(note_set: NoteSet) -> Self {
        Self {
            note_set,
            config: RenderConfig::default(),
            driver: DriverKind::Declarative,
            audio: None,
        }
    }

    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn driver(mut self, driver: DriverKind) -> Self {
        self.driver = driver;
        self
    }

    /// WAV file started and stopped together with playback
    pub fn audio(mut self, path: impl Into<PathBuf>) -> Self {
        self.audio = Some(path.into());
        self
    }

    /// Run the terminal UI until the user quits
    pub fn run(self) -> EyreResult<()> {
        let audio = self.audio.as_deref().map(WavPlayer::open).transpose()?;

        let mut app = match self.driver {
            DriverKind::Declarative => UiApp::declarative(self.note_set, self.config, audio),
            DriverKind::Timer => {
                let scale = self.config.scale();
                let config = RenderConfig::lightness_only(scale.min_note, scale.max_note)
                    .and_then(|config| config.with_time_range(scale.time_range_sec))
                    .wrap_err("invalid timer render configuration")?;
                UiApp::timer(self.note_set, config, audio)
            }
        };

        let mut terminal = ratatui::init();
        let result = app.run(&mut terminal);
        ratatui::restore();
        result
    }
}
