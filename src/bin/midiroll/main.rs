//! midiroll - terminal piano-roll visualizer
//!
//! Run with: cargo run -- song.json --audio song.wav

mod app;
mod audio;
mod export;
mod logging;
mod ui;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result as EyreResult, WrapErr};
use midiroll::{
    config::{schema::PROPS, CustomProps},
    RenderConfig, Size,
};

use app::{load_note_set, Midiroll};

#[derive(Parser)]
#[command(name = "midiroll", about = "Scrolling piano-roll visualizer for MIDI note sets")]
struct Cli {
    /// Note set JSON (tracks + notes with noteNumber/fromSec/toSec/trackIndex)
    #[arg(required_unless_present = "list_props")]
    notes: Option<PathBuf>,

    /// WAV file played along with the visualization
    #[arg(long)]
    audio: Option<PathBuf>,

    /// Which render driver animates the notes
    #[arg(long, value_enum, default_value_t = DriverKind::Declarative)]
    driver: DriverKind,

    /// Override a render property, e.g. --prop timeRangeSec=5 (repeatable)
    #[arg(long = "prop", value_name = "ID=VALUE")]
    props: Vec<String>,

    /// Print the property schema as JSON and exit
    #[arg(long)]
    list_props: bool,

    /// Write a single frame as SVG instead of starting the terminal UI
    #[arg(long, value_name = "FILE")]
    export_svg: Option<PathBuf>,

    /// Elapsed seconds of the exported frame
    #[arg(long, default_value_t = 0.0)]
    at: f64,

    /// Exported frame width
    #[arg(long, default_value_t = 512.0)]
    width: f64,

    /// Exported frame height
    #[arg(long, default_value_t = 288.0)]
    height: f64,

    /// Background image href for the exported frame
    #[arg(long)]
    background: Option<String>,

    /// Where the terminal UI writes its log
    #[arg(long, default_value = "midiroll.log")]
    log_file: PathBuf,
}

/// Render driver selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DriverKind {
    /// Whole note set every frame, all properties
    Declarative,
    /// 60 Hz incremental ticks, lightness only
    Timer,
}

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if cli.list_props {
        let json = serde_json::to_string_pretty(PROPS).wrap_err("failed to serialize property schema")?;
        println!("{json}");
        return Ok(());
    }

    let mut props = CustomProps::defaults();
    for assignment in &cli.props {
        props
            .apply_assignment(assignment)
            .wrap_err_with(|| format!("invalid --prop {assignment:?}"))?;
    }
    let config = RenderConfig::from_props(&props).wrap_err("invalid render configuration")?;

    // Guaranteed by clap unless --list-props was given
    let Some(notes_path) = cli.notes else {
        return Ok(());
    };

    if let Some(out) = cli.export_svg {
        logging::setup_stderr();
        let note_set = load_note_set(&notes_path)?;
        return export::write_frame(
            &out,
            &note_set,
            &config,
            Size::new(cli.width, cli.height),
            cli.at,
            cli.background.as_deref(),
        );
    }

    logging::setup_file(&cli.log_file)?;
    let note_set = load_note_set(&notes_path)?;

    let mut app = Midiroll::new(note_set).config(config).driver(cli.driver);
    if let Some(audio) = cli.audio {
        app = app.audio(audio);
    }
    app.run()
}
