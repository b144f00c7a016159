use std::{fs::File, path::Path};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use env_logger::{Builder, Env, Target};

const DEFAULT_LOG_FILTER: &str = "info";

fn builder() -> Builder {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER))
}

pub fn setup_stderr() {
    builder().target(Target::Stderr).init();
}

/// The terminal UI owns the screen, so logs go to a file.
pub fn setup_file(path: &Path) -> EyreResult<()> {
    let file = File::create(path).wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    builder().target(Target::Pipe(Box::new(file))).init();
    Ok(())
}
