use std::time::Instant;

/// Play / pause / return clock for the frame-driven renderer.
///
/// Position survives a pause; returning to the start keeps the play state.
#[derive(Debug, Clone, Default)]
pub struct Transport {
    /// Set while playing: the instant `offset_sec` was captured
    anchor: Option<Instant>,
    offset_sec: f64,
}

impl Transport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn elapsed_sec(&self, now: Instant) -> f64 {
        match self.anchor {
            Some(anchor) => self.offset_sec + now.saturating_duration_since(anchor).as_secs_f64(),
            None => self.offset_sec,
        }
    }

    /// Returns false if already playing.
    pub fn play(&mut self, now: Instant) -> bool {
        if self.anchor.is_some() {
            return false;
        }
        self.anchor = Some(now);
        true
    }

    /// Returns false if already paused.
    pub fn pause(&mut self, now: Instant) -> bool {
        if self.anchor.is_none() {
            return false;
        }
        self.offset_sec = self.elapsed_sec(now);
        self.anchor = None;
        true
    }

    /// Jump back to 0 s.
    pub fn rewind(&mut self, now: Instant) {
        self.offset_sec = 0.0;
        if self.anchor.is_some() {
            self.anchor = Some(now);
        }
    }
}

/// `m:ss`, or `--:--` when there is no position.
pub fn format_time(sec: Option<f64>) -> String {
    match sec {
        Some(sec) if sec.is_finite() => {
            let total = sec.max(0.0).floor() as u64;
            format!("{}:{:02}", total / 60, total % 60)
        }
        _ => "--:--".to_owned(),
    }
}
