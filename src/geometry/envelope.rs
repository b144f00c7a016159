/*
Note Envelope
=============

Every animated channel of a note rectangle (lightness, thickness) follows the
same three-piece curve, evaluated directly from playback time. There is no
per-sample state: given the note span and the elapsed time the value is a
pure function, so seeking or pausing never needs a replay.

Vocabulary
----------

  base      Value while the note is quiescent: before onset, and the value
            the release relaxes back to.

  peak      Value at the exact instant of onset.

  active    Value the decay settles towards while the note is held, and the
            value the release starts from.

  decay     Time constant (seconds) of the exponential fall peak -> active.

  release   Time constant (seconds) of the exponential fall active -> base.


The Shape
---------

  Value
   peak ┐  │╲
        │  │ ╲___________
 active │  │             │╲
        │  │             │ ╲___
   base ├──┘             │     ‾‾‾‾───────
        └──┴─────────────┴──────────────→ time
          from           to

  elapsed < from        base
  from <= elapsed < to  active + (peak - active) * exp(-(elapsed - from) / decay)
  elapsed >= to         base + (active - base) * exp(-(elapsed - to) / release)

The onset is deliberately sharp: at `elapsed == from` the held branch already
applies and yields `peak`, with no ramp up from `base`.

At `elapsed == to` the release branch yields exactly `active`, even if the
decay had not fully settled, so a very short note jumps down to `active` at
release. That jump is part of the look and is kept.

Time constants must be positive; `RenderConfig` enforces that before any
envelope is evaluated.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Shared time constants of the lightness and thickness envelopes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopeTiming {
    pub decay_sec: f64,
    pub release_sec: f64,
}

impl EnvelopeTiming {
    pub const fn new(decay_sec: f64, release_sec: f64) -> Self {
        Self {
            decay_sec,
            release_sec,
        }
    }
}

impl Default for EnvelopeTiming {
    fn default() -> Self {
        Self::new(0.2, 0.4)
    }
}

/// Levels of one envelope channel.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub base: f64,
    pub peak: f64,
    pub active: f64,
}

impl Envelope {
    pub const fn new(base: f64, peak: f64, active: f64) -> Self {
        Self { base, peak, active }
    }

    /// Value at `elapsed_sec` for a note held from `from_sec` to `to_sec`.
    pub fn value(&self, timing: &EnvelopeTiming, from_sec: f64, to_sec: f64, elapsed_sec: f64) -> f64 {
        if elapsed_sec < from_sec {
            self.base
        } else if elapsed_sec < to_sec {
            self.active + (self.peak - self.active) * (-(elapsed_sec - from_sec) / timing.decay_sec).exp()
        } else {
            self.base + (self.active - self.base) * (-(elapsed_sec - to_sec) / timing.release_sec).exp()
        }
    }
}

/// A rectangle property that is either animated or held constant.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Channel {
    Envelope(Envelope),
    Fixed(f64),
}

impl Channel {
    pub fn value(&self, timing: &EnvelopeTiming, from_sec: f64, to_sec: f64, elapsed_sec: f64) -> f64 {
        match self {
            Channel::Envelope(env) => env.value(timing, from_sec, to_sec, elapsed_sec),
            Channel::Fixed(value) => *value,
        }
    }
}

impl From<Envelope> for Channel {
    fn from(env: Envelope) -> Self {
        Channel::Envelope(env)
    }
}
