use std::time::{Duration, Instant};

const MIN_PERIOD: Duration = Duration::from_nanos(1);

/// Fixed-rate repeating task, polled from the host's event loop.
///
/// Ticks that were missed while the loop was busy collapse into a single
/// tick, the way a browser interval behaves; the schedule stays anchored to
/// the original start so the rate does not drift.
#[derive(Debug, Clone)]
pub struct IntervalTask {
    period: Duration,
    next_due: Instant,
}

impl IntervalTask {
    /// First tick is due one period after `now`. Periods below 1 ns are
    /// raised to 1 ns.
    pub fn every(period: Duration, now: Instant) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            period,
            next_due: now + period,
        }
    }

    /// `hz` ticks per second.
    pub fn at_rate(hz: u32, now: Instant) -> Self {
        Self::every(Duration::from_secs(1) / hz.max(1), now)
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// True when a tick is due; advances the schedule past `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        let period_ns = self.period.as_nanos();
        let missed = (now - self.next_due).as_nanos() / period_ns + 1;
        let advance_ns = period_ns.saturating_mul(missed);
        self.next_due += Duration::from_nanos(u64::try_from(advance_ns).unwrap_or(u64::MAX));
        true
    }

    /// How long the event loop may sleep before the next tick.
    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
