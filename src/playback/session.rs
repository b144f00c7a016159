use std::time::{Duration, Instant};

use super::interval::IntervalTask;

/// Timer renderer tick rate.
pub const TICK_RATE_HZ: u32 = 60;

/// Decoded audio the visualization plays along with.
///
/// The core only ever starts and stops it.
pub trait AudioHandle {
    /// Begin playing from `offset_sec` into the audio.
    fn start(&mut self, offset_sec: f64);

    fn stop(&mut self);
}

/// Allow boxed handles to be used as handles (for dynamic dispatch)
impl AudioHandle for Box<dyn AudioHandle> {
    fn start(&mut self, offset_sec: f64) {
        (**self).start(offset_sec)
    }

    fn stop(&mut self) {
        (**self).stop()
    }
}

/// One play-through: the start instant, the repeating tick task and the audio.
///
/// Starting creates the task and starts audio; `stop` (or dropping the
/// session) cancels both on the spot, so no tick can run afterwards.
#[derive(Debug)]
pub struct PlaybackSession<A: AudioHandle> {
    started_at: Instant,
    task: IntervalTask,
    audio: Option<A>,
}

impl<A: AudioHandle> PlaybackSession<A> {
    pub fn start(now: Instant, mut audio: Option<A>) -> Self {
        if let Some(audio) = audio.as_mut() {
            audio.start(0.0);
        }
        log::debug!("playback session started (audio: {})", audio.is_some());
        Self {
            started_at: now,
            task: IntervalTask::at_rate(TICK_RATE_HZ, now),
            audio,
        }
    }

    pub fn elapsed_sec(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.started_at).as_secs_f64()
    }

    /// Elapsed seconds when a tick is due, sampled once for the whole tick.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        self.task.poll(now).then(|| self.elapsed_sec(now))
    }

    pub fn time_until_tick(&self, now: Instant) -> Duration {
        self.task.time_until_due(now)
    }

    /// Cancel the task and stop audio. Hands the audio back for the next play.
    pub fn stop(mut self) -> Option<A> {
        let mut audio = self.audio.take();
        if let Some(audio) = audio.as_mut() {
            audio.stop();
        }
        log::debug!("playback session stopped");
        audio
    }
}

impl<A: AudioHandle> Drop for PlaybackSession<A> {
    fn drop(&mut self) {
        if let Some(audio) = self.audio.as_mut() {
            audio.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records start/stop calls.
    #[derive(Debug, Clone, Default)]
    struct RecordingAudio {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl AudioHandle for RecordingAudio {
        fn start(&mut self, offset_sec: f64) {
            self.calls.borrow_mut().push(format!("start {offset_sec}"));
        }

        fn stop(&mut self) {
            self.calls.borrow_mut().push("stop".into());
        }
    }

    #[test]
    fn start_and_stop_drive_the_audio() {
        let audio = RecordingAudio::default();
        let calls = audio.calls.clone();
        let now = Instant::now();

        let session = PlaybackSession::start(now, Some(audio));
        assert_eq!(*calls.borrow(), vec!["start 0"]);

        let returned = session.stop();
        assert!(returned.is_some());
        assert_eq!(*calls.borrow(), vec!["start 0", "stop"]);
    }

    #[test]
    fn dropping_the_session_stops_audio_once() {
        let audio = RecordingAudio::default();
        let calls = audio.calls.clone();
        drop(PlaybackSession::start(Instant::now(), Some(audio)));
        assert_eq!(*calls.borrow(), vec!["start 0", "stop"]);
    }

    #[test]
    fn ticks_report_elapsed_time() {
        let start = Instant::now();
        let mut session: PlaybackSession<RecordingAudio> = PlaybackSession::start(start, None);
        assert_eq!(session.poll(start), None);

        let later = start + Duration::from_millis(500);
        let elapsed = session.poll(later).unwrap();
        assert!((elapsed - 0.5).abs() < 1e-9);
        assert_eq!(session.poll(later), None);
    }
}
