// Playback timing - there is no audio, so "playing" a track just means
// holding the session for a fixed stretch. Kept behind a trait so tests
// don't sit through it.

use std::future::Future;
use std::time::Duration;

/// Source of the simulated playback wait. The wait is not cancellable.
pub trait PlaybackClock {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Real wall-clock wait on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl PlaybackClock for TokioClock {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_clock_waits_full_duration() {
        let start = tokio::time::Instant::now();
        TokioClock.wait(Duration::from_secs(3)).await;
        assert!(start.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_recording_clock_does_not_sleep() {
        let clock = testing::RecordingClock::default();
        let start = std::time::Instant::now();
        clock.wait(Duration::from_secs(3)).await;

        assert!(start.elapsed() < Duration::from_secs(1));
        assert_eq!(clock.waits(), vec![Duration::from_secs(3)]);
    }
}
