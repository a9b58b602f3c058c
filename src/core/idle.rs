use std::thread;
use std::time::Duration;

use log::debug;

use super::shutdown::ShutdownFlag;

/// Fires each time elapsed time crosses the next multiple of a period
///
/// With a poll interval that does not divide the period, individual beats
/// land on the first poll at or after each multiple, so the rate still
/// averages one beat per period.
#[derive(Debug, Clone, Copy)]
pub struct Heartbeat {
    period: Duration,
    next: Duration,
}

impl Heartbeat {
    /// Fire every `period`; a zero period never fires
    pub fn new(period: Duration) -> Self {
        Self { period, next: period }
    }

    /// Advance to `elapsed`, returns true if a beat is due
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.period.is_zero() || elapsed < self.next {
            return false;
        }
        while self.next <= elapsed {
            self.next += self.period;
        }
        true
    }
}

/// Sleeps in fixed intervals until the shutdown flag clears
///
/// The flag is observed between sleeps, so shutdown takes at most one
/// poll interval.
#[derive(Debug, Clone)]
pub struct IdleLoop {
    poll: Duration,
    heartbeat: Heartbeat,
}

impl IdleLoop {
    pub fn new(poll: Duration, heartbeat_period: Duration) -> Self {
        Self {
            poll,
            heartbeat: Heartbeat::new(heartbeat_period),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll
    }

    /// Block until shutdown; `on_heartbeat` gets the elapsed idle time
    ///
    /// Returns the number of completed poll intervals.
    pub fn run<F>(&mut self, flag: &ShutdownFlag, mut on_heartbeat: F) -> u64
    where
        F: FnMut(Duration),
    {
        let mut ticks = 0u64;

        while flag.is_running() {
            thread::sleep(self.poll);
            ticks += 1;

            let elapsed = self.poll.saturating_mul(u32::try_from(ticks).unwrap_or(u32::MAX));
            if self.heartbeat.tick(elapsed) {
                on_heartbeat(elapsed);
            }
        }

        debug!("idle loop stopped after {} ticks", ticks);
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Poll counts (1-based) at which the heartbeat fires over `polls` polls
    fn beats(period: Duration, poll: Duration, polls: u32) -> Vec<u32> {
        let mut heartbeat = Heartbeat::new(period);
        (1..=polls).filter(|&n| heartbeat.tick(poll * n)).collect()
    }

    #[test]
    fn heartbeat_every_five_one_second_polls() {
        assert_eq!(beats(Duration::from_secs(5), Duration::from_secs(1), 12), [5, 10]);
    }

    #[test]
    fn heartbeat_never_fires_early_with_coarse_polls() {
        // 2 s polls: beats at 6 s, 10 s, 16 s, 20 s; never before a 5 s multiple
        assert_eq!(
            beats(Duration::from_secs(5), Duration::from_secs(2), 10),
            [3, 5, 8, 10]
        );
    }

    #[test]
    fn heartbeat_skips_missed_multiples() {
        // A 12 s poll crosses two multiples of 5 s but fires once
        let mut heartbeat = Heartbeat::new(Duration::from_secs(5));
        assert!(heartbeat.tick(Duration::from_secs(12)));
        assert!(!heartbeat.tick(Duration::from_secs(14)));
        assert!(heartbeat.tick(Duration::from_secs(15)));
    }

    #[test]
    fn heartbeat_zero_never_fires() {
        assert!(beats(Duration::ZERO, Duration::from_millis(1), 100).is_empty());
    }

    #[test]
    fn stopped_flag_returns_immediately() {
        let flag = ShutdownFlag::new();
        flag.request_shutdown();

        let mut idle = IdleLoop::new(Duration::from_secs(10), Duration::from_secs(5));
        assert_eq!(idle.run(&flag, |_| {}), 0);
    }
}
