use instant::{Duration, Instant};

/// Leading-edge throttle: the first call passes, further calls are dropped
/// until `interval` has elapsed since the last call that passed.
#[derive(Clone, Debug)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn ready(&mut self, now: Instant) -> bool {
        let open = match self.last {
            None => true,
            Some(last) => now >= last + self.interval,
        };
        if open {
            self.last = Some(now);
        }
        open
    }
}
