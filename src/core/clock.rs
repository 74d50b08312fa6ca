use chrono::{DateTime, Utc};

/// Source of the current time. Injected so id generation is testable.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Real-time clock backed by the system UTC time source.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Issues transaction ids from the clock in milliseconds, bumped past the last
/// issued id so two creations in the same millisecond never collide.
pub struct IdGenerator {
    clock: Box<dyn Clock>,
    last: i64,
}

impl IdGenerator {
    pub fn new(clock: Box<dyn Clock>, last_issued: Option<i64>) -> Self {
        Self {
            clock,
            last: last_issued.unwrap_or(i64::MIN),
        }
    }

    pub fn next_id(&mut self) -> i64 {
        let now = self.clock.now().timestamp_millis();
        let id = now.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}
