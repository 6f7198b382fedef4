use chrono::{DateTime, Utc};

/// Source of the wall-clock instant a request runs at.
///
/// Handlers read the clock once per request and pass that instant down, so
/// every timestamp written by one request is identical.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
