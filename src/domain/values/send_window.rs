use chrono::{DateTime, Timelike, Utc};

/// Hour-of-day gate for email delivery. The dashboard is published every run;
/// the digest goes out only when the run falls inside this window, which
/// approximates "once per day" under an hourly external schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendWindow {
    pub hour_utc: u32,
}

impl SendWindow {
    pub fn new(hour_utc: u32) -> Self {
        Self { hour_utc: hour_utc % 24 }
    }

    pub fn permits(&self, now: DateTime<Utc>) -> bool {
        now.hour() == self.hour_utc
    }
}

impl Default for SendWindow {
    fn default() -> Self {
        Self { hour_utc: 6 }
    }
}
