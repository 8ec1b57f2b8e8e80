use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// Source of the reference date forecasts are generated from.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub type ClockHandle = Arc<dyn Clock>;

/// Today's date in the server's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
