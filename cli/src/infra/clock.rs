//! Wall-clock time in the host's local timezone.

use chrono::{Local, NaiveDateTime};

use crate::application::ports::Clock;

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
