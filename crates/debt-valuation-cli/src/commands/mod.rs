pub mod batch;
pub mod value;

use chrono::{Local, NaiveDate};

/// Reference date for a command: the flag value when given, today otherwise.
pub fn reference_date(flag: Option<NaiveDate>) -> NaiveDate {
    flag.unwrap_or_else(|| Local::now().date_naive())
}
