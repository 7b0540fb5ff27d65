//! Clock access for the browser build. Everything date-related that can be
//! computed without a clock lives in `shared::format`.

use chrono::{Local, NaiveDate, NaiveDateTime};
use shared::format::month_key;

/// Current time as epoch milliseconds
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Current local wall-clock time
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today() -> NaiveDate {
    local_now().date()
}

/// Month key (YYYY-MM) of today's local date
pub fn current_month_key() -> String {
    month_key(today())
}
