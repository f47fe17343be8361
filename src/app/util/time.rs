use chrono::{Datelike, Local};

pub fn current_year() -> i32 {
    Local::now().year()
}
