use chrono::{Local, NaiveDateTime};

/// Format shared with the mobile app and device firmware.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Current server-local time formatted as `DD/MM/YYYY HH:MM`.
pub fn now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}
