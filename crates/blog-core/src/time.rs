//! ISO-8601 timestamp helpers.
//!
//! Every timestamp in the service is UTC with whole-second precision and is
//! rendered as `YYYY-MM-DDTHH:MM:SSZ`, independent of locale.

use chrono::{DateTime, NaiveDateTime, SubsecRound, Utc};

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
const ISO_FORMAT_NO_ZONE: &str = "%Y-%m-%dT%H:%M:%S";

/// Errors from [`from_iso_string`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("Input string cannot be empty")]
    Empty,

    #[error("Invalid ISO-8601 timestamp: {0}")]
    Format(String),
}

/// Current UTC time truncated to whole seconds.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(0)
}

pub fn to_iso_string(time: &DateTime<Utc>) -> String {
    time.format(ISO_FORMAT).to_string()
}

/// Parse `YYYY-MM-DDTHH:MM:SS`, with or without a trailing `Z`, as UTC.
pub fn from_iso_string(input: &str) -> Result<DateTime<Utc>, TimeParseError> {
    if input.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let format = if input.ends_with('Z') {
        ISO_FORMAT
    } else {
        ISO_FORMAT_NO_ZONE
    };

    NaiveDateTime::parse_from_str(input, format)
        .map(|naive| naive.and_utc())
        .map_err(|e| TimeParseError::Format(format!("{input}: {e}")))
}

/// Serde `serialize_with` hook rendering `DateTime<Utc>` in the service's wire format.
pub fn serialize_iso_seconds<S>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&to_iso_string(time))
}
