//! Timestamp handling
//!
//! Claim timestamps travel as RFC 3339 strings with millisecond precision
//! (`2025-11-01T10:00:00.000Z`). Values are truncated to milliseconds when
//! captured so that what is stored is exactly what is serialized.

use chrono::{DateTime, DurationRound, TimeDelta, Utc};

/// Returns the current UTC time truncated to millisecond precision
pub fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    now.duration_trunc(TimeDelta::milliseconds(1)).unwrap_or(now)
}

/// Serde adapter for `DateTime<Utc>` fields using millisecond RFC 3339 text
///
/// ```rust,ignore
/// #[serde(with = "core_kernel::iso_millis")]
/// pub created_at: DateTime<Utc>,
/// ```
pub mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| serde::de::Error::custom(format!("Invalid timestamp: {}", s)))
    }
}
