// `::serde` is the external crate; this module shadows its name.
use ::serde::{Deserialize, Deserializer, Serializer, de::Error as _};
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};

/// Timestamp layout accepted from older clients (`yyyy-MM-dd HH:mm:ss`, UTC).
const LEGACY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Serialize `DateTime<Utc>` as RFC 3339 with 3-digit fractional seconds.
pub fn to_rfc3339_ms<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Parse a timestamp in RFC 3339 or the legacy `yyyy-MM-dd HH:mm:ss` layout.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, LEGACY_FORMAT).map(|naive| naive.and_utc()))
        .ok()
}

/// Deserialize a required timestamp, see [`parse_timestamp`].
pub fn from_timestamp<'de, D>(d: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(d)?;
    parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
}

/// Deserialize an optional timestamp; `null` and a missing field both give `None`.
/// Pair with `#[serde(default)]`.
pub fn from_opt_timestamp<'de, D>(d: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(d)? {
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}"))),
        None => Ok(None),
    }
}
