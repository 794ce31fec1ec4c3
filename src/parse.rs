use crate::Error;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a timestamp as returned by the API. Timestamps without an offset
/// are UTC.
pub fn parse_api_timestamp(value: &str) -> Result<DateTime<Utc>, Error> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%z") {
        return Ok(dt.with_timezone(&Utc));
    }
    match NaiveDateTime::parse_from_str(value, API_TIMESTAMP_FORMAT) {
        Ok(dt) => Ok(dt.and_utc()),
        Err(err) => Err(Error::DataFormat(format!(
            "Could not parse \"{}\" as timestamp ({}).",
            value, err
        ))),
    }
}

/// Strips the `id` prefix the town master data puts in front of the
/// municipality code (`id28079` -> `28079`).
pub fn parse_town_code(town: &str) -> &str {
    town.strip_prefix("id").unwrap_or(town)
}

/// Parses a degrees-minutes-seconds coordinate such as `394924N` or
/// `0031811W` into decimal degrees.
pub fn parse_dms(value: &str) -> Result<f64, Error> {
    let err = || Error::DataFormat(format!("Could not parse \"{}\" as DMS coordinate.", value));

    let value = value.trim();
    let hemisphere = value.chars().last().ok_or_else(err)?;
    let sign = match hemisphere.to_ascii_uppercase() {
        'N' | 'E' => 1.0,
        'S' | 'W' => -1.0,
        _ => return Err(err()),
    };

    let digits = &value[..value.len() - hemisphere.len_utf8()];
    if digits.len() < 5 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(err());
    }

    let (rest, seconds) = digits.split_at(digits.len() - 2);
    let (degrees, minutes) = rest.split_at(rest.len() - 2);
    let degrees = degrees.parse::<f64>().map_err(|_| err())?;
    let minutes = minutes.parse::<f64>().map_err(|_| err())?;
    let seconds = seconds.parse::<f64>().map_err(|_| err())?;

    Ok(sign * (degrees + minutes / 60.0 + seconds / 3600.0))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

fn number_or_string_to_f64(value: NumberOrString) -> Result<f64, String> {
    match value {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s
            .trim()
            .replace(',', ".")
            .parse::<f64>()
            .map_err(|err| format!("Could not parse \"{}\" as a number ({}).", s, err)),
    }
}

/// Accepts both `1.5` and `"1.5"`.
pub fn de_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = NumberOrString::deserialize(deserializer)?;
    number_or_string_to_f64(value).map_err(serde::de::Error::custom)
}

/// Optional variant of [`de_f64`]; empty strings are absent.
pub fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => number_or_string_to_f64(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Accepts both `28079` and `"28079"`.
pub fn de_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "Expected a string or a number, got {}.",
            other
        ))),
    }
}

pub fn de_dms<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse_dms(&value).map_err(serde::de::Error::custom)
}
