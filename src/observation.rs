use crate::parse::{de_f64, de_opt_f64, parse_api_timestamp};
use crate::{Coordinate, Error, Located};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One hourly sample of the conventional observation network.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ObservationRecord {
    pub idema: String,

    #[serde(rename = "ubi", default)]
    pub location: String,

    #[serde(rename = "lat", deserialize_with = "de_f64")]
    pub latitude: f64,

    #[serde(rename = "lon", deserialize_with = "de_f64")]
    pub longitude: f64,

    #[serde(rename = "fint")]
    pub date: String,

    #[serde(rename = "alt", default, deserialize_with = "de_opt_f64")]
    pub altitude: Option<f64>,

    #[serde(rename = "ta", default, deserialize_with = "de_opt_f64")]
    pub temperature: Option<f64>,

    #[serde(rename = "tamax", default, deserialize_with = "de_opt_f64")]
    pub temperature_max: Option<f64>,

    #[serde(rename = "tamin", default, deserialize_with = "de_opt_f64")]
    pub temperature_min: Option<f64>,

    #[serde(rename = "tpr", default, deserialize_with = "de_opt_f64")]
    pub dew_point: Option<f64>,

    #[serde(rename = "hr", default, deserialize_with = "de_opt_f64")]
    pub humidity: Option<f64>,

    #[serde(rename = "prec", default, deserialize_with = "de_opt_f64")]
    pub precipitation: Option<f64>,

    #[serde(rename = "pres", default, deserialize_with = "de_opt_f64")]
    pub pressure: Option<f64>,

    #[serde(rename = "pres_nmar", default, deserialize_with = "de_opt_f64")]
    pub pressure_sea: Option<f64>,

    #[serde(rename = "dv", default, deserialize_with = "de_opt_f64")]
    pub wind_direction: Option<f64>,

    #[serde(rename = "vv", default, deserialize_with = "de_opt_f64")]
    pub wind_speed: Option<f64>,

    #[serde(rename = "vmax", default, deserialize_with = "de_opt_f64")]
    pub wind_speed_max: Option<f64>,
}

impl ObservationRecord {
    pub fn timestamp(&self) -> Result<DateTime<Utc>, Error> {
        parse_api_timestamp(&self.date)
    }
}

impl Located for ObservationRecord {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Returns the value of a field that must be present, or a data format error
/// naming it.
pub(crate) fn required(value: Option<f64>, field: &str, idema: &str) -> Result<f64, Error> {
    value.ok_or_else(|| {
        Error::DataFormat(format!(
            "Missing \"{}\" in observation from station {}.",
            field, idema
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn deserialize_observation() {
        let record: ObservationRecord = serde_json::from_str(
            r#"{
                "idema": "3195",
                "lon": -3.678056,
                "fint": "2023-10-19T12:00:00",
                "prec": 0.0,
                "alt": 667.0,
                "vmax": 5.1,
                "vv": 2.3,
                "dv": 210.0,
                "lat": 40.411945,
                "ubi": "MADRID RETIRO",
                "pres": 942.1,
                "hr": 45.0,
                "pres_nmar": 1019.3,
                "tamin": 17.2,
                "ta": 21.4,
                "tamax": 21.6,
                "tpr": 9.0
            }"#,
        )
        .unwrap();

        assert_eq!(record.idema, "3195");
        assert_eq!(record.location, "MADRID RETIRO");
        assert_eq!(record.temperature, Some(21.4));
        assert_eq!(record.pressure_sea, Some(1019.3));
        assert_eq!(
            record.timestamp().unwrap(),
            Utc.with_ymd_and_hms(2023, 10, 19, 12, 0, 0).unwrap()
        );
        assert_eq!(record.coordinate(), Coordinate::new(40.411945, -3.678056));
    }

    #[test]
    fn missing_optional_fields() {
        let record: ObservationRecord = serde_json::from_str(
            r#"{"idema": "X", "lat": 1.0, "lon": 2.0, "fint": "2023-10-19T12:00:00"}"#,
        )
        .unwrap();
        assert_eq!(record.temperature, None);
        assert!(matches!(
            required(record.temperature, "ta", &record.idema),
            Err(Error::DataFormat(_))
        ));
    }
}
