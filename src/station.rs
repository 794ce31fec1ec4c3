use crate::observation::required;
use crate::{Coordinate, Error, Located, ObservationRecord};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use std::time::Duration;

/// How long after its timestamp a station sample is considered outdated.
pub const STATION_MAX_DELTA: Duration = Duration::from_secs(2 * 60 * 60);

/// Weather values of a single observation.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,

    pub temperature: f64,

    pub temperature_max: f64,

    pub temperature_min: f64,

    pub dew_point: f64,

    pub humidity: f64,

    pub precipitation: f64,

    pub pressure: f64,

    pub wind_direction: f64,

    pub wind_speed: f64,

    pub wind_speed_max: f64,
}

impl Sample {
    pub fn from_record(record: &ObservationRecord) -> Result<Sample, Error> {
        let idema = &record.idema;

        // Prefer the pressure reduced to sea level.
        let pressure = match record.pressure_sea {
            Some(pressure) => pressure,
            None => required(record.pressure, "pres", idema)?,
        };

        Ok(Sample {
            timestamp: record.timestamp()?,
            temperature: required(record.temperature, "ta", idema)?,
            temperature_max: required(record.temperature_max, "tamax", idema)?,
            temperature_min: required(record.temperature_min, "tamin", idema)?,
            dew_point: required(record.dew_point, "tpr", idema)?,
            humidity: required(record.humidity, "hr", idema)?,
            precipitation: required(record.precipitation, "prec", idema)?,
            pressure,
            wind_direction: required(record.wind_direction, "dv", idema)?,
            wind_speed: required(record.wind_speed, "vv", idema)?,
            wind_speed_max: required(record.wind_speed_max, "vmax", idema)?,
        })
    }
}

/// Latest conventional observation of a station.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    id: String,
    name: String,
    altitude: f64,
    coordinate: Coordinate,
    distance: f64,
    timezone: Tz,
    sample: Sample,
}

/// Snapshot of every station attribute.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StationData {
    pub altitude: f64,
    pub coordinate: Coordinate,
    pub datetime: DateTime<Tz>,
    pub distance: f64,
    pub humidity: f64,
    pub id: String,
    pub name: String,
    pub outdated: bool,
    pub precipitation: f64,
    pub pressure: f64,
    pub temperature: f64,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub timestamp: String,
    pub timezone: String,
    pub wind_direction: f64,
    pub wind_speed: f64,
    pub wind_speed_max: f64,
}

/// Weather part of a station snapshot.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StationWeather {
    pub dew_point: f64,
    pub humidity: f64,
    pub precipitation: f64,
    pub pressure: f64,
    pub temperature: f64,
    pub wind_direction: f64,
    pub wind_speed: f64,
    pub wind_speed_max: f64,
}

impl Station {
    /// Builds a station from its first observation. `distance` is the distance
    /// in km from the point the station was searched for.
    pub fn new(record: &ObservationRecord, distance: f64) -> Result<Station, Error> {
        let coordinate = record.coordinate();
        Ok(Station {
            id: record.idema.clone(),
            name: record.location.clone(),
            altitude: required(record.altitude, "alt", &record.idema)?,
            coordinate,
            distance,
            timezone: timezone_from_coords(coordinate),
            sample: Sample::from_record(record)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Distance in km from the search point, rounded to meters.
    pub fn distance(&self) -> f64 {
        (self.distance * 1000.0).round() / 1000.0
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    /// Time of the current sample in the station's time zone.
    pub fn datetime(&self) -> DateTime<Tz> {
        self.sample.timestamp.with_timezone(&self.timezone)
    }

    /// ISO 8601 rendition of [`Station::datetime`].
    pub fn timestamp(&self) -> String {
        self.datetime().to_rfc3339()
    }

    pub fn temperature(&self) -> f64 {
        self.sample.temperature
    }

    pub fn temperature_max(&self) -> f64 {
        self.sample.temperature_max
    }

    pub fn temperature_min(&self) -> f64 {
        self.sample.temperature_min
    }

    pub fn dew_point(&self) -> f64 {
        self.sample.dew_point
    }

    pub fn humidity(&self) -> f64 {
        self.sample.humidity
    }

    pub fn precipitation(&self) -> f64 {
        self.sample.precipitation
    }

    pub fn pressure(&self) -> f64 {
        self.sample.pressure
    }

    pub fn wind_direction(&self) -> f64 {
        self.sample.wind_direction
    }

    pub fn wind_speed(&self) -> f64 {
        self.sample.wind_speed
    }

    pub fn wind_speed_max(&self) -> f64 {
        self.sample.wind_speed_max
    }

    /// True once `now` is more than [`STATION_MAX_DELTA`] past the sample.
    pub fn is_outdated(&self, now: DateTime<Utc>) -> bool {
        match (now - self.sample.timestamp).to_std() {
            Ok(elapsed) => elapsed > STATION_MAX_DELTA,
            // Sample is newer than `now`.
            Err(_) => false,
        }
    }

    pub fn outdated(&self) -> bool {
        self.is_outdated(Utc::now())
    }

    /// Replaces the current sample.
    pub fn apply_sample(&mut self, sample: Sample) {
        self.sample = sample;
    }

    /// Applies the newest of `samples` if it is newer than the current sample
    /// and not after `now`. Returns whether the station changed.
    pub fn apply_latest_of(&mut self, samples: &[Sample], now: DateTime<Utc>) -> bool {
        let latest = samples.iter().fold(None::<&Sample>, |latest, sample| match latest {
            Some(l) if sample.timestamp <= l.timestamp => Some(l),
            _ => Some(sample),
        });

        match latest {
            Some(sample) if self.accepts(sample.timestamp, now) => {
                self.apply_sample(sample.clone());
                true
            }
            _ => false,
        }
    }

    /// Same as [`Station::apply_latest_of`] over raw observations. Only the
    /// selected observation has to be complete.
    pub fn update_samples(
        &mut self,
        records: &[ObservationRecord],
        now: DateTime<Utc>,
    ) -> Result<bool, Error> {
        let mut latest: Option<(&ObservationRecord, DateTime<Utc>)> = None;
        for record in records {
            let timestamp = record.timestamp()?;
            let newer = match latest {
                Some((_, latest_timestamp)) => timestamp > latest_timestamp,
                None => true,
            };
            if newer {
                latest = Some((record, timestamp));
            }
        }

        match latest {
            Some((record, timestamp)) if self.accepts(timestamp, now) => {
                self.apply_sample(Sample::from_record(record)?);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn accepts(&self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        self.sample.timestamp < timestamp && timestamp <= now
    }

    pub fn data(&self, now: DateTime<Utc>) -> StationData {
        StationData {
            altitude: self.altitude,
            coordinate: self.coordinate,
            datetime: self.datetime(),
            distance: self.distance(),
            humidity: self.humidity(),
            id: self.id.clone(),
            name: self.name.clone(),
            outdated: self.is_outdated(now),
            precipitation: self.precipitation(),
            pressure: self.pressure(),
            temperature: self.temperature(),
            temperature_max: self.temperature_max(),
            temperature_min: self.temperature_min(),
            timestamp: self.timestamp(),
            timezone: self.timezone.name().to_string(),
            wind_direction: self.wind_direction(),
            wind_speed: self.wind_speed(),
            wind_speed_max: self.wind_speed_max(),
        }
    }

    pub fn weather(&self) -> StationWeather {
        StationWeather {
            dew_point: self.dew_point(),
            humidity: self.humidity(),
            precipitation: self.precipitation(),
            pressure: self.pressure(),
            temperature: self.temperature(),
            wind_direction: self.wind_direction(),
            wind_speed: self.wind_speed(),
            wind_speed_max: self.wind_speed_max(),
        }
    }
}

impl Located for Station {
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

/// Time zone of a station. Stations are either on the Canary Islands or in
/// the peninsula/Balearic/Ceuta/Melilla zone.
pub fn timezone_from_coords(coordinate: Coordinate) -> Tz {
    let canary = (26.5..=29.8).contains(&coordinate.latitude)
        && (-18.5..=-13.0).contains(&coordinate.longitude);
    if canary {
        Tz::Atlantic__Canary
    } else {
        Tz::Europe__Madrid
    }
}
