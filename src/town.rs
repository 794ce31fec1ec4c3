use crate::parse::{de_f64, parse_town_code};
use crate::{Coordinate, Located};
use serde::{Deserialize, Serialize};

/// Municipality from the master data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Town {
    pub id: String,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "latitud_dec", deserialize_with = "de_f64")]
    pub latitude: f64,

    #[serde(rename = "longitud_dec", deserialize_with = "de_f64")]
    pub longitude: f64,

    #[serde(rename = "altitud", default)]
    pub altitude: String,

    #[serde(rename = "capital", default)]
    pub capital: String,

    #[serde(rename = "num_hab", default)]
    pub population: String,

    #[serde(default)]
    pub url: String,
}

impl Town {
    /// Municipality code used by the forecast endpoints.
    pub fn code(&self) -> &str {
        parse_town_code(&self.id)
    }
}

impl Located for Town {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
