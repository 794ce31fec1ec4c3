use crate::parse::de_dms;
use crate::{Coordinate, Located};
use serde::{Deserialize, Serialize};

/// Entry of the climatological values station inventory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClimatologicalStation {
    #[serde(rename = "indicativo")]
    pub id: String,

    #[serde(rename = "nombre")]
    pub name: String,

    #[serde(rename = "provincia", default)]
    pub province: String,

    #[serde(rename = "altitud", default)]
    pub altitude: String,

    #[serde(rename = "indsinop", default)]
    pub synop_id: String,

    #[serde(rename = "latitud", deserialize_with = "de_dms")]
    pub latitude: f64,

    #[serde(rename = "longitud", deserialize_with = "de_dms")]
    pub longitude: f64,
}

impl Located for ClimatologicalStation {
    fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}
