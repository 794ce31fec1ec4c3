use crate::parse::de_string;
use serde::{Deserialize, Serialize};

/// Specific forecast for a municipality. The forecast body differs between the
/// daily and hourly endpoints, so it is kept as raw JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TownForecast {
    #[serde(default, deserialize_with = "de_string")]
    pub id: String,

    #[serde(rename = "nombre", default)]
    pub name: String,

    #[serde(rename = "provincia", default)]
    pub province: String,

    #[serde(rename = "elaborado", default)]
    pub issued: String,

    #[serde(rename = "prediccion", default)]
    pub forecast: serde_json::Value,
}
