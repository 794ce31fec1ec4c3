mod api_response;
pub use api_response::{ApiResponse, Fetched};
mod climatological_station;
pub use climatological_station::ClimatologicalStation;
mod coordinate;
pub use coordinate::{Coordinate, Located};
mod distance;
pub use distance::{distance, DistanceModel};
mod error;
pub use error::Error;
mod forecast;
pub use forecast::TownForecast;
mod nearest;
pub use nearest::{find_nearest, find_nearest_by};
mod observation;
pub use observation::ObservationRecord;
pub mod parse;
mod station;
pub use station::{
    timezone_from_coords, Sample, Station, StationData, StationWeather, STATION_MAX_DELTA,
};
mod town;
pub use town::Town;

mod get_climatological_values;
mod get_conventional_observations;
mod get_forecasts;
mod get_lightnings_map;
mod get_towns;

use bon::Builder;
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const API_URL: &str = "https://opendata.aemet.es/opendata/api";
pub const API_TIMEOUT: Duration = Duration::from_secs(10);
pub const API_MIN_STATION_DISTANCE_KM: f64 = 40.0;
pub const API_MIN_TOWN_DISTANCE_KM: f64 = 50.0;

/// Settings for a [`Gateway`].
///
/// ```
/// let config = aemet::Config::builder()
///     .api_key("my-key")
///     .distance_model(aemet::DistanceModel::Geodesic)
///     .build();
/// assert_eq!(config.base_url, aemet::API_URL);
/// ```
#[derive(Builder, Debug, Clone)]
pub struct Config {
    #[builder(into)]
    pub api_key: String,

    #[builder(into, default = API_URL.to_string())]
    pub base_url: String,

    #[builder(default = API_TIMEOUT)]
    pub timeout: Duration,

    /// Verify the server's TLS certificate.
    #[builder(default = true)]
    pub verify: bool,

    #[builder(default)]
    pub distance_model: DistanceModel,
}

pub struct Gateway {
    client: reqwest::Client,
    config: Config,
}

impl Gateway {
    pub fn new(config: Config) -> Result<Gateway, Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Cache-Control",
            reqwest::header::HeaderValue::from_static("no-cache"),
        );
        headers.insert(
            "Accept",
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = match reqwest::ClientBuilder::new()
            .default_headers(headers)
            .https_only(config.base_url.starts_with("https://"))
            .danger_accept_invalid_certs(!config.verify)
            .timeout(config.timeout)
            .build()
        {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::Unspecified(format!(
                    "Could not create reqwest client ({}).",
                    err
                )))
            }
        };

        Ok(Gateway { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn distance_model(&self) -> DistanceModel {
        self.config.distance_model
    }

    /// Calls `cmd` relative to the base URL. Any failure is logged and
    /// reported as `None`.
    pub async fn api_call<T: DeserializeOwned>(&self, cmd: &str) -> Option<T> {
        match self.try_api_call(cmd).await {
            Ok(body) => Some(body),
            Err(err) => {
                log_failure(cmd, &err);
                None
            }
        }
    }

    /// Like [`Gateway::api_call`], keeping the reason of a failure.
    pub async fn try_api_call<T: DeserializeOwned>(&self, cmd: &str) -> Result<T, Error> {
        let url = format!("{}/{}", self.config.base_url, cmd);
        debug!("api call: {}", cmd);
        let request = self
            .client
            .get(&url)
            .query(&[("api_key", self.config.api_key.as_str())]);
        let text = self.send(request, cmd).await?;
        deserialize(&text)
    }

    /// Fetches the payload an envelope points at (`datos`). Any failure is
    /// logged and reported as `None`.
    pub async fn api_data<T: DeserializeOwned>(&self, url: &str) -> Option<T> {
        match self.try_api_data(url).await {
            Ok(body) => Some(body),
            Err(err) => {
                log_failure(url, &err);
                None
            }
        }
    }

    pub async fn try_api_data<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        let text = self.send(self.client.get(url), url).await?;
        deserialize(&text)
    }

    /// Calls `cmd` and, when `fetch_data` is set, follows the envelope to its
    /// payload. A failed follow-up still returns the envelope.
    async fn api_call_fetch<T: DeserializeOwned>(
        &self,
        cmd: &str,
        fetch_data: bool,
    ) -> Option<Fetched<T>> {
        let response: ApiResponse = self.api_call(cmd).await?;

        let data = match (&response.data, fetch_data) {
            (Some(url), true) => self.api_data(url).await,
            _ => None,
        };

        Some(Fetched { response, data })
    }

    async fn send(&self, request: reqwest::RequestBuilder, what: &str) -> Result<String, Error> {
        let res = match request.send().await {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::NetworkError(format!(
                    "Could not send request ({}).",
                    err
                )))
            }
        };

        let status = res.status().as_u16();
        let text = res
            .text()
            .await
            .unwrap_or_else(|_| String::from("Could not retrieve body text."));

        debug!("api call: {}, status: {}, response: {}", what, status, text);

        if !(200..=299).contains(&status) {
            if status == 429 {
                return Err(Error::Throttling);
            }

            return Err(Error::ApiError(status, text));
        }

        if text.trim().is_empty() {
            return Err(Error::EmptyResponse);
        }

        Ok(text)
    }
}

fn deserialize<T: DeserializeOwned>(text: &str) -> Result<T, Error> {
    match serde_json::from_str(text) {
        Ok(r) => Ok(r),
        Err(err) => Err(Error::SerializationError(format!(
            "Could not deserialize response from \"{}\" ({}).",
            text, err
        ))),
    }
}

fn log_failure(what: &str, err: &Error) {
    match err {
        Error::NetworkError(_) | Error::Unspecified(_) => error!("{}: {}", what, err),
        _ => warn!("{}: {}", what, err),
    }
}
