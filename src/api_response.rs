use serde::{Deserialize, Serialize};

/// Envelope returned by every API call. The payload itself lives behind the
/// `datos` URL.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse {
    #[serde(rename = "descripcion", default)]
    pub description: String,

    #[serde(rename = "estado", default)]
    pub status: u16,

    #[serde(rename = "datos")]
    pub data: Option<String>,

    #[serde(rename = "metadatos")]
    pub metadata: Option<String>,
}

/// An envelope plus its payload. `data` is absent when following the `datos`
/// URL failed or was not requested.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    pub response: ApiResponse,

    pub data: Option<T>,
}

impl<T> Fetched<T> {
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}
