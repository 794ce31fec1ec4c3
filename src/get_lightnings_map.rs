use crate::{ApiResponse, Gateway};

impl Gateway {
    /// Map of lightning strikes over the last 6 hours. The envelope's `datos`
    /// URL points at the image.
    pub async fn get_lightnings_map(&self) -> Option<ApiResponse> {
        self.api_call("red/rayos/mapa").await
    }
}
