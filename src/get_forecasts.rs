use crate::parse::parse_town_code;
use crate::{Fetched, Gateway, TownForecast};

impl Gateway {
    /// Daily forecast for a municipality (`28079` or `id28079`).
    pub async fn get_specific_forecast_town_daily(
        &self,
        town: &str,
        fetch_data: bool,
    ) -> Option<Fetched<Vec<TownForecast>>> {
        //https://opendata.aemet.es/opendata/api/prediccion/especifica/municipio/diaria/28079

        let cmd = format!(
            "prediccion/especifica/municipio/diaria/{}",
            parse_town_code(town)
        );
        self.api_call_fetch(&cmd, fetch_data).await
    }

    /// Hourly forecast for a municipality (`28079` or `id28079`).
    pub async fn get_specific_forecast_town_hourly(
        &self,
        town: &str,
        fetch_data: bool,
    ) -> Option<Fetched<Vec<TownForecast>>> {
        let cmd = format!(
            "prediccion/especifica/municipio/horaria/{}",
            parse_town_code(town)
        );
        self.api_call_fetch(&cmd, fetch_data).await
    }
}
