use crate::{
    find_nearest, ClimatologicalStation, Coordinate, Fetched, Gateway, API_MIN_STATION_DISTANCE_KM,
};
use log::debug;

impl Gateway {
    /// Stations of the climatological values inventory.
    pub async fn get_climatological_values_stations(
        &self,
        fetch_data: bool,
    ) -> Option<Fetched<Vec<ClimatologicalStation>>> {
        //https://opendata.aemet.es/opendata/api/valores/climatologicos/inventarioestaciones/
        //todasestaciones

        self.api_call_fetch(
            "valores/climatologicos/inventarioestaciones/todasestaciones",
            fetch_data,
        )
        .await
    }

    /// Closest climatological values station, with its distance in km.
    pub async fn get_climatological_values_station_by_coordinates(
        &self,
        coordinate: Coordinate,
    ) -> Option<(ClimatologicalStation, f64)> {
        let stations = self
            .get_climatological_values_stations(true)
            .await?
            .into_data()?;

        let closest = find_nearest(
            coordinate,
            &stations,
            API_MIN_STATION_DISTANCE_KM,
            self.distance_model(),
        )
        .map(|(station, distance)| (station.clone(), distance));
        debug!("closest climatological station: {:?}", closest);
        closest
    }

    pub async fn get_climatological_values_station_data(
        &self,
        station: &str,
        fetch_data: bool,
    ) -> Option<Fetched<Vec<ClimatologicalStation>>> {
        let cmd = format!(
            "valores/climatologicos/inventarioestaciones/estaciones/{}",
            station
        );
        self.api_call_fetch(&cmd, fetch_data).await
    }
}
