use crate::{find_nearest, Coordinate, Gateway, Town, API_MIN_TOWN_DISTANCE_KM};
use log::debug;

impl Gateway {
    /// Master data of every municipality.
    pub async fn get_towns(&self) -> Option<Vec<Town>> {
        //https://opendata.aemet.es/opendata/api/maestro/municipios

        self.api_call("maestro/municipios").await
    }

    /// Master data of a single municipality (`id28079`).
    pub async fn get_town(&self, town: &str) -> Option<Vec<Town>> {
        let cmd = format!("maestro/municipio/{}", town);
        self.api_call(&cmd).await
    }

    /// Closest municipality, with its distance in km.
    pub async fn get_town_by_coordinates(&self, coordinate: Coordinate) -> Option<(Town, f64)> {
        let towns = self.get_towns().await?;

        let closest = find_nearest(
            coordinate,
            &towns,
            API_MIN_TOWN_DISTANCE_KM,
            self.distance_model(),
        )
        .map(|(town, distance)| (town.clone(), distance));
        debug!("closest town: {:?}", closest);
        closest
    }
}
