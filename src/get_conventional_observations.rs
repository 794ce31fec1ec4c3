use crate::{
    find_nearest, Coordinate, Error, Fetched, Gateway, ObservationRecord, Station,
    API_MIN_STATION_DISTANCE_KM,
};
use chrono::Utc;
use log::debug;

impl Gateway {
    /// Last hours of observations of every conventional station.
    pub async fn get_conventional_observation_stations(
        &self,
        fetch_data: bool,
    ) -> Option<Fetched<Vec<ObservationRecord>>> {
        //https://opendata.aemet.es/opendata/api/observacion/convencional/todas

        self.api_call_fetch("observacion/convencional/todas", fetch_data)
            .await
    }

    /// Observation closest to `coordinate`, with its distance in km.
    pub async fn get_conventional_observation_station_by_coordinates(
        &self,
        coordinate: Coordinate,
    ) -> Option<(ObservationRecord, f64)> {
        let records = self
            .get_conventional_observation_stations(true)
            .await?
            .into_data()?;

        let closest = find_nearest(
            coordinate,
            &records,
            API_MIN_STATION_DISTANCE_KM,
            self.distance_model(),
        )
        .map(|(record, distance)| (record.clone(), distance));
        debug!("closest observation station: {:?}", closest);
        closest
    }

    pub async fn get_conventional_observation_station_data(
        &self,
        station: &str,
        fetch_data: bool,
    ) -> Option<Fetched<Vec<ObservationRecord>>> {
        //https://opendata.aemet.es/opendata/api/observacion/convencional/datos/estacion/3195

        let cmd = format!("observacion/convencional/datos/estacion/{}", station);
        self.api_call_fetch(&cmd, fetch_data).await
    }

    /// Closest observation station as a [`Station`] holding its latest sample.
    ///
    /// `Ok(None)` when nothing could be fetched or no station is close enough.
    /// Fails with [`Error::DataFormat`] when the observation the station is
    /// built from, or its newest observation, is incomplete.
    pub async fn get_station_by_coordinates(
        &self,
        coordinate: Coordinate,
    ) -> Result<Option<Station>, Error> {
        let records = match self.get_conventional_observation_stations(true).await {
            Some(fetched) => match fetched.into_data() {
                Some(records) => records,
                None => return Ok(None),
            },
            None => return Ok(None),
        };

        let (closest, distance) = match find_nearest(
            coordinate,
            &records,
            API_MIN_STATION_DISTANCE_KM,
            self.distance_model(),
        ) {
            Some(closest) => closest,
            None => return Ok(None),
        };

        // The listing holds several hours per station; build the station from
        // the closest observation and move it to the newest one. A malformed
        // observation on either step fails the call.
        let mut station = Station::new(closest, distance)?;
        let samples = records
            .iter()
            .filter(|r| r.idema == closest.idema)
            .cloned()
            .collect::<Vec<ObservationRecord>>();
        station.update_samples(&samples, Utc::now())?;

        debug!(
            "station {} ({}) at {} km",
            station.id(),
            station.name(),
            station.distance()
        );
        Ok(Some(station))
    }
}
