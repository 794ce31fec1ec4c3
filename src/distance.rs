use crate::Coordinate;
use geo::{GeodesicDistance, HaversineDistance};
use serde::{Deserialize, Serialize};

/// Earth model used when measuring the distance between two coordinates.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DistanceModel {
    /// Spherical approximation (haversine). Cheap.
    #[default]
    GreatCircle,

    /// WGS-84 ellipsoid (Karney). More accurate, more expensive.
    Geodesic,
}

impl DistanceModel {
    pub fn from_high_precision(high_precision: bool) -> DistanceModel {
        if high_precision {
            DistanceModel::Geodesic
        } else {
            DistanceModel::GreatCircle
        }
    }

    pub fn is_high_precision(&self) -> bool {
        *self == DistanceModel::Geodesic
    }
}

/// Distance in kilometers between `a` and `b`.
pub fn distance(a: Coordinate, b: Coordinate, model: DistanceModel) -> f64 {
    let a: geo::Point<f64> = a.into();
    let b: geo::Point<f64> = b.into();
    let meters = match model {
        DistanceModel::GreatCircle => a.haversine_distance(&b),
        DistanceModel::Geodesic => a.geodesic_distance(&b),
    };
    meters / 1000.0
}
