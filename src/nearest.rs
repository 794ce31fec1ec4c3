use crate::{distance, Coordinate, DistanceModel, Located};

/// Closest candidate to `target` strictly within `threshold_km`, together with
/// its distance. The first candidate found at the minimal distance wins.
pub fn find_nearest<T: Located>(
    target: Coordinate,
    candidates: &[T],
    threshold_km: f64,
    model: DistanceModel,
) -> Option<(&T, f64)> {
    find_nearest_by(target, candidates, threshold_km, |a, b| {
        distance(a, b, model)
    })
}

/// Like [`find_nearest`], with a caller supplied distance function (km).
pub fn find_nearest_by<T, F>(
    target: Coordinate,
    candidates: &[T],
    threshold_km: f64,
    distance_fn: F,
) -> Option<(&T, f64)>
where
    T: Located,
    F: Fn(Coordinate, Coordinate) -> f64,
{
    let mut closest = None;
    let mut closest_distance = threshold_km;
    for candidate in candidates {
        let distance = distance_fn(target, candidate.coordinate());
        if distance < closest_distance {
            closest = Some(candidate);
            closest_distance = distance;
        }
    }

    closest.map(|candidate| (candidate, closest_distance))
}
