use crate::model::{collection::MovieCollection, movie::Coordinates, movie::MovieLocation};

/// Mean Earth radius, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = ((d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2))
        .clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// New collection with the same movies, nearest to `origin` first. Stable for equal distances.
pub fn sort_by_distance(movies: &MovieCollection, origin: Coordinates) -> MovieCollection {
    let mut with_distance: Vec<(f64, &MovieLocation)> = movies
        .iter()
        .map(|movie| (haversine_km(origin, movie.coordinates), movie))
        .collect();
    with_distance.sort_by(|(a, _), (b, _)| a.total_cmp(b));

    with_distance
        .into_iter()
        .map(|(_, movie)| movie.clone())
        .collect()
}
