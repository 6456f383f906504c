use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// A movie title (quotes included, exactly as found in the listing) and where it was filmed.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieLocation {
    pub title: String,
    pub place: String,
    pub coordinates: Coordinates,
}

impl MovieLocation {
    pub fn to_csvable_array(&self, distance_km: f64) -> Vec<String> {
        vec![
            self.title.clone(),
            self.place.clone(),
            self.coordinates.latitude.to_string(),
            self.coordinates.longitude.to_string(),
            format!("{:.3}", distance_km),
        ]
    }

    pub fn csv_titles() -> Vec<&'static str> {
        vec!["Title", "Place", "Latitude", "Longitude", "DistanceKm"]
    }
}
