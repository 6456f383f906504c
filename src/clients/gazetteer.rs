use std::{collections::HashMap, io, path::Path};

use serde::Deserialize;

use crate::{
    clients::Geocoder,
    error::{Error, Result},
    model::movie::Coordinates,
};

#[derive(Debug, Deserialize)]
struct GazetteerRecord {
    place: String,
    latitude: f64,
    longitude: f64,
}

/// Offline geocoder reading `place,latitude,longitude` rows from a CSV file.
/// Lookups ignore case and surrounding whitespace; the first row for a place wins.
#[derive(Debug, Default)]
pub struct Gazetteer {
    places: HashMap<String, Coordinates>,
}

impl Gazetteer {
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = csv::Reader::from_path(path).map_err(|source| Error::Gazetteer {
            path: path.to_path_buf(),
            source,
        })?;
        Gazetteer::from_csv_reader(reader).map_err(|source| Error::Gazetteer {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_reader<R: io::Read>(rdr: R) -> Result<Self> {
        Ok(Gazetteer::from_csv_reader(csv::Reader::from_reader(rdr))?)
    }

    fn from_csv_reader<R: io::Read>(
        mut reader: csv::Reader<R>,
    ) -> std::result::Result<Self, csv::Error> {
        let mut gazetteer = Gazetteer::default();
        for record in reader.deserialize() {
            let record: GazetteerRecord = record?;
            let coordinates = Coordinates::new(record.latitude, record.longitude);
            if !coordinates.is_valid() {
                log::warn!(
                    "Ignoring gazetteer entry {:?} with out of range coordinates {}",
                    record.place,
                    coordinates
                );
                continue;
            }
            gazetteer
                .places
                .entry(Gazetteer::normalize(&record.place))
                .or_insert(coordinates);
        }
        log::info!("Loaded {} places into the gazetteer", gazetteer.len());
        Ok(gazetteer)
    }

    pub fn insert(&mut self, place: &str, coordinates: Coordinates) {
        self.places.insert(Gazetteer::normalize(place), coordinates);
    }

    pub fn lookup(&self, place: &str) -> Option<Coordinates> {
        self.places.get(&Gazetteer::normalize(place)).copied()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    fn normalize(place: &str) -> String {
        place.trim().to_lowercase()
    }
}

impl Geocoder for Gazetteer {
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>> {
        Ok(self.lookup(place))
    }
}
