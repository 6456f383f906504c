use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    clients::Geocoder,
    error::{Error, Result},
    extractors::line_extractor::LineExtractor,
    model::{collection::MovieCollection, movie::MovieLocation},
};

/// Scans a locations listing and geocodes the place of every line released in the target year.
pub struct MovieLocationsFetcher<'a, G: Geocoder> {
    geocoder: &'a G,
}

impl<'a, G: Geocoder> MovieLocationsFetcher<'a, G> {
    pub fn new(geocoder: &'a G) -> Self {
        MovieLocationsFetcher { geocoder }
    }

    pub async fn get_movie_locations(&self, path: &Path, year: &str) -> Result<MovieCollection> {
        log::info!("Reading movie locations for {} from {:?}", year, path);
        let file = File::open(path).map_err(|source| Error::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;

        self.get_movie_locations_from_reader(BufReader::new(file), path, year)
            .await
    }

    pub async fn get_movie_locations_from_reader<R: BufRead>(
        &self,
        reader: R,
        source: &Path,
        year: &str,
    ) -> Result<MovieCollection> {
        let mut movies = MovieCollection::new();
        let mut lookups = 0;

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source_err| Error::ReadLine {
                path: source.to_path_buf(),
                line: index + 1,
                source: source_err,
            })?;

            let Some((title, place)) = Self::get_candidate(&line, year, &movies) else {
                log::trace!("Skipping line {}: {:?}", index + 1, line);
                continue;
            };

            lookups += 1;
            match self.geocoder.geocode(place).await {
                Ok(Some(coordinates)) => {
                    log::debug!("{} was filmed at {} {}", title, place, coordinates);
                    movies.insert(MovieLocation {
                        title: title.to_string(),
                        place: place.to_string(),
                        coordinates,
                    });
                }
                Ok(None) => log::debug!("Could not find {:?}, skipping {}", place, title),
                Err(e) => log::warn!("Skipping {}. Error was: {}", title, e),
            }
        }

        log::info!(
            "Found {} movies from {} after {} geocoding lookups",
            movies.len(),
            year,
            lookups
        );
        Ok(movies)
    }

    /// Title and place of a line that should be geocoded, if it passes every filter.
    fn get_candidate<'l>(
        line: &'l str,
        year: &str,
        movies: &MovieCollection,
    ) -> Option<(&'l str, &'l str)> {
        let fields = LineExtractor::extract_fields(line);

        let year_token = fields.year?;
        if !LineExtractor::year_matches(year_token, year) {
            return None;
        }
        let title = fields.title?;
        if movies.contains_title(title) {
            return None;
        }
        Some((title, fields.place?))
    }
}
