use std::{fs, io};

pub mod clients;
use clients::Geocoder;

pub mod config;
use config::RunConfig;

pub mod distance;
pub mod error;
use error::Result;

pub mod extractors;
pub mod model;
use model::collection::MovieCollection;

pub mod persisters;
use persisters::csv_writer::CsvWriter;

pub mod fetchers;
use fetchers::movie_locations_fetcher::MovieLocationsFetcher;

pub mod renderers;
use renderers::{markers_for, MapRenderer};

/// Parses the listing, geocodes every movie from `config.year`, sorts them by distance from
/// `config.user_location`, prints the sorted list and maps the nearest ones.
pub async fn run<G: Geocoder, R: MapRenderer>(
    config: &RunConfig,
    geocoder: &G,
    renderer: &R,
) -> Result<MovieCollection> {
    let movies = MovieLocationsFetcher::new(geocoder)
        .get_movie_locations(&config.input_path, &config.year)
        .await?;

    let sorted_movies = distance::sort_by_distance(&movies, config.user_location);

    CsvWriter::print_movies(io::stdout().lock(), &sorted_movies, config.user_location)?;

    if let Some(csv_path) = &config.csv_path {
        CsvWriter::save_movies_to_csv(&sorted_movies, config.user_location, csv_path)?;
    }

    fs::create_dir_all(&config.output_dir)?;
    let map_path = config.map_path();
    renderer.render(markers_for(sorted_movies.as_slice()), &map_path)?;

    log::info!(
        "Finished mapping movies from {}. Open {:?} in a browser to explore the {} nearest filming locations.",
        config.year,
        map_path,
        markers_for(sorted_movies.as_slice()).len()
    );

    Ok(sorted_movies)
}
