use std::path::PathBuf;

use clap::Parser;

use movie_locations_map::clients::nominatim_client::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};

#[derive(Debug, Parser)]
#[command(name = "movie-locations-map", version)]
#[command(about = "Map the filming locations nearest to you for movies released in a given year")]
pub struct Args {
    /// Movie locations listing to read.
    #[arg(short, long, default_value = "locations.list")]
    pub input: PathBuf,

    /// Release year to map. Prompted for when omitted.
    #[arg(short, long)]
    pub year: Option<String>,

    /// Your location as "<latitude>,<longitude>". Prompted for when omitted.
    #[arg(short, long, allow_hyphen_values = true)]
    pub location: Option<String>,

    /// Directory the <year>.html map is written to.
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Also save the full sorted list of movies to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Resolve places from a local `place,latitude,longitude` CSV instead of Nominatim.
    #[arg(long)]
    pub gazetteer: Option<PathBuf>,

    /// Nominatim server base URL.
    #[arg(long, env = "NOMINATIM_URL", default_value = DEFAULT_BASE_URL)]
    pub nominatim_url: String,

    /// User-Agent sent to Nominatim. Their usage policy asks for one that identifies the application.
    #[arg(long, env = "NOMINATIM_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log every skipped place and geocoding lookup.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_year_and_location_for_prompts() {
        let args = Args::try_parse_from(["movie-locations-map"]).unwrap();

        assert_eq!(args.input, PathBuf::from("locations.list"));
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(args.year.is_none());
        assert!(args.location.is_none());
        assert!(args.gazetteer.is_none());
    }

    #[test]
    fn accepts_negative_coordinates() {
        let args = Args::try_parse_from([
            "movie-locations-map",
            "--year",
            "2015",
            "--location",
            "-33.87,151.21",
        ])
        .unwrap();

        assert_eq!(args.year.as_deref(), Some("2015"));
        assert_eq!(args.location.as_deref(), Some("-33.87,151.21"));
    }
}
