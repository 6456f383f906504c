use std::{io, io::prelude::*, process};

use clap::Parser;

use movie_locations_map::{
    clients::{gazetteer::Gazetteer, nominatim_client::NominatimClient},
    config::RunConfig,
    error::Result,
    renderers::leaflet_renderer::LeafletRenderer,
};

mod args;
use args::Args;

mod logging;

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut user_input = String::new();
    io::stdin().read_line(&mut user_input)?;
    Ok(user_input)
}

async fn run(args: Args) -> Result<()> {
    let year = match args.year {
        Some(year) => year,
        None => prompt("Please enter a year you would like to have a map for: ")?,
    };
    let location = match args.location {
        Some(location) => location,
        None => prompt("Please enter your location (format: lat, long): ")?,
    };

    let config = RunConfig::new(args.input, &year, &location, args.output_dir, args.csv)?;
    let renderer = LeafletRenderer::new(&format!("Movies from {}", config.year));

    match args.gazetteer {
        Some(path) => {
            let gazetteer = Gazetteer::from_path(&path)?;
            movie_locations_map::run(&config, &gazetteer, &renderer).await?;
        }
        None => {
            let client = NominatimClient::new(&args.nominatim_url, &args.user_agent)?;
            movie_locations_map::run(&config, &client, &renderer).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::setup_logging(args.verbose);

    if let Err(e) = run(args).await {
        log::error!("{}", e);
        process::exit(1);
    }
}
