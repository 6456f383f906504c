pub mod movie_locations_fetcher;
