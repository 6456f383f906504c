use std::path::Path;

use crate::{error::Result, model::movie::MovieLocation};

pub mod leaflet_renderer;

/// How many of the nearest movies end up on the map.
pub const MAX_MARKERS: usize = 10;

pub trait MapRenderer {
    /// Writes a map with one marker per movie to `path`.
    fn render(&self, movies: &[MovieLocation], path: &Path) -> Result<()>;
}

/// The first `MAX_MARKERS` movies, in the order given.
pub fn markers_for(movies: &[MovieLocation]) -> &[MovieLocation] {
    &movies[..movies.len().min(MAX_MARKERS)]
}
