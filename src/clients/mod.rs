use std::future::Future;

use crate::{error::Result, model::movie::Coordinates};

pub mod gazetteer;
pub mod nominatim_client;

/// Resolves a place name to coordinates. `Ok(None)` means the lookup worked but found nothing.
pub trait Geocoder {
    fn geocode(&self, place: &str) -> impl Future<Output = Result<Option<Coordinates>>> + Send;
}
