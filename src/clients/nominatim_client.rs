use reqwest::Client;
use serde::Deserialize;

use crate::{
    clients::Geocoder,
    error::{Error, Result},
    model::movie::Coordinates,
};

pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_USER_AGENT: &str = "movie-locations-map";

#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Geocoder backed by an OpenStreetMap Nominatim `/search` endpoint.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

impl NominatimClient {
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self> {
        Ok(Self {
            client: Client::builder().user_agent(user_agent).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn get_search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }

    async fn get_search_response(&self, place: &str) -> Result<String> {
        let url = self.get_search_url();
        let geocoding_error = |message: String| Error::Geocoding {
            place: place.to_string(),
            message,
        };

        let resp = self
            .client
            .get(url.as_str())
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| geocoding_error(format!("request to {} failed: {}", url, e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(geocoding_error(format!("{} answered {}", url, status)));
        }

        resp.text()
            .await
            .map_err(|e| geocoding_error(format!("could not read response body: {}", e)))
    }

    /// Picks the first hit out of a Nominatim JSON search response.
    pub fn parse_search_response(place: &str, body: &str) -> Result<Option<Coordinates>> {
        let geocoding_error = |message: String| Error::Geocoding {
            place: place.to_string(),
            message,
        };

        let places: Vec<NominatimPlace> = serde_json::from_str(body)
            .map_err(|e| geocoding_error(format!("unexpected response: {}", e)))?;

        let Some(first) = places.first() else {
            return Ok(None);
        };

        let latitude: f64 = first
            .lat
            .parse()
            .map_err(|_| geocoding_error(format!("invalid latitude {:?}", first.lat)))?;
        let longitude: f64 = first
            .lon
            .parse()
            .map_err(|_| geocoding_error(format!("invalid longitude {:?}", first.lon)))?;

        let coordinates = Coordinates::new(latitude, longitude);
        if !coordinates.is_valid() {
            return Err(geocoding_error(format!("out of range {}", coordinates)));
        }
        Ok(Some(coordinates))
    }
}

impl Geocoder for NominatimClient {
    async fn geocode(&self, place: &str) -> Result<Option<Coordinates>> {
        log::debug!("Geocoding {:?} with {}", place, self.base_url);
        let body = self.get_search_response(place).await?;
        NominatimClient::parse_search_response(place, body.as_str())
    }
}
