use std::{fs, path::Path};

use serde::Serialize;

use crate::{
    error::{Error, Result},
    model::movie::MovieLocation,
    renderers::{markers_for, MapRenderer},
};

#[derive(Debug, Clone, Serialize)]
pub struct TileLayer {
    pub name: &'static str,
    pub url: &'static str,
    pub attribution: &'static str,
}

const OSM_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const BASE_LAYERS: [TileLayer; 6] = [
    TileLayer {
        name: "OpenStreetMap",
        url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
        attribution: OSM_ATTRIBUTION,
    },
    TileLayer {
        name: "OpenTopoMap",
        url: "https://{s}.tile.opentopomap.org/{z}/{x}/{y}.png",
        attribution: "Map data: &copy; OpenStreetMap contributors, SRTM | Map style: &copy; <a href=\"https://opentopomap.org\">OpenTopoMap</a> (CC-BY-SA)",
    },
    TileLayer {
        name: "Stamen Terrain",
        url: "https://tiles.stadiamaps.com/tiles/stamen_terrain/{z}/{x}/{y}{r}.png",
        attribution: "&copy; <a href=\"https://stadiamaps.com/\">Stadia Maps</a> &copy; <a href=\"https://stamen.com/\">Stamen Design</a> &copy; OpenStreetMap contributors",
    },
    TileLayer {
        name: "Stamen Toner",
        url: "https://tiles.stadiamaps.com/tiles/stamen_toner/{z}/{x}/{y}{r}.png",
        attribution: "&copy; <a href=\"https://stadiamaps.com/\">Stadia Maps</a> &copy; <a href=\"https://stamen.com/\">Stamen Design</a> &copy; OpenStreetMap contributors",
    },
    TileLayer {
        name: "CartoDB Positron",
        url: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
        attribution: "&copy; OpenStreetMap contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>",
    },
    TileLayer {
        name: "CartoDB Dark Matter",
        url: "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png",
        attribution: "&copy; OpenStreetMap contributors &copy; <a href=\"https://carto.com/attributions\">CARTO</a>",
    },
];

#[derive(Debug, Serialize)]
struct Marker<'a> {
    title: &'a str,
    place: &'a str,
    lat: f64,
    lon: f64,
}

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>__PAGE_TITLE__</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" crossorigin="" />
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" crossorigin=""></script>
  <style>
    html, body, #map { height: 100%; margin: 0; }
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
    const baseLayers = __BASE_LAYERS__;
    const movies = __MARKERS__;

    const map = L.map('map', { worldCopyJump: true });
    const layers = {};
    baseLayers.forEach((layer, index) => {
      layers[layer.name] = L.tileLayer(layer.url, { attribution: layer.attribution, maxZoom: 18 });
      if (index === 0) {
        layers[layer.name].addTo(map);
      }
    });

    const markers = L.featureGroup();
    movies.forEach((movie) => {
      const popup = document.createElement('div');
      const title = document.createElement('b');
      title.textContent = movie.title;
      popup.append(title, document.createElement('br'), movie.place);
      L.marker([movie.lat, movie.lon], { title: movie.title })
        .bindPopup(popup)
        .addTo(markers);
    });
    markers.addTo(map);

    L.control.layers(layers, { 'Movies': markers }).addTo(map);

    if (movies.length > 0) {
      map.fitBounds(markers.getBounds(), { padding: [40, 40], maxZoom: 10 });
    } else {
      map.setView([0, 0], 2);
    }
  </script>
</body>
</html>
"#;

/// Writes a standalone Leaflet page with the six `BASE_LAYERS`, a layer switcher and
/// one marker per movie.
#[derive(Debug, Clone)]
pub struct LeafletRenderer {
    page_title: String,
}

impl LeafletRenderer {
    pub fn new(page_title: &str) -> Self {
        Self {
            page_title: page_title.to_string(),
        }
    }

    pub fn to_html(&self, movies: &[MovieLocation]) -> String {
        let markers: Vec<Marker> = markers_for(movies)
            .iter()
            .map(|movie| Marker {
                title: movie.title.as_str(),
                place: movie.place.as_str(),
                lat: movie.coordinates.latitude,
                lon: movie.coordinates.longitude,
            })
            .collect();

        TEMPLATE
            .replace("__PAGE_TITLE__", &escape_html(&self.page_title))
            .replace("__BASE_LAYERS__", &to_script_json(&BASE_LAYERS))
            .replace("__MARKERS__", &to_script_json(&markers))
    }
}

impl MapRenderer for LeafletRenderer {
    fn render(&self, movies: &[MovieLocation], path: &Path) -> Result<()> {
        let html = self.to_html(movies);
        fs::write(path, html).map_err(|source| Error::Render {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!(
            "Saved map with {} movies to {:?}",
            markers_for(movies).len(),
            path
        );
        Ok(())
    }
}

/// JSON that is safe to inline inside a `<script>` element.
fn to_script_json<T: Serialize + ?Sized>(value: &T) -> String {
    // Serializing plain structs of strings and floats cannot fail.
    serde_json::to_string(value)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/")
        .replace("<!--", "<\\!--")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{model::movie::Coordinates, renderers::MAX_MARKERS};

    fn movie(title: &str) -> MovieLocation {
        MovieLocation {
            title: title.to_string(),
            place: "Paris".to_string(),
            coordinates: Coordinates::new(48.8566, 2.3522),
        }
    }

    #[test]
    fn page_contains_every_base_layer_and_a_layer_control() {
        let html = LeafletRenderer::new("Movies from 2020").to_html(&[movie("\"A\"")]);

        for layer in BASE_LAYERS.iter() {
            assert!(html.contains(&format!("\"name\":\"{}\"", layer.name)));
        }
        assert!(html.contains("L.control.layers"));
        assert!(html.contains("<title>Movies from 2020</title>"));
    }

    #[test]
    fn caps_markers_at_ten() {
        let movies: Vec<MovieLocation> = (0..25).map(|i| movie(&format!("\"Movie {}\"", i))).collect();

        let html = LeafletRenderer::new("Movies").to_html(&movies);

        assert!(html.contains("Movie 9\\\""));
        assert!(!html.contains("Movie 10\\\""));
        assert_eq!(html.matches("\"lat\":").count(), MAX_MARKERS);
    }

    #[test]
    fn titles_cannot_close_the_script_element() {
        let html = LeafletRenderer::new("<b>").to_html(&[movie("\"</script><script>alert(1)\"")]);

        assert_eq!(html.matches("</script>").count(), 2);
        assert!(html.contains("<title>&lt;b&gt;</title>"));
    }

    #[test]
    fn empty_map_still_renders() {
        let html = LeafletRenderer::new("Nothing").to_html(&[]);

        assert!(html.contains("const movies = [];"));
        assert!(html.contains("map.setView([0, 0], 2)"));
    }

    #[test]
    fn render_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2020.html");

        LeafletRenderer::new("Movies").render(&[movie("\"A\"")], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<!DOCTYPE html>"));
        assert!(content.contains("\"title\":\"\\\"A\\\"\""));
    }

    #[test]
    fn render_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("2020.html");

        let result = LeafletRenderer::new("Movies").render(&[], &path);

        assert!(matches!(result, Err(Error::Render { .. })));
    }
}
