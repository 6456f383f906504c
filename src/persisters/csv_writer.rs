use std::{io, path::Path};

use csv::{QuoteStyle, Writer, WriterBuilder};

use crate::{
    distance::haversine_km,
    error::Result,
    model::{collection::MovieCollection, movie::Coordinates, movie::MovieLocation},
};

pub struct CsvWriter {}

impl CsvWriter {
    pub fn save_movies_to_csv(
        movies: &MovieCollection,
        origin: Coordinates,
        file_name: &Path,
    ) -> Result<()> {
        let wrt = Writer::from_path(file_name)?;
        CsvWriter::write_movies(wrt, movies, origin)?;
        log::info!("Saved {} movies to {:?}", movies.len(), file_name);
        Ok(())
    }

    /// Tab separated, unquoted dump of every movie, meant for a terminal.
    pub fn print_movies<W: io::Write>(
        out: W,
        movies: &MovieCollection,
        origin: Coordinates,
    ) -> Result<()> {
        let wrt = WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Never)
            .from_writer(out);
        CsvWriter::write_movies(wrt, movies, origin)
    }

    fn write_movies<W: io::Write>(
        mut wrt: Writer<W>,
        movies: &MovieCollection,
        origin: Coordinates,
    ) -> Result<()> {
        wrt.write_record(MovieLocation::csv_titles())?;
        for movie in movies {
            let distance = haversine_km(origin, movie.coordinates);
            wrt.write_record(movie.to_csvable_array(distance))?;
        }
        wrt.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movies() -> MovieCollection {
        vec![
            MovieLocation {
                title: "\"Near\"".to_string(),
                place: "Origin".to_string(),
                coordinates: Coordinates::new(0.0, 0.0),
            },
            MovieLocation {
                title: "\"Far, Away\"".to_string(),
                place: "Null Island East".to_string(),
                coordinates: Coordinates::new(0.0, 1.0),
            },
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn prints_tab_separated_rows_in_order() {
        let mut out = vec![];

        CsvWriter::print_movies(&mut out, &movies(), Coordinates::new(0.0, 0.0)).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Title\tPlace\tLatitude\tLongitude\tDistanceKm");
        assert_eq!(lines[1], "\"Near\"\tOrigin\t0\t0\t0.000");
        assert!(lines[2].starts_with("\"Far, Away\"\tNull Island East\t0\t1\t111.19"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn saves_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movies.csv");

        CsvWriter::save_movies_to_csv(&movies(), Coordinates::new(0.0, 0.0), &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let titles: Vec<String> = reader
            .records()
            .map(|r| r.unwrap()[0].to_string())
            .collect();
        assert_eq!(titles, vec!["\"Near\"", "\"Far, Away\""]);
    }
}
