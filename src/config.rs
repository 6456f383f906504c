use std::path::PathBuf;

use crate::{
    error::{Error, Result},
    model::movie::Coordinates,
};

/// Everything a single run needs; built once by the binary and passed down to every stage.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub year: String,
    pub user_location: Coordinates,
    pub output_dir: PathBuf,
    pub csv_path: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(
        input_path: PathBuf,
        year: &str,
        user_location: &str,
        output_dir: PathBuf,
        csv_path: Option<PathBuf>,
    ) -> Result<Self> {
        Ok(Self {
            input_path,
            year: parse_year(year)?,
            user_location: parse_location(user_location)?,
            output_dir,
            csv_path,
        })
    }

    pub fn map_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.html", self.year))
    }
}

/// Free text matched as a substring of the `(dddd)` token, so `199` or `(2020` work too.
/// It also names the output file, hence no path separators.
pub fn parse_year(input: &str) -> Result<String> {
    let year = input.trim();
    if year.is_empty() {
        return Err(Error::InvalidYear("year must not be empty".to_string()));
    }
    if year.contains(['/', '\\']) {
        return Err(Error::InvalidYear(format!(
            "{:?} cannot be used as a file name",
            year
        )));
    }
    Ok(year.to_string())
}

pub fn parse_location(input: &str) -> Result<Coordinates> {
    let invalid = || Error::InvalidLocation(input.trim().to_string());

    let mut parts = input.split(',');
    let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };

    let latitude: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let longitude: f64 = lon.trim().parse().map_err(|_| invalid())?;

    let coordinates = Coordinates::new(latitude, longitude);
    if !coordinates.is_valid() {
        return Err(invalid());
    }
    Ok(coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_and_decimal_locations() {
        assert_eq!(parse_location("49, 24").unwrap(), Coordinates::new(49.0, 24.0));
        assert_eq!(
            parse_location(" 49.84,24.03\n").unwrap(),
            Coordinates::new(49.84, 24.03)
        );
    }

    #[test]
    fn rejects_malformed_locations() {
        for input in ["", "49", "49;24", "a,b", "1,2,3", "91,0", "0,200"] {
            assert!(
                matches!(parse_location(input), Err(Error::InvalidLocation(_))),
                "{:?} should be rejected",
                input
            );
        }
    }

    #[test]
    fn year_is_trimmed_and_validated() {
        assert_eq!(parse_year(" 2020\n").unwrap(), "2020");
        assert_eq!(parse_year("199").unwrap(), "199");
        assert!(parse_year(" \n").is_err());
        assert!(parse_year("../2020").is_err());
    }

    #[test]
    fn any_other_text_is_left_to_the_substring_match() {
        assert_eq!(parse_year("(2020").unwrap(), "(2020");
        assert_eq!(parse_year("20x0").unwrap(), "20x0");
        assert_eq!(parse_year("20201").unwrap(), "20201");
    }

    #[test]
    fn map_is_named_after_the_year() {
        let config = RunConfig::new(
            PathBuf::from("locations.list"),
            "2015",
            "0,0",
            PathBuf::from("out"),
            None,
        )
        .unwrap();

        assert_eq!(config.map_path(), PathBuf::from("out").join("2015.html"));
    }
}
