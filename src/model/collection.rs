use std::collections::HashSet;

use crate::model::movie::MovieLocation;

/// Title → coordinates mapping that remembers insertion order. The first entry
/// for a title wins; later inserts with the same title are ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieCollection {
    movies: Vec<MovieLocation>,
    titles: HashSet<String>,
}

impl MovieCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.titles.contains(title)
    }

    /// Returns false when the title was already present.
    pub fn insert(&mut self, movie: MovieLocation) -> bool {
        if !self.titles.insert(movie.title.clone()) {
            return false;
        }
        self.movies.push(movie);
        true
    }

    pub fn get(&self, title: &str) -> Option<&MovieLocation> {
        if !self.contains_title(title) {
            return None;
        }
        self.movies.iter().find(|movie| movie.title == title)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MovieLocation> {
        self.movies.iter()
    }

    pub fn as_slice(&self) -> &[MovieLocation] {
        &self.movies
    }
}

impl FromIterator<MovieLocation> for MovieCollection {
    fn from_iter<I: IntoIterator<Item = MovieLocation>>(iter: I) -> Self {
        let mut collection = MovieCollection::new();
        for movie in iter {
            collection.insert(movie);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a MovieCollection {
    type Item = &'a MovieLocation;
    type IntoIter = std::slice::Iter<'a, MovieLocation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::movie::Coordinates;

    fn movie(title: &str, latitude: f64) -> MovieLocation {
        MovieLocation {
            title: title.to_string(),
            place: "Somewhere".to_string(),
            coordinates: Coordinates::new(latitude, 0.0),
        }
    }

    #[test]
    fn first_insert_for_a_title_wins() {
        let mut collection = MovieCollection::new();

        assert!(collection.insert(movie("\"A\"", 1.0)));
        assert!(!collection.insert(movie("\"A\"", 2.0)));

        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get("\"A\"").unwrap().coordinates.latitude, 1.0);
    }

    #[test]
    fn keeps_insertion_order() {
        let collection: MovieCollection = vec![movie("\"B\"", 1.0), movie("\"A\"", 2.0), movie("\"C\"", 3.0)]
            .into_iter()
            .collect();

        let titles: Vec<&str> = collection.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["\"B\"", "\"A\"", "\"C\""]);
    }
}
