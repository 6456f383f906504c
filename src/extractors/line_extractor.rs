use regex::Regex;
use std::sync::OnceLock;

fn title_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"^"[^"\r\n]+""#).expect("title pattern is valid"))
}

fn year_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\(\d{4}\)").expect("year pattern is valid"))
}

/// The pieces of a listing line that the three extractions found. Each one is independent:
/// a line can have a year but no title, a title but no place, and so on.
#[derive(Debug, PartialEq)]
pub struct LineFields<'a> {
    pub title: Option<&'a str>,
    pub year: Option<&'a str>,
    pub place: Option<&'a str>,
}

#[derive(Debug)]
pub struct LineExtractor {}

impl LineExtractor {
    pub fn extract_fields(line: &str) -> LineFields<'_> {
        LineFields {
            title: LineExtractor::extract_title(line),
            year: LineExtractor::extract_year(line),
            place: LineExtractor::extract_place(line),
        }
    }

    /// `"Title"` including the quotes; only when the line starts with it.
    pub fn extract_title(line: &str) -> Option<&str> {
        title_pattern().find(line).map(|m| m.as_str())
    }

    /// First `(dddd)` token anywhere in the line, parentheses included.
    pub fn extract_year(line: &str) -> Option<&str> {
        year_pattern().find(line).map(|m| m.as_str())
    }

    /// First non-empty tab-separated field after the title column that is not a
    /// parenthesized production note.
    pub fn extract_place(line: &str) -> Option<&str> {
        line.split('\t')
            .skip(1)
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .find(|field| !(field.starts_with('(') && field.ends_with(')')))
    }

    pub fn year_matches(year_token: &str, target_year: &str) -> bool {
        year_token.contains(target_year)
    }
}
