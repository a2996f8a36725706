use std::fmt;

/// Site origin prepended to every extracted link.
pub const IMDB_ORIGIN: &str = "https://www.imdb.com";

pub type Score = i32;

/// One entry of a search results page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MovieRecord {
    pub title: String,
    pub score: Option<Score>,
    pub url: String,
}

impl MovieRecord {
    pub fn new(title: impl Into<String>, score: Option<Score>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            score,
            url: url.into(),
        }
    }

    /// Builds a record from a site-relative link such as `/title/tt0111161/`.
    pub fn from_relative_link(title: impl Into<String>, score: Option<Score>, href: &str) -> Self {
        Self::new(title, score, format!("{IMDB_ORIGIN}{href}"))
    }

    /// Cells in export order: title, score (blank when absent), url.
    pub fn to_row(&self) -> [String; 3] {
        [
            self.title.clone(),
            self.score.map(|s| s.to_string()).unwrap_or_default(),
            self.url.clone(),
        ]
    }
}

/// Tuple rendering: `('Title', 74, 'https://...')`, with `None` for a missing score.
impl fmt::Display for MovieRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_quoted(f, &self.title)?;
        match self.score {
            Some(score) => write!(f, ", {score}, ")?,
            None => write!(f, ", None, ")?,
        }
        write_quoted(f, &self.url)?;
        write!(f, ")")
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    write!(f, "{quote}")?;
    for ch in text.chars() {
        match ch {
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\r' => write!(f, "\\r")?,
            '\t' => write!(f, "\\t")?,
            c if c == quote => write!(f, "\\{c}")?,
            c => write!(f, "{c}")?,
        }
    }
    write!(f, "{quote}")
}
