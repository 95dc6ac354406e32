//! The fixed set of content sources shown in the sidebar.

use serde::{Deserialize, Serialize};

/// One content provider/category. Extending the dashboard to a new provider
/// means adding a variant here; the wire protocol does not change.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Reddit,
    HackerNews,
    Github,
    TechFeed,
    Paper,
}

impl Source {
    /// Every source, in sidebar order.
    pub const ALL: [Source; 5] = [
        Source::Reddit,
        Source::HackerNews,
        Source::Github,
        Source::TechFeed,
        Source::Paper,
    ];

    /// URL path segment for the content endpoint.
    pub fn slug(&self) -> &'static str {
        match self {
            Source::Reddit => "reddit",
            Source::HackerNews => "hackernews",
            Source::Github => "github",
            Source::TechFeed => "techfeed",
            Source::Paper => "paper",
        }
    }

    /// Human-readable name used in the header and sidebar.
    pub fn display_name(&self) -> &'static str {
        match self {
            Source::Reddit => "Reddit",
            Source::HackerNews => "Hacker News",
            Source::Github => "GitHub Trending",
            Source::TechFeed => "Tech Feed",
            Source::Paper => "Papers",
        }
    }

    /// Position in the sidebar, zero-based.
    pub fn index(&self) -> usize {
        Source::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// The next source in sidebar order, wrapping around.
    pub fn next(&self) -> Source {
        Source::ALL[(self.index() + 1) % Source::ALL.len()]
    }

    /// The previous source in sidebar order, wrapping around.
    pub fn prev(&self) -> Source {
        let len = Source::ALL.len();
        Source::ALL[(self.index() + len - 1) % len]
    }

    /// Source for a sidebar number key (`1`-`5`), if in range.
    pub fn from_digit(digit: usize) -> Option<Source> {
        digit
            .checked_sub(1)
            .and_then(|i| Source::ALL.get(i).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_slug_round_trips_through_from_str() {
        for source in Source::ALL {
            assert_eq!(Source::from_str(source.slug()), Ok(source));
            assert_eq!(source.to_string(), source.slug());
        }
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        assert!(Source::from_str("all").is_err());
        assert!(Source::from_str("twitter").is_err());
    }

    #[test]
    fn test_cycling_covers_every_source() {
        let mut current = Source::Reddit;
        for _ in 0..Source::ALL.len() {
            current = current.next();
        }
        assert_eq!(current, Source::Reddit);
        assert_eq!(Source::Reddit.prev(), Source::Paper);
    }

    #[test]
    fn test_digit_selection() {
        assert_eq!(Source::from_digit(1), Some(Source::Reddit));
        assert_eq!(Source::from_digit(5), Some(Source::Paper));
        assert_eq!(Source::from_digit(0), None);
        assert_eq!(Source::from_digit(6), None);
    }
}
