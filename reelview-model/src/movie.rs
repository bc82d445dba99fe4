//! The movie entity as delivered by the catalog backend.

/// Poster shown for movies whose record carries no poster URL.
pub const DEFAULT_POSTER_URL: &str = "https://images.unsplash.com/photo-1517602302552-471fe67acf66?q=80&w=1200&auto=format&fit=crop";

/// A single catalog entry.
///
/// Every attribute is optional on the wire. Accessors fold absent values
/// into the defaults the browser displays and searches against, so callers
/// never branch on `None` for the common cases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movie {
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::wire::lenient_string",
            skip_serializing_if = "Option::is_none"
        )
    )]
    title: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::wire::lenient_string",
            skip_serializing_if = "Option::is_none"
        )
    )]
    year: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::wire::lenient_string",
            skip_serializing_if = "Option::is_none"
        )
    )]
    poster: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::wire::lenient_string",
            skip_serializing_if = "Option::is_none"
        )
    )]
    link: Option<String>,
}

impl Movie {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Display title; empty when the record has none.
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Release year as sent by the backend, if any.
    pub fn year(&self) -> Option<&str> {
        non_empty(self.year.as_deref())
    }

    /// Poster to render, falling back to [`DEFAULT_POSTER_URL`].
    pub fn poster_url(&self) -> &str {
        non_empty(self.poster.as_deref()).unwrap_or(DEFAULT_POSTER_URL)
    }

    /// Whether the backend supplied its own poster.
    pub fn has_poster(&self) -> bool {
        non_empty(self.poster.as_deref()).is_some()
    }

    /// Outbound link for the movie, if any.
    pub fn link(&self) -> Option<&str> {
        non_empty(self.link.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
