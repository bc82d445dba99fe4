//! Query filtering and section partitioning.
//!
//! Everything here is a pure function of (collection, query): no caching,
//! no interior state, safe to recompute on every keystroke.

use std::ops::Range;

use reelview_model::Movie;

/// Movies beyond this position in the filtered collection are never shown.
pub const DISPLAY_LIMIT: usize = 60;

/// The three display groupings, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    TrendingNow,
    CriticsPicks,
    Classics,
}

impl Section {
    pub const ALL: [Section; 3] =
        [Section::TrendingNow, Section::CriticsPicks, Section::Classics];

    pub const fn title(self) -> &'static str {
        match self {
            Section::TrendingNow => "Trending Now",
            Section::CriticsPicks => "Critics' Picks",
            Section::Classics => "Classics",
        }
    }

    /// Half-open index window over the filtered collection.
    pub const fn range(self) -> Range<usize> {
        match self {
            Section::TrendingNow => 0..18,
            Section::CriticsPicks => 18..36,
            Section::Classics => 36..DISPLAY_LIMIT,
        }
    }

    /// The part of `items` that falls inside this section, possibly empty.
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        let Range { start, end } = self.range();
        let len = items.len();
        &items[start.min(len)..end.min(len)]
    }
}

/// Fields a query is matched against.
pub trait Searchable {
    fn search_title(&self) -> &str;
    fn search_year(&self) -> Option<&str>;
}

impl Searchable for Movie {
    fn search_title(&self) -> &str {
        self.title()
    }

    fn search_year(&self) -> Option<&str> {
        self.year()
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn search_title(&self) -> &str {
        (**self).search_title()
    }

    fn search_year(&self) -> Option<&str> {
        (**self).search_year()
    }
}

/// Trim and lower-case a raw query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Case-insensitive substring match on title or year.
///
/// `normalized` must already have gone through [`normalize_query`]. An
/// empty query matches everything.
pub fn matches<T: Searchable + ?Sized>(item: &T, normalized: &str) -> bool {
    if normalized.is_empty() {
        return true;
    }

    item.search_title().to_lowercase().contains(normalized)
        || item
            .search_year()
            .unwrap_or("")
            .to_lowercase()
            .contains(normalized)
}

/// Stable filter of `items` by a raw query.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let normalized = normalize_query(query);
    items
        .iter()
        .filter(|item| matches(*item, &normalized))
        .collect()
}

/// The three section windows over one filtered collection.
#[derive(Debug, PartialEq, Eq)]
pub struct Sections<'a, T> {
    pub trending_now: &'a [T],
    pub critics_picks: &'a [T],
    pub classics: &'a [T],
}

impl<T> Clone for Sections<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Sections<'_, T> {}

impl<'a, T> Sections<'a, T> {
    pub fn partition(filtered: &'a [T]) -> Self {
        Self {
            trending_now: Section::TrendingNow.slice(filtered),
            critics_picks: Section::CriticsPicks.slice(filtered),
            classics: Section::Classics.slice(filtered),
        }
    }

    pub fn get(&self, section: Section) -> &'a [T] {
        match section {
            Section::TrendingNow => self.trending_now,
            Section::CriticsPicks => self.critics_picks,
            Section::Classics => self.classics,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, &'a [T])> + use<'a, T> {
        let sections = *self;
        Section::ALL
            .into_iter()
            .map(move |section| (section, sections.get(section)))
    }

    /// Number of items shown across all sections.
    pub fn displayed_len(&self) -> usize {
        self.trending_now.len() + self.critics_picks.len() + self.classics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.displayed_len() == 0
    }
}

/// Filtered collection derived from a catalog and a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView<'a> {
    matches: Vec<&'a Movie>,
}

impl<'a> CatalogView<'a> {
    pub fn derive(movies: &'a [Movie], query: &str) -> Self {
        Self {
            matches: filter(movies, query),
        }
    }

    /// Every matching movie in catalog order, including those past
    /// [`DISPLAY_LIMIT`].
    pub fn matches(&self) -> &[&'a Movie] {
        &self.matches
    }

    pub fn sections(&self) -> Sections<'_, &'a Movie> {
        Sections::partition(&self.matches)
    }
}
