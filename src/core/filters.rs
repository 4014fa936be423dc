//! # Filter/Sort/Paginate Engine
//!
//! The one stateful core of podview. [`FilterState`] holds the current
//! search/genre/sort/page selections; [`FilterState::visible_page`] is the
//! pure derivation that turns the immutable catalog into the visible page
//! plus pagination metadata.
//!
//! ```text
//! catalog ──▶ search filter ──▶ genre filter ──▶ sort ──▶ page slice
//! ```
//!
//! Mutation happens only through the setters; the derivation is
//! side-effect-free and idempotent, so it can run on every read.

use std::cmp::Ordering;

use crate::api::ShowSummary;

/// Viewports at or below this width always page 10 cards at a time.
pub const SMALL_VIEWPORT_MAX_PX: u32 = 1024;
/// Nominal card width used to derive the column count on wide viewports.
pub const CARD_WIDTH_PX: u32 = 260;
/// Rows of cards shown per page on wide viewports.
pub const GRID_ROWS: u32 = 2;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Sort orderings available to the user, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// No reordering; preserves the catalog's incoming order.
    Default,
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Default,
        SortKey::DateDesc,
        SortKey::DateAsc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::DateDesc => "date-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
        }
    }

    /// Label shown in the sort control.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::DateDesc => "Newest",
            SortKey::DateAsc => "Oldest",
            SortKey::TitleAsc => "Title A → Z",
            SortKey::TitleDesc => "Title Z → A",
        }
    }

    /// Parse a stored key. Unrecognized keys are treated as [`SortKey::Default`].
    pub fn parse(key: &str) -> SortKey {
        match key {
            "date-desc" => SortKey::DateDesc,
            "date-asc" => SortKey::DateAsc,
            "title-asc" => SortKey::TitleAsc,
            "title-desc" => SortKey::TitleDesc,
            _ => SortKey::Default,
        }
    }
}

/// Genre filter selection: everything, or one genre id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreSelector {
    All,
    Id(u32),
}

impl GenreSelector {
    /// Parse a stored selector ("all" or a numeric id). Anything else
    /// degrades to [`GenreSelector::All`].
    pub fn parse(value: &str) -> GenreSelector {
        if value == "all" {
            return GenreSelector::All;
        }
        value.parse().map(GenreSelector::Id).unwrap_or(GenreSelector::All)
    }

    pub fn as_string(self) -> String {
        match self {
            GenreSelector::All => "all".to_string(),
            GenreSelector::Id(id) => id.to_string(),
        }
    }
}

/// One derived page of the catalog plus pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogPage {
    pub shows: Vec<ShowSummary>,
    /// Effective page, already clamped into `[1, total_pages]`.
    pub page: u32,
    pub total_pages: u32,
    /// Count of shows surviving the filters (before paging).
    pub total_count: usize,
}

/// Current filter/sort/page selections. Mutated only through the setters;
/// everything else derives.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    search: String,
    genre: GenreSelector,
    sort_key: SortKey,
    page: u32,
    page_size: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterState {
    /// Hard-coded defaults: empty search, all genres, newest first, page 1.
    pub fn new() -> Self {
        Self {
            search: String::new(),
            genre: GenreSelector::All,
            sort_key: SortKey::DateDesc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Rebuild from persisted selections. Page and page size always start
    /// from their session defaults; they are never persisted.
    pub fn restore(search: String, genre: GenreSelector, sort_key: SortKey) -> Self {
        Self {
            search,
            genre,
            sort_key,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn genre(&self) -> GenreSelector {
        self.genre
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Replace the search text. Empty means "no filter"; no validation.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn set_genre(&mut self, genre: GenreSelector) {
        self.genre = genre;
    }

    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
    }

    /// Request a page. Out-of-range requests are clamped at derivation
    /// time rather than rejected.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.max(1);
    }

    /// Re-derive the page size from the viewport width. May shift the
    /// effective page on the next derivation.
    pub fn recompute_page_size(&mut self, viewport_px: u32) {
        self.page_size = page_size_for_width(viewport_px);
    }

    /// Back to the hard-coded defaults (the header-logo reset). Page size
    /// is viewport-derived and survives.
    pub fn reset(&mut self) {
        self.search.clear();
        self.genre = GenreSelector::All;
        self.sort_key = SortKey::DateDesc;
        self.page = 1;
    }

    /// The derivation: filter → sort → paginate over the immutable catalog.
    pub fn visible_page(&self, catalog: &[ShowSummary]) -> CatalogPage {
        let mut filtered: Vec<&ShowSummary> = catalog.iter().collect();

        // Search filtering. The whitespace check decides whether to filter
        // at all, but the needle keeps its original spacing.
        if !self.search.trim().is_empty() {
            let needle = self.search.to_lowercase();
            filtered.retain(|s| s.title.to_lowercase().contains(&needle));
        }

        if let GenreSelector::Id(id) = self.genre {
            filtered.retain(|s| s.genres.contains(&id));
        }

        match self.sort_key {
            SortKey::TitleAsc => filtered.sort_by(|a, b| title_cmp(&a.title, &b.title)),
            SortKey::TitleDesc => filtered.sort_by(|a, b| title_cmp(&b.title, &a.title)),
            SortKey::DateAsc => filtered.sort_by_key(|s| s.updated_at()),
            SortKey::DateDesc => filtered.sort_by_key(|s| std::cmp::Reverse(s.updated_at())),
            SortKey::Default => {}
        }

        let total_count = filtered.len();
        let total_pages = (total_count as u32).div_ceil(self.page_size).max(1);

        // An overflowing page resets to 1, as does any page other than 1
        // while a search is active (untrimmed: a whitespace search still
        // pins the page even though it filters nothing).
        let page = if self.page > total_pages || (!self.search.is_empty() && self.page != 1) {
            1
        } else {
            self.page
        };

        let start = ((page - 1) * self.page_size) as usize;
        let end = (start + self.page_size as usize).min(total_count);
        let shows = filtered[start..end].iter().map(|s| (*s).clone()).collect();

        CatalogPage {
            shows,
            page,
            total_pages,
            total_count,
        }
    }
}

/// Case-insensitive title ordering with a raw tiebreak, standing in for
/// the browser's locale compare.
fn title_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Page size as a function of viewport width: small screens get a fixed
/// 10, wider ones fit as many 260px columns as possible, two rows deep.
/// The column count is floored at 1 so the page size can never reach 0.
pub fn page_size_for_width(viewport_px: u32) -> u32 {
    if viewport_px <= SMALL_VIEWPORT_MAX_PX {
        return DEFAULT_PAGE_SIZE;
    }
    let columns = (viewport_px / CARD_WIDTH_PX).max(1);
    columns * GRID_ROWS
}
