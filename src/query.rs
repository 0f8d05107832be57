//! Filter/pagination state and the query parameters built from it.
//!
//! The UI works with an `"all"` sentinel for the platform and region selects
//! and a `real`/`fake` label select; the backend expects those translated
//! (sentinel omitted, label as `"true"`/`"false"`) before the request goes
//! out. That translation lives in [`build_posts_query`] so the client never
//! sees raw UI state.

use std::sync::atomic::{AtomicU64, Ordering};

/// Select value meaning "no constraint"; never sent to the backend.
pub const ALL_SENTINEL: &str = "all";

/// Default page size, matching the posts table.
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Ground-truth label filter as presented in the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelFilter {
    #[default]
    All,
    Real,
    Fake,
}

impl LabelFilter {
    /// Backend encoding: the label query parameter is the stringified
    /// ground-truth boolean, not the UI word.
    pub fn backend_value(self) -> Option<&'static str> {
        match self {
            LabelFilter::All => None,
            LabelFilter::Real => Some("true"),
            LabelFilter::Fake => Some("false"),
        }
    }
}

/// UI-owned filter and pagination state for the posts table.
///
/// Changing any filter other than the free-text search resets the page to 1,
/// so a narrower result set never leaves the view on an out-of-range page.
/// Typing search text alone does not reset; submitting the search does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub platform: String,
    pub region: String,
    pub label: LabelFilter,
    /// 1-indexed.
    pub page: u32,
    pub limit: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            platform: ALL_SENTINEL.to_string(),
            region: ALL_SENTINEL.to_string(),
            label: LabelFilter::All,
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl FilterState {
    pub fn with_limit(limit: u32) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    pub fn set_platform(&mut self, platform: impl Into<String>) {
        self.platform = platform.into();
        self.page = 1;
    }

    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = region.into();
        self.page = 1;
    }

    pub fn set_label(&mut self, label: LabelFilter) {
        self.label = label;
        self.page = 1;
    }

    /// Stores the search text without touching the page; pagination only
    /// resets once the search is submitted.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn submit_search(&mut self) {
        self.page = 1;
    }

    pub fn next_page(&mut self) {
        self.page += 1;
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Heuristic: a full page means more results may exist. The backend does
    /// not report a total count.
    pub fn has_next_page(&self, returned: usize) -> bool {
        returned as u64 >= u64::from(self.limit)
    }
}

/// Query parameters for `GET /get_posts`. Absent fields are omitted from the
/// request entirely, never sent as empty strings or the `"all"` sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostsQuery {
    pub platform: Option<String>,
    pub region: Option<String>,
    /// Backend encoding: `"true"` or `"false"`.
    pub label: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PostsQuery {
    /// Key/value pairs for the request, present fields only.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(platform) = &self.platform {
            pairs.push(("platform", platform.clone()));
        }
        if let Some(region) = &self.region {
            pairs.push(("region", region.clone()));
        }
        if let Some(label) = &self.label {
            pairs.push(("label", label.clone()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Maps UI filter state to backend query parameters.
///
/// The `"all"` sentinel (and an empty select value) means no constraint and
/// is omitted; the label is translated to its `"true"`/`"false"` encoding;
/// search text is trimmed and omitted when blank. Page and limit are always
/// included while paging is active.
pub fn build_posts_query(state: &FilterState) -> PostsQuery {
    let select_value = |value: &str| {
        if value.is_empty() || value == ALL_SENTINEL {
            None
        } else {
            Some(value.to_string())
        }
    };

    let search = state.search.trim();

    PostsQuery {
        platform: select_value(&state.platform),
        region: select_value(&state.region),
        label: state.label.backend_value().map(str::to_string),
        search: (!search.is_empty()).then(|| search.to_string()),
        page: Some(state.page),
        limit: Some(state.limit),
    }
}

/// Monotonic sequence tokens for suppressing stale fetch responses.
///
/// In-flight requests are not cancelled when a newer triggering event
/// supersedes them; without tokening, the last response to arrive would win
/// and could overwrite newer view state with older results. The view tags
/// each fetch with [`begin`](Self::begin) and discards any completion whose
/// token is no longer [`is_current`](Self::is_current).
#[derive(Debug, Default)]
pub struct RequestSequence {
    issued: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next token; the returned value is now the latest.
    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` is still the most recently issued.
    pub fn is_current(&self, token: u64) -> bool {
        self.issued.load(Ordering::SeqCst) == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sentinel_and_blank_search_are_omitted() {
        let mut state = FilterState::default();
        state.set_label(LabelFilter::Real);
        state.set_search("  ");

        let query = build_posts_query(&state);
        assert_eq!(query.platform, None);
        assert_eq!(query.region, None);
        assert_eq!(query.label, Some("true".to_string()));
        assert_eq!(query.search, None);

        let pairs = query.to_pairs();
        assert!(pairs.iter().any(|(k, v)| *k == "label" && v == "true"));
        assert!(pairs.iter().all(|(k, _)| *k != "platform" && *k != "search"));
    }

    #[test]
    fn label_filter_translates_to_backend_booleans() {
        assert_eq!(LabelFilter::All.backend_value(), None);
        assert_eq!(LabelFilter::Real.backend_value(), Some("true"));
        assert_eq!(LabelFilter::Fake.backend_value(), Some("false"));
    }

    #[test]
    fn search_is_trimmed_before_inclusion() {
        let mut state = FilterState::default();
        state.set_search("  modi video  ");
        let query = build_posts_query(&state);
        assert_eq!(query.search, Some("modi video".to_string()));
    }

    #[test]
    fn selected_filters_are_forwarded() {
        let mut state = FilterState::default();
        state.set_platform("Twitter");
        state.set_region("National");
        state.set_label(LabelFilter::Fake);

        let query = build_posts_query(&state);
        assert_eq!(query.platform, Some("Twitter".to_string()));
        assert_eq!(query.region, Some("National".to_string()));
        assert_eq!(query.label, Some("false".to_string()));
        assert_eq!(query.page, Some(1));
        assert_eq!(query.limit, Some(DEFAULT_PAGE_LIMIT));
    }

    #[test]
    fn changing_filters_resets_page_but_typing_search_does_not() {
        let mut state = FilterState::default();
        state.set_platform("Twitter");
        state.page = 3;

        state.set_search("vaccine");
        assert_eq!(state.page, 3);

        state.set_platform(ALL_SENTINEL);
        assert_eq!(state.page, 1);

        state.page = 5;
        state.set_region("Local");
        assert_eq!(state.page, 1);

        state.page = 2;
        state.set_label(LabelFilter::All);
        assert_eq!(state.page, 1);

        state.page = 4;
        state.submit_search();
        assert_eq!(state.page, 1);
    }

    #[test]
    fn pagination_floors_at_page_one() {
        let mut state = FilterState::default();
        state.prev_page();
        assert_eq!(state.page, 1);
        state.next_page();
        state.next_page();
        assert_eq!(state.page, 3);
        state.prev_page();
        assert_eq!(state.page, 2);
    }

    #[test]
    fn full_page_implies_possible_next_page() {
        let state = FilterState::with_limit(10);
        assert!(state.has_next_page(10));
        assert!(!state.has_next_page(7));
        assert!(!state.has_next_page(0));
    }

    #[test]
    fn page_and_limit_pairs_are_stringified() {
        let mut state = FilterState::with_limit(25);
        state.page = 3;
        let pairs = build_posts_query(&state).to_pairs();
        assert!(pairs.contains(&("page", "3".to_string())));
        assert!(pairs.contains(&("limit", "25".to_string())));
    }

    #[test]
    fn stale_tokens_are_not_current() {
        let sequence = RequestSequence::new();
        let first = sequence.begin();
        assert!(sequence.is_current(first));

        let second = sequence.begin();
        assert!(!sequence.is_current(first));
        assert!(sequence.is_current(second));
    }
}
