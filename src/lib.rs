//! Data layer for the FakeNews detection dashboard.
//!
//! The backend exposes four read-only endpoints (`/get_posts`, `/get_trends`,
//! `/get_ai_trends`, `/get_filters`). Every fetch in this crate follows the
//! same contract: attempt the request, and on any transport failure, timeout,
//! or non-2xx status substitute a fixed built-in fallback value. Nothing in
//! the data layer surfaces an error to the presentation side; the dashboard
//! always has something to render.

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod metrics;
pub mod models;
pub mod query;

pub use client::ApiClient;
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use models::{AiTrends, CombinedTrends, DatasetTrends, FiltersData, NewsPost, Prediction};
pub use query::{build_posts_query, FilterState, LabelFilter, PostsQuery, RequestSequence};
