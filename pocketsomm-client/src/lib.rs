//! Type-safe Rust client for the PocketSomm wine-recommendation API.
//!
//! This crate wraps the backend's HTTP endpoints in typed operations and
//! absorbs the differences between backend versions, which disagree on
//! whether payloads arrive bare or wrapped in a response envelope.
//!
//! # Features
//!
//! - User taste profiles, survey submission and aggregate insights
//! - Favorites from label photos, wine names or resolved profiles
//! - Tasting log with ratings and notes
//! - Catalogue detail, similarity lookups and free-text search
//! - Wine-menu PDF recommendations
//! - Tolerant payload decoding across backend versions
//!
//! # Example
//!
//! ```no_run
//! use pocketsomm_client::{Client, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client against a local backend
//! let client = Client::new(Config::new("http://127.0.0.1:8000"))?;
//!
//! // Fetch a taste profile
//! let profile = client.fetch_user_profile("spencer").await?;
//! println!("user: {}", profile.user_id);
//!
//! // Search the catalogue
//! for hit in client.search_wines("barolo").await? {
//!     println!("{}  {}", hit.wine_id, hit.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! [`Config::from_env`] reads the base URL from `POCKETSOMM_API_URL` and
//! falls back to a backend running locally. The default timeouts are
//! generous because photo recognition and menu parsing run model
//! inference server-side; both can be overridden per [`Config`].
//!
//! # Error Handling
//!
//! All operations return `Result<T, ApiError>`. Display text is safe to
//! show to an end user; raw bodies and parser positions stay in fields
//! and `source()`:
//!
//! ```no_run
//! # use pocketsomm_client::{ApiError, Client, Config};
//! # async fn example() -> Result<(), ApiError> {
//! # let client = Client::new(Config::new("http://127.0.0.1:8000"))?;
//! match client.fetch_wine_detail("barolo_riserva").await {
//!     Ok(wine) => println!("{}", wine.display_name()),
//!     Err(ApiError::Server { message, .. }) => println!("backend says: {message}"),
//!     Err(e) => println!("error: {e}"),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod envelope;
mod error;
mod favorites;
mod health;
mod menu;
mod profile;
mod tastings;
mod types;
mod wines;

// Re-export the main types
pub use client::Client;
pub use config::{BASE_URL_ENV, Config, DEFAULT_BASE_URL, READ_TIMEOUT_ENV, TIMEOUT_ENV};
pub use envelope::{Envelope, PayloadShape, decode_payload};
pub use error::{ApiError, Result};
pub use types::{
    FavoriteEntry, Insights, MenuWine, PhotoFavorite, PrefLevel, SearchResult, SimilarWine,
    SurveyAnswers, Tasting, UserProfile, WineDetail, WineProfile,
};
