//! Client for the Hashnode GraphQL API, scoped to one publication.
//!
//! ```no_run
//! # async fn run() -> Result<(), folio_hashnode::HashnodeError> {
//! let client = folio_hashnode::HashnodeClient::new(None, "64a1f0c2e4b0a1b2c3d4e5f6")?;
//! for post in client.posts(5).await? {
//!     println!("{} ({})", post.title, post.slug);
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
pub mod model;
pub mod query;

pub use client::{DEFAULT_ENDPOINT, HashnodeClient, HashnodeConfig};
pub use error::{HashnodeError, Result};
pub use model::{CoverImage, Post, PostContent, Tag, TagRef};
