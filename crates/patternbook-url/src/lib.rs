//! Fluent builder for percent-encoded URLs.
//!
//! ```rust
//! use patternbook_url::UrlBuilder;
//!
//! let mut builder = UrlBuilder::new("https://localhost/")?;
//! builder
//!     .append_path("/search")?
//!     .append_query_param("query", Some("unit test"))?
//!     .append_query_param("page", Some("1"))?;
//!
//! assert_eq!(builder.build(), "https://localhost/search?query=unit%20test&page=1");
//! # Ok::<(), patternbook_url::UrlError>(())
//! ```

mod builder;
pub mod encode;
pub mod error;

pub use builder::UrlBuilder;
pub use encode::encode_component;
pub use error::{Result, UrlError};
