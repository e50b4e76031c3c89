//! Typed client for the AniLiberty anime API
//!
//! Every endpoint maps to one async method on a handle borrowed from the
//! client (`client.catalog()`, `client.releases()`, ...). Calls never return
//! `Err`: each one resolves to an [`ApiResponse`] envelope that is either a
//! success carrying the decoded body or a failure carrying an [`ApiError`].
//! Failures that never reached the server (connection refused, timeout,
//! undecodable body) report status `0`.
//!
//! # Quick Start
//!
//! ```no_run
//! use aniliberty_sdk::{AniLiberty, CatalogQuery, ReleaseType};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AniLiberty::new()?;
//!
//! let query = CatalogQuery::builder()
//!     .types([ReleaseType::Tv, ReleaseType::Movie])
//!     .page(2)
//!     .build();
//!
//! match client.catalog().releases(&query).await.into_result() {
//!     Ok(Some(page)) => {
//!         for release in &page.data {
//!             println!("{} ({})", release.release.name.main, release.release.year);
//!         }
//!     }
//!     Ok(None) => println!("empty response"),
//!     Err(e) => eprintln!("catalog request failed: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication
//!
//! Signing in stores the returned bearer token on the client; it is sent with
//! every following call until [`Auth::logout`] or
//! [`AniLiberty::clear_access_token`].
//!
//! ```no_run
//! use aniliberty_sdk::{AniLiberty, LoginRequest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AniLiberty::new()?;
//!
//! let response = client
//!     .auth()
//!     .login(&LoginRequest::new("user@example.com", "hunter2"))
//!     .await;
//!
//! if response.is_success() {
//!     let profile = client.profile().get().await;
//!     println!("{:?}", profile.data());
//! }
//!
//! let _ = client.auth().logout().await;
//! assert!(!client.is_authenticated());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```no_run
//! use aniliberty_sdk::AniLiberty;
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AniLiberty::builder()
//!     .api_base("https://aniliberty.top/api")
//!     .timeout(Duration::from_secs(10))
//!     .header("X-Client", "my-app")
//!     .build()?;
//!
//! // Or from ANILIBERTY_API_BASE / ANILIBERTY_TIMEOUT_MS / ANILIBERTY_ACCESS_TOKEN
//! let _from_env = AniLiberty::from_env()?;
//! # Ok(())
//! # }
//! ```

mod api;
mod client;
mod error;
mod query;
mod response;
pub mod types;

pub use api::{
    Ads, App, Auth, Catalog, Collections, Favorites, Franchises, Genres, Media, Otp, Profile,
    Releases, Schedule, Teams, Torrents, Views,
};
pub use client::{AniLiberty, AniLibertyBuilder, ApiVersion};
pub use error::{AniLibertyError, ApiError};
pub use query::{QueryParams, QueryValue, ToQuery};
pub use response::ApiResponse;

pub use types::accounts::*;
pub use types::ads::*;
pub use types::anime::*;
pub use types::app::*;
pub use types::common::*;
pub use types::media::*;
pub use types::teams::*;
pub use types::torrents::*;
