//! Endpoint handles
//!
//! Each handle borrows the client and maps one API endpoint to one method.
//! Handles are obtained from accessors on [`AniLiberty`](crate::AniLiberty),
//! e.g. `client.catalog().releases(&query)`.

mod accounts;
mod ads;
mod anime;
mod app;
mod media;
mod teams;

pub use accounts::{Auth, Collections, Favorites, Otp, Profile, Views};
pub use ads::Ads;
pub use anime::{Catalog, Franchises, Genres, Releases, Schedule, Torrents};
pub use app::App;
pub use media::Media;
pub use teams::Teams;
