//! Anime endpoints: catalog, franchises, genres, releases, schedule, torrents

use crate::client::AniLiberty;
use crate::query::{QueryParams, ToQuery};
use crate::response::ApiResponse;
use crate::types::accounts::UserView;
use crate::types::anime::{
    CatalogQuery, CatalogReferenceGenre, EpisodeWithRelease, Franchise, FranchiseWithReleases,
    Genre, Release, ReleaseFull, ReleaseInSchedule, ReleaseLatest, ReleaseMember,
    ReleaseWithGenres, ReferenceAgeRating, ReferenceProductionStatus, ReferencePublishStatus,
    ReferenceSeason, ReferenceSorting, ReferenceType, ScheduleNowResponse,
};
use crate::types::common::{IncludeExclude, PageParams, Paginated};
use crate::types::torrents::{TorrentWithMembers, TorrentWithRelease};
use reqwest::Method;
use std::fmt::Display;

// ============================================================================
// Catalog
// ============================================================================

const CATALOG: &str = "/anime/catalog";

/// Catalog browsing
///
/// The reference lists return the values accepted by the corresponding
/// [`CatalogQuery`] filters.
pub struct Catalog<'a> {
    pub(crate) client: &'a AniLiberty,
}

impl<'a> Catalog<'a> {
    pub async fn age_ratings(&self) -> ApiResponse<Vec<ReferenceAgeRating>> {
        self.client
            .get(&format!("{}/references/age-ratings", CATALOG), None)
            .await
    }

    pub async fn genres(&self) -> ApiResponse<Vec<CatalogReferenceGenre>> {
        self.client
            .get(&format!("{}/references/genres", CATALOG), None)
            .await
    }

    pub async fn production_statuses(&self) -> ApiResponse<Vec<ReferenceProductionStatus>> {
        self.client
            .get(&format!("{}/references/production-statuses", CATALOG), None)
            .await
    }

    pub async fn publish_statuses(&self) -> ApiResponse<Vec<ReferencePublishStatus>> {
        self.client
            .get(&format!("{}/references/publish-statuses", CATALOG), None)
            .await
    }

    pub async fn seasons(&self) -> ApiResponse<Vec<ReferenceSeason>> {
        self.client
            .get(&format!("{}/references/seasons", CATALOG), None)
            .await
    }

    pub async fn sorting(&self) -> ApiResponse<Vec<ReferenceSorting>> {
        self.client
            .get(&format!("{}/references/sorting", CATALOG), None)
            .await
    }

    pub async fn types(&self) -> ApiResponse<Vec<ReferenceType>> {
        self.client
            .get(&format!("{}/references/types", CATALOG), None)
            .await
    }

    pub async fn years(&self) -> ApiResponse<Vec<i32>> {
        self.client
            .get(&format!("{}/references/years", CATALOG), None)
            .await
    }

    /// Browse the catalog with filters sent as `f[...]` query parameters
    pub async fn releases(&self, query: &CatalogQuery) -> ApiResponse<Paginated<ReleaseWithGenres>> {
        self.client
            .get(&format!("{}/releases", CATALOG), Some(query.to_query()))
            .await
    }

    /// Browse the catalog with filters sent as a JSON body
    pub async fn search_releases(
        &self,
        query: &CatalogQuery,
    ) -> ApiResponse<Paginated<ReleaseWithGenres>> {
        self.client
            .request(
                Method::POST,
                &format!("{}/releases", CATALOG),
                Some(query),
                None,
            )
            .await
    }
}

// ============================================================================
// Franchises
// ============================================================================

pub struct Franchises<'a> {
    pub(crate) client: &'a AniLiberty,
}

impl<'a> Franchises<'a> {
    pub async fn list(&self) -> ApiResponse<Vec<Franchise>> {
        self.client.get("/anime/franchises", None).await
    }

    /// A franchise with its releases
    pub async fn get(
        &self,
        franchise_id: &str,
        fields: &IncludeExclude,
    ) -> ApiResponse<FranchiseWithReleases> {
        self.client
            .get(
                &format!("/anime/franchises/{}", franchise_id),
                Some(fields.to_query()),
            )
            .await
    }

    pub async fn random(&self, limit: Option<u32>) -> ApiResponse<Vec<Franchise>> {
        let query = QueryParams::new().with_opt("limit", limit);
        self.client.get("/anime/franchises/random", Some(query)).await
    }

    /// Franchises a release belongs to
    pub async fn by_release(
        &self,
        release_id: impl Display,
    ) -> ApiResponse<Vec<FranchiseWithReleases>> {
        self.client
            .get(&format!("/anime/franchises/release/{}", release_id), None)
            .await
    }
}

// ============================================================================
// Genres
// ============================================================================

pub struct Genres<'a> {
    pub(crate) client: &'a AniLiberty,
}

impl<'a> Genres<'a> {
    pub async fn list(&self) -> ApiResponse<Vec<Genre>> {
        self.client.get("/anime/genres", None).await
    }

    pub async fn get(&self, genre_id: i64) -> ApiResponse<Genre> {
        self.client
            .get(&format!("/anime/genres/{}", genre_id), None)
            .await
    }

    pub async fn random(&self, limit: Option<u32>) -> ApiResponse<Vec<Genre>> {
        let query = QueryParams::new().with_opt("limit", limit);
        self.client.get("/anime/genres/random", Some(query)).await
    }

    /// Releases tagged with a genre
    pub async fn releases(
        &self,
        genre_id: i64,
        page: &PageParams,
        fields: &IncludeExclude,
    ) -> ApiResponse<Paginated<Release>> {
        let mut query = page.to_query();
        query.extend(fields.to_query());
        self.client
            .get(&format!("/anime/genres/{}/releases", genre_id), Some(query))
            .await
    }
}

// ============================================================================
// Releases
// ============================================================================

/// Releases, their members and episodes
pub struct Releases<'a> {
    pub(crate) client: &'a AniLiberty,
}

impl<'a> Releases<'a> {
    /// Most recently updated releases
    pub async fn latest(&self, limit: Option<u32>) -> ApiResponse<Vec<ReleaseLatest>> {
        let query = QueryParams::new().with_opt("limit", limit);
        self.client.get("/anime/releases/latest", Some(query)).await
    }

    pub async fn random(&self, limit: Option<u32>) -> ApiResponse<Vec<Release>> {
        let query = QueryParams::new().with_opt("limit", limit);
        self.client.get("/anime/releases/random", Some(query)).await
    }

    /// Recommendations, optionally based on a release
    pub async fn recommended(
        &self,
        limit: Option<u32>,
        release_id: Option<i64>,
    ) -> ApiResponse<Vec<Release>> {
        let query = QueryParams::new()
            .with_opt("limit", limit)
            .with_opt("release_id", release_id);
        self.client
            .get("/anime/releases/recommended", Some(query))
            .await
    }

    /// A release by numeric id or alias, with genres, members, episodes and torrents
    pub async fn get(
        &self,
        id_or_alias: impl Display,
        fields: &IncludeExclude,
    ) -> ApiResponse<ReleaseFull> {
        self.client
            .get(
                &format!("/anime/releases/{}", id_or_alias),
                Some(fields.to_query()),
            )
            .await
    }

    pub async fn members(&self, id_or_alias: impl Display) -> ApiResponse<Vec<ReleaseMember>> {
        self.client
            .get(&format!("/anime/releases/{}/members", id_or_alias), None)
            .await
    }

    /// An episode with its release
    pub async fn episode(
        &self,
        episode_id: &str,
        fields: &IncludeExclude,
    ) -> ApiResponse<EpisodeWithRelease> {
        self.client
            .get(
                &format!("/anime/releases/episodes/{}", episode_id),
                Some(fields.to_query()),
            )
            .await
    }

    /// The caller's saved position in an episode (requires a token)
    pub async fn episode_timecode(&self, episode_id: &str) -> ApiResponse<UserView> {
        self.client
            .get(
                &format!("/anime/releases/episodes/{}/timecode", episode_id),
                None,
            )
            .await
    }
}

// ============================================================================
// Schedule
// ============================================================================

pub struct Schedule<'a> {
    pub(crate) client: &'a AniLiberty,
}

impl<'a> Schedule<'a> {
    /// Releases airing yesterday, today and tomorrow
    pub async fn now(&self) -> ApiResponse<ScheduleNowResponse> {
        self.client.get("/anime/schedule/now", None).await
    }

    /// Releases airing this week
    pub async fn week(&self) -> ApiResponse<Vec<ReleaseInSchedule>> {
        self.client.get("/anime/schedule/week", None).await
    }
}

// ============================================================================
// Torrents
// ============================================================================

/// Torrents and their feeds
///
/// `download` and the RSS feeds return raw bytes.
pub struct Torrents<'a> {
    pub(crate) client: &'a AniLiberty,
}

impl<'a> Torrents<'a> {
    pub async fn list(&self, page: &PageParams) -> ApiResponse<Paginated<TorrentWithRelease>> {
        self.client
            .get("/anime/torrents", Some(page.to_query()))
            .await
    }

    /// A torrent by info hash or numeric id
    pub async fn get(&self, hash_or_id: impl Display) -> ApiResponse<TorrentWithRelease> {
        self.client
            .get(&format!("/anime/torrents/{}", hash_or_id), None)
            .await
    }

    /// The `.torrent` file
    pub async fn download(&self, hash_or_id: impl Display) -> ApiResponse<Vec<u8>> {
        self.client
            .request_bytes(
                Method::GET,
                &format!("/anime/torrents/{}/file", hash_or_id),
                None,
            )
            .await
    }

    pub async fn by_release(&self, release_id: i64) -> ApiResponse<Vec<TorrentWithMembers>> {
        self.client
            .get(&format!("/anime/torrents/release/{}", release_id), None)
            .await
    }

    /// RSS feed of recent torrents
    pub async fn rss(&self, limit: Option<u32>) -> ApiResponse<Vec<u8>> {
        let query = QueryParams::new().with_opt("limit", limit);
        self.client
            .request_bytes(Method::GET, "/anime/torrents/rss", Some(query))
            .await
    }

    /// RSS feed of one release's torrents
    pub async fn release_rss(&self, release_id: i64) -> ApiResponse<Vec<u8>> {
        self.client
            .request_bytes(
                Method::GET,
                &format!("/anime/torrents/rss/release/{}", release_id),
                None,
            )
            .await
    }
}
