//! Anime catalog shapes: releases, episodes, genres, franchises, schedule

use super::common::{ImageWithOptimized, Reference, ReferenceGenre};
use super::torrents::Torrent;
use crate::query::{QueryParams, ToQuery};
use serde::{Deserialize, Serialize};

// ============================================================================
// Enums
// ============================================================================

wire_enum! {
    /// Age rating of a release
    AgeRating {
        R0Plus => "R0_PLUS",
        R6Plus => "R6_PLUS",
        R12Plus => "R12_PLUS",
        R16Plus => "R16_PLUS",
        R18Plus => "R18_PLUS",
    }
}

wire_enum! {
    /// Airing season
    Season {
        Winter => "winter",
        Spring => "spring",
        Summer => "summer",
        Autumn => "autumn",
    }
}

wire_enum! {
    /// Release format
    ReleaseType {
        Tv => "TV",
        Ona => "ONA",
        Web => "WEB",
        Ova => "OVA",
        Oad => "OAD",
        Movie => "MOVIE",
        Dorama => "DORAMA",
        Special => "SPECIAL",
    }
}

wire_enum! {
    /// Role of a team member on a release
    ReleaseMemberRole {
        Poster => "poster",
        Timing => "timing",
        Voicing => "voicing",
        Editing => "editing",
        Decorating => "decorating",
        Translating => "translating",
    }
}

wire_enum! {
    /// Production state filter
    CatalogProductionStatus {
        InProduction => "IS_IN_PRODUCTION",
        NotInProduction => "IS_NOT_IN_PRODUCTION",
    }
}

wire_enum! {
    /// Publishing state filter
    CatalogPublishStatus {
        Ongoing => "IS_ONGOING",
        NotOngoing => "IS_NOT_ONGOING",
    }
}

wire_enum! {
    /// Catalog sort order
    CatalogSorting {
        FreshAtDesc => "FRESH_AT_DESC",
        FreshAtAsc => "FRESH_AT_ASC",
        RatingDesc => "RATING_DESC",
        RatingAsc => "RATING_ASC",
        YearDesc => "YEAR_DESC",
        YearAsc => "YEAR_ASC",
    }
}

// ============================================================================
// Catalog references
// ============================================================================

pub type ReferenceAgeRating = Reference<AgeRating>;
pub type ReferenceProductionStatus = Reference<CatalogProductionStatus>;
pub type ReferencePublishStatus = Reference<CatalogPublishStatus>;
pub type ReferenceSeason = Reference<Season>;
pub type ReferenceSorting = Reference<CatalogSorting>;
pub type ReferenceType = Reference<ReleaseType>;
pub type CatalogReferenceGenre = ReferenceGenre;

// ============================================================================
// Releases
// ============================================================================

/// `{value, description}` pair describing a release type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseTypeInfo {
    pub value: ReleaseType,
    pub description: String,
}

/// Release titles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseName {
    pub main: String,
    pub english: String,
    pub alternative: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseSeasonInfo {
    pub value: Season,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseAgeRatingInfo {
    pub value: AgeRating,
    pub label: String,
    pub is_adult: bool,
    pub description: String,
}

/// Day of week a release is published on (1 = Monday .. 7 = Sunday)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleasePublishDayInfo {
    pub value: u8,
    pub description: String,
}

/// A catalog release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    pub id: i64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub release_type: Option<ReleaseTypeInfo>,
    pub year: i32,
    pub name: ReleaseName,
    pub alias: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<ReleaseSeasonInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<ImageWithOptimized>,
    pub fresh_at: String,
    pub created_at: String,
    pub updated_at: String,
    pub is_ongoing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_rating: Option<ReleaseAgeRatingInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_day: Option<ReleasePublishDayInfo>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<String>,
    pub episodes_total: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_player: Option<String>,
    pub is_in_production: bool,
    pub is_blocked_by_geo: bool,
    pub is_blocked_by_copyrights: bool,
    pub added_in_users_favorites: i64,
    pub average_duration_of_episode: i64,
    pub added_in_planned_collection: i64,
    pub added_in_watched_collection: i64,
    pub added_in_watching_collection: i64,
    pub added_in_postponed_collection: i64,
    pub added_in_abandoned_collection: i64,
}

/// Release with its genres
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseWithGenres {
    #[serde(flatten)]
    pub release: Release,
    pub genres: Vec<Genre>,
}

/// Release with genres and team members
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseWithMembers {
    #[serde(flatten)]
    pub release: ReleaseWithGenres,
    pub members: Vec<ReleaseMember>,
}

/// Release with genres, members and episodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseWithEpisodes {
    #[serde(flatten)]
    pub release: ReleaseWithMembers,
    pub episodes: Vec<Episode>,
}

/// Release with genres, members, episodes and torrents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseWithTorrents {
    #[serde(flatten)]
    pub release: ReleaseWithEpisodes,
    pub torrents: Vec<Torrent>,
}

/// The full release card returned by `/anime/releases/{idOrAlias}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseFull {
    #[serde(flatten)]
    pub release: ReleaseWithTorrents,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsor: Option<Sponsor>,
}

impl ReleaseFull {
    /// The base release fields
    pub fn base(&self) -> &Release {
        &self.release.release.release.release.release
    }

    pub fn genres(&self) -> &[Genre] {
        &self.release.release.release.release.genres
    }

    pub fn members(&self) -> &[ReleaseMember] {
        &self.release.release.release.members
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.release.release.episodes
    }

    pub fn torrents(&self) -> &[Torrent] {
        &self.release.torrents
    }
}

/// Release with its most recent episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseLatest {
    #[serde(flatten)]
    pub release: ReleaseWithGenres,
    pub latest_episode: Episode,
}

/// Release embedded together with its episode list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseWithEpisodeList {
    #[serde(flatten)]
    pub release: Release,
    pub episodes: Vec<Episode>,
}

// ============================================================================
// Members and sponsors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseMemberRoleInfo {
    pub value: ReleaseMemberRole,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseMemberUser {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ImageWithOptimized>,
}

/// A team member credited on a release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseMember {
    pub id: String,
    pub role: ReleaseMemberRoleInfo,
    #[serde(default)]
    pub user: Option<ReleaseMemberUser>,
    pub nickname: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsor {
    pub id: String,
    pub title: String,
    pub description: String,
    pub url_title: String,
    pub url: String,
}

// ============================================================================
// Episodes
// ============================================================================

/// Opening/ending skip range in seconds
///
/// The API sends `null` bounds for episodes without a marked range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeSkip {
    pub start: Option<i64>,
    pub stop: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub ordinal: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending: Option<EpisodeSkip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening: Option<EpisodeSkip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<ImageWithOptimized>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hls_480: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hls_720: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hls_1080: Option<String>,
    pub duration: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rutube_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_id: Option<String>,
    pub updated_at: String,
    pub sort_order: i64,
    pub release_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_english: Option<String>,
}

impl Episode {
    /// The best available HLS stream URL
    pub fn best_stream(&self) -> Option<&str> {
        self.hls_1080
            .as_deref()
            .or(self.hls_720.as_deref())
            .or(self.hls_480.as_deref())
    }
}

/// Episode together with its release and sibling episodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpisodeWithRelease {
    #[serde(flatten)]
    pub episode: Episode,
    pub release: ReleaseWithEpisodeList,
}

// ============================================================================
// Genres and franchises
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageWithOptimized>,
    pub total_releases: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Franchise {
    pub id: String,
    pub name: String,
    pub name_english: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageWithOptimized>,
    pub rating: f64,
    pub last_year: i32,
    pub first_year: i32,
    pub total_releases: i64,
    pub total_episodes: i64,
    pub total_duration: Option<String>,
    pub total_duration_in_seconds: i64,
}

/// Link between a franchise and one of its releases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FranchiseRelease {
    pub id: String,
    pub sort_order: i64,
    pub release_id: i64,
    pub franchise_id: String,
    pub release: Release,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FranchiseWithReleases {
    #[serde(flatten)]
    pub franchise: Franchise,
    pub franchise_releases: Vec<FranchiseRelease>,
}

// ============================================================================
// Schedule
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseInSchedule {
    pub release: Release,
    pub full_season_is_released: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_release_episode: Option<Episode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_release_episode_number: Option<i64>,
}

/// Releases around today
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleNowResponse {
    pub today: Vec<ReleaseInSchedule>,
    pub tomorrow: Vec<ReleaseInSchedule>,
    pub yesterday: Vec<ReleaseInSchedule>,
}

// ============================================================================
// Catalog query
// ============================================================================

/// Catalog filters, sent as `f[...]` query parameters or the `f` body object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<ReleaseType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seasons: Option<Vec<Season>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_ratings: Option<Vec<AgeRating>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub production_statuses: Option<Vec<CatalogProductionStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publish_statuses: Option<Vec<CatalogPublishStatus>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<CatalogSorting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl CatalogFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ToQuery for CatalogFilters {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("types", self.types.clone())
            .with_opt("genres", self.genres.clone())
            .with_opt("years", self.years.clone())
            .with_opt("seasons", self.seasons.clone())
            .with_opt("age_ratings", self.age_ratings.clone())
            .with_opt("production_statuses", self.production_statuses.clone())
            .with_opt("publish_statuses", self.publish_statuses.clone())
            .with_opt("sorting", self.sorting.map(|s| s.as_str()))
            .with_opt("search", self.search.as_deref())
    }
}

/// Parameters for browsing the catalog
///
/// # Example
///
/// ```
/// use aniliberty_sdk::{CatalogQuery, ReleaseType, ToQuery};
///
/// let query = CatalogQuery::builder()
///     .types([ReleaseType::Tv, ReleaseType::Movie])
///     .page(2)
///     .build();
///
/// assert_eq!(
///     query.to_query().pairs(),
///     vec![("f[types]", "TV"), ("f[types]", "MOVIE"), ("page", "2")]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(rename = "f", skip_serializing_if = "CatalogFilters::is_empty")]
    pub filters: CatalogFilters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

impl CatalogQuery {
    pub fn builder() -> CatalogQueryBuilder {
        CatalogQueryBuilder::default()
    }
}

impl ToQuery for CatalogQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .insert_nested("f", self.filters.to_query())
            .insert_opt("page", self.page)
            .insert_opt("limit", self.limit)
            .insert_opt("include", self.include.clone())
            .insert_opt("exclude", self.exclude.clone());
        query
    }
}

/// Builder for [`CatalogQuery`]
#[derive(Debug, Clone, Default)]
pub struct CatalogQueryBuilder {
    query: CatalogQuery,
}

impl CatalogQueryBuilder {
    pub fn page(mut self, page: u32) -> Self {
        self.query.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.query.limit = Some(limit);
        self
    }

    pub fn types(mut self, types: impl IntoIterator<Item = ReleaseType>) -> Self {
        self.query.filters.types = Some(types.into_iter().collect());
        self
    }

    pub fn genres(mut self, genres: impl IntoIterator<Item = i64>) -> Self {
        self.query.filters.genres = Some(genres.into_iter().collect());
        self
    }

    pub fn years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.query.filters.years = Some(years.into_iter().collect());
        self
    }

    pub fn seasons(mut self, seasons: impl IntoIterator<Item = Season>) -> Self {
        self.query.filters.seasons = Some(seasons.into_iter().collect());
        self
    }

    pub fn age_ratings(mut self, ratings: impl IntoIterator<Item = AgeRating>) -> Self {
        self.query.filters.age_ratings = Some(ratings.into_iter().collect());
        self
    }

    pub fn production_statuses(
        mut self,
        statuses: impl IntoIterator<Item = CatalogProductionStatus>,
    ) -> Self {
        self.query.filters.production_statuses = Some(statuses.into_iter().collect());
        self
    }

    pub fn publish_statuses(
        mut self,
        statuses: impl IntoIterator<Item = CatalogPublishStatus>,
    ) -> Self {
        self.query.filters.publish_statuses = Some(statuses.into_iter().collect());
        self
    }

    pub fn sorting(mut self, sorting: CatalogSorting) -> Self {
        self.query.filters.sorting = Some(sorting);
        self
    }

    /// Full-text filter on release names
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.query.filters.search = Some(search.into());
        self
    }

    pub fn include<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query.include = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn exclude<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.query.exclude = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn build(self) -> CatalogQuery {
        self.query
    }
}
