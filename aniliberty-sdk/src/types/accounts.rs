//! Account shapes: OTP, authentication, profile, collections, favorites, views

use super::anime::{AgeRating, Episode, Genre, Release, ReleaseType};
use super::common::{ImageWithOptimized, Reference};
use crate::query::{QueryParams, ToQuery};
use serde::{Deserialize, Serialize};

// ============================================================================
// OTP
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpGetRequest {
    pub device_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpAcceptRequest {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpLoginRequest {
    pub code: String,
    pub device_id: String,
}

/// A one-time password issued for a device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpCode {
    pub code: String,
    pub user_id: Option<i64>,
    pub device_id: String,
    pub expired_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpGetResponse {
    pub otp: OtpCode,
    pub remaining_time: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpLoginResponse {
    pub token: String,
}

// ============================================================================
// Auth
// ============================================================================

wire_enum! {
    /// Social network used for sign-in
    UserSocialType {
        Vk => "vk",
        Google => "google",
        Patreon => "patreon",
        Discord => "discord",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub login: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub token: Option<String>,
}

/// Where to send the user to start a social sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAuthLoginResponse {
    pub url: String,
    pub state: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAuthAuthenticateResponse {
    pub token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgetPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub token: String,
    pub password: String,
    pub password_confirmation: String,
}

// ============================================================================
// Users
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTorrents {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passkey: Option<String>,
    pub uploaded: u64,
    pub downloaded: u64,
}

/// The authenticated user's profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub nickname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ImageWithOptimized>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torrents: Option<UserTorrents>,
    pub is_banned: bool,
    pub created_at: String,
    pub is_with_ads: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSessionDevice {
    pub name: String,
    pub version: String,
    pub platform: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSessionBrowser {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSessionLocation {
    pub country: String,
    pub iso_code: String,
}

/// An active login session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub id: String,
    pub user_id: i64,
    pub device: UserSessionDevice,
    pub browser: UserSessionBrowser,
    pub location: UserSessionLocation,
    pub is_mobile: bool,
    pub is_desktop: bool,
    pub ip_address: String,
    pub user_agent: String,
    pub is_current: bool,
    pub last_active: String,
}

/// Watch progress of one episode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserView {
    pub id: i64,
    pub time: f64,
    pub user_id: i64,
    pub is_watched: bool,
    pub updated_at: String,
    pub release_episode_id: String,
}

// ============================================================================
// Collections
// ============================================================================

wire_enum! {
    /// Personal collection a release can be filed under
    UserCollectionType {
        Planned => "PLANNED",
        Watched => "WATCHED",
        Watching => "WATCHING",
        Postponed => "POSTPONED",
        Abandoned => "ABANDONED",
    }
}

/// `[release_id, collection]` pair from `/collections/ids`
pub type CollectionReleaseItem = (i64, UserCollectionType);

pub type CollectionsReferencesAgeRating = Reference<AgeRating>;
pub type CollectionsReferencesType = Reference<ReleaseType>;

/// A release as listed inside a personal collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionRelease {
    #[serde(flatten)]
    pub release: Release,
    pub genres: Vec<Genre>,
    pub episodes: Vec<Episode>,
}

/// Body item for adding a release to a collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionAddItem {
    pub release_id: i64,
    pub type_of_collection: UserCollectionType,
}

/// Body item identifying a release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseIdItem {
    pub release_id: i64,
}

/// Filters shared by collection and favorite listings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserReleaseFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<ReleaseType>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_ratings: Option<Vec<AgeRating>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl UserReleaseFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ToQuery for UserReleaseFilters {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with_opt("types", self.types.clone())
            .with_opt("genres", self.genres.clone())
            .with_opt("years", self.years.clone())
            .with_opt("age_ratings", self.age_ratings.clone())
            .with_opt("search", self.search.as_deref())
    }
}

/// Parameters for listing releases of one collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionQuery {
    pub collection_type: UserCollectionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(rename = "f", skip_serializing_if = "UserReleaseFilters::is_empty")]
    pub filters: UserReleaseFilters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

impl CollectionQuery {
    pub fn new(collection_type: UserCollectionType) -> Self {
        Self {
            collection_type,
            page: None,
            limit: None,
            filters: UserReleaseFilters::default(),
            include: None,
            exclude: None,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filters(mut self, filters: UserReleaseFilters) -> Self {
        self.filters = filters;
        self
    }
}

impl ToQuery for CollectionQuery {
    fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query
            .insert("collection_type", self.collection_type.as_str())
            .insert_nested("f", self.filters.to_query())
            .insert_opt("page", self.page)
            .insert_opt("limit", self.limit)
            .insert_opt("include", self.include.clone())
            .insert_opt("exclude", self.exclude.clone());
        query
    }
}

// ============================================================================
// Favorites
// ============================================================================

wire_enum! {
    /// Sort order for favorite releases
    UserFavoriteSorting {
        CreatedAtDesc => "CREATED_AT_DESC",
        CreatedAtAsc => "CREATED_AT_ASC",
        FreshAtDesc => "FRESH_AT_DESC",
        FreshAtAsc => "FRESH_AT_ASC",
        RatingDesc => "RATING_DESC",
        RatingAsc => "RATING_ASC",
        YearDesc => "YEAR_DESC",
        YearAsc => "YEAR_ASC",
    }
}

pub type FavoritesReferencesSorting = Reference<UserFavoriteSorting>;

/// A release as listed in favorites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteRelease {
    #[serde(flatten)]
    pub release: Release,
    pub genres: Vec<Genre>,
    pub episodes: Vec<Episode>,
}

/// Parameters for listing favorite releases
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FavoriteQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(rename = "f", skip_serializing_if = "FavoriteFilters::is_empty")]
    pub filters: FavoriteFilters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

/// Favorite filters: the shared release filters plus a sort order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FavoriteFilters {
    #[serde(flatten)]
    pub releases: UserReleaseFilters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<UserFavoriteSorting>,
}

impl FavoriteFilters {
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty() && self.sorting.is_none()
    }
}

impl ToQuery for FavoriteQuery {
    fn to_query(&self) -> QueryParams {
        let mut filters = self.filters.releases.to_query();
        filters.insert_opt("sorting", self.filters.sorting.map(|s| s.as_str()));

        let mut query = QueryParams::new();
        query
            .insert_nested("f", filters)
            .insert_opt("page", self.page)
            .insert_opt("limit", self.limit)
            .insert_opt("include", self.include.clone())
            .insert_opt("exclude", self.exclude.clone());
        query
    }
}

// ============================================================================
// Views
// ============================================================================

/// Episode of a watch-history entry, with its release
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewHistoryEpisode {
    #[serde(flatten)]
    pub episode: Episode,
    pub release: Release,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewHistoryItem {
    #[serde(flatten)]
    pub view: UserView,
    pub release_episode: ViewHistoryEpisode,
}

/// `[release_episode_id, time, is_watched]` triple from `/views/timecodes`
pub type ViewTimecodeItem = (String, f64, bool);

/// Body item for saving watch progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewTimecodeUpdate {
    pub time: f64,
    pub is_watched: bool,
    pub release_episode_id: String,
}

/// Body item identifying an episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseEpisodeIdItem {
    pub release_episode_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_ids_deserialize() {
        let ids: Vec<CollectionReleaseItem> =
            serde_json::from_value(json!([[9000, "WATCHING"], [42, "PLANNED"]])).unwrap();
        assert_eq!(ids[0], (9000, UserCollectionType::Watching));
        assert_eq!(ids[1].1, UserCollectionType::Planned);
    }

    #[test]
    fn test_timecodes_deserialize() {
        let timecodes: Vec<ViewTimecodeItem> =
            serde_json::from_value(json!([["episode-uuid", 612.5, false]])).unwrap();
        assert_eq!(timecodes[0].0, "episode-uuid");
        assert_eq!(timecodes[0].1, 612.5);
        assert!(!timecodes[0].2);
    }

    #[test]
    fn test_collection_query_string() {
        let query = CollectionQuery::new(UserCollectionType::Watched)
            .filters(UserReleaseFilters {
                years: Some(vec![2023, 2024]),
                ..Default::default()
            })
            .page(1);
        assert_eq!(
            query.to_query().pairs(),
            vec![
                ("collection_type", "WATCHED"),
                ("f[years]", "2023"),
                ("f[years]", "2024"),
                ("page", "1"),
            ]
        );
    }

    #[test]
    fn test_collection_query_body() {
        let query = CollectionQuery::new(UserCollectionType::Abandoned).limit(5);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"collection_type": "ABANDONED", "limit": 5})
        );
    }

    #[test]
    fn test_favorite_query_sorting_is_nested() {
        let query = FavoriteQuery {
            filters: FavoriteFilters {
                releases: UserReleaseFilters {
                    types: Some(vec![ReleaseType::Ova]),
                    ..Default::default()
                },
                sorting: Some(UserFavoriteSorting::RatingDesc),
            },
            ..Default::default()
        };
        assert_eq!(
            query.to_query().pairs(),
            vec![("f[types]", "OVA"), ("f[sorting]", "RATING_DESC")]
        );
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"f": {"types": ["OVA"], "sorting": "RATING_DESC"}})
        );
    }

    #[test]
    fn test_logout_response_null_token() {
        let response: LogoutResponse = serde_json::from_value(json!({"token": null})).unwrap();
        assert!(response.token.is_none());
    }

    #[test]
    fn test_user_optional_fields() {
        let user: User = serde_json::from_value(json!({
            "id": 17,
            "nickname": "viewer",
            "is_banned": false,
            "created_at": "2024-01-01T00:00:00+00:00",
            "is_with_ads": true
        }))
        .unwrap();
        assert_eq!(user.id, 17);
        assert!(user.login.is_none());
        assert!(user.torrents.is_none());
    }
}
