//! Account endpoints: OTP, auth, profile, collections, favorites, views

use crate::client::AniLiberty;
use crate::query::{QueryParams, ToQuery};
use crate::response::ApiResponse;
use crate::types::accounts::{
    CollectionAddItem, CollectionQuery, CollectionRelease, CollectionReleaseItem,
    CollectionsReferencesAgeRating, CollectionsReferencesType, FavoriteQuery, FavoriteRelease,
    FavoritesReferencesSorting, ForgetPasswordRequest, LoginRequest, LoginResponse,
    LogoutResponse, OtpAcceptRequest, OtpGetRequest, OtpGetResponse, OtpLoginRequest,
    OtpLoginResponse, ReleaseEpisodeIdItem, ReleaseIdItem, ResetPasswordRequest,
    SocialAuthAuthenticateResponse, SocialAuthLoginResponse, User, UserSocialType,
    ViewHistoryItem, ViewTimecodeItem, ViewTimecodeUpdate,
};
use crate::types::anime::{ReferenceAgeRating, ReferenceType};
use crate::types::common::{PageParams, Paginated, ReferenceGenre};
use reqwest::Method;
use serde_json::Value;

/// Store the token carried by a successful sign-in response
fn remember_token<T>(
    client: &AniLiberty,
    response: &ApiResponse<T>,
    token: impl FnOnce(&T) -> &str,
) {
    if let ApiResponse::Success {
        data: Some(data), ..
    } = response
    {
        let token = token(data);
        if !token.is_empty() {
            client.set_access_token(token);
        }
    }
}

// ============================================================================
// OTP
// ============================================================================

/// One-time password sign-in
///
/// A device requests a code with [`Otp::get`], an already signed-in session
/// confirms it with [`Otp::accept`], and the device then exchanges it for a
/// token with [`Otp::login`].
pub struct Otp<'a> {
    pub(crate) client: &'a AniLiberty,
}

impl<'a> Otp<'a> {
    /// Request a code for a device
    pub async fn get(&self, device_id: impl Into<String>) -> ApiResponse<OtpGetResponse> {
        let body = OtpGetRequest {
            device_id: device_id.into(),
        };
        self.client
            .request(Method::POST, "/accounts/otp/get", Some(&body), None)
            .await
    }

    /// Confirm a code from an authenticated session
    pub async fn accept(&self, code: impl Into<String>) -> ApiResponse<Value> {
        let body = OtpAcceptRequest { code: code.into() };
        self.client
            .request(Method::POST, "/accounts/otp/accept", Some(&body), None)
            .await
    }

    /// Exchange a confirmed code for a token
    ///
    /// On success the token is stored on the client.
    pub async fn login(
        &self,
        code: impl Into<String>,
        device_id: impl Into<String>,
    ) -> ApiResponse<OtpLoginResponse> {
        let body = OtpLoginRequest {
            code: code.into(),
            device_id: device_id.into(),
        };
        let response: ApiResponse<OtpLoginResponse> = self
            .client
            .request(Method::POST, "/accounts/otp/login", Some(&body), None)
            .await;
        remember_token(self.client, &response, |r| r.token.as_str());
        response
    }
}

// ============================================================================
// Auth
// ============================================================================

/// Sign-in, sign-out and password recovery
pub struct Auth<'a> {
    pub(crate) client: &'a AniLiberty,
}

impl<'a> Auth<'a> {
    /// Sign in with login and password
    ///
    /// On success the token is stored on the client and sent with every
    /// following request.
    pub async fn login(&self, credentials: &LoginRequest) -> ApiResponse<LoginResponse> {
        let response: ApiResponse<LoginResponse> = self
            .client
            .request(
                Method::POST,
                "/accounts/users/auth/login",
                Some(credentials),
                None,
            )
            .await;
        remember_token(self.client, &response, |r| r.token.as_str());
        response
    }

    /// Sign out
    ///
    /// The stored token is cleared whatever the server answers.
    pub async fn logout(&self) -> ApiResponse<LogoutResponse> {
        let response = self
            .client
            .request::<LogoutResponse, ()>(Method::POST, "/accounts/users/auth/logout", None, None)
            .await;
        self.client.clear_access_token();
        response
    }

    /// Start social sign-in; returns the provider URL and a state value
    pub async fn social_login(
        &self,
        provider: UserSocialType,
    ) -> ApiResponse<SocialAuthLoginResponse> {
        let path = format!("/accounts/users/auth/social/{}/login", provider);
        self.client.get(&path, None).await
    }

    /// Finish social sign-in with the state from [`Self::social_login`]
    ///
    /// On success the token is stored on the client.
    pub async fn social_authenticate(
        &self,
        state: &str,
    ) -> ApiResponse<SocialAuthAuthenticateResponse> {
        let query = QueryParams::new().with("state", state);
        let response: ApiResponse<SocialAuthAuthenticateResponse> = self
            .client
            .get("/accounts/users/auth/social/authenticate", Some(query))
            .await;
        remember_token(self.client, &response, |r| r.token.as_str());
        response
    }

    /// Send a password reset link
    pub async fn forget_password(&self, email: impl Into<String>) -> ApiResponse<Value> {
        let body = ForgetPasswordRequest {
            email: email.into(),
        };
        self.client
            .request(
                Method::POST,
                "/accounts/users/auth/password/forget",
                Some(&body),
                None,
            )
            .await
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> ApiResponse<Value> {
        self.client
            .request(
                Method::POST,
                "/accounts/users/auth/password/reset",
                Some(request),
                None,
            )
            .await
    }
}

// ============================================================================
// Profile
// ============================================================================

pub struct Profile<'a> {
    pub(crate) client: &'a AniLiberty,
}

impl<'a> Profile<'a> {
    /// The authenticated user's profile
    pub async fn get(&self) -> ApiResponse<User> {
        self.client.get("/accounts/users/me/profile", None).await
    }
}

// ============================================================================
// Collections
// ============================================================================

const COLLECTIONS: &str = "/accounts/users/me/collections";

/// Personal collections (requires a token)
pub struct Collections<'a> {
    pub(crate) client: &'a AniLiberty,
}

impl<'a> Collections<'a> {
    /// `[release_id, collection]` pairs for every filed release
    pub async fn ids(&self) -> ApiResponse<Vec<CollectionReleaseItem>> {
        self.client.get(&format!("{}/ids", COLLECTIONS), None).await
    }

    pub async fn age_ratings(&self) -> ApiResponse<Vec<CollectionsReferencesAgeRating>> {
        self.client
            .get(&format!("{}/references/age-ratings", COLLECTIONS), None)
            .await
    }

    pub async fn genres(&self) -> ApiResponse<Vec<ReferenceGenre>> {
        self.client
            .get(&format!("{}/references/genres", COLLECTIONS), None)
            .await
    }

    pub async fn types(&self) -> ApiResponse<Vec<CollectionsReferencesType>> {
        self.client
            .get(&format!("{}/references/types", COLLECTIONS), None)
            .await
    }

    pub async fn years(&self) -> ApiResponse<Vec<i32>> {
        self.client
            .get(&format!("{}/references/years", COLLECTIONS), None)
            .await
    }

    /// Releases of one collection, filters sent as query parameters
    pub async fn releases(
        &self,
        query: &CollectionQuery,
    ) -> ApiResponse<Paginated<CollectionRelease>> {
        self.client
            .get(&format!("{}/releases", COLLECTIONS), Some(query.to_query()))
            .await
    }

    /// Releases of one collection, filters sent as a JSON body
    pub async fn search_releases(
        &self,
        query: &CollectionQuery,
    ) -> ApiResponse<Paginated<CollectionRelease>> {
        self.client
            .request(
                Method::POST,
                &format!("{}/releases", COLLECTIONS),
                Some(query),
                None,
            )
            .await
    }

    /// File releases under collections; returns the updated pairs
    pub async fn add(
        &self,
        items: &[CollectionAddItem],
    ) -> ApiResponse<Vec<CollectionReleaseItem>> {
        self.client
            .request(Method::POST, COLLECTIONS, Some(items), None)
            .await
    }

    /// Remove releases from whichever collection holds them
    pub async fn remove(&self, items: &[ReleaseIdItem]) -> ApiResponse<Vec<CollectionReleaseItem>> {
        self.client
            .request(Method::DELETE, COLLECTIONS, Some(items), None)
            .await
    }
}

// ============================================================================
// Favorites
// ============================================================================

const FAVORITES: &str = "/accounts/users/me/favorites";

/// Favorite releases (requires a token)
pub struct Favorites<'a> {
    pub(crate) client: &'a AniLiberty,
}

impl<'a> Favorites<'a> {
    /// Ids of all favorite releases
    pub async fn ids(&self) -> ApiResponse<Vec<i64>> {
        self.client.get(&format!("{}/ids", FAVORITES), None).await
    }

    pub async fn age_ratings(&self) -> ApiResponse<Vec<ReferenceAgeRating>> {
        self.client
            .get(&format!("{}/references/age-ratings", FAVORITES), None)
            .await
    }

    pub async fn genres(&self) -> ApiResponse<Vec<ReferenceGenre>> {
        self.client
            .get(&format!("{}/references/genres", FAVORITES), None)
            .await
    }

    pub async fn sorting(&self) -> ApiResponse<Vec<FavoritesReferencesSorting>> {
        self.client
            .get(&format!("{}/references/sorting", FAVORITES), None)
            .await
    }

    pub async fn types(&self) -> ApiResponse<Vec<ReferenceType>> {
        self.client
            .get(&format!("{}/references/types", FAVORITES), None)
            .await
    }

    pub async fn years(&self) -> ApiResponse<Vec<i32>> {
        self.client
            .get(&format!("{}/references/years", FAVORITES), None)
            .await
    }

    pub async fn releases(&self, query: &FavoriteQuery) -> ApiResponse<Paginated<FavoriteRelease>> {
        self.client
            .get(&format!("{}/releases", FAVORITES), Some(query.to_query()))
            .await
    }

    pub async fn search_releases(
        &self,
        query: &FavoriteQuery,
    ) -> ApiResponse<Paginated<FavoriteRelease>> {
        self.client
            .request(
                Method::POST,
                &format!("{}/releases", FAVORITES),
                Some(query),
                None,
            )
            .await
    }

    /// Add releases to favorites; returns the updated id list
    pub async fn add(&self, items: &[ReleaseIdItem]) -> ApiResponse<Vec<i64>> {
        self.client
            .request(Method::POST, FAVORITES, Some(items), None)
            .await
    }

    /// Remove releases from favorites; returns the updated id list
    pub async fn remove(&self, items: &[ReleaseIdItem]) -> ApiResponse<Vec<i64>> {
        self.client
            .request(Method::DELETE, FAVORITES, Some(items), None)
            .await
    }
}

// ============================================================================
// Views
// ============================================================================

const VIEWS: &str = "/accounts/users/me/views";

/// Watch history and playback positions (requires a token)
pub struct Views<'a> {
    pub(crate) client: &'a AniLiberty,
}

impl<'a> Views<'a> {
    pub async fn history(&self, page: &PageParams) -> ApiResponse<Paginated<ViewHistoryItem>> {
        self.client
            .get(&format!("{}/history", VIEWS), Some(page.to_query()))
            .await
    }

    /// Saved positions, optionally only those changed after `since`
    pub async fn timecodes(&self, since: Option<&str>) -> ApiResponse<Vec<ViewTimecodeItem>> {
        let query = QueryParams::new().with_opt("since", since);
        self.client
            .get(&format!("{}/timecodes", VIEWS), Some(query))
            .await
    }

    pub async fn update_timecodes(&self, items: &[ViewTimecodeUpdate]) -> ApiResponse<Value> {
        self.client
            .request(
                Method::POST,
                &format!("{}/timecodes", VIEWS),
                Some(items),
                None,
            )
            .await
    }

    pub async fn delete_timecodes(&self, items: &[ReleaseEpisodeIdItem]) -> ApiResponse<Value> {
        self.client
            .request(
                Method::DELETE,
                &format!("{}/timecodes", VIEWS),
                Some(items),
                None,
            )
            .await
    }
}
