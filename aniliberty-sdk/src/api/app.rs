//! Application endpoints: release search and service status

use crate::client::AniLiberty;
use crate::query::ToQuery;
use crate::response::ApiResponse;
use crate::types::anime::Release;
use crate::types::app::{AppStatus, SearchQuery};

pub struct App<'a> {
    pub(crate) client: &'a AniLiberty,
}

impl<'a> App<'a> {
    /// Full-text release search
    pub async fn search_releases(&self, query: &SearchQuery) -> ApiResponse<Vec<Release>> {
        self.client
            .get("/app/search/releases", Some(query.to_query()))
            .await
    }

    /// Liveness and information about the calling request
    pub async fn status(&self) -> ApiResponse<AppStatus> {
        self.client.get("/app/status", None).await
    }
}
