//! Team endpoints

use crate::client::AniLiberty;
use crate::query::ToQuery;
use crate::response::ApiResponse;
use crate::types::common::IncludeExclude;
use crate::types::teams::{Team, TeamRole, TeamUserFull};

pub struct Teams<'a> {
    pub(crate) client: &'a AniLiberty,
}

impl<'a> Teams<'a> {
    pub async fn list(&self) -> ApiResponse<Vec<Team>> {
        // The trailing slash is part of the route
        self.client.get("/teams/", None).await
    }

    pub async fn roles(&self) -> ApiResponse<Vec<TeamRole>> {
        self.client.get("/teams/roles", None).await
    }

    /// Team members with their team, account and roles
    pub async fn users(&self, fields: &IncludeExclude) -> ApiResponse<Vec<TeamUserFull>> {
        self.client
            .get("/teams/users", Some(fields.to_query()))
            .await
    }
}
