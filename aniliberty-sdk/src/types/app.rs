//! Application-level shapes: search and service status

use crate::query::{QueryParams, ToQuery};
use serde::{Deserialize, Serialize};

/// Information the API derived from the calling request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppStatusRequest {
    pub ip: String,
    pub country: String,
    pub iso_code: String,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppStatus {
    pub request: AppStatusRequest,
    pub is_alive: bool,
    pub available_api_endpoints: Vec<String>,
}

/// Parameters for release search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

impl ToQuery for SearchQuery {
    fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("query", self.query.as_str())
            .with_opt("include", self.include.clone())
            .with_opt("exclude", self.exclude.clone())
    }
}
