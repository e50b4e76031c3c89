//! Media endpoints

use crate::client::AniLiberty;
use crate::query::QueryParams;
use crate::response::ApiResponse;
use crate::types::common::DataList;
use crate::types::media::{MediaPromotion, VideoWithOrigin};

pub struct Media<'a> {
    pub(crate) client: &'a AniLiberty,
}

impl<'a> Media<'a> {
    /// Promotional slides shown on the home page
    pub async fn promotions(&self) -> ApiResponse<DataList<MediaPromotion>> {
        self.client.get("/media/promotions", None).await
    }

    pub async fn videos(&self, limit: Option<u32>) -> ApiResponse<DataList<VideoWithOrigin>> {
        let query = QueryParams::new().with_opt("limit", limit);
        self.client.get("/media/videos", Some(query)).await
    }
}
