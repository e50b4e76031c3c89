//! Advertising endpoints

use crate::client::AniLiberty;
use crate::query::QueryParams;
use crate::response::ApiResponse;
use crate::types::ads::{AdBanner, AdBannerPlacement, AdVast};
use reqwest::Method;

pub struct Ads<'a> {
    pub(crate) client: &'a AniLiberty,
}

impl<'a> Ads<'a> {
    pub async fn vasts(&self) -> ApiResponse<Vec<AdVast>> {
        self.client.get("/ads/vasts", None).await
    }

    /// The VAST chain as an XML document
    pub async fn vasts_chain(&self) -> ApiResponse<Vec<u8>> {
        self.client
            .request_bytes(Method::GET, "/ads/vasts/chain", None)
            .await
    }

    /// Banners, optionally only those for one placement
    pub async fn banners(&self, placement: Option<AdBannerPlacement>) -> ApiResponse<Vec<AdBanner>> {
        let query = QueryParams::new().with_opt("placement", placement.map(|p| p.as_str()));
        self.client.get("/ads/banners", Some(query)).await
    }
}
