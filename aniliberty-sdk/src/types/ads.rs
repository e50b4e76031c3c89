//! Advertising shapes

use super::common::ImageWithOptimized;
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Page slot a banner is shown in
    AdBannerPlacement {
        HomeSupport => "HOME_SUPPORT",
        ReleaseSidebar => "RELEASE_SIDEBAR",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdBanner {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageWithOptimized>,
    pub ad_erid: String,
    pub image_url: String,
    pub button_url: String,
    pub placement: AdBannerPlacement,
    pub has_overlay: bool,
    pub button_title: String,
    pub description: String,
    pub ad_company_itn: String,
    pub ad_company_name: String,
}

/// A VAST ad tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdVast {
    pub id: String,
    pub url: String,
    pub ad_erid: String,
    pub ad_company_itn: String,
    pub ad_company_name: String,
}
