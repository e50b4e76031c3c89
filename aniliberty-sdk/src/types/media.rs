//! Media shapes: promotions and videos

use super::anime::Release;
use super::common::ImageWithOptimized;
use serde::{Deserialize, Serialize};

/// A promotional slide shown on the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaPromotion {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageWithOptimized>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_ad: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_erid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<Release>,
    pub has_overlay: bool,
}

wire_enum! {
    VideoOriginType {
        YoutubePlaylist => "YOUTUBE_PLAYLIST",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoOriginTypeInfo {
    pub value: VideoOriginType,
    pub description: String,
}

/// Where a video was imported from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoOrigin {
    pub id: String,
    pub url: String,
    #[serde(rename = "type")]
    pub origin_type: VideoOriginTypeInfo,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub is_announce: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoContent {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub views: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageWithOptimized>,
    pub comments: i64,
    pub video_id: String,
    pub created_at: String,
    pub updated_at: String,
    pub is_announce: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoWithOrigin {
    #[serde(flatten)]
    pub video: VideoContent,
    pub origin: VideoOrigin,
}
