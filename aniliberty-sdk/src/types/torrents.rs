//! Torrent shapes

use super::anime::Release;
use super::common::ImageWithOptimized;
use serde::{Deserialize, Serialize};

wire_enum! {
    TorrentCodec {
        Av1 => "AV1",
        X264 => "x264/AVC",
        X265 => "x265/HEVC",
        X265Hq => "x265hq/HEVC-HQ",
    }
}

wire_enum! {
    /// Colour depth
    TorrentColor {
        EightBit => "8bit",
        TenBit => "10Bit",
    }
}

wire_enum! {
    TorrentQuality {
        P360 => "360p",
        P480 => "480p",
        P576 => "576p",
        P720 => "720p",
        P1080 => "1080p",
        K2 => "2k",
        K4 => "4k",
        K8 => "8k",
    }
}

wire_enum! {
    /// Source rip type
    TorrentType {
        BdRip => "BDRip",
        HdRip => "HDRip",
        TvRip => "TVRip",
        WebRip => "WEBRip",
        DtvRip => "DTVRip",
        DvdRip => "DVDRip",
        HdtvRip => "HDTVRip",
        WebDl => "WEB-DL",
        WebDlRip => "WEB-DLRip",
    }
}

wire_enum! {
    TorrentMemberRole {
        Hevc => "HEVC",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentTypeInfo {
    pub value: TorrentType,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentQualityInfo {
    pub value: TorrentQuality,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentCodecInfo {
    pub value: TorrentCodec,
    pub label: String,
    pub description: String,
    pub label_color: String,
    pub label_is_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentColorInfo {
    pub value: TorrentColor,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentMemberRoleInfo {
    pub value: TorrentMemberRole,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentMemberUser {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ImageWithOptimized>,
}

/// A person credited on a torrent (encoder, etc.)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentMember {
    pub id: String,
    pub role: TorrentMemberRoleInfo,
    pub nickname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<TorrentMemberUser>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Torrent {
    pub id: i64,
    pub hash: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub torrent_type: TorrentTypeInfo,
    pub color: TorrentColorInfo,
    pub codec: TorrentCodecInfo,
    pub label: String,
    pub quality: TorrentQualityInfo,
    pub magnet: String,
    pub filename: String,
    pub seeders: i64,
    pub bitrate: i64,
    pub leechers: i64,
    pub sort_order: i64,
    pub updated_at: String,
    pub is_hardsub: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: String,
    pub completed_times: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TorrentWithMembers {
    #[serde(flatten)]
    pub torrent: Torrent,
    pub torrent_members: Vec<TorrentMember>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorrentWithRelease {
    #[serde(flatten)]
    pub torrent: TorrentWithMembers,
    pub release: Release,
}
