mod common;

use aniliberty_sdk::{PageParams, TorrentQuality};
use common::{client_for, paginated, release_json};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn torrent_json(id: i64, with_release: bool) -> Value {
    let mut torrent = json!({
        "id": id,
        "hash": format!("hash{}", id),
        "size": 1_610_612_736_u64,
        "type": {"value": "WEB-DL", "description": "WEB-DL"},
        "color": {"value": "8bit", "description": "8 бит"},
        "codec": {
            "value": "x264/AVC",
            "label": "AVC",
            "description": "x264",
            "label_color": "#000000",
            "label_is_visible": false
        },
        "label": "Jujutsu Kaisen [WEB-DL 720p]",
        "quality": {"value": "720p", "description": "720p"},
        "magnet": format!("magnet:?xt=urn:btih:hash{}", id),
        "filename": "jjk.torrent",
        "seeders": 10,
        "bitrate": 0,
        "leechers": 1,
        "sort_order": 0,
        "updated_at": "2024-10-01T00:00:00+00:00",
        "is_hardsub": true,
        "created_at": "2024-10-01T00:00:00+00:00",
        "completed_times": 300,
        "torrent_members": []
    });
    if with_release {
        torrent["release"] = release_json(9000);
    }
    torrent
}

#[tokio::test]
async fn test_download_returns_raw_bytes() {
    let server = MockServer::start().await;
    let payload: Vec<u8> = vec![0x64, 0x38, 0x3a, 0x00, 0xff, 0x65];

    Mock::given(method("GET"))
        .and(path("/v1/anime/torrents/hash501/file"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(payload.clone(), "application/x-bittorrent"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let file = client.torrents().download("hash501").await;

    assert_eq!(file.status(), 200);
    assert_eq!(file.into_data(), Some(payload));
}

#[tokio::test]
async fn test_download_missing_torrent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/anime/torrents/404/file"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Torrent not found"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let file = client.torrents().download(404).await;

    assert_eq!(file.status(), 404);
    assert!(file.data().is_none());
    assert_eq!(file.error().unwrap().to_string(), "Torrent not found");
}

#[tokio::test]
async fn test_rss_feeds() {
    let server = MockServer::start().await;
    let feed = "<?xml version=\"1.0\"?><rss version=\"2.0\"><channel/></rss>";

    Mock::given(method("GET"))
        .and(path("/v1/anime/torrents/rss"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(feed, "application/rss+xml"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/anime/torrents/rss/release/9000"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(feed, "application/rss+xml"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let recent = client.torrents().rss(Some(3)).await.into_data().unwrap();
    assert!(String::from_utf8(recent).unwrap().starts_with("<?xml"));

    let release = client.torrents().release_rss(9000).await;
    assert_eq!(release.into_data().unwrap(), feed.as_bytes());
}

#[tokio::test]
async fn test_torrent_listing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/anime/torrents"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paginated(vec![
            torrent_json(1, true),
            torrent_json(2, true),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/anime/torrents/release/9000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([torrent_json(3, false)])))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let page = client
        .torrents()
        .list(&PageParams::new(1, 2))
        .await
        .into_data()
        .unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].release.id, 9000);
    assert_eq!(
        page.data[1].torrent.torrent.quality.value,
        TorrentQuality::P720
    );

    let by_release = client.torrents().by_release(9000).await.into_data().unwrap();
    assert_eq!(by_release[0].torrent.hash, "hash3");
}

#[tokio::test]
async fn test_vast_chain_and_banners() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/ads/vasts/chain"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<VAST version=\"4.0\"/>", "application/xml"))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/ads/banners"))
        .and(query_param("placement", "RELEASE_SIDEBAR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let chain = client.ads().vasts_chain().await.into_data().unwrap();
    assert_eq!(chain, b"<VAST version=\"4.0\"/>".to_vec());

    let banners = client
        .ads()
        .banners(Some(aniliberty_sdk::AdBannerPlacement::ReleaseSidebar))
        .await;
    assert_eq!(banners.into_data(), Some(vec![]));
}

#[tokio::test]
async fn test_media_videos() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/media/videos"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 1,
                "url": "https://youtube.com/watch?v=x",
                "title": "Трейлер",
                "views": 1000,
                "comments": 5,
                "video_id": "x",
                "created_at": "2024-10-01T00:00:00+00:00",
                "updated_at": "2024-10-01T00:00:00+00:00",
                "is_announce": true,
                "origin": {
                    "id": "o1",
                    "url": "https://youtube.com/playlist?list=y",
                    "type": {"value": "YOUTUBE_PLAYLIST", "description": "YouTube"},
                    "title": "Анонсы",
                    "is_announce": true
                }
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let videos = client.media().videos(Some(1)).await.into_data().unwrap();

    assert_eq!(videos.data.len(), 1);
    assert_eq!(videos.data[0].video.video_id, "x");
    assert_eq!(videos.data[0].origin.title, "Анонсы");
}

#[tokio::test]
async fn test_team_roles() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/teams/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "r1", "title": "Войсер", "color": "#ff00ff", "sort_order": 1}
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let roles = client.teams().roles().await.into_data().unwrap();
    assert_eq!(roles[0].color, "#ff00ff");
}
