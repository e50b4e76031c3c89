//! Shared fixtures for the integration tests.
//!
//! Not every test file uses every helper, hence the module-level allow.
#![allow(dead_code)]

use aniliberty_sdk::AniLiberty;
use serde_json::{json, Value};
use wiremock::MockServer;

/// A client pointed at the mock server
pub fn client_for(server: &MockServer) -> AniLiberty {
    AniLiberty::builder()
        .api_base(server.uri())
        .build()
        .unwrap()
}

// ===== Fixtures =====

pub fn release_json(id: i64) -> Value {
    json!({
        "id": id,
        "type": {"value": "TV", "description": "ТВ"},
        "year": 2023,
        "name": {
            "main": "Магическая битва",
            "english": "Jujutsu Kaisen",
            "alternative": ""
        },
        "alias": format!("release-{}", id),
        "season": {"value": "autumn", "description": "Осень"},
        "poster": {"preview": "/p.jpg", "thumbnail": "/t.jpg"},
        "fresh_at": "2024-10-01T00:00:00+00:00",
        "created_at": "2023-07-01T00:00:00+00:00",
        "updated_at": "2024-10-01T00:00:00+00:00",
        "is_ongoing": false,
        "age_rating": {"value": "R16_PLUS", "label": "16+", "is_adult": false, "description": "16+"},
        "publish_day": {"value": 4, "description": "Четверг"},
        "description": "",
        "episodes_total": 24,
        "is_in_production": false,
        "is_blocked_by_geo": false,
        "is_blocked_by_copyrights": false,
        "added_in_users_favorites": 1000,
        "average_duration_of_episode": 24,
        "added_in_planned_collection": 10,
        "added_in_watched_collection": 20,
        "added_in_watching_collection": 30,
        "added_in_postponed_collection": 4,
        "added_in_abandoned_collection": 5
    })
}

pub fn genre_json(id: i64, name: &str) -> Value {
    json!({"id": id, "name": name, "total_releases": 120})
}

/// Add a `genres` list to a release
pub fn release_with_genres_json(id: i64) -> Value {
    let mut release = release_json(id);
    release["genres"] = json!([genre_json(1, "Экшен")]);
    release
}

/// Wrap items in a single-page pagination envelope
pub fn paginated(items: Vec<Value>) -> Value {
    let count = items.len();
    json!({
        "data": items,
        "meta": {
            "pagination": {
                "total": count,
                "count": count,
                "per_page": 15,
                "current_page": 1,
                "total_pages": 1
            }
        }
    })
}
