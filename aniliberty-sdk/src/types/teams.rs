//! Team directory shapes

use super::common::ImageWithOptimized;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub title: String,
    pub sort_order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRole {
    pub id: String,
    pub title: String,
    /// Hex colour used for the role badge
    pub color: String,
    pub sort_order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamUserAccount {
    pub id: i64,
    pub nickname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<ImageWithOptimized>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamUser {
    pub id: String,
    pub nickname: String,
    pub is_intern: bool,
    pub sort_order: i64,
    pub is_vacation: bool,
}

/// A team member with their team, account and roles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamUserFull {
    #[serde(flatten)]
    pub member: TeamUser,
    pub team: Team,
    pub user: TeamUserAccount,
    pub roles: Vec<TeamRole>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_user_full_deserialize() {
        let user: TeamUserFull = serde_json::from_value(json!({
            "id": "u1",
            "nickname": "Dubber",
            "is_intern": false,
            "sort_order": 3,
            "is_vacation": true,
            "team": {"id": "t1", "title": "Voice", "sort_order": 1},
            "user": {"id": 77, "nickname": "Dubber"},
            "roles": [{"id": "r1", "title": "Voice actor", "color": "#00ff00", "sort_order": 0}]
        }))
        .unwrap();
        assert_eq!(user.member.nickname, "Dubber");
        assert!(user.member.is_vacation);
        assert_eq!(user.team.title, "Voice");
        assert!(user.team.description.is_none());
        assert_eq!(user.roles[0].color, "#00ff00");
    }
}
