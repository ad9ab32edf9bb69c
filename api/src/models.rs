//! Typed contracts for every payload the backend serves.
//!
//! The backend is Mongo-backed: entities carry `_id` string identifiers and
//! camelCase fields. List-valued and optional fields default when absent so a
//! sparse document still decodes; anything structurally wrong fails the
//! decode instead of rendering holes in the UI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role granted after onboarding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Player,
    Coach,
    Referee,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Player => "Player",
            Role::Coach => "Coach",
            Role::Referee => "Referee",
            Role::Admin => "Admin",
        }
    }
}

/// The signed-in account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub is_onboarding_completed: bool,
    #[serde(default)]
    pub is_profile_filled: bool,
}

/// Author reference embedded in posts and comments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAuthor {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

/// A feed post. Comments are posts too: replies nest through `children`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub post_content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub author: Option<PostAuthor>,
    /// Ids of users who liked this post.
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub children: Vec<Post>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Moderator reference on a ban record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BannedBy {
    pub username: String,
}

/// Suspension details returned with an HTTP 405 at sign-in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BanInfo {
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub banned_by: Option<BannedBy>,
}

/// Availability probe response (`check-email`, `check-username`).
#[derive(Clone, Debug, Deserialize)]
pub struct Exists {
    pub exists: bool,
}

/// Lightweight reference to another entity (league, country, stadium...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Coach/referee style person reference.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonRef {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub country: Option<NamedRef>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub year_founded: Option<u32>,
    #[serde(default)]
    pub stadium: Option<NamedRef>,
    #[serde(default)]
    pub country: Option<NamedRef>,
    #[serde(default)]
    pub league: Option<NamedRef>,
    #[serde(default)]
    pub coach: Option<PersonRef>,
    /// Ids of users following this team.
    #[serde(default)]
    pub fans: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub weight: Option<f32>,
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub footed: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub current_team: Option<NamedRef>,
    /// Team id requested through the profile editor while unattached.
    #[serde(default)]
    pub wanted_team: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Ids of users following this player.
    #[serde(default)]
    pub fans: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coach {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub birth_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current_team: Option<NamedRef>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referee {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub birth_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A scheduled (not yet played) match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchFixture {
    #[serde(default)]
    pub match_id: String,
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,
    #[serde(default)]
    pub match_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub league: Option<String>,
}

/// A played match with its final score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(default)]
    pub result_id: String,
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,
    #[serde(default)]
    pub home_score: u32,
    #[serde(default)]
    pub away_score: u32,
    #[serde(default)]
    pub match_date: Option<DateTime<Utc>>,
}

/// One row of a league standings table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingRow {
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub played: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub draws: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
    #[serde(default)]
    pub points: u32,
}

/// A player's aggregated numbers for one season.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeasonStats {
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub yellow_cards: u32,
    #[serde(default)]
    pub red_cards: u32,
    #[serde(default)]
    pub clean_sheets: u32,
    #[serde(default)]
    pub minutes_played: u32,
}

/// A leaderboard entry for one league-wide metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopStatEntry {
    #[serde(default)]
    pub player: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub value: u32,
}

/// Per-metric leaderboards for a league.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueTopStats {
    #[serde(default)]
    pub goals: Vec<TopStatEntry>,
    #[serde(default)]
    pub assists: Vec<TopStatEntry>,
    #[serde(default)]
    pub yellow_cards: Vec<TopStatEntry>,
    #[serde(default)]
    pub red_cards: Vec<TopStatEntry>,
    #[serde(default)]
    pub clean_sheets: Vec<TopStatEntry>,
}

/// A scheduled or completed training session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub training_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_completed: bool,
    /// Player ids attending.
    #[serde(default)]
    pub participants: Vec<String>,
    /// Player ids that have opened the session notice.
    #[serde(default)]
    pub is_read: Vec<String>,
}

/// Buckets returned by the global search endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub coaches: Vec<Coach>,
    #[serde(default)]
    pub referees: Vec<Referee>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
            && self.coaches.is_empty()
            && self.referees.is_empty()
            && self.teams.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_with_nested_comments_decodes() {
        let json = r#"{
            "_id": "p1",
            "title": "Derby day",
            "postContent": "What a match",
            "imageUrl": "https://cdn.test/p1.jpg",
            "author": {"_id": "u1", "username": "alice"},
            "likes": ["u1", "u2"],
            "children": [{
                "_id": "c1",
                "postContent": "Agreed!",
                "author": {"_id": "u2", "username": "bob"},
                "likes": [],
                "children": [{"_id": "c2", "postContent": "Same", "likes": ["u1"]}]
            }],
            "createdAt": "2026-03-01T12:00:00Z"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "p1");
        assert_eq!(post.likes.len(), 2);
        assert_eq!(post.children.len(), 1);
        assert_eq!(post.children[0].children[0].likes, vec!["u1"]);
        assert!(post.created_at.is_some());
    }

    #[test]
    fn sparse_user_decodes_with_defaults() {
        let user: User = serde_json::from_str(r#"{"_id": "u1", "username": "alice"}"#).unwrap();
        assert_eq!(user.id, "u1");
        assert!(!user.is_onboarding_completed);
        assert!(user.role.is_none());
        assert_eq!(user.bio, "");
    }

    #[test]
    fn role_round_trips_as_plain_string() {
        let user: User =
            serde_json::from_str(r#"{"_id": "u1", "username": "a", "role": "Coach"}"#).unwrap();
        assert_eq!(user.role, Some(Role::Coach));
        assert_eq!(Role::Referee.as_str(), "Referee");
    }

    #[test]
    fn ban_info_decodes_from_405_payload() {
        let json = r#"{
            "reason": "Abusive behaviour",
            "endDate": "2026-09-01T00:00:00Z",
            "bannedBy": {"username": "mod1"}
        }"#;
        let ban: BanInfo = serde_json::from_str(json).unwrap();
        assert_eq!(ban.reason, "Abusive behaviour");
        assert_eq!(ban.banned_by.unwrap().username, "mod1");
    }

    #[test]
    fn standings_row_defaults_missing_numbers() {
        let row: StandingRow =
            serde_json::from_str(r#"{"team": "FC Test", "played": 3, "points": 7}"#).unwrap();
        assert_eq!(row.points, 7);
        assert_eq!(row.goals_for, 0);
    }

    #[test]
    fn player_record_carries_editor_fields() {
        let json = r#"{
            "_id": "pl1", "name": "Sam", "surname": "Kerr", "bio": "striker",
            "number": 9, "footed": "Left", "wantedTeam": "t1"
        }"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.number, Some(9));
        assert_eq!(player.footed.as_deref(), Some("Left"));
        assert_eq!(player.wanted_team.as_deref(), Some("t1"));
    }

    #[test]
    fn staff_records_decode_editor_fields() {
        let json = r#"{
            "_id": "c1", "name": "Pep", "surname": "G", "city": "Izmir",
            "birthDate": "1971-01-18T00:00:00.000Z"
        }"#;
        let coach: Coach = serde_json::from_str(json).unwrap();
        assert_eq!(coach.city, "Izmir");
        assert!(coach.birth_date.is_some());

        let referee: Referee = serde_json::from_str(json).unwrap();
        assert_eq!(referee.city, "Izmir");
    }

    #[test]
    fn null_player_lookup_is_none() {
        let player: Option<Player> = serde_json::from_str("null").unwrap();
        assert!(player.is_none());
    }
}
