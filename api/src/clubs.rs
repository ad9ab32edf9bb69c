//! Team, league, player and reference-data endpoints.
//!
//! All read-mostly: screens fetch these per visit and refetch on demand.
//! The only writes are the fan follow/unfollow membership edits, which share
//! their shape with post likes (`POST` carrying `{userId}`).

use serde_json::json;

use crate::client::client;
use crate::error::ApiError;
use crate::models::{
    League, LeagueTopStats, MatchFixture, MatchResult, Player, PlayerSeasonStats, SearchResults,
    Season, StandingRow, Team,
};

/// All seasons, oldest first; screens default to the latest.
pub async fn seasons() -> Result<Vec<Season>, ApiError> {
    client().get_json("/api/admin/season").await
}

/// Leagues running in a season.
pub async fn leagues(season_id: &str) -> Result<Vec<League>, ApiError> {
    let path = format!("/api/admin/league?season={}", urlencoding::encode(season_id));
    client().get_json(&path).await
}

/// Teams registered in a league.
pub async fn league_teams(league_id: &str) -> Result<Vec<Team>, ApiError> {
    client().get_json(&format!("/api/league/teams/{league_id}")).await
}

/// The standings table for a league.
pub async fn league_standings(league_id: &str) -> Result<Vec<StandingRow>, ApiError> {
    client()
        .get_json(&format!("/api/league/teams-stats/{league_id}"))
        .await
}

/// Per-metric player leaderboards for a league.
pub async fn league_top_stats(league_id: &str) -> Result<LeagueTopStats, ApiError> {
    client()
        .get_json(&format!("/api/player/top-stats/{league_id}"))
        .await
}

pub async fn team(team_id: &str) -> Result<Team, ApiError> {
    client().get_json(&format!("/api/team/{team_id}")).await
}

/// Upcoming fixtures for a team within a season.
pub async fn team_matches(team_id: &str, season_id: &str) -> Result<Vec<MatchFixture>, ApiError> {
    let path = format!(
        "/api/team/matches/{team_id}?season={}",
        urlencoding::encode(season_id)
    );
    client().get_json(&path).await
}

/// Played matches for a team within a season.
pub async fn team_results(team_id: &str, season_id: &str) -> Result<Vec<MatchResult>, ApiError> {
    let path = format!(
        "/api/team/results/{team_id}?season={}",
        urlencoding::encode(season_id)
    );
    client().get_json(&path).await
}

/// The current squad.
pub async fn team_players(team_id: &str) -> Result<Vec<Player>, ApiError> {
    client().get_json(&format!("/api/team/{team_id}/players")).await
}

pub async fn follow_team(team_id: &str, user_id: &str) -> Result<(), ApiError> {
    client()
        .post_unit(&format!("/api/team/follow/{team_id}"), &json!({ "userId": user_id }))
        .await
}

pub async fn unfollow_team(team_id: &str, user_id: &str) -> Result<(), ApiError> {
    client()
        .post_unit(&format!("/api/team/unfollow/{team_id}"), &json!({ "userId": user_id }))
        .await
}

pub async fn player(player_id: &str) -> Result<Player, ApiError> {
    client().get_json(&format!("/api/player/{player_id}")).await
}

/// A player's per-season career numbers.
pub async fn player_season_stats(player_id: &str) -> Result<Vec<PlayerSeasonStats>, ApiError> {
    client()
        .get_json(&format!("/api/player/player-top-stats/{player_id}"))
        .await
}

pub async fn follow_player(player_id: &str, user_id: &str) -> Result<(), ApiError> {
    client()
        .post_unit(&format!("/api/player/follow/{player_id}"), &json!({ "userId": user_id }))
        .await
}

pub async fn unfollow_player(player_id: &str, user_id: &str) -> Result<(), ApiError> {
    client()
        .post_unit(&format!("/api/player/unfollow/{player_id}"), &json!({ "userId": user_id }))
        .await
}

/// Fixtures kicking off today, across all leagues.
pub async fn today_matches() -> Result<Vec<MatchFixture>, ApiError> {
    client().get_json("/api/admin/today-matches").await
}

/// Most recently finished matches, across all leagues.
pub async fn recent_results() -> Result<Vec<MatchResult>, ApiError> {
    client().get_json("/api/admin/recent-results").await
}

/// Free-text search over players, coaches, referees and teams.
pub async fn search(query: &str) -> Result<SearchResults, ApiError> {
    let path = format!("/api/player?q={}", urlencoding::encode(query));
    client().get_json(&path).await
}
