//! Feed catalogs for each API version.
//!
//! Pure validation data. The catalog for a version is fixed at compile time;
//! v1.1 and v1.2 share one list, v1.0 predates the DFS and standings feeds.

/// Feeds recognized by API v1.0.
pub(crate) const V1_0_FEEDS: &[&str] = &[
    "current_season",
    "cumulative_player_stats",
    "full_game_schedule",
    "daily_game_schedule",
    "daily_player_stats",
    "game_playbyplay",
    "game_boxscore",
    "scoreboard",
    "player_gamelogs",
    "team_gamelogs",
    "roster_players",
    "game_startinglineup",
    "active_players",
    "player_injuries",
    "latest_updates",
];

/// Feeds recognized by API v1.1 and v1.2.
pub(crate) const V1_FEEDS: &[&str] = &[
    "current_season",
    "cumulative_player_stats",
    "full_game_schedule",
    "daily_game_schedule",
    "daily_player_stats",
    "game_playbyplay",
    "game_boxscore",
    "scoreboard",
    "player_gamelogs",
    "team_gamelogs",
    "roster_players",
    "game_startinglineup",
    "active_players",
    "player_injuries",
    "latest_updates",
    "daily_dfs",
    "overall_team_standings",
    "conference_team_standings",
    "division_team_standings",
    "playoff_team_standings",
];

/// The single feed scoped to a league without a season.
pub(crate) const LEAGUE_ONLY_FEED: &str = "current_season";

/// Whether `feed` is addressed by league alone, with no season segment.
pub(crate) fn is_league_only(feed: &str) -> bool {
    feed == LEAGUE_ONLY_FEED
}
