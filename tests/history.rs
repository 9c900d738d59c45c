//! Integration tests for the match-history trajectory and per-format record.

use league_broadcast_web::{
    match_history, type_breakdown, MatchRecord, MatchType, Race, RawMatchRow, Team,
};

fn rec(
    round: &str,
    match_number: &str,
    match_type: &str,
    team1_players: &str,
    team2_players: &str,
    winner: &str,
) -> MatchRecord {
    MatchRecord::from_raw(RawMatchRow {
        round: Some(round.to_string()),
        match_number: Some(match_number.to_string()),
        match_type: Some(match_type.to_string()),
        tier: None,
        map: Some("Python".to_string()),
        team1: Some("3".to_string()),
        team2: Some("4".to_string()),
        team1_players: Some(team1_players.to_string()),
        team2_players: Some(team2_players.to_string()),
        winner: if winner.is_empty() {
            None
        } else {
            Some(winner.to_string())
        },
        result: None,
    })
    .unwrap()
}

#[test]
fn trajectory_applies_fixed_deltas_from_baseline() {
    let records = vec![
        rec("1", "1", "Individual", "Alice:P", "Bob:T", "1"),
        rec("2", "1", "Individual", "Alice:P", "Bob:T", "2"),
    ];
    let history = match_history(&records, "Alice");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].rating_delta, 25);
    assert_eq!(history[0].rating, 1025);
    assert_eq!(history[1].rating_delta, -15);
    assert_eq!(history[1].rating, 1010);
}

#[test]
fn trajectory_never_drops_below_floor() {
    let records: Vec<MatchRecord> = (1..=40)
        .map(|i| rec("1", &i.to_string(), "Individual", "Winner:P", "Loser:T", "1"))
        .collect();
    let history = match_history(&records, "Loser");
    assert_eq!(history.len(), 40);
    assert!(history.iter().all(|e| e.rating >= 500));
    assert_eq!(history.last().unwrap().rating, 500);
    // The recorded delta stays raw even when the floor bites.
    assert!(history.iter().all(|e| e.rating_delta == -15));
}

#[test]
fn no_winner_match_counts_against_the_trajectory() {
    let records = vec![rec("1", "1", "Individual", "Alice:P", "Bob:T", "")];
    let history = match_history(&records, "Alice");
    assert_eq!(history.len(), 1);
    assert!(!history[0].is_win);
    assert_eq!(history[0].rating, 985);
}

#[test]
fn opponents_resolve_through_the_registry() {
    let records = vec![rec("1", "1", "Individual", "Alice:P", "이대연:Z", "1")];
    let history = match_history(&records, "Alice");
    assert_eq!(history[0].opponents.len(), 1);
    assert_eq!(history[0].opponents[0].name, "이대연");
    assert_eq!(history[0].opponents[0].race, Race::Z);
}

#[test]
fn off_roster_opponent_shows_unknown_race() {
    let records = vec![rec("1", "1", "Individual", "Alice:P", "Stranger:Zerg", "1")];
    let history = match_history(&records, "Alice");
    // Registry only here; the hint fallback belongs to aggregation.
    assert_eq!(history[0].opponents[0].race, Race::Unknown);
}

#[test]
fn teammates_exclude_self_and_only_exist_for_team_matches() {
    let records = vec![
        rec("1", "1", "Team", "Alice:P, 이대연:Z", "Bob:T, Carol:Z", "1"),
        rec("2", "1", "Individual", "Alice:P", "Bob:T", "1"),
    ];
    let history = match_history(&records, "Alice");
    assert_eq!(history[0].teammates.len(), 1);
    assert_eq!(history[0].teammates[0].name, "이대연");
    assert_eq!(history[0].opponents.len(), 2);
    assert!(history[1].teammates.is_empty());
}

#[test]
fn side_resolution_checks_team_one_first() {
    let records = vec![rec("1", "1", "Individual", "Alice:P", "Alice:P", "2")];
    let history = match_history(&records, "Alice");
    assert_eq!(history[0].side, Team::One);
    assert!(!history[0].is_win);
}

#[test]
fn absent_player_has_empty_history() {
    let records = vec![rec("1", "1", "Individual", "Alice:P", "Bob:T", "1")];
    assert!(match_history(&records, "Nobody").is_empty());
}

#[test]
fn breakdown_splits_by_match_format() {
    let records = vec![
        rec("1", "1", "Individual", "Alice:P", "Bob:T", "1"),
        rec("1", "2", "Individual", "Alice:P", "Bob:T", "2"),
        rec("2", "1", "Team", "Alice:P, Carol:Z", "Bob:T, Dave:T", "1"),
    ];
    let breakdown = type_breakdown(&records, "Alice");
    assert_eq!(breakdown[0].match_type, MatchType::Individual);
    assert_eq!((breakdown[0].wins, breakdown[0].total, breakdown[0].win_rate), (1, 2, 50));
    assert_eq!(breakdown[1].match_type, MatchType::Team);
    assert_eq!((breakdown[1].wins, breakdown[1].total, breakdown[1].win_rate), (1, 1, 100));
}
