//! Integration tests for the live broadcast state machine.

use league_broadcast_web::{BroadcastError, BroadcastState, Side, TeamPatch, ROSTER_SIZE};

fn state_with_rosters() -> BroadcastState {
    let mut state = BroadcastState::default();
    state.set_team_info(
        Side::Home,
        TeamPatch {
            name: Some("Team 1".to_string()),
            players: Some((1..=7).map(|i| format!("H{i}")).collect()),
        },
    );
    state.set_team_info(
        Side::Away,
        TeamPatch {
            name: Some("Team 2".to_string()),
            players: Some((1..=7).map(|i| format!("A{i}")).collect()),
        },
    );
    state
}

#[test]
fn default_state_is_blank_round_one() {
    let state = BroadcastState::default();
    assert_eq!(state.current_round, 1);
    assert_eq!(state.home.players.len(), ROSTER_SIZE);
    assert!(state.round_results.is_empty());
    assert!(!state.is_live);
    assert_eq!(state.current_players().home_player, "");
}

#[test]
fn record_then_clear_round_trips_exactly() {
    let mut state = state_with_rosters();
    let before = state.clone();
    state.record_round_winner(2, Some(Side::Home));
    assert_eq!(state.home.score, 1);
    state.record_round_winner(2, None);
    assert_eq!(state, before);
}

#[test]
fn scores_are_recounted_not_incremented() {
    let mut state = state_with_rosters();
    state.record_round_winner(0, Some(Side::Home));
    state.record_round_winner(1, Some(Side::Home));
    assert_eq!((state.home.score, state.away.score), (2, 0));
    // Flipping an already-recorded round must recount, not drift.
    state.record_round_winner(1, Some(Side::Away));
    assert_eq!((state.home.score, state.away.score), (1, 1));
    assert_eq!(state.round_results.len(), 2);
}

#[test]
fn round_pointer_follows_highest_recorded_round() {
    let mut state = state_with_rosters();
    state.record_round_winner(2, Some(Side::Away));
    assert_eq!(state.current_round, 4);
    assert_eq!(state.home.current_player_index, 3);
    assert_eq!(state.away.current_player_index, 3);
    // Clearing the highest round moves the pointer back.
    state.record_round_winner(2, None);
    assert_eq!(state.current_round, 1);
    assert_eq!(state.home.current_player_index, 0);
}

#[test]
fn round_pointer_wraps_at_roster_length() {
    let mut state = state_with_rosters();
    state.record_round_winner(6, Some(Side::Home)); // round 7, last roster slot
    assert_eq!(state.current_round, 8);
    assert_eq!(state.home.current_player_index, 0);
    assert_eq!(state.current_players().home_player, "H1");
}

#[test]
fn round_result_captures_players_at_record_time() {
    let mut state = state_with_rosters();
    state.record_round_winner(1, Some(Side::Home));
    let result = &state.round_results[0];
    assert_eq!(result.round, 2);
    assert_eq!(result.home_player, "H2");
    assert_eq!(result.away_player, "A2");
    // Later roster edits do not rewrite stored results.
    state.set_roster_slot(Side::Home, 1, "Sub".to_string()).unwrap();
    assert_eq!(state.round_results[0].home_player, "H2");
}

#[test]
fn roster_slot_out_of_range_is_rejected() {
    let mut state = BroadcastState::default();
    let err = state.set_roster_slot(Side::Home, ROSTER_SIZE, "X".to_string());
    assert_eq!(
        err,
        Err(BroadcastError::RosterIndexOutOfRange { index: ROSTER_SIZE })
    );
    assert_eq!(state, BroadcastState::default());
}

#[test]
fn team_patch_merges_shallowly() {
    let mut state = state_with_rosters();
    state.set_team_info(
        Side::Home,
        TeamPatch {
            name: Some(String::new()),
            players: None,
        },
    );
    // Empty name allowed, roster untouched.
    assert_eq!(state.home.name, "");
    assert_eq!(state.home.players[0], "H1");
    // A short roster patch is padded back to the fixed size.
    state.set_team_info(
        Side::Away,
        TeamPatch {
            name: None,
            players: Some(vec!["X".to_string()]),
        },
    );
    assert_eq!(state.away.players.len(), ROSTER_SIZE);
    assert_eq!(state.away.players[0], "X");
    assert_eq!(state.away.players[1], "");
}

#[test]
fn is_live_is_independent_of_round_state() {
    let mut state = state_with_rosters();
    state.set_is_live(true);
    assert!(state.is_live);
    state.record_round_winner(0, Some(Side::Home));
    assert!(state.is_live);
}

#[test]
fn reset_returns_to_default() {
    let mut state = state_with_rosters();
    state.set_is_live(true);
    state.set_match_title("Showmatch".to_string());
    state.record_round_winner(0, Some(Side::Away));
    state.reset_all();
    assert_eq!(state, BroadcastState::default());
}

#[test]
fn snapshot_save_and_load_round_trip() {
    let path = std::env::temp_dir().join("league_broadcast_snapshot_test.json");
    let mut state = state_with_rosters();
    state.record_round_winner(0, Some(Side::Home));
    state.set_is_live(true);
    state.save(&path).unwrap();
    let loaded = BroadcastState::load_or_default(&path);
    assert_eq!(loaded, state);
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn missing_snapshot_loads_default() {
    let path = std::env::temp_dir().join("league_broadcast_snapshot_missing.json");
    let _ = std::fs::remove_file(&path);
    assert_eq!(BroadcastState::load_or_default(&path), BroadcastState::default());
}
