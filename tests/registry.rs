//! Integration tests for the compiled-in player registry.

use league_broadcast_web::{
    player_by_id, player_by_name, players_by_race, players_by_team, players_by_tier, Race,
    REGISTRY,
};

#[test]
fn ids_and_display_names_are_unique() {
    for (i, a) in REGISTRY.iter().enumerate() {
        for b in &REGISTRY[i + 1..] {
            assert_ne!(a.id, b.id);
            assert_ne!(a.display_name, b.display_name);
        }
    }
}

#[test]
fn lookup_by_id_and_name_agree() {
    let by_id = player_by_id("Tana").unwrap();
    let by_name = player_by_name("이대연").unwrap();
    assert_eq!(by_id, by_name);
    assert_eq!(by_id.team, 1);
    assert_eq!(by_id.race, Race::Z);
    assert!(player_by_name("Tana").is_none()); // names and ids are separate keys
}

#[test]
fn team_race_and_tier_filters_partition_the_registry() {
    let total: usize = (1..=6).map(|t| players_by_team(t).len()).sum();
    assert_eq!(total, REGISTRY.len());
    assert!(players_by_team(1).iter().all(|p| p.team == 1));
    assert!(players_by_race(Race::R).len() >= 2);
    assert!(!players_by_tier("갓").is_empty());
    assert!(players_by_tier("no-such-tier").is_empty());
}

#[test]
fn race_hint_scan_prefers_p_then_t_then_z_then_r() {
    assert_eq!(Race::from_hint("P"), Race::P);
    assert_eq!(Race::from_hint("TP"), Race::P);
    assert_eq!(Race::from_hint("Terran"), Race::T);
    assert_eq!(Race::from_hint("Z"), Race::Z);
    assert_eq!(Race::from_hint("R"), Race::R);
    assert_eq!(Race::from_hint("protoss"), Race::Unknown); // scan is case-sensitive
    assert_eq!(Race::from_hint(""), Race::Unknown);
}
