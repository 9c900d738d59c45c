//! Per-player match history with a running rating trajectory.
//!
//! The trajectory replays matches in sheet order with fixed deltas and a
//! floor. It deliberately uses a different rule than the aggregate rating
//! formula; the two feed different views and are not expected to agree.

use crate::models::{player_by_name, MatchRecord, MatchType, Race, RosterEntry, Team};
use serde::Serialize;

use super::aggregate::{BASE_RATING, RATING_FLOOR};

const WIN_DELTA: i32 = 25;
const LOSS_DELTA: i32 = -15;

/// A name on the other (or own) side of a match, with its registry race.
/// Off-roster names show as Unknown here; the hint fallback is an
/// aggregation-only concern.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlayerRef {
    pub name: String,
    pub race: Race,
}

fn player_refs(roster: &[RosterEntry]) -> Vec<PlayerRef> {
    roster
        .iter()
        .map(|entry| PlayerRef {
            name: entry.name.clone(),
            race: player_by_name(&entry.name).map_or(Race::Unknown, |m| m.race),
        })
        .collect()
}

/// One match a player took part in, in chronological order.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchHistoryEntry {
    pub round: u32,
    pub match_number: u32,
    pub match_type: MatchType,
    pub map: String,
    pub side: Team,
    pub is_win: bool,
    /// Raw delta applied (+25 / -15), unchanged even when the floor bites.
    pub rating_delta: i32,
    /// Cumulative rating after this match, never below the floor.
    pub rating: i32,
    pub opponents: Vec<PlayerRef>,
    /// Own roster minus the player (team matches only).
    pub teammates: Vec<PlayerRef>,
}

/// Replay all matches for one player (matched by exact display name).
/// Baseline 1000; a participated match that is not a win counts against the
/// trajectory, including matches with no recorded winner.
pub fn match_history(records: &[MatchRecord], name: &str) -> Vec<MatchHistoryEntry> {
    let mut rating = BASE_RATING;
    let mut entries = Vec::new();

    for record in records {
        let Some(side) = record.side_of(name) else {
            continue;
        };
        let is_win = record.winner == Some(side);
        let delta = if is_win { WIN_DELTA } else { LOSS_DELTA };
        rating = (rating + delta).max(RATING_FLOOR);

        let teammates = if record.match_type == MatchType::Team {
            record
                .roster(side)
                .iter()
                .filter(|entry| entry.name != name)
                .map(|entry| PlayerRef {
                    name: entry.name.clone(),
                    race: player_by_name(&entry.name).map_or(Race::Unknown, |m| m.race),
                })
                .collect()
        } else {
            Vec::new()
        };

        entries.push(MatchHistoryEntry {
            round: record.round,
            match_number: record.match_number,
            match_type: record.match_type,
            map: record.map.clone(),
            side,
            is_win,
            rating_delta: delta,
            rating,
            opponents: player_refs(record.opposing_roster(side)),
            teammates,
        });
    }

    entries
}

/// Win/total split by match format, for the player detail view.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TypeBreakdown {
    pub match_type: MatchType,
    pub wins: u32,
    pub total: u32,
    pub win_rate: u32,
}

/// Per-format record for one player, Individual first then Team.
pub fn type_breakdown(records: &[MatchRecord], name: &str) -> Vec<TypeBreakdown> {
    let mut out = vec![
        TypeBreakdown {
            match_type: MatchType::Individual,
            wins: 0,
            total: 0,
            win_rate: 0,
        },
        TypeBreakdown {
            match_type: MatchType::Team,
            wins: 0,
            total: 0,
            win_rate: 0,
        },
    ];
    for record in records {
        let Some(side) = record.side_of(name) else {
            continue;
        };
        let slot = match record.match_type {
            MatchType::Individual => &mut out[0],
            MatchType::Team => &mut out[1],
        };
        slot.total += 1;
        if record.winner == Some(side) {
            slot.wins += 1;
        }
    }
    for slot in &mut out {
        slot.win_rate = if slot.total > 0 {
            (100.0 * slot.wins as f64 / slot.total as f64).round() as u32
        } else {
            0
        };
    }
    out
}
