//! The aggregation engine: fold the full match list into per-player
//! summaries and a tie-sharing ranking.
//!
//! Pure functions of their inputs: no I/O, no global state, full recompute
//! on every call.

use crate::models::{player_by_name, MatchRecord, Race, RosterEntry, Team};
use serde::Serialize;
use std::collections::HashMap;

/// Rating baseline before any win/loss/volume adjustment.
pub const BASE_RATING: i32 = 1000;
/// Ratings never drop below this.
pub const RATING_FLOOR: i32 = 500;
const WIN_BONUS: i32 = 25;
const LOSS_PENALTY: i32 = 15;
const GAME_BONUS_CAP: i32 = 100;

/// A roster entry resolved against the registry, or through the heuristic
/// fallback when the name is off-roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ResolvedPlayer {
    pub name: String,
    pub id: String,
    pub race: Race,
    pub tier: String,
    /// Team number from the registry; None when unresolved.
    pub team: Option<u32>,
}

/// Resolve one roster entry. The registry is authoritative; for names it
/// does not know, the race is scanned out of the hint and tier/team stay
/// unknown. Both tiers are load-bearing: historical rows contain off-roster
/// names that must still aggregate.
pub fn resolve_entry(entry: &RosterEntry) -> ResolvedPlayer {
    match player_by_name(&entry.name) {
        Some(meta) => ResolvedPlayer {
            name: meta.display_name.to_string(),
            id: meta.id.to_string(),
            race: meta.race,
            tier: meta.tier.to_string(),
            team: Some(meta.team),
        },
        None => ResolvedPlayer {
            name: entry.name.clone(),
            id: entry.name.clone(),
            race: Race::from_hint(&entry.race_hint),
            tier: "Unknown".to_string(),
            team: None,
        },
    }
}

/// Per-player summary over the full match list. Identity is
/// `display_name + team label`; the same human under two inconsistent team
/// labels stays two buckets (known data-quality edge, deliberately not
/// merged).
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PlayerAggregate {
    pub name: String,
    pub id: String,
    /// Registry team number, or the match's raw team label for off-roster
    /// names.
    pub team: String,
    pub race: Race,
    pub tier: String,
    pub wins: u32,
    pub losses: u32,
    pub total_games: u32,
    /// Rounded integer percentage.
    pub win_rate: u32,
    pub rating: i32,
}

impl PlayerAggregate {
    pub fn key(&self) -> String {
        format!("{}_{}", self.name, self.team)
    }
}

/// A player aggregate with its league-wide rank attached.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct RankedPlayer {
    pub rank: u32,
    #[serde(flatten)]
    pub aggregate: PlayerAggregate,
}

/// Fold every match once into per-player aggregates. Buckets appear in
/// first-seen order; recomputation from the same list is byte-identical.
///
/// A match with no recorded winner counts as a game played for everyone on
/// it but as neither a win nor a loss for anyone.
pub fn aggregate(records: &[MatchRecord]) -> Vec<PlayerAggregate> {
    let mut buckets: Vec<PlayerAggregate> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        fold_side(&mut buckets, &mut index, record, Team::One);
        fold_side(&mut buckets, &mut index, record, Team::Two);
    }

    for bucket in &mut buckets {
        bucket.win_rate = if bucket.total_games > 0 {
            (100.0 * bucket.wins as f64 / bucket.total_games as f64).round() as u32
        } else {
            0
        };
        let volume_bonus = (5 * bucket.total_games as i32).min(GAME_BONUS_CAP);
        bucket.rating = (BASE_RATING + WIN_BONUS * bucket.wins as i32
            - LOSS_PENALTY * bucket.losses as i32
            + volume_bonus)
            .max(RATING_FLOOR);
    }

    buckets.retain(|b| b.total_games > 0);
    buckets
}

fn fold_side(
    buckets: &mut Vec<PlayerAggregate>,
    index: &mut HashMap<String, usize>,
    record: &MatchRecord,
    side: Team,
) {
    let side_label = match side {
        Team::One => &record.team1_label,
        Team::Two => &record.team2_label,
    };
    for entry in record.roster(side) {
        let resolved = resolve_entry(entry);
        let team = resolved
            .team
            .map(|t| t.to_string())
            .unwrap_or_else(|| side_label.clone());
        let key = format!("{}_{}", resolved.name, team);
        let pos = *index.entry(key).or_insert_with(|| {
            buckets.push(PlayerAggregate {
                name: resolved.name.clone(),
                id: resolved.id.clone(),
                team,
                race: resolved.race,
                // The registry wins; otherwise the match's own tier column.
                tier: if resolved.tier != "Unknown" {
                    resolved.tier.clone()
                } else {
                    record.tier.clone()
                },
                wins: 0,
                losses: 0,
                total_games: 0,
                win_rate: 0,
                rating: BASE_RATING,
            });
            buckets.len() - 1
        });
        let bucket = &mut buckets[pos];
        bucket.total_games += 1;
        match record.winner {
            Some(winner) if winner == side => bucket.wins += 1,
            Some(_) => bucket.losses += 1,
            None => {}
        }
    }
}

/// Attach rating ranks without reordering the input. Ties share the rank of
/// the first tied position; the next distinct rating takes its 0-based
/// position in the rating-sorted snapshot plus one, so the sequence skips
/// past tied groups ([1080, 1080, 1000] ranks as [1, 1, 3]).
pub fn with_ranks(aggregates: &[PlayerAggregate]) -> Vec<RankedPlayer> {
    let mut snapshot: Vec<&PlayerAggregate> = aggregates.iter().collect();
    snapshot.sort_by(|a, b| b.rating.cmp(&a.rating));

    let mut rank_by_key: HashMap<String, u32> = HashMap::new();
    let mut rank = 1u32;
    for (i, agg) in snapshot.iter().enumerate() {
        if i > 0 && snapshot[i - 1].rating != agg.rating {
            rank = i as u32 + 1;
        }
        rank_by_key.insert(agg.key(), rank);
    }

    aggregates
        .iter()
        .map(|agg| RankedPlayer {
            rank: rank_by_key[&agg.key()],
            aggregate: agg.clone(),
        })
        .collect()
}

/// Aggregates sorted by rank (the ranking view's default ordering).
pub fn ranking(records: &[MatchRecord]) -> Vec<RankedPlayer> {
    let mut ranked = with_ranks(&aggregate(records));
    ranked.sort_by(|a, b| {
        a.rank
            .cmp(&b.rank)
            .then_with(|| a.aggregate.name.cmp(&b.aggregate.name))
    });
    ranked
}
