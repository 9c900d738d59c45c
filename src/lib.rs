//! Clan league dashboard: library with models and the stats engine.

pub mod logic;
pub mod models;

pub use logic::{
    aggregate, match_history, parse_csv_str, ranking, resolve_entry, type_breakdown, with_ranks,
    Dataset, MatchHistoryEntry, PlayerAggregate, PlayerRef, RankedPlayer, ResolvedPlayer,
    TypeBreakdown,
};
pub use models::{
    player_by_id, player_by_name, players_by_race, players_by_team, players_by_tier, parse_roster,
    BroadcastError, BroadcastState, CurrentPlayers, MatchRecord, MatchType, PlayerMeta, Race,
    RawMatchRow, RosterEntry, RoundResult, Side, Team, TeamPatch, TeamState, REGISTRY, ROSTER_SIZE,
};
