//! Data structures for the league dashboard: registry, match records,
//! broadcast state.

mod broadcast;
mod player;
mod record;

pub use broadcast::{
    BroadcastError, BroadcastState, CurrentPlayers, RoundResult, Side, TeamPatch, TeamState,
    ROSTER_SIZE,
};
pub use player::{
    player_by_id, player_by_name, players_by_race, players_by_team, players_by_tier, PlayerMeta,
    Race, REGISTRY,
};
pub use record::{parse_roster, MatchRecord, MatchType, RawMatchRow, RosterEntry, Team};
