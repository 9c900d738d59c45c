//! Live exhibition-match state for the broadcast overlay.
//!
//! Independent of the historical dataset: an operator fills in two rosters,
//! records round winners (in any order, including corrections), and the
//! overlay renders scores and the current pairing. Scores and pointers are
//! recomputed in full on every mutation so out-of-order edits can never
//! drift.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed roster length per side. Round numbers wrap into this (a series
/// longer than 7 rounds cycles through the roster again).
pub const ROSTER_SIZE: usize = 7;

/// Errors from broadcast-state operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BroadcastError {
    /// Roster slot index outside the fixed roster size.
    RosterIndexOutOfRange { index: usize },
}

impl std::fmt::Display for BroadcastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BroadcastError::RosterIndexOutOfRange { index } => {
                write!(f, "Roster slot {} out of range (roster holds {})", index, ROSTER_SIZE)
            }
        }
    }
}

/// Which side of the exhibition series.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Home,
    Away,
}

/// One side's mutable state.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamState {
    pub name: String,
    /// Fixed-size roster; empty strings are unset slots.
    pub players: Vec<String>,
    pub score: u32,
    /// 0-based roster slot up next (derived, recomputed on every mutation).
    pub current_player_index: usize,
}

impl Default for TeamState {
    fn default() -> Self {
        Self {
            name: String::new(),
            players: vec![String::new(); ROSTER_SIZE],
            score: 0,
            current_player_index: 0,
        }
    }
}

/// Shallow-merge patch for one side. Absent fields are left untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub players: Option<Vec<String>>,
}

/// A recorded round result. Results with no winner are removed rather than
/// stored, so `winner` is always set here.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    /// 1-based round number.
    pub round: u32,
    /// Roster names at the time the result was first recorded.
    pub home_player: String,
    pub away_player: String,
    pub winner: Side,
}

/// The pairing currently up, per [`BroadcastState::current_players`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct CurrentPlayers {
    pub home_player: String,
    pub away_player: String,
}

/// Full broadcast state. Serialized whole to a snapshot file after every
/// mutation and rehydrated at startup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BroadcastState {
    pub home: TeamState,
    pub away: TeamState,
    /// 1-based round currently being played.
    pub current_round: u32,
    pub round_results: Vec<RoundResult>,
    /// Advisory flag for the overlay: full scene vs. minimal scoreboard.
    /// Gates nothing; every operation stays valid either way.
    pub is_live: bool,
    pub match_title: String,
}

impl Default for BroadcastState {
    fn default() -> Self {
        Self {
            home: TeamState::default(),
            away: TeamState::default(),
            current_round: 1,
            round_results: Vec::new(),
            is_live: false,
            match_title: String::new(),
        }
    }
}

impl BroadcastState {
    fn team_mut(&mut self, side: Side) -> &mut TeamState {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }

    pub fn team(&self, side: Side) -> &TeamState {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Shallow-merge a patch into one side. Empty names are allowed (they
    /// render blank). A patched roster is normalized to the fixed size.
    pub fn set_team_info(&mut self, side: Side, patch: TeamPatch) {
        let team = self.team_mut(side);
        if let Some(name) = patch.name {
            team.name = name;
        }
        if let Some(mut players) = patch.players {
            players.resize(ROSTER_SIZE, String::new());
            team.players = players;
        }
    }

    /// Set a single 0-based roster slot.
    pub fn set_roster_slot(
        &mut self,
        side: Side,
        index: usize,
        name: String,
    ) -> Result<(), BroadcastError> {
        if index >= ROSTER_SIZE {
            return Err(BroadcastError::RosterIndexOutOfRange { index });
        }
        self.team_mut(side).players[index] = name;
        Ok(())
    }

    pub fn set_match_title(&mut self, title: String) {
        self.match_title = title;
    }

    /// Record, change, or clear the winner of a round (`round_index` is
    /// 0-based). `None` removes any stored result for that round. Scores and
    /// the current-round pointer are recounted from scratch afterwards.
    pub fn record_round_winner(&mut self, round_index: usize, winner: Option<Side>) {
        let round = round_index as u32 + 1;
        let existing = self.round_results.iter().position(|r| r.round == round);
        match winner {
            None => {
                if let Some(pos) = existing {
                    self.round_results.remove(pos);
                }
            }
            Some(w) => match existing {
                Some(pos) => self.round_results[pos].winner = w,
                None => self.round_results.push(RoundResult {
                    round,
                    home_player: self.home.players.get(round_index).cloned().unwrap_or_default(),
                    away_player: self.away.players.get(round_index).cloned().unwrap_or_default(),
                    winner: w,
                }),
            },
        }
        self.recompute_derived();
    }

    /// Recount scores and pointers from the stored results. Never applied
    /// incrementally.
    fn recompute_derived(&mut self) {
        self.home.score = self
            .round_results
            .iter()
            .filter(|r| r.winner == Side::Home)
            .count() as u32;
        self.away.score = self
            .round_results
            .iter()
            .filter(|r| r.winner == Side::Away)
            .count() as u32;
        let completed = self.round_results.iter().map(|r| r.round).max().unwrap_or(0);
        let next_index = completed as usize % ROSTER_SIZE;
        self.home.current_player_index = next_index;
        self.away.current_player_index = next_index;
        self.current_round = completed + 1;
    }

    /// Back to a blank series: empty teams, no results, round 1, not live.
    pub fn reset_all(&mut self) {
        *self = Self::default();
    }

    pub fn set_is_live(&mut self, is_live: bool) {
        self.is_live = is_live;
    }

    /// The roster entries at each side's current pointer.
    pub fn current_players(&self) -> CurrentPlayers {
        CurrentPlayers {
            home_player: self
                .home
                .players
                .get(self.home.current_player_index)
                .cloned()
                .unwrap_or_default(),
            away_player: self
                .away
                .players
                .get(self.away.current_player_index)
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Write the whole state to the snapshot file.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Rehydrate from the snapshot file; a missing or unreadable snapshot
    /// yields the default state.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(state) => state,
                Err(e) => {
                    log::warn!("Ignoring corrupt broadcast snapshot {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
