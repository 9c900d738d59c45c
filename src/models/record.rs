//! Typed match records parsed from the league's result sheet.

use serde::{Deserialize, Serialize};

/// Which side of a match won.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    One,
    Two,
}

/// Match format. Anything that is not an individual game (team melee,
/// 2vs2, 3vs3) counts as a team-style match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Individual,
    Team,
}

impl MatchType {
    /// Parse the CSV `type` column. The sheet uses both English and Korean
    /// labels for individual games.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.eq_ignore_ascii_case("individual") || label == "개인전" {
            MatchType::Individual
        } else {
            MatchType::Team
        }
    }
}

/// One slot of a roster field: `"name[:raceinfo]"`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    /// Free-form race hint after the `:`, empty when absent. Only consulted
    /// when the registry has no entry for the name.
    pub race_hint: String,
}

impl RosterEntry {
    pub fn parse(entry: &str) -> Self {
        match entry.split_once(':') {
            Some((name, hint)) => Self {
                name: name.trim().to_string(),
                race_hint: hint.trim().to_string(),
            },
            None => Self {
                name: entry.trim().to_string(),
                race_hint: String::new(),
            },
        }
    }
}

/// Split a comma-delimited roster field into entries. Empty slots are
/// skipped.
pub fn parse_roster(field: &str) -> Vec<RosterEntry> {
    field
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(RosterEntry::parse)
        .collect()
}

/// One row of the result sheet as it comes off the CSV reader. Every field
/// is optional here; validation happens in [`MatchRecord::from_raw`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawMatchRow {
    #[serde(default)]
    pub round: Option<String>,
    #[serde(rename = "match", default)]
    pub match_number: Option<String>,
    #[serde(rename = "type", default)]
    pub match_type: Option<String>,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub map: Option<String>,
    #[serde(default)]
    pub team1: Option<String>,
    #[serde(default)]
    pub team2: Option<String>,
    #[serde(default)]
    pub team1_players: Option<String>,
    #[serde(default)]
    pub team2_players: Option<String>,
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
}

/// A validated match record. Immutable once parsed; the engine only derives
/// new structures from lists of these.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct MatchRecord {
    /// League round, 1-based.
    pub round: u32,
    pub match_number: u32,
    pub match_type: MatchType,
    /// Tier label of the match (meaningful for individual games).
    pub tier: String,
    pub map: String,
    pub team1_label: String,
    pub team2_label: String,
    pub team1_roster: Vec<RosterEntry>,
    pub team2_roster: Vec<RosterEntry>,
    /// None when the sheet has no result recorded for this row.
    pub winner: Option<Team>,
    /// Free-form score text, e.g. "2:1".
    pub result: String,
}

fn numeric_field(field: &Option<String>) -> Option<u32> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

fn text_field(field: Option<String>) -> String {
    field.map(|s| s.trim().to_string()).unwrap_or_default()
}

impl MatchRecord {
    /// Validate a raw row. Rows without a numeric `round` and `match` are
    /// rejected (the caller drops them silently).
    pub fn from_raw(raw: RawMatchRow) -> Option<Self> {
        let round = numeric_field(&raw.round)?;
        let match_number = numeric_field(&raw.match_number)?;
        let winner = match raw.winner.as_deref().map(str::trim) {
            Some("1") => Some(Team::One),
            Some("2") => Some(Team::Two),
            _ => None,
        };
        Some(Self {
            round,
            match_number,
            match_type: MatchType::from_label(raw.match_type.as_deref().unwrap_or("")),
            tier: text_field(raw.tier),
            map: text_field(raw.map),
            team1_label: text_field(raw.team1),
            team2_label: text_field(raw.team2),
            team1_roster: parse_roster(raw.team1_players.as_deref().unwrap_or("")),
            team2_roster: parse_roster(raw.team2_players.as_deref().unwrap_or("")),
            winner,
            result: text_field(raw.result),
        })
    }

    /// Which side a player is on, by exact name match. Team 1 is checked
    /// first; a name present on both sides resolves to team 1.
    pub fn side_of(&self, name: &str) -> Option<Team> {
        if self.team1_roster.iter().any(|e| e.name == name) {
            Some(Team::One)
        } else if self.team2_roster.iter().any(|e| e.name == name) {
            Some(Team::Two)
        } else {
            None
        }
    }

    pub fn roster(&self, side: Team) -> &[RosterEntry] {
        match side {
            Team::One => &self.team1_roster,
            Team::Two => &self.team2_roster,
        }
    }

    pub fn opposing_roster(&self, side: Team) -> &[RosterEntry] {
        match side {
            Team::One => &self.team2_roster,
            Team::Two => &self.team1_roster,
        }
    }
}
