//! The stats engine: CSV ingest, aggregation, ranking, history.

mod aggregate;
mod history;
mod ingest;

pub use aggregate::{
    aggregate, ranking, resolve_entry, with_ranks, PlayerAggregate, RankedPlayer, ResolvedPlayer,
    BASE_RATING, RATING_FLOOR,
};
pub use history::{match_history, type_breakdown, MatchHistoryEntry, PlayerRef, TypeBreakdown};
pub use ingest::{parse_csv_str, Dataset};
