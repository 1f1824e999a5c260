//! Join player ids against the directory.
//!
//! Ids the directory does not know are dropped, not replaced with
//! placeholders. Output keeps input order minus the drops, which the front
//! end relies on for lineup rendering.

use crate::{
    cli::types::PlayerId,
    engine::{directory::PlayerLookup, views::EnrichedPlayer},
    sleeper::types::PlayerRecord,
};


/// Sleeper marks an unfilled starter slot with `"0"`.
const EMPTY_SLOT: &str = "0";

/// `"{first} {last}"`, trimmed; a missing half counts as empty.
pub fn display_name(record: &PlayerRecord) -> String {
    format!(
        "{} {}",
        record.first_name.as_deref().unwrap_or(""),
        record.last_name.as_deref().unwrap_or("")
    )
    .trim()
    .to_string()
}

/// Projection for a single id, or `None` when the directory lacks it.
pub fn project<L>(id: &PlayerId, lookup: &L) -> Option<EnrichedPlayer>
where
    L: PlayerLookup + ?Sized,
{
    lookup.lookup(id).map(EnrichedPlayer::from_record)
}

pub fn enrich<L>(ids: &[PlayerId], lookup: &L) -> Vec<EnrichedPlayer>
where
    L: PlayerLookup + ?Sized,
{
    ids.iter().filter_map(|id| project(id, lookup)).collect()
}

/// Like [`enrich`] for lineup slots. Empty slots (`null` or `"0"`) are
/// skipped before any lookup.
pub fn enrich_slots<L>(slots: &[Option<PlayerId>], lookup: &L) -> Vec<EnrichedPlayer>
where
    L: PlayerLookup + ?Sized,
{
    slots
        .iter()
        .flatten()
        .filter(|id| id.as_str() != EMPTY_SLOT)
        .filter_map(|id| project(id, lookup))
        .collect()
}
