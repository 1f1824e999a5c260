//! In-memory player directory built from the bulk players payload.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    cli::types::PlayerId,
    sleeper::types::{PlayerRecord, RawDirectory, RawPlayer},
};

/// Read access to player records by id.
///
/// Enrichment is written against this rather than [`PlayerDirectory`] so the
/// join logic can be exercised with instrumented lookups.
pub trait PlayerLookup {
    fn lookup(&self, id: &PlayerId) -> Option<&PlayerRecord>;
}

/// Immutable id -> record index for one request.
#[derive(Debug, Clone, Default)]
pub struct PlayerDirectory {
    players: HashMap<PlayerId, PlayerRecord>,
}

impl PlayerDirectory {
    /// A directory that knows no players; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: &PlayerId) -> Option<&PlayerRecord> {
        self.players.get(id)
    }
}

impl PlayerLookup for PlayerDirectory {
    fn lookup(&self, id: &PlayerId) -> Option<&PlayerRecord> {
        self.get(id)
    }
}

/// Index the bulk directory. Entries that do not decode as a player object
/// are skipped; nothing is synthesized for them.
pub fn build_index(raw: RawDirectory) -> PlayerDirectory {
    let total = raw.len();
    let players: HashMap<PlayerId, PlayerRecord> = raw
        .into_iter()
        .filter_map(|(key, value)| {
            if !value.is_object() || key.trim().is_empty() {
                return None;
            }
            match serde_json::from_value::<RawPlayer>(value) {
                Ok(player) => {
                    let id = PlayerId::new(key);
                    Some((id.clone(), player.into_record(id)))
                }
                Err(e) => {
                    debug!(player_id = %key, error = %e, "skipping malformed directory entry");
                    None
                }
            }
        })
        .collect();

    debug!(indexed = players.len(), skipped = total - players.len(), "player directory built");
    PlayerDirectory { players }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawDirectory {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_build_index_keys_by_map_key() {
        let directory = build_index(raw(json!({
            "4046": { "player_id": "4046", "first_name": "Patrick", "last_name": "Mahomes", "position": "QB", "team": "KC" },
            "6794": { "first_name": "Justin", "last_name": "Jefferson", "position": "WR", "team": "MIN" }
        })));

        assert_eq!(directory.len(), 2);
        let record = directory.get(&PlayerId::new("6794")).unwrap();
        assert_eq!(record.player_id, PlayerId::new("6794"));
        assert_eq!(record.team.as_deref(), Some("MIN"));
    }

    #[test]
    fn test_build_index_skips_malformed_entries() {
        let directory = build_index(raw(json!({
            "1": { "first_name": "Good", "last_name": "Player" },
            "2": null,
            "3": "not an object",
            "4": { "first_name": 42 },
            "": { "first_name": "No", "last_name": "Key" }
        })));

        assert_eq!(directory.len(), 1);
        assert!(directory.get(&PlayerId::new("1")).is_some());
        assert!(directory.get(&PlayerId::new("4")).is_none());
    }

    #[test]
    fn test_empty_directory_misses_everything() {
        let directory = PlayerDirectory::empty();
        assert!(directory.is_empty());
        assert!(directory.lookup(&PlayerId::new("4046")).is_none());
    }
}
