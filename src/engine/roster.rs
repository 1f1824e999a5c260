//! Roster ownership resolution.

use tracing::warn;

use crate::{cli::types::UserId, sleeper::types::RosterSnapshot};

/// The roster `owner` holds in a league, if any.
///
/// First match in upstream order wins. Sleeper does not promise one roster
/// per owner, so a later duplicate is logged and ignored.
pub fn resolve_roster<'a>(owner: &UserId, rosters: &'a [RosterSnapshot]) -> Option<&'a RosterSnapshot> {
    let mut owned = rosters
        .iter()
        .filter(|roster| roster.owner_id.as_ref() == Some(owner));

    let first = owned.next()?;
    if let Some(duplicate) = owned.next() {
        warn!(
            owner = %owner,
            chosen = first.roster_id,
            ignored = duplicate.roster_id,
            "owner holds more than one roster; using the first"
        );
    }
    Some(first)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn roster(roster_id: u32, owner: Option<&str>) -> RosterSnapshot {
        serde_json::from_value(json!({
            "roster_id": roster_id,
            "owner_id": owner,
            "players": ["4046"],
            "starters": ["4046"]
        }))
        .unwrap()
    }

    #[test]
    fn test_resolve_roster_miss() {
        let rosters = vec![roster(1, Some("A")), roster(2, None), roster(3, Some("B"))];
        assert!(resolve_roster(&UserId::new("X"), &rosters).is_none());
    }

    #[test]
    fn test_resolve_roster_single_match_unchanged() {
        let rosters = vec![roster(1, Some("A")), roster(2, Some("X")), roster(3, Some("B"))];
        let found = resolve_roster(&UserId::new("X"), &rosters).unwrap();
        assert_eq!(found, &rosters[1]);
    }

    #[test]
    fn test_resolve_roster_first_match_wins() {
        let rosters = vec![roster(4, Some("X")), roster(9, Some("X"))];
        let found = resolve_roster(&UserId::new("X"), &rosters).unwrap();
        assert_eq!(found.roster_id, 4);
    }

    #[test]
    fn test_resolve_roster_empty_league() {
        assert!(resolve_roster(&UserId::new("X"), &[]).is_none());
    }
}
