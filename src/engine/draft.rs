//! Draft selection and pick-order arithmetic. Pure; no I/O.

use crate::{
    engine::views::OnTheClock,
    sleeper::types::{DraftStatus, DraftSummary},
};


/// Pick the league's "current" draft.
///
/// 1. The first draft, in upstream order, that is drafting or complete.
///    A complete draft listed before a drafting one wins.
/// 2. Otherwise the most recently created draft (earliest listed on ties).
/// 3. `None` for an empty list.
pub fn select_current_draft(drafts: &[DraftSummary]) -> Option<&DraftSummary> {
    if let Some(active) = drafts.iter().find(|d| d.status.is_live_or_done()) {
        return Some(active);
    }

    drafts.iter().fold(None, |newest: Option<&DraftSummary>, draft| match newest {
        Some(current) if current.created >= draft.created => Some(current),
        _ => Some(draft),
    })
}

fn setting_u32(draft: &DraftSummary, key: &str) -> Option<u32> {
    draft
        .settings
        .get(key)
        .and_then(|v| v.as_u64())
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| *v > 0)
}

/// Who picks next in a running draft, given how many picks are already made.
///
/// Snake drafts reverse the slot order on even rounds. Returns `None` when
/// the draft is not running, the team count is unknown, or every round is
/// already filled.
pub fn next_pick(draft: &DraftSummary, picks_made: usize) -> Option<OnTheClock> {
    if draft.status != DraftStatus::Drafting {
        return None;
    }

    let teams = setting_u32(draft, "teams").or_else(|| {
        draft
            .slot_to_roster_id
            .as_ref()
            .and_then(|slots| u32::try_from(slots.len()).ok())
            .filter(|n| *n > 0)
    })?;

    let pick_no = u32::try_from(picks_made).ok()?.checked_add(1)?;
    let round = (pick_no - 1) / teams + 1;
    if let Some(rounds) = setting_u32(draft, "rounds") {
        if round > rounds {
            return None;
        }
    }

    let pick_in_round = (pick_no - 1) % teams + 1;
    let snake = draft.draft_type.as_deref() == Some("snake");
    let slot = if snake && round % 2 == 0 {
        teams - pick_in_round + 1
    } else {
        pick_in_round
    };

    let roster_id = draft
        .slot_to_roster_id
        .as_ref()
        .and_then(|slots| slots.get(&slot.to_string()).copied().flatten());

    Some(OnTheClock {
        pick_no,
        round,
        slot,
        roster_id,
    })
}
