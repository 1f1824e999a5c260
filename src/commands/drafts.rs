//! Draft command implementations

use crate::{engine::Assembler, DraftId, LeagueId, Result};

use super::emit;

/// Handle `get drafts`
pub async fn handle_league_drafts(assembler: &Assembler, league_id: &LeagueId) -> Result<()> {
    emit(assembler.league_drafts(league_id).await)
}

/// Handle `get draft`
pub async fn handle_draft(assembler: &Assembler, draft_id: &DraftId) -> Result<()> {
    emit(assembler.draft_detail(draft_id).await)
}

/// Handle `get live-draft`
pub async fn handle_live_draft(assembler: &Assembler, league_id: &LeagueId) -> Result<()> {
    emit(assembler.live_draft(league_id).await)
}
