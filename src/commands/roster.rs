//! Roster detail command implementation

use crate::{engine::Assembler, LeagueId, Result};

use super::emit;

/// Handle `get roster`
pub async fn handle_roster(assembler: &Assembler, username: &str, league_id: &LeagueId) -> Result<()> {
    emit(assembler.roster_detail(username, league_id).await)
}
