//! League overview command implementation

use crate::{engine::Assembler, Result, Season};

use super::emit;

/// Handle `get leagues`
pub async fn handle_leagues(
    assembler: &Assembler,
    username: &str,
    season: Option<Season>,
) -> Result<()> {
    emit(assembler.league_overview(username, season).await)
}
