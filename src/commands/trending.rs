//! Trending players command implementation

use crate::{
    engine::{Assembler, TrendingRequest},
    Result, TrendDirection,
};

use super::emit;

/// Handle `get trending`; unset `hours`/`limit` fall back to config.
pub async fn handle_trending(
    assembler: &Assembler,
    direction: TrendDirection,
    hours: Option<u32>,
    limit: Option<u32>,
) -> Result<()> {
    let request = TrendingRequest {
        direction,
        hours,
        limit,
    };
    emit(assembler.trending(request).await)
}
