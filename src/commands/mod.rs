//! Command implementations for the Sleepy CLI
//!
//! Every `get` command asks the [`Assembler`](crate::engine::Assembler) for one
//! view and prints it as pretty JSON on stdout. A failed view prints the same
//! `{"error": ...}` body the HTTP server would send and is returned as an
//! error so the binary can pick the exit code.

pub mod drafts;
pub mod leagues;
pub mod roster;
pub mod serve;
pub mod trending;

use serde::Serialize;

use crate::{engine::EngineResult, Result};


/// Pretty JSON for a view, or for its error body.
pub fn render<T: Serialize>(view: &EngineResult<T>) -> Result<String> {
    let json = match view {
        Ok(view) => serde_json::to_string_pretty(view)?,
        Err(e) => serde_json::to_string_pretty(&e.body())?,
    };
    Ok(json)
}

/// Print a view and surface its failure, if any.
pub fn emit<T: Serialize>(view: EngineResult<T>) -> Result<()> {
    println!("{}", render(&view)?);
    view.map(|_| ()).map_err(Into::into)
}
