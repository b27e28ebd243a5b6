//! Show the board

use crate::cli::app::Context;
use shiptivity::core::models::Board;
use shiptivity::core::services::{QueryService, parse_status};
use shiptivity::output::BoardView;

/// Print every lane, or only the one named by `status`
pub fn board(ctx: &Context, status: Option<&str>) -> anyhow::Result<()> {
    let only = status.map(parse_status).transpose()?;

    let store = ctx.open_store()?;
    let board: Board = QueryService::new(&store).board()?;

    BoardView::new(&board, only).render(ctx.mode);
    Ok(())
}
