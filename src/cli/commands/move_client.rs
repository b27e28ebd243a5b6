//! Move a client between or within lanes

use crate::cli::app::Context;
use shiptivity::core::models::Placement;
use shiptivity::core::services::{self, MoveRequest, RetryPolicy, parse_id, parse_status};
use shiptivity::output::{BoardView, OutputMode, render_move};

/// Drop client `id` into lane `to`, above `before` or at the bottom
pub fn move_client(
    ctx: &Context,
    id: &str,
    to: &str,
    before: Option<&str>,
) -> anyhow::Result<()> {
    let request = MoveRequest {
        id: parse_id(id)?,
        to: parse_status(to)?,
        placement: before
            .map(parse_id)
            .transpose()?
            .map_or(Placement::End, Placement::Before),
    };

    let store = ctx.open_store()?;
    let outcome = services::move_client(&store, request, &RetryPolicy::default())?;

    render_move(&outcome, ctx.mode);
    if ctx.mode == OutputMode::Human {
        println!();
        BoardView::new(&outcome.board, Some(request.to)).render(ctx.mode);
    }
    Ok(())
}
