//! Show a single client

use crate::cli::app::Context;
use shiptivity::core::services::QueryService;
use shiptivity::output::render_client;

/// Print one client by id
pub fn show(ctx: &Context, id: &str) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let client = QueryService::new(&store).get_by_id(id)?;
    render_client(&client, ctx.mode);
    Ok(())
}
