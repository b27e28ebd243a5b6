//! Serve the REST API

use crate::cli::app::Context;
use shiptivity::adapters::sqlite::{self, SqliteClientStore};
use shiptivity::core::ports::ClientStore;
use shiptivity::output::OutputMode;
use shiptivity::server;

/// Open the store and serve until the process is stopped
///
/// An empty database is seeded with the sample board first, so a fresh
/// install has something to show.
pub fn serve(mut ctx: Context, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(host) = host {
        ctx.config.server.host = host;
    }
    if let Some(port) = port {
        ctx.config.server.port = port;
    }

    let store: SqliteClientStore = ctx.open_store()?;
    if store.count()? == 0 {
        let report = sqlite::seed(&store, false)?;
        log::info!("seeded {} sample clients", report.inserted);
    }

    let addr = ctx.config.server.addr();
    if ctx.mode == OutputMode::Human {
        println!("shiptivity API listening on http://{addr}/api/v1");
        println!("  database: {}", ctx.config.database.path.display());
    }

    server::serve(&store, &addr)
}
