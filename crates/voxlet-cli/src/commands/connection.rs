//! `voxlet connection` -- fetch connection details.
//!
//! # Examples
//!
//! ```text
//! voxlet connection --src "https://widget.voxlet.dev/embed-popup.js"
//! voxlet connection --src http://localhost:3000/embed-popup.js --json
//! ```

use std::sync::Arc;

use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};

use voxlet_core::ConnectionDetailsClient;
use voxlet_platform::http::NativeHttpClient;
use voxlet_types::ConnectionDetails;

use super::PageArgs;

/// Arguments for the `voxlet connection` subcommand.
#[derive(Args)]
pub struct ConnectionArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Print the raw details as JSON, token included.
    #[arg(long)]
    pub json: bool,

    /// Show the full participant token in the table.
    #[arg(long)]
    pub show_token: bool,
}

/// Shorten a token for display.
fn redact(token: &str, show: bool) -> String {
    if show || token.chars().count() <= 12 {
        return token.to_string();
    }
    let head: String = token.chars().take(8).collect();
    format!("{head}... ({} chars)", token.chars().count())
}

fn details_table(details: &ConnectionDetails, show_token: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["FIELD", "VALUE"]);
    table.add_row(["Server URL", details.server_url.as_str()]);
    table.add_row(["Room", details.room_name.as_str()]);
    table.add_row(["Participant", details.participant_name.as_str()]);
    table.add_row([
        "Token".to_string(),
        redact(&details.participant_token, show_token),
    ]);
    table
}

/// Run the connection command.
pub async fn run(args: ConnectionArgs) -> anyhow::Result<()> {
    let http = NativeHttpClient::new().map_err(|e| anyhow::anyhow!("{e}"))?;
    let client = ConnectionDetailsClient::new(Arc::new(http), super::settings());
    let page = args.page.page();

    tracing::info!(url = %client.endpoint(&page), "requesting connection details");
    let details = client.fetch(&page).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&details)?);
    } else {
        println!("{}", details_table(&details, args.show_token));
    }
    Ok(())
}
