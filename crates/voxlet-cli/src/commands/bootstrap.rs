//! `voxlet bootstrap` -- dry-run the full embed bootstrap.
//!
//! Builds a headless page from the arguments, runs the real bootstrap
//! against the real backend, and prints the resulting widget subtree. The
//! mount entrypoint only prints the config it receives.
//!
//! # Examples
//!
//! ```text
//! voxlet bootstrap --src "https://widget.voxlet.dev/embed-popup.js"
//! voxlet bootstrap --src http://localhost:3000/embed-popup.js --attr data-theme=system --dark
//! ```

use std::sync::Arc;

use clap::Args;

use voxlet_core::bootstrap::{BootstrapOutcome, Bootstrapper};
use voxlet_core::mount::EmbedContext;
use voxlet_platform::http::NativeHttpClient;
use voxlet_platform::memory::NodeId;
use voxlet_types::{RemoteAppConfig, Result};

use super::PageArgs;

/// Arguments for the `voxlet bootstrap` subcommand.
#[derive(Args)]
pub struct BootstrapArgs {
    #[command(flatten)]
    pub page: PageArgs,

    /// Do not print the remote config document.
    #[arg(long)]
    pub quiet_config: bool,
}

/// Run the bootstrap command.
pub async fn run(args: BootstrapArgs) -> anyhow::Result<()> {
    let settings = super::settings();
    let http = NativeHttpClient::new().map_err(|e| anyhow::anyhow!("{e}"))?;

    let quiet = args.quiet_config;
    let print_mount = move |_: &NodeId, config: RemoteAppConfig, ctx: &EmbedContext<NodeId>| -> Result<()> {
        println!("Mounted (scheme: {}, appearance: {})", ctx.scheme, ctx.appearance);
        if !quiet {
            println!("{}", serde_json::to_string_pretty(config.as_value())?);
        }
        Ok(())
    };

    let bootstrapper = Bootstrapper::new(args.page.page(), Arc::new(http), print_mount, settings);
    let outcome = bootstrapper.run().await;

    let page = bootstrapper.page();
    if let Some(body) = page.body_id() {
        println!();
        print!("{}", page.outline(body));
    }

    match outcome {
        BootstrapOutcome::Mounted(mounted) => {
            println!();
            println!("Config URL: {}", mounted.config_url);
            Ok(())
        }
        BootstrapOutcome::Halted { error, .. } => {
            anyhow::bail!("bootstrap halted: {error}")
        }
    }
}
