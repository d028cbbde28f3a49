mod commands;
mod config;
mod docker;
mod env;
mod launcher;
mod menu;
mod prompt;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let start_dir = std::env::current_dir().context("unable to determine working directory")?;
    let root = config::find_project_root(&start_dir);
    env::load_env(&root);
    env::export_user_identity();

    let cfg = config::load(root);
    tracing::debug!(root = %cfg.root.display(), docker = %cfg.docker_bin, "resolved configuration");

    if !docker::daemon_available(&cfg).await {
        eprintln!("warning: docker daemon not reachable; stack commands will fail until it is");
    }

    let registry = commands::builtin_registry();
    menu::run(&registry, &cfg).await
}
