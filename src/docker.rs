use crate::config::{Config, COMPOSE_FILE};
use crate::launcher;
use crate::prompt;
use anyhow::{Context, Result};

pub async fn compose_up(cfg: &Config) -> Result<()> {
    launcher::run_shell(&compose_line(cfg, "up -d"), &cfg.root).await
}

pub async fn compose_up_rebuild(cfg: &Config) -> Result<()> {
    launcher::run_shell(&compose_line(cfg, "up --build -d"), &cfg.root).await
}

pub async fn compose_down(cfg: &Config) -> Result<()> {
    launcher::run_shell(&compose_line(cfg, "down -v"), &cfg.root).await
}

fn compose_line(cfg: &Config, tail: &str) -> String {
    format!("{} compose -f {} {}", cfg.docker_bin, COMPOSE_FILE, tail)
}

/// True when the daemon answers `docker info`.
pub async fn daemon_available(cfg: &Config) -> bool {
    launcher::run_captured(&cfg.docker_bin, &["info"], &cfg.root)
        .await
        .is_ok()
}

pub async fn running_container_names(cfg: &Config) -> Result<Vec<String>> {
    let raw = launcher::run_captured(&cfg.docker_bin, &["ps", "--format", "{{.Names}}"], &cfg.root)
        .await
        .context("failed to list running containers")?;
    Ok(parse_names(&raw))
}

/// One name per line; empty lines (trailing-newline artifacts) are dropped,
/// everything else is kept verbatim in order.
pub fn parse_names(raw: &str) -> Vec<String> {
    raw.lines().filter(|l| !l.is_empty()).map(str::to_string).collect()
}

fn contains_name(names: &[String], wanted: &str) -> bool {
    names.iter().any(|n| n == wanted)
}

/// The interactive "enter" flow: list running containers, let the user pick
/// one, attach a shell session in it until that session ends.
pub async fn enter_container(cfg: &Config) -> Result<()> {
    let names = running_container_names(cfg).await?;

    let listing = names.join(", ");
    let selection = match prompt::read_trimmed_line(&format!("container to enter ({listing}): ")).await? {
        Some(s) => s,
        // End of input: abort the selection; the menu loop observes EOF next.
        None => return Ok(()),
    };

    if !contains_name(&names, &selection) {
        println!("no such container");
        return Ok(());
    }

    exec_shell(cfg, &selection).await
}

async fn exec_shell(cfg: &Config, name: &str) -> Result<()> {
    launcher::run_attached(&cfg.docker_bin, &["exec", "-it", name, "bash"], &cfg.root).await
}
