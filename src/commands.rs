use crate::config::Config;
use crate::docker;
use anyhow::Result;
use std::collections::BTreeMap;

/// What a menu entry does when dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ComposeUp,
    ComposeRebuild,
    ComposeDown,
    EnterContainer,
    Quit,
}

/// A named, described menu entry. Constructed once at startup, immutable
/// afterwards, owned by the registry.
#[derive(Debug, Clone)]
pub struct Command {
    trigger: String,
    description: String,
    action: Action,
}

impl Command {
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub async fn execute(&self, cfg: &Config) -> Result<()> {
        match self.action {
            Action::ComposeUp => docker::compose_up(cfg).await,
            Action::ComposeRebuild => docker::compose_up_rebuild(cfg).await,
            Action::ComposeDown => docker::compose_down(cfg).await,
            Action::EnterContainer => docker::enter_container(cfg).await,
            // Deliberate hard exit, no cleanup; nothing else is in flight on
            // the single dispatch path.
            Action::Quit => std::process::exit(0),
        }
    }
}

/// Trigger -> Command, ordered by trigger; that order is the menu order.
pub struct Registry {
    commands: BTreeMap<String, Command>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    /// Register a command under its trigger. A later registration for the
    /// same trigger silently replaces the earlier one.
    pub fn register(&mut self, trigger: &str, description: &str, action: Action) {
        self.commands.insert(
            trigger.to_string(),
            Command {
                trigger: trigger.to_string(),
                description: description.to_string(),
                action,
            },
        );
    }

    pub fn lookup(&self, trigger: &str) -> Option<&Command> {
        self.commands.get(trigger)
    }

    pub fn all(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }
}

/// The fixed menu: compose lifecycle, an interactive exec, quit.
pub fn builtin_registry() -> Registry {
    let mut reg = Registry::new();
    reg.register("s", "start", Action::ComposeUp);
    reg.register("s2", "restart", Action::ComposeRebuild);
    reg.register("c", "close", Action::ComposeDown);
    reg.register("e", "enter", Action::EnterContainer);
    reg.register("q", "quit", Action::Quit);
    reg
}
