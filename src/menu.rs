use crate::commands::{Command, Registry};
use crate::config::Config;
use crate::prompt;
use anyhow::Result;
use std::io;
use tracing::{debug, warn};

/// Greeting plus one `<trigger>) <description>` line per command, in
/// registry order.
pub fn render_menu(registry: &Registry) -> String {
    let mut out = String::from("Welcome to dockhand\n");
    for cmd in registry.all() {
        out.push_str(&format!("{}) {}\n", cmd.trigger(), cmd.description()));
    }
    out
}

/// Where one read of the prompt leads.
#[derive(Debug)]
enum Step<'a> {
    Run(&'a Command),
    Invalid,
    Exit,
}

fn next_step<'a>(registry: &'a Registry, read: io::Result<Option<String>>) -> Step<'a> {
    match read {
        Ok(Some(line)) => match registry.lookup(&line) {
            Some(cmd) => Step::Run(cmd),
            None => Step::Invalid,
        },
        Ok(None) => Step::Exit,
        Err(e) => {
            warn!("stdin read failed: {e}");
            Step::Exit
        }
    }
}

/// The prompting/dispatching loop. Returns when stdin ends or fails; the
/// quit command exits the process directly. A failed command is printed and
/// never ends the loop.
pub async fn run(registry: &Registry, cfg: &Config) -> Result<()> {
    loop {
        print!("{}", render_menu(registry));

        let read = prompt::read_trimmed_line("enter command: ").await;
        match next_step(registry, read) {
            Step::Run(cmd) => {
                debug!(trigger = cmd.trigger(), "dispatching");
                if let Err(e) = cmd.execute(cfg).await {
                    eprintln!("error: {e:#}");
                }
            }
            Step::Invalid => println!("invalid command"),
            Step::Exit => return Ok(()),
        }
    }
}
