use anyhow::{anyhow, Context, Result};
use std::path::Path;
use std::process::ExitStatus;
use tokio::process::Command;
use tracing::debug;

#[cfg(unix)]
fn shell_command(cmdline: &str) -> Command {
    let mut c = Command::new("sh");
    c.arg("-lc").arg(cmdline);
    c
}

#[cfg(not(unix))]
fn shell_command(cmdline: &str) -> Command {
    let mut c = Command::new("cmd");
    c.arg("/C").arg(cmdline);
    c
}

/// Run a shell command line with stdio attached to the terminal and block
/// until it exits. A non-zero exit is an error; it is the caller's job to
/// print it and carry on.
pub async fn run_shell(cmdline: &str, cwd: &Path) -> Result<()> {
    debug!(%cmdline, "running shell command");
    let status = shell_command(cmdline)
        .current_dir(cwd)
        .envs(std::env::vars())
        .status()
        .await
        .with_context(|| format!("failed to start `{cmdline}`"))?;
    check_status(cmdline, status)
}

/// Run `bin` with an explicit argv, stdio attached to the terminal, and
/// block until it exits. Used where arguments must not pass through shell
/// splitting (container names in `docker exec`).
pub async fn run_attached(bin: &str, args: &[&str], cwd: &Path) -> Result<()> {
    debug!(%bin, ?args, "running attached command");
    let status = Command::new(bin)
        .current_dir(cwd)
        .args(args)
        .status()
        .await
        .with_context(|| format!("failed to start {bin}"))?;
    check_status(&format!("{bin} {}", args.join(" ")), status)
}

/// Run `bin` with an explicit argv and capture stdout (lossy UTF-8,
/// trailing whitespace trimmed). Stderr is captured and discarded.
pub async fn run_captured(bin: &str, args: &[&str], cwd: &Path) -> Result<String> {
    debug!(%bin, ?args, "capturing command output");
    let out = Command::new(bin)
        .current_dir(cwd)
        .args(args)
        .output()
        .await
        .with_context(|| format!("failed to start {bin}"))?;
    if !out.status.success() {
        return Err(anyhow!("command failed: {bin} {args:?}"));
    }
    Ok(String::from_utf8_lossy(&out.stdout).trim_end().to_string())
}

fn check_status(cmd: &str, status: ExitStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        let code = status.code().unwrap_or(1);
        Err(anyhow!("`{cmd}` exited with status {code}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cwd() -> PathBuf {
        std::env::current_dir().unwrap()
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn captures_stdout_with_trailing_newline_trimmed() {
        let out = run_captured("sh", &["-c", "echo hello"], &cwd()).await.unwrap();
        assert_eq!(out, "hello");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn captured_nonzero_exit_is_an_error() {
        assert!(run_captured("sh", &["-c", "exit 3"], &cwd()).await.is_err());
    }

    #[tokio::test]
    async fn captured_missing_binary_is_an_error() {
        assert!(run_captured("dockhand-no-such-binary", &[], &cwd()).await.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn captured_spawns_are_logged() {
        #[derive(Clone, Default)]
        struct Sink(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

        impl std::io::Write for Sink {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let sink = Sink::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer({
                let sink = sink.clone();
                move || sink.clone()
            })
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        run_captured("sh", &["-c", "true"], &cwd()).await.unwrap();

        let logs = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("capturing command output"), "{logs}");
        assert!(logs.contains("sh"), "{logs}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn shell_reports_exit_status() {
        run_shell("true", &cwd()).await.unwrap();
        let err = run_shell("exit 7", &cwd()).await.unwrap_err();
        assert!(err.to_string().contains('7'));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn attached_reports_exit_status() {
        run_attached("true", &[], &cwd()).await.unwrap();
        assert!(run_attached("false", &[], &cwd()).await.is_err());
    }
}
