use std::io::{self, Write};

/// Print `prompt` (no trailing newline), flush, then read one line from
/// stdin. The blocking read runs on the blocking pool and has completed by
/// the time this returns, so a child process attached to the terminal
/// afterwards never competes with a pending read.
///
/// Returns `Ok(None)` at end of input; the returned line is trimmed of
/// surrounding whitespace.
pub async fn read_trimmed_line(prompt: &str) -> io::Result<Option<String>> {
    {
        let mut out = io::stdout();
        out.write_all(prompt.as_bytes())?;
        out.flush()?;
    }

    tokio::task::spawn_blocking(|| {
        let mut buf = String::new();
        let n = io::stdin().read_line(&mut buf)?;
        if n == 0 {
            Ok(None)
        } else {
            Ok(Some(buf.trim().to_string()))
        }
    })
    .await
    .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
}
