use std::path::Path;
use tracing::debug;

/// Load `<root>/.env` into the process environment if present, so compose
/// and shell children observe it. Parse errors are tolerated; compose reads
/// the same file on its own.
pub fn load_env(root: &Path) {
    let path = root.join(".env");
    if path.exists() {
        dotenvy::from_path(&path).ok();
        debug!(path = %path.display(), "loaded .env");
    }
}

/// Export the invoking user's identity for compose interpolation: USER_ID
/// (numeric uid), GID (numeric gid), MY_NAME (username).
#[cfg(unix)]
pub fn export_user_identity() {
    use nix::unistd::{Gid, Uid, User};
    use tracing::warn;

    let uid = Uid::current();
    let gid = Gid::current();
    std::env::set_var("USER_ID", uid.to_string());
    std::env::set_var("GID", gid.to_string());

    let name = User::from_uid(uid)
        .ok()
        .flatten()
        .map(|u| u.name)
        .or_else(|| std::env::var("USER").ok());
    match name {
        Some(name) => std::env::set_var("MY_NAME", name),
        None => warn!("could not resolve a username; MY_NAME left unset"),
    }
}

#[cfg(not(unix))]
pub fn export_user_identity() {
    // No uid/gid to forward; best effort on the name only.
    if let Ok(name) = std::env::var("USERNAME") {
        std::env::set_var("MY_NAME", name);
    }
}
