use std::path::{Path, PathBuf};

/// The compose file every stack command drives; its location defines the
/// project root.
pub const COMPOSE_FILE: &str = "docker-compose.yml";

#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub docker_bin: String,
}

pub fn resolve_docker_binary() -> String {
    std::env::var("DOCKER_BIN").unwrap_or_else(|_| "docker".to_string())
}

/// Walk up from `start_dir` until a directory holding docker-compose.yml is
/// found; fall back to `start_dir` itself.
pub fn find_project_root(start_dir: &Path) -> PathBuf {
    let mut dir = start_dir.to_path_buf();

    for _ in 0..12 {
        if dir.join(COMPOSE_FILE).exists() {
            return dir;
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => break,
        }
    }

    start_dir.to_path_buf()
}

/// Build the configuration from an already-resolved project root. Reads
/// `DOCKER_BIN` from the process environment; load the root's `.env` first
/// so an override from it applies.
pub fn load(root: PathBuf) -> Config {
    Config {
        root,
        docker_bin: resolve_docker_binary(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn project_root_found_by_walking_up() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(COMPOSE_FILE), "services: {}\n").unwrap();
        let nested = tmp.path().join("services/api/src");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), tmp.path());
    }

    #[test]
    fn project_root_defaults_to_start_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested), nested);
    }

    #[test]
    #[serial]
    fn dotenv_docker_bin_reaches_the_config() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(COMPOSE_FILE), "services: {}\n").unwrap();
        std::fs::write(tmp.path().join(".env"), "DOCKER_BIN=podman-remote\n").unwrap();
        std::env::remove_var("DOCKER_BIN");

        let root = find_project_root(tmp.path());
        crate::env::load_env(&root);
        let cfg = load(root);

        assert_eq!(cfg.docker_bin, "podman-remote");
        assert_eq!(cfg.root, tmp.path());
        std::env::remove_var("DOCKER_BIN");
    }

    #[test]
    #[serial]
    fn docker_binary_env_override() {
        std::env::set_var("DOCKER_BIN", "podman");
        assert_eq!(resolve_docker_binary(), "podman");
        std::env::remove_var("DOCKER_BIN");
        assert_eq!(resolve_docker_binary(), "docker");
    }
}
