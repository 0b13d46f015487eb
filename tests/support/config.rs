use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A config file (and sibling database path) inside a temporary directory.
pub struct TempConfig {
    dir: TempDir,
    pub path: PathBuf,
}

impl TempConfig {
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).expect("write temp config");
        Self { dir, path }
    }

    /// A config pointing at `api_url`, with a database in the temp dir and
    /// selection criteria loose enough for small fixtures.
    pub fn for_api(api_url: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db = dir.path().join("bets.db");
        let contents = format!(
            r#"database = "{db}"

[provider]
api_url = "{api_url}"
max_concurrent_requests = 2

[provider.http]
retry_max_attempts = 1

[[sports]]
key = "basketball_nba"
markets = ["h2h", "player_points"]

[selection]
bookmaker = "fanduel"
max_price = 200
min_competitors = 1
limit = 10
"#,
            db = db.display()
        );
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).expect("write temp config");
        Self { dir, path }
    }

    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }

    pub fn database(&self) -> PathBuf {
        self.dir.path().join("bets.db")
    }
}
