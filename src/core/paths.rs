//! Default file locations

use std::path::{Path, PathBuf};

/// Token file name looked up in the working directory first.
pub const TOKEN_FILE_NAME: &str = "oauth2.json";

/// `./oauth2.json` when it exists, otherwise `{config_dir}/yahoo-ffl/oauth2.json`.
pub fn default_token_path() -> PathBuf {
    token_path_in(Path::new("."), dirs::config_dir())
}

fn token_path_in(cwd: &Path, config_dir: Option<PathBuf>) -> PathBuf {
    let local = cwd.join(TOKEN_FILE_NAME);
    if local.exists() {
        return local;
    }

    let base = config_dir.unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("yahoo-ffl").join(TOKEN_FILE_NAME)
}
