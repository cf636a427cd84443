use std::path::PathBuf;

/// Distributions reported on every run, in output order.
pub const DEFAULT_PACKAGES: &[&str] = &["fsspec", "datasets", "boto3", "mteb", "packaging"];

/// Type annotation printed next to a found version. Versions are always strings.
pub const VERSION_TYPE_NAME: &str = "<class 'str'>";

/// Interpreters tried, in order, when no `--python` is given.
pub const DEFAULT_INTERPRETERS: &[&str] = &["python3", "python"];

/// Returns the path to the data directory for dist-version.
/// Uses $XDG_DATA_HOME/dist-version if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/dist-version,
/// or ./dist-version if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Name of the log file inside [`data_dir`].
pub const LOG_FILE_NAME: &str = "dist-version.log";

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join(LOG_FILE_NAME)
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("dist-version")
}
