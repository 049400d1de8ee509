//! Connection options shared by every subcommand.
//!
//! The match store is an embedded SQLite file named by `dbname`. The network
//! options are still accepted so existing configuration keeps loading; they
//! have no effect beyond a warning.

use camino::Utf8PathBuf;
use league_core::SqliteMatchStore;
use log::warn;

use crate::CliError;

/// Database file used when `dbname` is not configured.
pub(crate) const DEFAULT_DBNAME: &str = "league.db";

/// Raw connection options as merged from CLI, environment and files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct StoreOptions {
    pub(crate) host: Option<String>,
    pub(crate) port: Option<u16>,
    pub(crate) user: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) dbname: Option<Utf8PathBuf>,
}

/// Resolved store configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StoreConfig {
    /// Path of the SQLite database file.
    pub(crate) dbname: Utf8PathBuf,
    /// Names of options that were set but do not apply to an embedded store.
    pub(crate) ignored: Vec<&'static str>,
}

impl From<StoreOptions> for StoreConfig {
    fn from(options: StoreOptions) -> Self {
        let ignored = [
            ("host", options.host.is_some()),
            ("port", options.port.is_some()),
            ("user", options.user.is_some()),
            ("password", options.password.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect();
        Self {
            dbname: options
                .dbname
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DBNAME)),
            ignored,
        }
    }
}

impl StoreConfig {
    /// Open the configured store, creating the database file if needed.
    pub(crate) fn open(&self) -> Result<SqliteMatchStore, CliError> {
        for option in &self.ignored {
            warn!(
                "ignoring {option}: the match store is the embedded database {}",
                self.dbname
            );
        }
        SqliteMatchStore::open(&self.dbname).map_err(CliError::OpenStore)
    }
}
