use confique::Config as _;

/// Runtime options consumed by the completion [`Resolver`](crate::Resolver).
///
/// Passed in explicitly rather than read from a process-wide singleton so the
/// core stays testable; [`Config::from_env`] is the convenience loader for
/// hosts that configure through the environment.
#[derive(confique::Config, Debug, Clone)]
pub struct Config {
    /// Load missing column / parameter lists from the catalog on demand
    /// while completing. When false, resolution of an unloaded object
    /// returns no suggestions instead of performing I/O.
    #[config(env = "SQLSENSE_LOAD_COLUMNS", default = true)]
    pub autocomplete_load_columns: bool,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        Config::builder()
            .env()
            .load()
            .map_err(|e| crate::Error::Config(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autocomplete_load_columns: true,
        }
    }
}
