use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or `PORTAL_*` variable could not be merged or extracted.
    #[error("could not read portal settings: {0}")]
    Figment(#[from] figment::Error),

    #[error("'{section}' settings are missing; set them in .portal/config.toml or PORTAL_* env")]
    NotConfigured { section: String },

    #[error("'{field}' is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}
