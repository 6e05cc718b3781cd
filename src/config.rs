use thiserror::Error;

pub const TOKEN_VAR: &str = "TELOXIDE_TOKEN";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingVar(&'static str),
}

#[derive(Clone)]
pub struct Config {
    pub token: String,
}

impl Config {
    /// Expects `.env` to have been loaded already (see `main`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR)
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::MissingVar(TOKEN_VAR))?;
        Ok(Self { token })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config").field("token", &"<redacted>").finish()
    }
}
