use rickview_client::DEFAULT_BASE_URL;
use rickview_core::id::{IdRange, MAX_CHARACTER_ID, MIN_CHARACTER_ID};
use rickview_core::CoreError;

/// Viewer configuration loaded from environment variables.
///
/// All fields have defaults that point at the public API.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API root (default: `https://rickandmortyapi.com/api`).
    pub base_url: String,
    /// Ids drawn on each trigger (default: `1..=826`).
    pub id_range: IdRange,
    /// Whether to download and show avatars (default: `true`).
    pub load_avatars: bool,
}

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error(transparent)]
    Range(#[from] CoreError),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            id_range: IdRange::default(),
            load_avatars: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                 | Default                           |
    /// |-------------------------|-----------------------------------|
    /// | `RICKVIEW_BASE_URL`     | `https://rickandmortyapi.com/api` |
    /// | `RICKVIEW_MIN_ID`       | `1`                               |
    /// | `RICKVIEW_MAX_ID`       | `826`                             |
    /// | `RICKVIEW_LOAD_AVATARS` | `true`                            |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("RICKVIEW_BASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let min = parse_id(&lookup, "RICKVIEW_MIN_ID", MIN_CHARACTER_ID)?;
        let max = parse_id(&lookup, "RICKVIEW_MAX_ID", MAX_CHARACTER_ID)?;
        let id_range = IdRange::new(min, max)?;

        let load_avatars = match lookup("RICKVIEW_LOAD_AVATARS") {
            None => true,
            Some(value) => match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "RICKVIEW_LOAD_AVATARS",
                        expected: "a boolean",
                        value,
                    })
                }
            },
        };

        Ok(Self {
            base_url,
            id_range,
            load_avatars,
        })
    }
}

fn parse_id<F>(lookup: &F, var: &'static str, default: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var,
            expected: "an integer",
            value,
        }),
    }
}
