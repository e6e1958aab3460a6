//! CLI configuration.
//!
//! Defaults suit interactive use. Override via environment variables, and
//! override those again with command-line flags.

use sha384_core::{EmptyInputPolicy, HasherConfig, OutputFormat};

/// Default read size when streaming a file, matching common buffered I/O.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Largest accepted chunk size (16 MiB).
pub const MAX_CHUNK_SIZE: usize = 16 * 1024 * 1024;

/// Resolved settings for one `sha384` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    /// Bytes read per `update()` call when streaming files.
    pub chunk_size: usize,
    /// Encoding for printed digests.
    pub output: OutputFormat,
    /// Handling of zero-length input.
    pub empty_input: EmptyInputPolicy,
}

/// Values given on the command line. `None`/`false` leaves the
/// environment-derived value in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    pub chunk_size: Option<usize>,
    pub output: Option<OutputFormat>,
    pub reject_empty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            output: OutputFormat::Hex,
            empty_input: EmptyInputPolicy::Allow,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SHA384_CHUNK_SIZE` (default: 8192, range 1..=16 MiB)
    /// - `SHA384_FORMAT` (`hex` | `base64`, default: `hex`)
    /// - `SHA384_REJECT_EMPTY` (`1`/`true`/`yes` to reject, default: allow)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("SHA384_CHUNK_SIZE") {
            let size = raw.trim().parse::<usize>().map_err(|_| {
                ConfigError::InvalidValue("SHA384_CHUNK_SIZE".to_string(), raw.clone())
            })?;
            config.chunk_size = validate_chunk_size(size)?;
        }

        if let Some(raw) = lookup("SHA384_FORMAT") {
            config.output = raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SHA384_FORMAT".to_string(), raw.clone()))?;
        }

        if let Some(raw) = lookup("SHA384_REJECT_EMPTY") {
            if parse_flag("SHA384_REJECT_EMPTY", &raw)? {
                config.empty_input = EmptyInputPolicy::Reject;
            }
        }

        Ok(config)
    }

    /// Apply command-line overrides on top of this configuration.
    pub fn merge(mut self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(size) = overrides.chunk_size {
            self.chunk_size = validate_chunk_size(size)?;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        if overrides.reject_empty {
            self.empty_input = EmptyInputPolicy::Reject;
        }
        Ok(self)
    }

    /// The engine-side settings for a [`sha384_core::Hasher`].
    pub fn hasher_config(&self) -> HasherConfig {
        HasherConfig {
            empty_input: self.empty_input,
            output: self.output,
        }
    }
}

fn validate_chunk_size(size: usize) -> Result<usize, ConfigError> {
    if size == 0 || size > MAX_CHUNK_SIZE {
        return Err(ConfigError::ChunkSizeOutOfRange(size));
    }
    Ok(size)
}

fn parse_flag(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue(var.to_string(), raw.to_string())),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1:?}")]
    InvalidValue(String, String),
    #[error("chunk size {0} out of range: must be between 1 and {max} bytes", max = MAX_CHUNK_SIZE)]
    ChunkSizeOutOfRange(usize),
}
