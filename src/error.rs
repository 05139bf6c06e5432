use std::io;
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Error type shared by every demo
// =============================================================================

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("pause interrupted after {after:?}")]
    Interrupted { after: Duration },

    #[error("worker '{name}' panicked before reaching the join barrier")]
    WorkerPanicked { name: String },

    #[error("failed to spawn worker '{name}': {source}")]
    Spawn {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl DemoError {
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_worker() {
        let err = DemoError::WorkerPanicked {
            name: "counter-2".to_string(),
        };
        assert!(err.to_string().contains("counter-2"));

        let err = DemoError::invalid_config("max_amount", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "invalid value for 'max_amount': must be greater than zero"
        );
    }

    #[test]
    fn test_spawn_error_keeps_source() {
        use std::error::Error as _;

        let err = DemoError::Spawn {
            name: "printer-number".to_string(),
            source: io::Error::new(io::ErrorKind::Other, "out of threads"),
        };
        assert_eq!(err.source().map(|s| s.to_string()), Some("out of threads".to_string()));
    }
}
