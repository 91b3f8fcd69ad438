use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Boxed error from a lower layer, kept as the `source` of a [`VoxError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum VoxError {
    #[error("visual error: {0}")]
    Visual(#[source] BoxError),

    #[error("snapshot error: {0}")]
    Snapshot(String),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

impl VoxError {
    /// Wrap a mount, render or readback failure.
    pub fn visual(err: impl Into<BoxError>) -> Self {
        VoxError::Visual(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("visual.blob.count = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: visual.blob.count = 0"
        );
    }

    #[test]
    fn visual_error_keeps_its_source() {
        use std::error::Error;

        let inner = std::io::Error::new(std::io::ErrorKind::Other, "adapter lost");
        let err = VoxError::visual(inner);
        assert_eq!(err.to_string(), "visual error: adapter lost");
        assert_eq!(err.source().unwrap().to_string(), "adapter lost");
    }

    #[test]
    fn write_error_names_the_path() {
        let err = VoxError::Write {
            path: PathBuf::from("/tmp/frame.png"),
            source: "disk full".into(),
        };
        assert_eq!(err.to_string(), "failed to write /tmp/frame.png: disk full");

        let err = VoxError::Snapshot("empty frame".into());
        assert_eq!(err.to_string(), "snapshot error: empty frame");
    }
}
