use thiserror::Error;

/// Fatal start-up failures. None of them is retried.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not start fuel sampler thread: {0}")]
    SamplerSpawn(#[from] std::io::Error),

    #[error("could not create window: {0}")]
    Window(String),
}

impl AppError {
    /// Process exit status reported for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidConfig(_) | AppError::SamplerSpawn(_) | AppError::Window(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_errors_exit_with_one() {
        let config = AppError::InvalidConfig("cell size is zero".into());
        let spawn = AppError::from(std::io::Error::other("no threads"));
        assert_eq!(config.exit_code(), 1);
        assert_eq!(spawn.exit_code(), 1);
    }

    #[test]
    fn test_window_error() {
        let err = AppError::Window("XOpenDisplay() failed!".into());
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "could not create window: XOpenDisplay() failed!");
    }

    #[test]
    fn test_messages() {
        let err = AppError::InvalidConfig("cell size is zero".into());
        assert_eq!(err.to_string(), "invalid configuration: cell size is zero");
    }
}
