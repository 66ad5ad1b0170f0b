use std::fmt;

use crate::config::GameMode;

/// Domain failures surfaced to the UI layer as values, not panics.
#[derive(Debug, Clone)]
pub enum AppError {
    /// A model file is missing or unreadable.
    ModelFile(String),
    /// The interception proxy failed to start or serve.
    Mitm(String),
    /// The loaded bot does not support the requested mode.
    UnsupportedMode(GameMode),
    /// A network request failed or timed out.
    Connection(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ModelFile(detail) => write!(f, "model file error: {detail}"),
            AppError::Mitm(detail) => write!(f, "MITM server error: {detail}"),
            AppError::UnsupportedMode(mode) => {
                write!(f, "model does not support mode {mode}")
            }
            AppError::Connection(detail) => write!(f, "connection error: {detail}"),
        }
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_detail() {
        let err = AppError::ModelFile("models/mortal.pth not found".into());
        assert!(err.to_string().contains("mortal.pth"));

        let err = AppError::UnsupportedMode(GameMode::ThreePlayer);
        assert!(err.to_string().contains("3P"));
    }

    #[test]
    fn composes_with_anyhow() {
        let err: anyhow::Error = AppError::Mitm("port in use".into()).into();
        assert!(err.to_string().contains("MITM"));
    }
}
