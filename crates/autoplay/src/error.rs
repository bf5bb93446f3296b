use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutoplayError {
    #[error("round error: {0}")]
    Round(String),
    #[error("no seat is at bat")]
    NotAtBat,
    #[error("serialize error: {0}")]
    Serialize(String),
}

impl From<doudizhu_core::RoundError> for AutoplayError {
    fn from(value: doudizhu_core::RoundError) -> Self {
        Self::Round(value.to_string())
    }
}

impl From<serde_json::Error> for AutoplayError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value.to_string())
    }
}
