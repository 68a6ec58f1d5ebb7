use thiserror::Error;

pub type VisualResult<T> = Result<T, VisualError>;

#[derive(Debug, Error)]
pub enum VisualError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
