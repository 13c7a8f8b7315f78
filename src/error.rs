use thiserror::Error;

#[derive(Debug, Error)]
pub enum RevealError {
    #[error("intersection observer unavailable: {0}")]
    ObserverUnavailable(String),
    #[error("reveal threshold {0} is outside 0.0..=1.0")]
    InvalidThreshold(f64),
}
