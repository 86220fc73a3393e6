use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("a carousel needs at least one slide")]
    EmptySlideSet,
    #[error("invalid carousel tuning: {field} = {value}")]
    InvalidTuning { field: &'static str, value: f32 },
}

pub type Result<T> = std::result::Result<T, Error>;
