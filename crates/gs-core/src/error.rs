use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScrubError {
    #[error("unknown preset '{name}' (valid presets: {valid})")]
    InvalidPreset { name: String, valid: String },
}

pub type Result<T> = std::result::Result<T, ScrubError>;
