use crate::dates::error::DateCodecError;
use crate::gradient::error::GradientError;
use crate::source::error::SourceError;
use crate::types::view_mode::UnknownViewMode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VaycayError {
    #[error(transparent)]
    DateCodec(#[from] DateCodecError),

    #[error(transparent)]
    Gradient(#[from] GradientError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    ViewMode(#[from] UnknownViewMode),
}
