use idx_dataset::DecodeError;

/// Status codes returned by all FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IdxStatus {
    Ok = 0,
    ErrorInvalidArgument = 1,
    ErrorNotFound = 2,
    ErrorFormat = 3,
    ErrorTruncated = 4,
    ErrorIo = 5,
    ErrorOutOfRange = 6,
    ErrorInternal = 7,
}

impl From<&DecodeError> for IdxStatus {
    fn from(err: &DecodeError) -> Self {
        match err {
            DecodeError::InvalidSideLength { .. } => IdxStatus::ErrorInvalidArgument,
            DecodeError::SourceNotFound { .. } => IdxStatus::ErrorNotFound,
            DecodeError::UnexpectedMagicNumber { .. } | DecodeError::UnexpectedDimension { .. } => {
                IdxStatus::ErrorFormat
            }
            DecodeError::TruncatedHeader { .. } | DecodeError::TruncatedPayload { .. } => {
                IdxStatus::ErrorTruncated
            }
            DecodeError::Io(_) => IdxStatus::ErrorIo,
        }
    }
}
