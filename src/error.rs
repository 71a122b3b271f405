use thiserror::Error;

/// Win32 `ERROR_NO_MORE_ITEMS`, the "no radios" signal of the radio search
pub const ERROR_NO_MORE_ITEMS: u32 = 259;

/// Failures reported by the platform Bluetooth service
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RadioError {
    #[error("no Bluetooth radios found")]
    NotFound,

    #[error("radio search failed with code {0}")]
    Platform(u32),

    #[error("radio info query failed with code {0}")]
    InfoQuery(u32),

    #[error("record size field is {actual}, expected {expected}")]
    InvalidRecordSize { expected: u32, actual: u32 },

    #[error("Bluetooth radios are not supported on this platform")]
    Unsupported,
}

impl RadioError {
    /// Classify a raw error code returned by the radio search
    pub fn from_search_code(code: u32) -> Self {
        if code == ERROR_NO_MORE_ITEMS {
            Self::NotFound
        } else {
            Self::Platform(code)
        }
    }

    /// Numeric code to report to the user, if the error carries one
    pub fn code(&self) -> Option<u32> {
        match self {
            Self::Platform(code) | Self::InfoQuery(code) => Some(*code),
            Self::NotFound => Some(ERROR_NO_MORE_ITEMS),
            Self::InvalidRecordSize { .. } | Self::Unsupported => None,
        }
    }
}
