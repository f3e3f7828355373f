use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers of the calendar engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A civil field or argument is outside its valid range. Values are never clamped.
    #[error("{0}")]
    OutOfRange(String),

    /// Malformed text, echoing the offending input.
    #[error("Invalid {kind}: '{input}'")]
    Parse { kind: &'static str, input: String },

    /// A formatting pattern uses an unknown letter, a bad letter count or a field the value
    /// does not have.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

impl Error {
    pub(crate) fn out_of_range(msg: impl Into<String>) -> Self {
        Error::OutOfRange(msg.into())
    }

    pub(crate) fn parse(kind: &'static str, input: &str) -> Self {
        Error::Parse {
            kind,
            input: input.to_string(),
        }
    }

    pub(crate) fn invalid_pattern(msg: impl Into<String>) -> Self {
        Error::InvalidPattern(msg.into())
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}

/// Failure to decode the embedded time zone table. The table is trusted static data, so
/// these never reach callers; the registry treats them as a fatal fault.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("unexpected end of data: wanted {wanted} bytes, {remaining} remaining")]
    UnexpectedEof { wanted: usize, remaining: usize },

    #[error("string is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("unknown on-day mode {0:#04x}")]
    UnknownOnMode(u8),

    #[error("unknown at-time mode {0:#04x}")]
    UnknownAtMode(u8),

    #[error("month ordinal {0} out of range")]
    InvalidMonth(u8),

    #[error("weekday ordinal {0} out of range")]
    InvalidWeekday(u8),

    #[error("zone has no rules")]
    NoRules,

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}
