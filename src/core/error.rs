//! Errors raised when raw UI or storage values are parsed into domain types.

use thiserror::Error;

/// Failure to turn a raw string into one of the domain enums or values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown pricing tier: {0:?}")]
    UnknownTier(String),

    #[error("unknown billing cycle: {0:?}")]
    UnknownBillingCycle(String),

    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),

    #[error("invalid user count: {0:?}")]
    InvalidUserCount(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_quote_input() {
        assert_eq!(
            ParseError::UnknownTier("gold".to_string()).to_string(),
            "unknown pricing tier: \"gold\""
        );
        assert_eq!(
            ParseError::InvalidUserCount("ten".to_string()).to_string(),
            "invalid user count: \"ten\""
        );
    }
}
