//! Errors returned by record construction.
//!
//! The `Display` text of each variant is exactly what the CLI prints after
//! the `ERROR: ` prefix, so keep these strings stable.

use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FooError {
    #[error("need non blank name")]
    MissingName,

    #[error("need non blank age")]
    MissingAge,

    /// Only produced with [`AgeParse::Strict`](crate::AgeParse::Strict).
    #[error("invalid age text '{input}': {source}")]
    ParseAge {
        input: String,
        #[source]
        source: ParseIntError,
    },

    /// Hard limit: age <= 0 or age >= 127.
    #[error("invalid age")]
    InvalidAge(i64),

    /// Soft limit: 120 < age < 127.
    #[error("nobody's that old!")]
    AgeTooLarge(i64),

    #[error("failed to allocate space for Foo/name")]
    AllocationFailure,
}

/// Field-less classification of a [`FooError`].
///
/// Callers that only care about *which* rule rejected the input match on
/// this instead of destructuring the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MissingName,
    MissingAge,
    ParseAge,
    InvalidAge,
    AgeTooLarge,
    AllocationFailure,
}

impl FooError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FooError::MissingName => ErrorKind::MissingName,
            FooError::MissingAge => ErrorKind::MissingAge,
            FooError::ParseAge { .. } => ErrorKind::ParseAge,
            FooError::InvalidAge(_) => ErrorKind::InvalidAge,
            FooError::AgeTooLarge(_) => ErrorKind::AgeTooLarge,
            FooError::AllocationFailure => ErrorKind::AllocationFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::missing_name(FooError::MissingName, "need non blank name")]
    #[case::missing_age(FooError::MissingAge, "need non blank age")]
    #[case::invalid_age(FooError::InvalidAge(0), "invalid age")]
    #[case::too_large(FooError::AgeTooLarge(121), "nobody's that old!")]
    #[case::alloc(FooError::AllocationFailure, "failed to allocate space for Foo/name")]
    fn messages_match_cli_contract(#[case] err: FooError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn parse_age_keeps_source_and_input() {
        let source = "4x".parse::<i64>().unwrap_err();
        let err = FooError::ParseAge {
            input: "4x".to_string(),
            source,
        };

        assert_eq!(err.kind(), ErrorKind::ParseAge);
        assert!(err.to_string().starts_with("invalid age text '4x'"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
