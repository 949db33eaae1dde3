//! Request result for asynchronous remote fetches
//!
//! A fetch starts out `InProgress` and settles on either `Success` or
//! `Error`. The error variant keeps a human readable cause for logging only.

use std::fmt::Display;

/// Outcome of one remote fetch
#[derive(Debug, Clone, PartialEq)]
pub enum RequestResult<T> {
    InProgress,
    Success(T),
    Error(Option<String>),
}

impl<T> RequestResult<T> {
    /// Build an error result carrying the cause
    pub fn error(cause: impl Into<String>) -> Self {
        RequestResult::Error(Some(cause.into()))
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self, RequestResult::InProgress)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestResult::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RequestResult::Error(_))
    }

    /// Transform the success payload, leaving other states untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RequestResult<U> {
        match self {
            RequestResult::InProgress => RequestResult::InProgress,
            RequestResult::Success(data) => RequestResult::Success(f(data)),
            RequestResult::Error(cause) => RequestResult::Error(cause),
        }
    }

    /// Borrow the success payload, if any
    pub fn data(&self) -> Option<&T> {
        match self {
            RequestResult::Success(data) => Some(data),
            _ => None,
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for RequestResult<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => RequestResult::Success(data),
            Err(e) => RequestResult::error(e.to_string()),
        }
    }
}

impl<T> Default for RequestResult<T> {
    fn default() -> Self {
        RequestResult::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: RequestResult<i32> = Ok::<_, String>(3).into();
        assert_eq!(ok, RequestResult::Success(3));

        let err: RequestResult<i32> = Err::<i32, _>("boom").into();
        assert_eq!(err, RequestResult::Error(Some("boom".to_string())));
    }

    #[test]
    fn test_map_keeps_state() {
        assert_eq!(RequestResult::Success(2).map(|v| v * 10), RequestResult::Success(20));
        assert!(RequestResult::<i32>::InProgress.map(|v| v + 1).is_in_progress());
        assert!(RequestResult::<i32>::error("x").map(|v| v + 1).is_error());
    }
}
