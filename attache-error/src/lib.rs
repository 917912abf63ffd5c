// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the attache presenter library
//!
//! [`PresenterError`] is the error returned by view-dependent presenter operations.
//! [`SubjectError`] covers lifecycle stream failures inside the subject itself.
//!
//! # Examples
//!
//! ```
//! use attache_error::{PresenterError, Result};
//!
//! fn load_greeting(attached: bool) -> Result<&'static str> {
//!     if !attached {
//!         return Err(PresenterError::ViewNotAttached);
//!     }
//!     Ok("hello")
//! }
//!
//! assert_eq!(load_greeting(false), Err(PresenterError::ViewNotAttached));
//! ```

use core::fmt;

/// Root error type for presenter operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PresenterError {
    /// A view-dependent operation ran while no view was attached.
    ///
    /// This is a precondition violation in the calling code, not a transient condition:
    /// the caller forgot to attach a view, or kept working after detaching it.
    #[error("Please call Presenter::attach_view before requesting data from the Presenter")]
    ViewNotAttached,
}

/// Errors specific to subject operations (lifecycle and broadcasting).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectError {
    /// The subject has been closed and cannot accept new values or subscribers.
    Closed,
}

impl fmt::Display for SubjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => write!(f, "Subject is closed"),
        }
    }
}

impl std::error::Error for SubjectError {}

pub type Result<T> = std::result::Result<T, PresenterError>;
