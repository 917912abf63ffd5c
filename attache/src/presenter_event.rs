// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::fmt;

/// A transition in a presenter's view lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresenterEvent {
    /// A view was attached (or replaced the previously attached one).
    AttachView,
    /// The view was detached.
    DetachView,
}

impl fmt::Display for PresenterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttachView => write!(f, "attach_view"),
            Self::DetachView => write!(f, "detach_view"),
        }
    }
}
