// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Stream primitives behind attache's presenter lifecycle.
//!
//! - [`BehaviorSubject`]: a hot subject that replays its most recent value to new subscribers.
//! - [`FirstWhereExt::first_where`]: emits the first matching value, then completes.

#[macro_use]
mod logging;

pub mod behavior_subject;
pub mod first_where;

pub use self::behavior_subject::{BehaviorSubject, SubjectBoxStream};
pub use self::first_where::FirstWhereExt;
pub use attache_error::SubjectError;
