// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the attache presenter library.
//!
//! This crate provides fixture views, a sample presenter and async assertion helpers. It is
//! designed for use in development and testing only, not for production code.
//!
//! # Key Types
//!
//! - [`GreetingView`]: a view trait with a couple of rendering callbacks.
//! - [`RecordingView`]: a `GreetingView` that records every call it receives.
//! - [`GreetingPresenter`]: a presenter built on `BasePresenter<dyn GreetingView>`.
//!
//! # Example
//!
//! ```rust
//! use attache::Presenter;
//! use attache_test_utils::{GreetingPresenter, RecordingView};
//!
//! let presenter = GreetingPresenter::new();
//! let view = RecordingView::shared(1);
//!
//! presenter.attach_view(view.clone());
//! presenter.greet("Ada").unwrap();
//!
//! assert_eq!(view.calls(), vec!["greeting:Hello, Ada!".to_string()]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod greeting;
pub mod helpers;

pub use greeting::{GreetingPresenter, GreetingView, RecordingView};
pub use helpers::{assert_no_element_emitted, assert_not_resolved};
