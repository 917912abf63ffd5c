// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Attache
//!
//! The presenter half of Model-View-Presenter, without the framework around it.
//!
//! ## Overview
//!
//! A presenter drives a view it does not own. The UI lifecycle owner attaches the view when
//! it is ready to render and detaches it before it goes away; in between, presenter logic
//! may only touch the view while one is attached. Attache provides:
//!
//! - [`BasePresenter`]: the attached-view slot, guards against using a detached view, and a
//!   lifecycle stream of [`PresenterEvent`]s.
//! - [`Presenter`], [`AsBasePresenter`], [`MvpView`]: the traits concrete presenters and
//!   views plug into.
//!
//! ## Quick Start
//!
//! ```rust
//! use attache::{AsBasePresenter, BasePresenter, MvpView, Presenter, Result};
//! use std::sync::Arc;
//!
//! trait ProfileView: MvpView {
//!     fn show_name(&self, name: &str);
//! }
//!
//! #[derive(Default)]
//! struct ProfilePresenter {
//!     base: BasePresenter<dyn ProfileView>,
//! }
//!
//! impl AsBasePresenter for ProfilePresenter {
//!     type View = dyn ProfileView;
//!
//!     fn base_presenter(&self) -> &BasePresenter<dyn ProfileView> {
//!         &self.base
//!     }
//! }
//!
//! impl ProfilePresenter {
//!     fn load_profile(&self) -> Result<()> {
//!         self.base.check_view_attached()?;
//!         if let Some(view) = self.base.view() {
//!             view.show_name("Ada");
//!         }
//!         Ok(())
//!     }
//! }
//! ```
//!
//! ## Features
//!
//! - `tracing`: log lifecycle transitions and guard failures through `tracing`.

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
mod logging;

pub mod base_presenter;
pub mod presenter;
pub mod presenter_event;

pub use self::base_presenter::BasePresenter;
pub use self::presenter::{AsBasePresenter, MvpView, Presenter};
pub use self::presenter_event::PresenterEvent;
pub use attache_error::{PresenterError, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{AsBasePresenter, BasePresenter, MvpView, Presenter, PresenterEvent};
    pub use attache_core::{BehaviorSubject, FirstWhereExt};
    pub use attache_error::{PresenterError, Result};
}
