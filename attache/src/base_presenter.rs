// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! View lifecycle tracking shared by every presenter.
//!
//! A [`BasePresenter`] holds the currently attached view, if any, and publishes each
//! attach/detach transition on a lifecycle stream.
//!
//! ## Lifecycle stream
//!
//! The stream is hot and replays its latest event: a new subscriber first sees the most
//! recent [`PresenterEvent`] (if one was emitted), then every later one. Nothing older is
//! replayed. The stream completes when the presenter is dropped.
//!
//! ## Example
//!
//! ```
//! use attache::{BasePresenter, MvpView, PresenterError, PresenterEvent};
//! use std::sync::Arc;
//!
//! struct LoginScreen;
//! impl MvpView for LoginScreen {}
//!
//! # #[tokio::main]
//! # async fn main() {
//! let presenter = BasePresenter::<LoginScreen>::new();
//! assert!(matches!(presenter.check_view_attached(), Err(PresenterError::ViewNotAttached)));
//!
//! let attached = presenter.wait_for_event(PresenterEvent::AttachView);
//! presenter.attach_view(Arc::new(LoginScreen));
//!
//! assert_eq!(attached.await, Some(PresenterEvent::AttachView));
//! assert!(presenter.check_view_attached().is_ok());
//!
//! presenter.detach_view();
//! assert!(!presenter.is_view_attached());
//! # }
//! ```

use crate::presenter::{AsBasePresenter, MvpView};
use crate::PresenterEvent;
use attache_core::{BehaviorSubject, FirstWhereExt};
use attache_error::{PresenterError, Result};
use futures::future::Future;
use futures::stream::{self, Stream, StreamExt};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Tracks the view attached to a presenter and publishes lifecycle transitions.
///
/// Concrete presenters embed one and expose it through [`AsBasePresenter`]. See the
/// [module documentation](self) for the lifecycle stream semantics.
pub struct BasePresenter<V: ?Sized + MvpView> {
    view: Mutex<Option<Arc<V>>>,
    lifecycle: BehaviorSubject<PresenterEvent>,
}

impl<V: ?Sized + MvpView> BasePresenter<V> {
    /// Creates a presenter with no view attached and no lifecycle history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mutex::new(None),
            lifecycle: BehaviorSubject::new(),
        }
    }

    /// Stores `view`, then emits [`PresenterEvent::AttachView`].
    ///
    /// A view that is already attached is replaced.
    pub fn attach_view(&self, view: Arc<V>) {
        if self.view.lock().replace(view).is_some() {
            debug!("replacing attached view");
        }
        debug!("view attached");
        self.emit(PresenterEvent::AttachView);
    }

    /// Emits [`PresenterEvent::DetachView`], then releases the view.
    ///
    /// The event goes out while the view is still held. Subscribers receive it
    /// asynchronously, so by the time they observe it the view is normally already
    /// released. Detaching a presenter that has no view still emits the event.
    pub fn detach_view(&self) {
        self.emit(PresenterEvent::DetachView);
        *self.view.lock() = None;
        debug!("view detached");
    }

    /// Returns `true` while a view is attached.
    #[must_use]
    pub fn is_view_attached(&self) -> bool {
        self.view.lock().is_some()
    }

    /// Returns the attached view, if any.
    #[must_use]
    pub fn view(&self) -> Option<Arc<V>> {
        self.view.lock().clone()
    }

    /// Guards view-dependent work.
    ///
    /// # Errors
    ///
    /// Returns [`PresenterError::ViewNotAttached`] when no view is attached.
    pub fn check_view_attached(&self) -> Result<()> {
        self.attached_view().map(|_| ())
    }

    /// Returns the attached view or fails like [`check_view_attached`](Self::check_view_attached).
    ///
    /// # Errors
    ///
    /// Returns [`PresenterError::ViewNotAttached`] when no view is attached.
    pub fn attached_view(&self) -> Result<Arc<V>> {
        match self.view() {
            Some(view) => Ok(view),
            None => {
                warn!("view-dependent call on a presenter without an attached view");
                Err(PresenterError::ViewNotAttached)
            }
        }
    }

    /// Returns the most recently emitted lifecycle event.
    #[must_use]
    pub fn last_event(&self) -> Option<PresenterEvent> {
        self.lifecycle.value()
    }

    /// Subscribes to the lifecycle stream: the latest event, if any, then every later one.
    pub fn lifecycle_events(&self) -> impl Stream<Item = PresenterEvent> + Send + 'static {
        self.subscription()
    }

    /// Emits the first occurrence of `event` on the lifecycle stream, then completes.
    ///
    /// The subscription starts immediately, so a matching latest event is delivered right away.
    pub fn presenter_event(
        &self,
        event: PresenterEvent,
    ) -> impl Stream<Item = PresenterEvent> + Send + 'static {
        self.subscription()
            .first_where(move |emitted: &PresenterEvent| *emitted == event)
    }

    /// Resolves the first time `event` is seen on the lifecycle stream.
    ///
    /// Subscribes when called, not when first polled. Resolves to `None` only if the
    /// presenter is dropped before `event` occurs.
    pub fn wait_for_event(
        &self,
        event: PresenterEvent,
    ) -> impl Future<Output = Option<PresenterEvent>> + Send + 'static {
        let first = self.presenter_event(event);
        async move {
            let mut first = Box::pin(first);
            first.next().await
        }
    }

    /// Returns the number of live lifecycle subscriptions.
    ///
    /// Every pending [`wait_for_event`](Self::wait_for_event) and every undropped
    /// lifecycle stream counts as one. Finished subscriptions are released on the next
    /// emit or subscribe.
    #[must_use]
    pub fn lifecycle_subscriber_count(&self) -> usize {
        self.lifecycle.subscriber_count()
    }

    fn subscription(&self) -> impl Stream<Item = PresenterEvent> + Send + 'static {
        // Only fails once closed in drop; an empty stream completes right away
        stream::iter(self.lifecycle.subscribe().ok()).flatten()
    }

    fn emit(&self, event: PresenterEvent) {
        if self.lifecycle.next(event).is_err() {
            warn!(%event, "lifecycle stream closed, event dropped");
        }
    }
}

impl<V: ?Sized + MvpView> AsBasePresenter for BasePresenter<V> {
    type View = V;

    fn base_presenter(&self) -> &BasePresenter<V> {
        self
    }
}

impl<V: ?Sized + MvpView> Default for BasePresenter<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ?Sized + MvpView> fmt::Debug for BasePresenter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasePresenter")
            .field("view_attached", &self.is_view_attached())
            .field("last_event", &self.last_event())
            .finish()
    }
}

impl<V: ?Sized + MvpView> Drop for BasePresenter<V> {
    fn drop(&mut self) {
        self.lifecycle.close();
    }
}
