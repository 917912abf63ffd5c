// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::BasePresenter;
use std::sync::Arc;

/// Marker for types a presenter can drive.
///
/// Presenters treat views as opaque handles; a view trait usually extends this one with the
/// rendering callbacks its presenter needs.
pub trait MvpView: Send + Sync + 'static {}

/// The contract between a presenter and whatever owns the UI lifecycle.
///
/// The lifecycle owner attaches the view once it is ready to render and detaches it before
/// the view goes away.
pub trait Presenter {
    /// The view type this presenter drives, usually `dyn SomeView`.
    type View: ?Sized + MvpView;

    /// Hands the presenter a view to drive.
    fn attach_view(&self, view: Arc<Self::View>);

    /// Takes the view away from the presenter.
    fn detach_view(&self);
}

/// Gives a concrete presenter the lifecycle handling of an embedded [`BasePresenter`].
///
/// Implementors get [`Presenter`] for free and reach the view guards through
/// `base_presenter()`.
///
/// ```
/// use attache::{AsBasePresenter, BasePresenter, MvpView, Presenter, Result};
/// use std::sync::Arc;
///
/// trait CounterView: MvpView {
///     fn show_count(&self, count: u32);
/// }
///
/// #[derive(Default)]
/// struct CounterPresenter {
///     base: BasePresenter<dyn CounterView>,
/// }
///
/// impl AsBasePresenter for CounterPresenter {
///     type View = dyn CounterView;
///
///     fn base_presenter(&self) -> &BasePresenter<dyn CounterView> {
///         &self.base
///     }
/// }
///
/// impl CounterPresenter {
///     fn refresh(&self) -> Result<()> {
///         self.base.attached_view()?.show_count(3);
///         Ok(())
///     }
/// }
///
/// struct Screen;
/// impl MvpView for Screen {}
/// impl CounterView for Screen {
///     fn show_count(&self, _count: u32) {}
/// }
///
/// let presenter = CounterPresenter::default();
/// assert!(presenter.refresh().is_err());
///
/// presenter.attach_view(Arc::new(Screen));
/// assert!(presenter.refresh().is_ok());
/// ```
pub trait AsBasePresenter {
    type View: ?Sized + MvpView;

    fn base_presenter(&self) -> &BasePresenter<Self::View>;
}

impl<P: AsBasePresenter> Presenter for P {
    type View = P::View;

    fn attach_view(&self, view: Arc<Self::View>) {
        self.base_presenter().attach_view(view);
    }

    fn detach_view(&self) {
        self.base_presenter().detach_view();
    }
}
