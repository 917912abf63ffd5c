// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

// Concrete presenters built on BasePresenter through AsBasePresenter.

use attache::{AsBasePresenter, Presenter, PresenterError, PresenterEvent};
use attache_test_utils::{assert_not_resolved, GreetingPresenter, GreetingView, RecordingView};
use futures::channel::oneshot;
use std::sync::Arc;

/// Drives a presenter the way a screen's lifecycle owner would.
fn show_screen<P: Presenter>(presenter: &P, view: Arc<P::View>) {
    presenter.attach_view(view);
}

fn hide_screen<P: Presenter>(presenter: &P) {
    presenter.detach_view();
}

#[test]
fn greet_requires_an_attached_view() {
    let presenter = GreetingPresenter::new();

    let err = presenter.greet("Ada").unwrap_err();
    assert!(matches!(err, PresenterError::ViewNotAttached));
}

#[test]
fn greet_renders_on_the_attached_view() -> anyhow::Result<()> {
    let presenter = GreetingPresenter::new();
    let view = RecordingView::shared(1);

    presenter.attach_view(view.clone());
    presenter.greet("Ada")?;
    presenter.greet("  ")?;

    assert_eq!(
        view.calls(),
        vec!["greeting:Hello, Ada!".to_string(), "empty".to_string()]
    );
    Ok(())
}

#[test]
fn lifecycle_owner_drives_presenter_through_the_trait() {
    let presenter = GreetingPresenter::new();
    let view = RecordingView::shared(1);

    let handle: Arc<dyn GreetingView> = view.clone();
    show_screen(&presenter, handle);
    assert!(presenter.base_presenter().is_view_attached());
    assert!(presenter.greet("Grace").is_ok());

    hide_screen(&presenter);
    assert!(!presenter.base_presenter().is_view_attached());
    assert!(presenter.greet("Grace").is_err());
    assert_eq!(view.calls(), vec!["greeting:Hello, Grace!".to_string()]);
}

#[test]
fn replaced_view_receives_subsequent_calls() -> anyhow::Result<()> {
    let presenter = GreetingPresenter::new();
    let old_view = RecordingView::shared(1);
    let new_view = RecordingView::shared(2);

    presenter.attach_view(old_view.clone());
    presenter.attach_view(new_view.clone());
    presenter.greet("Linus")?;

    assert!(old_view.calls().is_empty());
    assert_eq!(new_view.calls(), vec!["greeting:Hello, Linus!".to_string()]);
    Ok(())
}

#[tokio::test]
async fn load_finishing_after_detach_fails_with_view_not_attached() -> anyhow::Result<()> {
    let presenter = Arc::new(GreetingPresenter::new());
    let view = RecordingView::shared(1);
    presenter.attach_view(view.clone());

    let (name_tx, name_rx) = oneshot::channel::<String>();
    let loading = {
        let presenter = Arc::clone(&presenter);
        tokio::spawn(async move {
            presenter
                .greet_when_loaded(async move { name_rx.await.unwrap_or_default() })
                .await
        })
    };

    let mut detached = Box::pin(
        presenter
            .base_presenter()
            .wait_for_event(PresenterEvent::DetachView),
    );
    assert_not_resolved(&mut detached, 20).await;

    presenter.detach_view();
    assert_eq!(detached.await, Some(PresenterEvent::DetachView));

    let _ = name_tx.send("Ada".to_string());
    let result = loading.await?;

    assert!(matches!(result, Err(PresenterError::ViewNotAttached)));
    assert!(view.calls().is_empty());
    Ok(())
}

#[tokio::test]
async fn load_without_view_fails_before_waiting() {
    let presenter = GreetingPresenter::new();

    let result = presenter
        .greet_when_loaded(std::future::pending::<String>())
        .await;

    assert!(matches!(result, Err(PresenterError::ViewNotAttached)));
}

#[test]
fn trait_objects_of_views_are_interchangeable() {
    struct SilentView;
    impl attache::MvpView for SilentView {}
    impl GreetingView for SilentView {
        fn show_greeting(&self, _text: &str) {}
        fn show_empty(&self) {}
    }

    let presenter = GreetingPresenter::new();
    presenter.attach_view(Arc::new(SilentView));
    assert!(presenter.greet("anyone").is_ok());

    presenter.attach_view(RecordingView::shared(4));
    assert!(presenter.greet("anyone").is_ok());
}
