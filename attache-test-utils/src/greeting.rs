// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use attache::{AsBasePresenter, BasePresenter, MvpView, Result};
use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;

/// Fixture view: renders a greeting or an empty state.
pub trait GreetingView: MvpView {
    fn show_greeting(&self, text: &str);
    fn show_empty(&self);
}

/// A [`GreetingView`] that records every call as `"greeting:<text>"` or `"empty"`.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub id: u32,
    calls: Mutex<Vec<String>>,
}

impl RecordingView {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Convenience for the common `Arc<RecordingView>` case.
    pub fn shared(id: u32) -> Arc<Self> {
        Arc::new(Self::new(id))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl MvpView for RecordingView {}

impl GreetingView for RecordingView {
    fn show_greeting(&self, text: &str) {
        self.calls.lock().push(format!("greeting:{text}"));
    }

    fn show_empty(&self) {
        self.calls.lock().push("empty".to_string());
    }
}

/// Sample presenter that greets by name.
#[derive(Debug, Default)]
pub struct GreetingPresenter {
    base: BasePresenter<dyn GreetingView>,
}

impl GreetingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders a greeting for `name`, or the empty state for a blank name.
    pub fn greet(&self, name: &str) -> Result<()> {
        let view = self.base.attached_view()?;
        if name.trim().is_empty() {
            view.show_empty();
        } else {
            view.show_greeting(&format!("Hello, {name}!"));
        }
        Ok(())
    }

    /// Waits for `name` to load, then greets with whatever view is attached at that point.
    pub async fn greet_when_loaded<F>(&self, name: F) -> Result<()>
    where
        F: Future<Output = String>,
    {
        self.base.check_view_attached()?;
        let name = name.await;
        self.greet(&name)
    }
}

impl AsBasePresenter for GreetingPresenter {
    type View = dyn GreetingView;

    fn base_presenter(&self) -> &BasePresenter<dyn GreetingView> {
        &self.base
    }
}
