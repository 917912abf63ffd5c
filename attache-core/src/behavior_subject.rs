// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber subject that replays its latest item.
//!
//! A [`BehaviorSubject`] broadcasts each value to all active subscribers and remembers the
//! most recent one.
//!
//! ## Characteristics
//!
//! - **Hot, replay-last**: A new subscriber immediately receives the most recent value (if
//!   any has been sent), then every value sent afterwards. Older history is not replayed.
//! - **Unbounded**: Uses unbounded channels internally (no backpressure).
//! - **Thread-safe**: Cheap to clone; all clones share the same internal state.
//! - **Close**: Closing completes every subscriber stream once it has drained.
//!
//! ## Example
//!
//! ```
//! use attache_core::BehaviorSubject;
//! use futures::StreamExt;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let subject = BehaviorSubject::<i32>::new();
//! subject.next(1).unwrap();
//! subject.next(2).unwrap();
//!
//! // Late subscriber sees only the latest value
//! let mut stream = subject.subscribe().unwrap();
//! subject.next(3).unwrap();
//! subject.close();
//!
//! assert_eq!(stream.next().await, Some(2));
//! assert_eq!(stream.next().await, Some(3));
//! assert_eq!(stream.next().await, None); // Subject closed
//! # }
//! ```

use async_channel::Sender;
use attache_error::SubjectError;
use futures::Stream;
use parking_lot::Mutex;
use std::pin::Pin;
use std::sync::Arc;

pub type SubjectBoxStream<T> = Pin<Box<dyn Stream<Item = T> + Send + Sync + 'static>>;

struct SubjectState<T> {
    closed: bool,
    latest: Option<T>,
    senders: Vec<Sender<T>>,
}

/// A hot, unbounded subject that replays its latest value to new subscribers.
///
/// See the [module documentation](self) for examples and more details.
pub struct BehaviorSubject<T: Clone + Send + Sync + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + Sync + 'static> BehaviorSubject<T> {
    /// Creates a new subject with no subscribers and nothing to replay.
    #[must_use]
    pub fn new() -> Self {
        Self::from_latest(None)
    }

    /// Creates a new subject seeded with `value`, which the first subscribers will receive.
    #[must_use]
    pub fn with_value(value: T) -> Self {
        Self::from_latest(Some(value))
    }

    fn from_latest(latest: Option<T>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                latest,
                senders: Vec::new(),
            })),
        }
    }

    /// Subscribe to this subject and receive a stream of `T`.
    ///
    /// The stream starts with the latest value, if one was sent, followed by every value sent
    /// after this call. Registration and replay happen under one lock, so no concurrent
    /// `send` is lost or delivered twice. Subscribers whose stream has been dropped are
    /// pruned first.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn subscribe(&self) -> Result<SubjectBoxStream<T>, SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        state.senders.retain(|tx| !tx.is_closed());

        let (tx, rx) = async_channel::unbounded();
        if let Some(latest) = &state.latest {
            // The receiver is alive, an unbounded send cannot fail here
            let _ = tx.try_send(latest.clone());
        }
        state.senders.push(tx);
        Ok(Box::pin(rx))
    }

    /// Send a value to all active subscribers and remember it as the latest value.
    ///
    /// Subscribers whose stream has been dropped are pruned.
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn send(&self, value: T) -> Result<(), SubjectError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(SubjectError::Closed);
        }

        let mut next_senders = Vec::with_capacity(state.senders.len());

        for tx in state.senders.drain(..) {
            if tx.try_send(value.clone()).is_ok() {
                next_senders.push(tx);
            }
        }

        state.senders = next_senders;
        state.latest = Some(value);
        Ok(())
    }

    /// Alias for [`send`](Self::send).
    ///
    /// # Errors
    ///
    /// Returns `SubjectError::Closed` if the subject has been closed.
    pub fn next(&self, value: T) -> Result<(), SubjectError> {
        self.send(value)
    }

    /// Closes the subject, completing all subscriber streams.
    ///
    /// After closing:
    /// - Existing subscribers drain what was already sent, then receive `None`.
    /// - `send()` and `next()` return `SubjectError::Closed`.
    /// - `subscribe()` returns `SubjectError::Closed`.
    ///
    /// Closing is idempotent.
    pub fn close(&self) {
        let mut state = self.state.lock();
        if !state.closed {
            debug!(subscribers = state.senders.len(), "closing behavior subject");
        }
        state.closed = true;
        state.senders.clear();
    }

    /// Returns the latest value, or `None` if nothing was sent.
    #[must_use]
    pub fn value(&self) -> Option<T> {
        self.state.lock().latest.clone()
    }

    /// Returns `true` if the subject has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Returns the number of currently active subscribers.
    ///
    /// Note: This count is updated lazily. Dropped subscribers are removed on the next
    /// `send()` or `subscribe()` call, not immediately when dropped.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.state.lock().senders.len()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for BehaviorSubject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync + 'static> Clone for BehaviorSubject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}
