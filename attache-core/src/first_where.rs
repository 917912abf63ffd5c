// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! First-where operator that emits a single matching value and completes.

use futures::future;
use futures::{Stream, StreamExt};

/// Emits the first value for which `predicate` returns `true`, then completes.
///
/// Non-matching values are dropped. The source is not polled again once a value has been
/// emitted, so the result fires at most once.
///
/// # Examples
///
/// ```rust
/// use attache_core::first_where::first_where_impl;
/// use futures::{stream, StreamExt};
///
/// # async fn example() {
/// let source = stream::iter(vec![1, 2, 3, 4]);
/// let mut first_even = Box::pin(first_where_impl(source, |v: &i32| v % 2 == 0));
///
/// assert_eq!(first_even.next().await, Some(2));
/// assert!(first_even.next().await.is_none());
/// # }
/// ```
pub fn first_where_impl<S, F>(stream: S, mut predicate: F) -> impl Stream<Item = S::Item>
where
    S: Stream,
    F: FnMut(&S::Item) -> bool,
{
    stream
        .filter(move |value| future::ready(predicate(value)))
        .take(1)
}

/// Extension trait providing [`first_where`](FirstWhereExt::first_where) on any stream.
pub trait FirstWhereExt: Stream + Sized {
    /// Emits the first value matching `predicate`, then completes.
    ///
    /// See [`first_where_impl`] for details.
    fn first_where<F>(self, predicate: F) -> impl Stream<Item = Self::Item> + Send
    where
        Self: Send,
        Self::Item: Send,
        F: FnMut(&Self::Item) -> bool + Send;
}

impl<S: Stream + Sized> FirstWhereExt for S {
    fn first_where<F>(self, predicate: F) -> impl Stream<Item = Self::Item> + Send
    where
        Self: Send,
        Self::Item: Send,
        F: FnMut(&Self::Item) -> bool + Send,
    {
        first_where_impl(self, predicate)
    }
}
