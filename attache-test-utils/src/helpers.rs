// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        _item = stream.next() => {
            panic!(
                "Unexpected element emitted, expected no output."
            );
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}

/// Polls `future` for `timeout_ms` and panics if it resolves in that window.
///
/// The future is borrowed, so it can still be awaited afterwards.
pub async fn assert_not_resolved<F>(future: &mut F, timeout_ms: u64)
where
    F: Future + Unpin,
{
    tokio::select! {
        _output = future => {
            panic!(
                "Future resolved, expected it to stay pending."
            );
        }
        _ = sleep(Duration::from_millis(timeout_ms)) => {
        }
    }
}
