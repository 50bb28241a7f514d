use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use logstorm_client::{ApiClient, PayloadMode};

use crate::token::TokenCell;

/// One worker cycle: a single authenticated write, a fixed delay, then a
/// completion signal carrying the worker id.
///
/// A failed request is logged and still counts as a completed cycle; only
/// cancellation suppresses the signal.
pub(crate) async fn run_cycle(
    client: ApiClient,
    token: TokenCell,
    payload: PayloadMode,
    id: usize,
    fixed_wait: Duration,
    done: mpsc::Sender<usize>,
    cancel: CancellationToken,
) {
    let entry = payload.entry();
    let bearer = token.get();

    tokio::select! {
        _ = cancel.cancelled() => return,
        result = client.create_log(&bearer, &entry) => match result {
            Ok(body) => info!(worker = id, "answer: {body}"),
            Err(e) => warn!(worker = id, "log request failed: {e}"),
        },
    }

    tokio::select! {
        _ = cancel.cancelled() => return,
        _ = tokio::time::sleep(fixed_wait) => {}
    }

    let _ = done.send(id).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn dead_endpoint() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn completion_is_signalled_even_when_the_request_fails() {
        let client = ApiClient::new(dead_endpoint().await);
        let (tx, mut rx) = mpsc::channel(1);

        run_cycle(
            client,
            TokenCell::default(),
            PayloadMode::Fixed,
            7,
            Duration::ZERO,
            tx,
            CancellationToken::new(),
        )
        .await;

        assert_eq!(rx.recv().await, Some(7));
    }

    #[tokio::test]
    async fn cancelled_worker_exits_without_signalling() {
        let client = ApiClient::new(dead_endpoint().await);
        let (tx, mut rx) = mpsc::channel(1);
        let cancel = CancellationToken::new();
        cancel.cancel();

        run_cycle(
            client,
            TokenCell::default(),
            PayloadMode::Fixed,
            0,
            Duration::from_secs(60),
            tx,
            cancel,
        )
        .await;

        assert!(rx.try_recv().is_err());
    }
}
