use std::time::Instant;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use logstorm_client::{ApiClient, Credentials};

use crate::config::Config;
use crate::token::TokenCell;
use crate::worker;

/// Spawns the worker pool and keeps it saturated.
///
/// Ramp-up launches one task per configured worker, then the steady-state
/// loop blocks on the completion channel and relaunches each worker under
/// its old id as soon as it reports in. Token age is checked at completion
/// events only, so refresh latency is bounded by the slowest outstanding
/// cycle.
pub struct Dispatcher {
    client: ApiClient,
    config: Config,
    credentials: Credentials,
    token: TokenCell,
}

impl Dispatcher {
    pub fn new(client: ApiClient, config: Config) -> Self {
        Self {
            client,
            config,
            credentials: Credentials::default(),
            token: TokenCell::default(),
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Run ramp-up and the steady-state relaunch loop until cancelled.
    pub async fn run(self, cancel: CancellationToken) {
        self.refresh_token().await;
        let mut last_refresh = Instant::now();

        let (done_tx, mut done_rx) = mpsc::channel(self.config.workers.max(1));

        for id in 0..self.config.workers {
            debug!(worker = id, "spawning worker");
            self.spawn_worker(id, done_tx.clone(), cancel.clone());
        }
        info!(workers = self.config.workers, "ramp-up complete");

        loop {
            let id = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("dispatcher shutting down");
                    return;
                }
                id = done_rx.recv() => match id {
                    Some(id) => id,
                    None => return,
                },
            };

            if last_refresh.elapsed() > self.config.refresh_interval {
                info!("refreshing token");
                self.refresh_token().await;
                last_refresh = Instant::now();
            }

            debug!(worker = id, "respawning worker");
            self.spawn_worker(id, done_tx.clone(), cancel.clone());
        }
    }

    fn spawn_worker(&self, id: usize, done: mpsc::Sender<usize>, cancel: CancellationToken) {
        tokio::spawn(worker::run_cycle(
            self.client.clone(),
            self.token.clone(),
            self.config.payload,
            id,
            self.config.fixed_wait,
            done,
            cancel,
        ));
    }

    /// Fetch a fresh token. Failures are logged and leave the empty string
    /// in place; workers then proceed with an empty bearer value.
    async fn refresh_token(&self) {
        match self.client.request_token(&self.credentials).await {
            Ok(token) => self.token.swap(token),
            Err(e) => {
                warn!("authentication failed: {e}");
                self.token.swap("");
            }
        }
    }
}
