/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use uuid::Uuid;

pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

pub trait UnreadSource: Send + Sync + 'static {
    fn unread_count(&self) -> impl Future<Output = ConnectorResult<u64>> + Send;
}

/// Unread count of the notifications visible to `user_id`.
#[derive(Debug, Clone)]
pub struct HttpUnreadSource {
    pub config: RequestConfig,
    pub user_id: Option<Uuid>,
}

impl UnreadSource for HttpUnreadSource {
    fn unread_count(&self) -> impl Future<Output = ConnectorResult<u64>> + Send {
        let config = self.config.clone();
        let user_id = self.user_id;

        async move { notifications::unread_count(&config, user_id).await }
    }
}

/// Polls the unread notification count on a fixed interval, starting
/// immediately. Polling stops when the handle is dropped.
pub struct UnreadPoller {
    handle: JoinHandle<()>,
    count: watch::Receiver<u64>,
}

impl UnreadPoller {
    pub fn start<S: UnreadSource>(source: S) -> Self {
        Self::with_interval(source, POLL_INTERVAL)
    }

    pub fn with_interval<S: UnreadSource>(source: S, period: Duration) -> Self {
        let (tx, count) = watch::channel(0);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                match source.unread_count().await {
                    Ok(unread) => {
                        if tx.send(unread).is_err() {
                            break;
                        }
                    }
                    Err(e) => tracing::warn!("Failed to fetch notification count: {}", e),
                }
            }
        });

        UnreadPoller { handle, count }
    }

    pub fn count(&self) -> u64 {
        *self.count.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.count.clone()
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn stop(self) {}
}

impl Drop for UnreadPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[derive(Clone, Default)]
    struct CountingSource {
        calls: Arc<AtomicU64>,
    }

    impl UnreadSource for CountingSource {
        fn unread_count(&self) -> impl Future<Output = ConnectorResult<u64>> + Send {
            let calls = Arc::clone(&self.calls);

            async move { Ok(calls.fetch_add(1, Ordering::SeqCst) + 1) }
        }
    }

    struct FailingSource;

    impl UnreadSource for FailingSource {
        fn unread_count(&self) -> impl Future<Output = ConnectorResult<u64>> + Send {
            async {
                Err(ConnectorError::Api {
                    status: 500,
                    message: "Database error".to_string(),
                })
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_immediately_then_every_interval() {
        let source = CountingSource::default();
        let poller = UnreadPoller::start(source.clone());

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(poller.count(), 1);

        tokio::time::sleep(POLL_INTERVAL).await;
        assert_eq!(poller.count(), 2);

        tokio::time::sleep(POLL_INTERVAL * 2).await;
        assert_eq!(poller.count(), 4);
        assert!(poller.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_stops_polling() {
        let source = CountingSource::default();
        let poller = UnreadPoller::start(source.clone());

        tokio::time::sleep(Duration::from_millis(10)).await;
        poller.stop();

        let calls = source.calls.load(Ordering::SeqCst);
        tokio::time::sleep(POLL_INTERVAL * 4).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), calls);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_keep_last_count() {
        let poller = UnreadPoller::start(FailingSource);

        tokio::time::sleep(POLL_INTERVAL * 2).await;

        assert_eq!(poller.count(), 0);
        assert!(poller.is_running());
    }
}
