//! Cancellation for in-flight AI requests.
//!
//! A [`CancelHandle`] flips a `watch` channel; every [`CancelToken`] cloned
//! from it observes the flip. Dropping the handle without cancelling leaves
//! tokens pending forever.

use tokio::sync::watch;

/// Owner side: call [`CancelHandle::cancel`] to abandon outstanding requests.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

/// Observer side, passed into requests.
#[derive(Debug, Clone)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

/// Create a connected handle/token pair.
#[must_use]
pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx })
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    #[must_use]
    pub fn token(&self) -> CancelToken {
        CancelToken {
            rx: self.tx.subscribe(),
        }
    }
}

impl CancelToken {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once the handle cancels.
    pub async fn cancelled(&mut self) {
        let closed = self.rx.wait_for(|cancelled| *cancelled).await.is_err();
        if closed {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn token_observes_cancel() {
        let (handle, mut token) = cancel_pair();
        assert!(!token.is_cancelled());
        handle.cancel();
        assert!(token.is_cancelled());
        tokio::time::timeout(Duration::from_secs(1), token.cancelled())
            .await
            .expect("cancelled should resolve");
    }

    #[tokio::test]
    async fn tokens_from_handle_share_state() {
        let (handle, _token) = cancel_pair();
        let second = handle.token();
        handle.cancel();
        assert!(second.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_handle_never_cancels() {
        let (handle, mut token) = cancel_pair();
        drop(handle);
        let outcome = tokio::time::timeout(Duration::from_secs(60), token.cancelled()).await;
        assert!(outcome.is_err());
    }
}
