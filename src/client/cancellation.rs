//! Cancellation signal threaded from the caller down to the transport

use tokio::sync::watch;

/// Owner side: cancels every [`CancellationSignal`] handed out by it
#[derive(Debug)]
pub struct CancellationSource {
    sender: watch::Sender<bool>,
}

impl CancellationSource {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self { sender }
    }

    /// Signal connected to this source
    pub fn signal(&self) -> CancellationSignal {
        CancellationSignal {
            receiver: Some(self.sender.subscribe()),
        }
    }

    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }
}

impl Default for CancellationSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiver side, passed along with a request
#[derive(Debug, Clone, Default)]
pub struct CancellationSignal {
    receiver: Option<watch::Receiver<bool>>,
}

impl CancellationSignal {
    /// A signal that never fires
    #[cfg(test)]
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.receiver
            .as_ref()
            .is_some_and(|receiver| *receiver.borrow())
    }

    /// Resolves once the source cancels. Never resolves for [`CancellationSignal::none`]
    /// or when the source is dropped without cancelling.
    pub async fn cancelled(&mut self) {
        match self.receiver.as_mut() {
            Some(receiver) => {
                if receiver.wait_for(|cancelled| *cancelled).await.is_err() {
                    std::future::pending::<()>().await;
                }
            }
            None => std::future::pending::<()>().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_none_is_never_cancelled() {
        assert!(!CancellationSignal::none().is_cancelled());
    }

    #[test]
    fn test_cancel_reaches_every_signal() {
        let source = CancellationSource::new();
        let first = source.signal();
        let second = source.signal();

        source.cancel();

        assert!(source.is_cancelled());
        assert!(first.is_cancelled());
        assert!(second.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_resolves_after_cancel() {
        let source = CancellationSource::new();
        let mut signal = source.signal();

        let waiter = tokio::spawn(async move { signal.cancelled().await });
        source.cancel();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("signal should resolve")
            .unwrap();
    }

    #[tokio::test]
    async fn test_cancelled_pending_for_none() {
        let mut signal = CancellationSignal::none();
        let result = tokio::time::timeout(Duration::from_millis(20), signal.cancelled()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_cancelled_pending_when_source_dropped() {
        let source = CancellationSource::new();
        let mut signal = source.signal();
        drop(source);

        let result = tokio::time::timeout(Duration::from_millis(20), signal.cancelled()).await;
        assert!(result.is_err());
        assert!(!signal.is_cancelled());
    }
}
