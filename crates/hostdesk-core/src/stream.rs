// ── Collection subscriptions ──
//
// Handles vended by `DomainStore::subscribe_*`. A handle remembers the
// snapshot it last observed, so a consumer can render immediately and
// then wait for the next change.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

type Snapshot<T> = Arc<Vec<Arc<T>>>;

/// A subscription to one store collection.
pub struct EntityStream<T: Send + Sync + 'static> {
    seen: Snapshot<T>,
    receiver: watch::Receiver<Snapshot<T>>,
}

impl<T: Send + Sync + 'static> EntityStream<T> {
    pub(crate) fn new(mut receiver: watch::Receiver<Snapshot<T>>) -> Self {
        let seen = receiver.borrow_and_update().clone();
        Self { seen, receiver }
    }

    /// The snapshot last observed by this handle.
    pub fn current(&self) -> &Snapshot<T> {
        &self.seen
    }

    /// The store's snapshot right now, without marking it observed.
    pub fn latest(&self) -> Snapshot<T> {
        self.receiver.borrow().clone()
    }

    /// Wait for the collection to change. `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<Snapshot<T>> {
        self.receiver.changed().await.ok()?;
        self.seen = self.receiver.borrow_and_update().clone();
        Some(Arc::clone(&self.seen))
    }

    /// Yield the current snapshot, then one per change.
    pub fn into_stream(self) -> SnapshotStream<T> {
        SnapshotStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter over a collection subscription.
pub struct SnapshotStream<T: Send + Sync + 'static> {
    inner: WatchStream<Snapshot<T>>,
}

impl<T: Send + Sync + 'static> Stream for SnapshotStream<T> {
    type Item = Snapshot<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.inner).poll_next(cx)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::Industry;
    use crate::store::DomainStore;

    fn industry(id: u64) -> Industry {
        Industry {
            id,
            name: format!("industry-{id}"),
            description: String::new(),
            active: true,
        }
    }

    #[tokio::test]
    async fn changed_tracks_latest_snapshot() {
        let store = DomainStore::new();
        store.industries.replace(vec![industry(1)]);

        let mut stream = store.subscribe_industries();
        assert_eq!(stream.current().len(), 1);

        store.industries.push(industry(2));
        assert_eq!(stream.current().len(), 1);
        assert_eq!(stream.latest().len(), 2);

        let snap = stream.changed().await.unwrap();
        assert_eq!(snap.len(), 2);
        assert_eq!(stream.current().len(), 2);
    }

    #[tokio::test]
    async fn changed_ends_when_store_drops() {
        let store = DomainStore::new();
        let mut stream = store.subscribe_leads();
        drop(store);
        assert!(stream.changed().await.is_none());
    }
}
