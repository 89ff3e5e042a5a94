// ── Ordered reactive entity collection ──
//
// Server order matters here (the customer list numbers rows by
// position), so entities live in a `Vec` rather than a keyed map. The
// whole list sits inside a `watch` channel: readers take a cheap `Arc`
// snapshot, writers rebuild and broadcast.

use std::sync::Arc;

use tokio::sync::watch;

pub(crate) struct EntityCollection<T: Send + Sync + 'static> {
    snapshot: watch::Sender<Arc<Vec<Arc<T>>>>,
}

impl<T: Send + Sync + 'static> EntityCollection<T> {
    pub(crate) fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(Vec::new()));
        Self { snapshot }
    }

    /// Swap the whole collection for `entities`, keeping their order.
    pub(crate) fn replace(&self, entities: Vec<T>) {
        let values: Vec<Arc<T>> = entities.into_iter().map(Arc::new).collect();
        // `send_modify` updates unconditionally, even with zero receivers.
        self.snapshot.send_modify(|snap| *snap = Arc::new(values));
    }

    /// Append one entity at the end.
    pub(crate) fn push(&self, entity: T) {
        self.snapshot.send_modify(|snap| {
            let mut values = Vec::with_capacity(snap.len() + 1);
            values.extend(snap.iter().cloned());
            values.push(Arc::new(entity));
            *snap = Arc::new(values);
        });
    }

    /// Replace the first entity `same` matches in place, or append.
    /// Returns `true` if the entity was appended.
    pub(crate) fn upsert_by(&self, entity: T, same: impl Fn(&T, &T) -> bool) -> bool {
        let mut appended = false;
        self.snapshot.send_modify(|snap| {
            let mut values: Vec<Arc<T>> = snap.iter().cloned().collect();
            match values.iter().position(|existing| same(existing, &entity)) {
                Some(idx) => values[idx] = Arc::new(entity),
                None => {
                    values.push(Arc::new(entity));
                    appended = true;
                }
            }
            *snap = Arc::new(values);
        });
        appended
    }

    /// Current snapshot (cheap `Arc` clone).
    pub(crate) fn snapshot(&self) -> Arc<Vec<Arc<T>>> {
        self.snapshot.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Arc<Vec<Arc<T>>>> {
        self.snapshot.subscribe()
    }

    pub(crate) fn len(&self) -> usize {
        self.snapshot.borrow().len()
    }
}
