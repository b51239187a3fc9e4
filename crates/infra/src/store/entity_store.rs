use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use stockwise_core::{DomainError, DomainResult, Entity};

/// Id-keyed store for entities loaded into memory.
pub trait EntityStore<V: Entity>: Send + Sync {
    fn upsert(&self, value: V) -> DomainResult<()>;
    /// All values, ordered by id.
    fn list(&self) -> DomainResult<Vec<V>>;
    /// Swap the whole contents at once; readers see either the old or the new set.
    fn replace_all(&self, values: Vec<V>) -> DomainResult<()>;
}

impl<V, S> EntityStore<V> for Arc<S>
where
    V: Entity,
    S: EntityStore<V> + ?Sized,
{
    fn upsert(&self, value: V) -> DomainResult<()> {
        (**self).upsert(value)
    }

    fn list(&self) -> DomainResult<Vec<V>> {
        (**self).list()
    }

    fn replace_all(&self, values: Vec<V>) -> DomainResult<()> {
        (**self).replace_all(values)
    }
}

/// In-memory store for dev/tests.
#[derive(Debug)]
pub struct InMemoryEntityStore<V: Entity> {
    inner: RwLock<BTreeMap<V::Id, V>>,
}

impl<V: Entity> InMemoryEntityStore<V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<V: Entity> Default for InMemoryEntityStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> DomainError {
    DomainError::unavailable("in-memory store lock poisoned")
}

impl<V> EntityStore<V> for InMemoryEntityStore<V>
where
    V: Entity + Clone + Send + Sync + 'static,
    V::Id: Send + Sync,
{
    fn upsert(&self, value: V) -> DomainResult<()> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.insert(value.id().clone(), value);
        Ok(())
    }

    fn list(&self) -> DomainResult<Vec<V>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.values().cloned().collect())
    }

    fn replace_all(&self, values: Vec<V>) -> DomainResult<()> {
        let fresh: BTreeMap<V::Id, V> = values.into_iter().map(|v| (v.id().clone(), v)).collect();
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        *map = fresh;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        label: &'static str,
    }

    impl Entity for Row {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    fn rows(ids: std::ops::Range<u32>, label: &'static str) -> Vec<Row> {
        ids.map(|id| Row { id, label }).collect()
    }

    #[test]
    fn upsert_replaces_by_id() {
        let store: InMemoryEntityStore<Row> = InMemoryEntityStore::new();
        store.upsert(Row { id: 1, label: "a" }).unwrap();
        store.upsert(Row { id: 1, label: "b" }).unwrap();
        assert_eq!(store.list().unwrap(), vec![Row { id: 1, label: "b" }]);
    }

    #[test]
    fn list_is_ordered_by_id() {
        let store: InMemoryEntityStore<Row> = InMemoryEntityStore::new();
        for id in [3, 1, 2] {
            store.upsert(Row { id, label: "x" }).unwrap();
        }
        let ids: Vec<u32> = store.list().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn replace_all_discards_previous_rows() {
        let store: Arc<InMemoryEntityStore<Row>> = Arc::new(InMemoryEntityStore::new());
        store.upsert(Row { id: 9, label: "x" }).unwrap();
        store.replace_all(rows(1..3, "y")).unwrap();
        let ids: Vec<u32> = store.list().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);

        store.replace_all(Vec::new()).unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn readers_never_see_a_partial_replacement() {
        const SIZE: u32 = 200;
        let store: Arc<InMemoryEntityStore<Row>> = Arc::new(InMemoryEntityStore::new());
        store.replace_all(rows(0..SIZE, "old")).unwrap();

        let writer = {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for round in 0..200 {
                    let label = if round % 2 == 0 { "new" } else { "old" };
                    let offset = if round % 2 == 0 { SIZE } else { 0 };
                    store.replace_all(rows(offset..offset + SIZE, label)).unwrap();
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for _ in 0..500 {
                        let seen = store.list().unwrap();
                        assert_eq!(seen.len(), SIZE as usize);
                        let label = seen[0].label;
                        assert!(seen.iter().all(|r| r.label == label), "mixed generations");
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
