use std::collections::BTreeMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use parking_lot::Mutex;

/// A key-value map split across N independently-locked shards, so
/// concurrent writers touching different keys rarely contend (§4.9).
/// Grounded on the classic `ConcurrentMap` contract: route by hash, update
/// a shard under its own lock, snapshot by locking every shard in index
/// order.
pub struct ShardedMap<K, V> {
    shards: Vec<Mutex<BTreeMap<K, V>>>,
}

impl<K, V> ShardedMap<K, V>
where
    K: Ord + Hash + Clone,
{
    pub fn new(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        ShardedMap {
            shards: (0..shard_count).map(|_| Mutex::new(BTreeMap::new())).collect(),
        }
    }

    fn shard_index(&self, key: &K) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % self.shards.len()
    }

    /// Applies `f` to the entry for `key`, inserting `V::default()` first if
    /// absent. The shard's lock is held only for the duration of `f`,
    /// mirroring the original's reference-returning `operator[]`.
    pub fn update(&self, key: K, f: impl FnOnce(&mut V))
    where
        V: Default,
    {
        let idx = self.shard_index(&key);
        let mut shard = self.shards[idx].lock();
        let entry = shard.entry(key).or_default();
        f(entry);
    }

    pub fn remove(&self, key: &K) {
        let idx = self.shard_index(key);
        self.shards[idx].lock().remove(key);
    }

    /// Snapshots every shard into one ordinary map. Locks shards in index
    /// order, so two concurrent snapshots can never deadlock each other.
    pub fn build_ordinary_map(&self) -> BTreeMap<K, V>
    where
        V: Clone,
    {
        let mut out = BTreeMap::new();
        for shard in &self.shards {
            let guard = shard.lock();
            for (key, value) in guard.iter() {
                out.insert(key.clone(), value.clone());
            }
        }
        out
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }
}
