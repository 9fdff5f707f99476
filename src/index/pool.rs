use std::collections::HashMap;
use std::sync::Arc;

/// Process-local interning pool for indexed term strings. The term-major and
/// document-major indices both hold `Arc<str>` clones into this pool instead
/// of owning separate `String` copies of the same token (§3 String storage).
///
/// An entry is released only once every index reference to it is gone, so
/// the pool's reference count and "how many (term, doc) postings mention
/// this term" are kept in lockstep by the caller.
#[derive(Debug, Default)]
pub struct StringPool {
    entries: HashMap<Arc<str>, usize>,
}

impl StringPool {
    pub fn new() -> Self {
        StringPool {
            entries: HashMap::new(),
        }
    }

    /// Returns a shared handle to `word`, interning it first if this is the
    /// first reference. Bumps the reference count either way.
    pub fn intern(&mut self, word: &str) -> Arc<str> {
        if let Some((key, count)) = self.entries.get_key_value(word) {
            let key = Arc::clone(key);
            *self.entries.get_mut(word).expect("just looked up") = count + 1;
            return key;
        }
        let key: Arc<str> = Arc::from(word);
        self.entries.insert(Arc::clone(&key), 1);
        key
    }

    /// Drops one reference to `word`, removing it from the pool once the
    /// count reaches zero. A no-op if `word` isn't interned.
    pub fn release(&mut self, word: &str) {
        if let Some(count) = self.entries.get_mut(word) {
            if *count <= 1 {
                self.entries.remove(word);
            } else {
                *count -= 1;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_the_same_word_twice_shares_the_allocation() {
        let mut pool = StringPool::new();
        let a = pool.intern("cat");
        let b = pool.intern("cat");
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn release_removes_the_entry_once_unreferenced() {
        let mut pool = StringPool::new();
        pool.intern("cat");
        pool.intern("cat");
        pool.release("cat");
        assert!(pool.contains("cat"));
        pool.release("cat");
        assert!(!pool.contains("cat"));
    }

    #[test]
    fn release_of_unknown_word_is_a_no_op() {
        let mut pool = StringPool::new();
        pool.release("ghost");
        assert!(pool.is_empty());
    }
}
