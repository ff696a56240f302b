use std::collections::HashMap;
use std::sync::Arc;

use xxhash_rust::xxh3::Xxh3;

use crate::{
    blueprint::element::parse_blueprint,
    blueprint::tree::{ElementObject, flat_to_nested},
    foundation::error::BlueprintResult,
};

const XXH3_SEED: u64 = 0x51f1_7c3a_9be0_44d2;

/// Content hash of a clip's element strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlueprintKey {
    /// High 64 bits of the 128-bit digest.
    pub hi: u64,
    /// Low 64 bits of the 128-bit digest.
    pub lo: u64,
}

/// Hash element strings so that equal batches share a key.
///
/// Each string is length-prefixed, so `["a;b", "c"]` and `["a", "b;c"]` hash differently.
pub fn blueprint_key<S: AsRef<str>>(srcs: &[S]) -> BlueprintKey {
    let mut h = Xxh3::with_seed(XXH3_SEED);
    h.update(&(srcs.len() as u64).to_le_bytes());
    for s in srcs {
        let s = s.as_ref().as_bytes();
        h.update(&(s.len() as u64).to_le_bytes());
        h.update(s);
    }
    let v = h.digest128();
    BlueprintKey {
        hi: (v >> 64) as u64,
        lo: v as u64,
    }
}

/// Options for [`BlueprintCache`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlueprintCacheOpts {
    /// Maximum number of trees kept. When full, the cache is emptied before the next insert.
    pub capacity: usize,
}

impl Default for BlueprintCacheOpts {
    fn default() -> Self {
        Self { capacity: 256 }
    }
}

/// Hit/miss counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups served from the cache.
    pub hits: u64,
    /// Lookups that parsed and converted.
    pub misses: u64,
}

/// Memoizes parse + tree conversion per distinct element batch.
///
/// A clip's element strings do not change while it renders, so only property resolution needs to
/// run per frame. Failed batches are not cached.
#[derive(Debug, Default)]
pub struct BlueprintCache {
    opts: BlueprintCacheOpts,
    entries: HashMap<BlueprintKey, Arc<ElementObject>>,
    stats: CacheStats,
}

impl BlueprintCache {
    /// Create an empty cache.
    pub fn new(opts: BlueprintCacheOpts) -> Self {
        Self {
            opts,
            entries: HashMap::new(),
            stats: CacheStats::default(),
        }
    }

    /// Return the tree for `srcs`, building it on first use.
    pub fn get_or_build<S: AsRef<str>>(
        &mut self,
        srcs: &[S],
    ) -> BlueprintResult<Arc<ElementObject>> {
        let key = blueprint_key(srcs);
        if let Some(tree) = self.entries.get(&key) {
            self.stats.hits += 1;
            return Ok(Arc::clone(tree));
        }

        self.stats.misses += 1;
        tracing::debug!(hi = key.hi, lo = key.lo, "blueprint cache miss");
        let batch = parse_blueprint(srcs)?;
        let tree = Arc::new(flat_to_nested(&batch.elements)?);

        if self.entries.len() >= self.opts.capacity.max(1) {
            tracing::debug!(entries = self.entries.len(), "blueprint cache full; clearing");
            self.entries.clear();
        }
        self.entries.insert(key, Arc::clone(&tree));
        Ok(tree)
    }

    /// Number of cached trees.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached tree. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Hit/miss counters since creation.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/blueprint/cache.rs"]
mod tests;
