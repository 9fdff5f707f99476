/// Construction-time knobs for an `Engine`. Mirrors the shape of a
/// traditional `Config`-with-`Default`: values a deployer might want to
/// override, none of which change index semantics.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Number of shards backing the concurrent accumulator map used by
    /// parallel ranking (§4.9). Correctness doesn't depend on this value;
    /// throughput benefits from `shard_count >= worker_threads`.
    pub shard_count: usize,
    /// Worker-pool size for parallel operations. `None` defers to rayon's
    /// global pool, which defaults to `num_cpus::get()`.
    pub worker_threads: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            shard_count: 10,
            worker_threads: None,
        }
    }
}

impl EngineConfig {
    pub fn worker_threads(&self) -> usize {
        self.worker_threads.unwrap_or_else(num_cpus::get)
    }
}
