use std::sync::OnceLock;

/// Batches below this size decode on the calling thread
const DEFAULT_PARALLEL_MIN_BATCH: usize = 8;

fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

static PARALLEL_MIN_BATCH: OnceLock<usize> = OnceLock::new();

/// Smallest batch that `decode_batch` spreads across the rayon pool
pub(crate) fn parallel_min_batch() -> usize {
    *PARALLEL_MIN_BATCH.get_or_init(|| {
        parse_env_usize("PDF417_PARALLEL_MIN_BATCH", DEFAULT_PARALLEL_MIN_BATCH).max(1)
    })
}
