//! Buffer copy step of the encoder, optionally spread over worker threads.
//!
//! Once the layout is planned every buffer has its own `[begin, end)` window in
//! the output. Windows are disjoint, so each copy is an independent job: the
//! output is split with `split_at_mut` into one `&mut [u8]` per buffer and the
//! jobs are drained from a shared queue by scoped workers. No locks, no ordering
//! between jobs.

use std::thread;

use crossbeam::channel::{unbounded, SendError};
use tracing::debug;

use crate::constants::{DEFAULT_MIN_PARALLEL_BYTES, MAX_COPY_WORKERS};
use crate::layout::ByteRange;

/// Parallelism configuration for the copy step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParallelismProfile {
    /// Threads copying buffers, the calling thread included.
    pub worker_count: usize,
    /// Total payload below which copies stay on the calling thread.
    pub min_parallel_bytes: usize,
}

impl ParallelismProfile {
    pub fn single_threaded() -> Self {
        Self {
            worker_count: 1,
            min_parallel_bytes: DEFAULT_MIN_PARALLEL_BYTES,
        }
    }

    /// One worker per core minus one (leave one core free), capped.
    pub fn dynamic() -> Self {
        let cores = num_cpus::get();
        Self {
            worker_count: cores.saturating_sub(1).clamp(1, MAX_COPY_WORKERS),
            min_parallel_bytes: DEFAULT_MIN_PARALLEL_BYTES,
        }
    }

    pub fn with_workers(worker_count: usize) -> Self {
        Self {
            worker_count: worker_count.max(1),
            min_parallel_bytes: DEFAULT_MIN_PARALLEL_BYTES,
        }
    }

    pub fn min_parallel_bytes(mut self, bytes: usize) -> Self {
        self.min_parallel_bytes = bytes;
        self
    }

    /// Whether a copy of `jobs` buffers totalling `bytes` should use workers.
    pub fn should_parallelize(&self, jobs: usize, bytes: usize) -> bool {
        self.worker_count > 1 && jobs > 1 && bytes >= self.min_parallel_bytes
    }
}

impl Default for ParallelismProfile {
    fn default() -> Self {
        Self::dynamic()
    }
}

/// One buffer copy into its own output window.
struct CopyJob<'a> {
    window: &'a mut [u8],
    source: &'a [u8],
}

impl CopyJob<'_> {
    #[inline]
    fn run(self) {
        self.window.copy_from_slice(self.source);
    }
}

/// Cut `dst` into one mutable window per range.
///
/// Precondition: ranges are ordered, non-overlapping and inside `dst`, as a
/// `LayoutPlan` guarantees.
pub(crate) fn split_windows<'a>(dst: &'a mut [u8], ranges: &[ByteRange]) -> Vec<&'a mut [u8]> {
    let mut windows = Vec::with_capacity(ranges.len());
    let mut rest: &'a mut [u8] = dst;
    let mut consumed = 0usize;

    for r in ranges {
        let (begin, end) = (r.begin as usize, r.end as usize);
        debug_assert!(begin >= consumed && end >= begin);

        let (_, tail) = std::mem::take(&mut rest).split_at_mut(begin - consumed);
        let (window, tail) = tail.split_at_mut(end - begin);
        windows.push(window);
        rest = tail;
        consumed = end;
    }

    windows
}

/// Copy `sources[i]` into `dst[ranges[i]]` for every `i`.
///
/// Precondition: `sources[i].len() == ranges[i].len()` and the ranges satisfy
/// the `split_windows` precondition. Bytes of `dst` outside the ranges are not
/// touched.
pub(crate) fn copy_buffers(
    dst: &mut [u8],
    ranges: &[ByteRange],
    sources: &[&[u8]],
    profile: &ParallelismProfile,
) {
    debug_assert_eq!(ranges.len(), sources.len());

    let mut jobs: Vec<CopyJob<'_>> = split_windows(dst, ranges)
        .into_iter()
        .zip(sources.iter().copied())
        .map(|(window, source)| CopyJob { window, source })
        .collect();

    let total: usize = sources.iter().map(|s| s.len()).sum();
    if !profile.should_parallelize(jobs.len(), total) {
        jobs.into_iter().for_each(CopyJob::run);
        return;
    }

    let workers = profile.worker_count.min(jobs.len());
    debug!(workers, jobs = jobs.len(), bytes = total, "parallel buffer copy");

    // Largest first so the tail of the queue is cheap
    jobs.sort_unstable_by_key(|job| std::cmp::Reverse(job.source.len()));

    let (tx, rx) = unbounded::<CopyJob<'_>>();
    for job in jobs {
        // Receiver is alive until the scope ends; run inline if that ever changes
        if let Err(SendError(job)) = tx.send(job) {
            job.run();
        }
    }
    drop(tx);

    thread::scope(|scope| {
        for _ in 1..workers {
            let rx = rx.clone();
            scope.spawn(move || rx.iter().for_each(CopyJob::run));
        }
        // Calling thread drains too
        rx.iter().for_each(CopyJob::run);
    });
}
