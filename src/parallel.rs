// Index-range execution used by the batch drivers and the pole figure rasterizer
// Each index owns its output slot, so no kernel needs interior mutability

use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
use log::warn;

/// How a kernel maps over its index range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParallelMode {
    Sequential,
    /// Runs on the global rayon pool; sequential when the `parallel` feature is off.
    #[default]
    Parallel,
}

impl ParallelMode {
    /// Whether work will actually be spread across threads.
    pub fn is_parallel(self) -> bool {
        match self {
            ParallelMode::Sequential => false,
            #[cfg(feature = "parallel")]
            ParallelMode::Parallel => true,
            #[cfg(not(feature = "parallel"))]
            ParallelMode::Parallel => {
                warn_sequential_fallback();
                false
            }
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn warn_sequential_fallback() {
    static WARNED: std::sync::Once = std::sync::Once::new();
    WARNED.call_once(|| {
        warn!("Parallel mode requested but parallel feature not enabled. Running sequentially.");
    });
}

/// Collect `f(i)` for every `i` in `0..len`, in index order.
pub fn map_indexed<T, F>(mode: ParallelMode, len: usize, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        if mode.is_parallel() {
            return (0..len).into_par_iter().map(f).collect();
        }
    }

    #[cfg(not(feature = "parallel"))]
    let _ = mode.is_parallel();

    (0..len).map(f).collect()
}

/// Let `f` write slot `i` of `out` for every index.
pub fn fill_indexed<T, F>(mode: ParallelMode, out: &mut [T], f: F)
where
    T: Send,
    F: Fn(usize, &mut T) + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        if mode.is_parallel() {
            out.par_iter_mut().enumerate().for_each(|(i, slot)| f(i, slot));
            return;
        }
    }

    #[cfg(not(feature = "parallel"))]
    let _ = mode.is_parallel();

    out.iter_mut().enumerate().for_each(|(i, slot)| f(i, slot));
}

/// Like `fill_indexed`, for outputs with `width` consecutive values per element.
/// A trailing partial chunk is ignored.
pub fn fill_chunks<T, F>(mode: ParallelMode, out: &mut [T], width: usize, f: F)
where
    T: Send,
    F: Fn(usize, &mut [T]) + Sync + Send,
{
    if width == 0 {
        return;
    }

    #[cfg(feature = "parallel")]
    {
        if mode.is_parallel() {
            out.par_chunks_exact_mut(width)
                .enumerate()
                .for_each(|(i, chunk)| f(i, chunk));
            return;
        }
    }

    #[cfg(not(feature = "parallel"))]
    let _ = mode.is_parallel();

    out.chunks_exact_mut(width)
        .enumerate()
        .for_each(|(i, chunk)| f(i, chunk));
}

/// Fold `items` into partition-local accumulators and merge them with `reduce`.
/// In sequential mode there is a single partition.
pub fn fold_reduce<T, A, ID, F, R>(
    mode: ParallelMode,
    items: &[T],
    identity: ID,
    fold: F,
    reduce: R,
) -> A
where
    T: Sync,
    A: Send,
    ID: Fn() -> A + Sync + Send,
    F: Fn(A, &T) -> A + Sync + Send,
    R: Fn(A, A) -> A + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        if mode.is_parallel() {
            return items
                .par_iter()
                .fold(&identity, &fold)
                .reduce(&identity, &reduce);
        }
    }

    #[cfg(not(feature = "parallel"))]
    let _ = (mode.is_parallel(), &reduce);

    items.iter().fold(identity(), fold)
}
