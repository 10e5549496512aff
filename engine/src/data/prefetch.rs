//! Software Prefetch Hints
//!
//! Thin wrapper over the x86 prefetch instruction with a non-temporal hint.
//! NTA keeps the prefetched lines out of most of the cache hierarchy, which
//! measured best for the fragmented chunk traversal this crate benchmarks.
//! A hint only: it never changes results, and on other architectures it
//! compiles to nothing.

/// Prefetch the cache line at `ptr` with a non-temporal hint.
#[inline(always)]
pub fn prefetch_nta<T>(ptr: *const T) {
    #[cfg(target_arch = "x86_64")]
    unsafe {
        use core::arch::x86_64::{_MM_HINT_NTA, _mm_prefetch};
        _mm_prefetch(ptr as *const i8, _MM_HINT_NTA);
    }
    #[cfg(not(target_arch = "x86_64"))]
    let _ = ptr;
}
