//! Packed Cull-Result Bits
//!
//! One bit per object, bit = 1 meaning "culled" (entirely outside the
//! frustum), packed into 32-bit words: object `i` lives at bit `i % 32` of
//! word `i / 32`.
//!
//! ## Memory layout
//!
//! At the default workload of 80x80x80 = 512,000 objects:
//! - Words: ceil(512,000 / 32) = 16,000
//! - Buffer size: 16,000 x 4 = 64,000 bytes (~62.5 KB)
//!
//! Kernels only ever OR bits in, never clear them. A buffer must therefore
//! be zeroed before a pass is meaningful as a "clean" result; re-running a
//! kernel over dirty bits is the caller's responsibility to reason about.

/// Bits of one result word.
pub const BITS_PER_WORD: usize = 32;

/// Packed per-object cull flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CullBits {
    words: Vec<u32>,
    len: usize,
}

impl CullBits {
    /// Create a zeroed buffer with room for `len` object bits.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(BITS_PER_WORD)],
            len,
        }
    }

    /// Number of object bits the buffer holds.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when the buffer holds no object bits.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read the bit for object `index`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        assert!(index < self.len, "bit index {index} out of range ({})", self.len);
        self.words[index / BITS_PER_WORD] & (1 << (index % BITS_PER_WORD)) != 0
    }

    /// OR the bit for object `index` to 1. Never clears bits.
    #[inline]
    pub fn set(&mut self, index: usize) {
        assert!(index < self.len, "bit index {index} out of range ({})", self.len);
        self.words[index / BITS_PER_WORD] |= 1 << (index % BITS_PER_WORD);
    }

    /// OR a whole mask into word `word_index`. Used by the SIMD kernel to
    /// commit a batch of bits in one store.
    #[inline]
    pub fn or_word(&mut self, word_index: usize, mask: u32) {
        self.words[word_index] |= mask;
    }

    /// Zero every word, making the next cull pass a clean one.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Number of bits currently set (objects culled).
    pub fn count_set(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Backing words, least-significant bit first within each word.
    pub fn words(&self) -> &[u32] {
        &self.words
    }
}
