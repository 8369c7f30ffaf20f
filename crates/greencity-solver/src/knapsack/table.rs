//! Flat storage for the DP inclusion flags.

const WORD_BITS: u64 = u64::BITS as u64;
const VALUE_BYTES: u64 = std::mem::size_of::<f64>() as u64;
const WEIGHT_BYTES: u64 = std::mem::size_of::<u64>() as u64;

/// Bytes needed to solve `item_count` items at `capacity`.
///
/// Counts the rolling value row (`capacity + 1` doubles), the packed
/// inclusion bitset (`item_count * (capacity + 1)` bits rounded up to whole
/// words) and the rounded weights (one `u64` per item). Returns `None` if
/// the count does not fit in a `u64`.
pub fn required_table_bytes(item_count: usize, capacity: u64) -> Option<u64> {
    let items = u64::try_from(item_count).ok()?;
    let stride = capacity.checked_add(1)?;
    let row_bytes = stride.checked_mul(VALUE_BYTES)?;
    let words = stride.checked_mul(items)?.div_ceil(WORD_BITS);
    let weight_bytes = items.checked_mul(WEIGHT_BYTES)?;
    row_bytes
        .checked_add(words.checked_mul(WORD_BITS / 8)?)?
        .checked_add(weight_bytes)
}

/// Inclusion flags addressed as `item * stride + w`.
///
/// Bit `(i, w)` is set when including item `i` strictly improved the best
/// value for capacity `w` over the first `i` items.
#[derive(Debug, Clone)]
pub(crate) struct InclusionTable {
    words: Vec<u64>,
    stride: usize,
}

impl InclusionTable {
    /// Allocates an all-clear table.
    ///
    /// `item_count * stride` must fit in a `usize`; the solver checks this
    /// alongside the memory ceiling before allocating.
    pub(crate) fn new(item_count: usize, stride: usize) -> Self {
        Self {
            words: vec![0; (item_count * stride).div_ceil(u64::BITS as usize)],
            stride,
        }
    }

    #[inline]
    fn position(&self, item: usize, w: usize) -> (usize, u64) {
        debug_assert!(w < self.stride);
        let bit = item * self.stride + w;
        (bit / u64::BITS as usize, 1u64 << (bit % u64::BITS as usize))
    }

    #[inline]
    pub(crate) fn set(&mut self, item: usize, w: usize) {
        let (word, mask) = self.position(item, w);
        self.words[word] |= mask;
    }

    #[inline]
    pub(crate) fn get(&self, item: usize, w: usize) -> bool {
        let (word, mask) = self.position(item, w);
        self.words[word] & mask != 0
    }
}
