//! Bit-range helpers and the fixed field layout of every codeword
//!
//! A rational number occupies one 8-bit codeword. The low `DNM_BITS` hold the
//! denominator minus one; the high `NMR_BITS` hold the numerator in two's
//! complement. A dimension packs one rational codeword per base quantity into
//! a `u64`, base `i` at bit offset `8 * i`.
//!
//! ```text
//!  rational (u8):   7 6 5 4 3 | 2 1 0
//!                   numerator | denominator - 1
//!
//!  dimension (u64): .. 39..32 | 31..24 | 23..16 | 15..8 | 7..0
//!                      temp.  | charge |  mass  | length | time
//! ```

/// Word with the bit at offset `n` set.
pub const fn bit(n: u32) -> u64 {
    1u64 << n
}

/// Word with every bit between offsets `n1` and `n2` (inclusive, either order) set.
pub const fn bit_range(n1: u32, n2: u32) -> u64 {
    let (lo, hi) = if n1 <= n2 { (n1, n2) } else { (n2, n1) };
    let mut word = 0u64;
    let mut i = lo;
    while i <= hi {
        word |= bit(i);
        i += 1;
    }
    word
}

/// Total number of bits in a rational codeword.
pub const WORD_BITS: u32 = u8::BITS;

/// Number of bits holding `denominator - 1`.
pub const DNM_BITS: u32 = WORD_BITS / 2 - 1;

/// Number of bits holding the two's-complement numerator.
pub const NMR_BITS: u32 = WORD_BITS - DNM_BITS;

/// Mask selecting the denominator field of a rational codeword.
pub const DNM_MASK: u8 = bit_range(0, DNM_BITS - 1) as u8;

/// Mask selecting the numerator field of a rational codeword.
pub const NMR_MASK: u8 = bit_range(DNM_BITS, WORD_BITS - 1) as u8;

/// Smallest representable numerator.
pub const NMR_MIN: i64 = -(1 << (NMR_BITS - 1));

/// Largest representable numerator.
pub const NMR_MAX: i64 = (1 << (NMR_BITS - 1)) - 1;

/// Largest representable denominator.
pub const DNM_MAX: i64 = 1 << DNM_BITS;

/// Number of base quantities in a dimension.
pub const NUM_BASES: usize = 5;

/// Mask selecting one base's field of a dimension codeword (before shifting).
pub const DIM_FIELD_MASK: u64 = bit_range(0, WORD_BITS - 1);

/// Mask selecting every bit a dimension codeword may use.
pub const DIM_WORD_MASK: u64 = bit_range(0, NUM_BASES as u32 * WORD_BITS - 1);
