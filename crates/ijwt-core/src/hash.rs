//! Cache-tag key hashing

/// Polynomial string hash over UTF-16 code units with 32-bit signed
/// wrap-around: `hash = (hash << 5) - hash + unit`.
///
/// Keys produced by this function are persisted, so the exact arithmetic
/// (including overflow) is part of the on-disk format.
pub fn hash(value: &str) -> i32 {
    value.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(unit))
    })
}
