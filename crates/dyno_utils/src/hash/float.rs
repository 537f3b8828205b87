/// Returns the bit pattern used to hash and compare `value`.
///
/// `-0.0` maps to `0.0` and every NaN maps to one canonical NaN, so that
/// floats can take part in `Eq + Hash` keys.
///
/// ```
/// use dyno_utils::hash::canonical_f64_bits;
///
/// assert_eq!(canonical_f64_bits(-0.0), canonical_f64_bits(0.0));
/// assert_eq!(canonical_f64_bits(f64::NAN), canonical_f64_bits(-f64::NAN));
/// assert_ne!(canonical_f64_bits(1.0), canonical_f64_bits(2.0));
/// ```
#[inline]
pub fn canonical_f64_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0.0_f64.to_bits()
    } else {
        value.to_bits()
    }
}
