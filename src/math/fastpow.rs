//! Approximate exponentiation via IEEE-754 bit manipulation.
//!
//! # Algorithm
//!
//! The exponent field of an IEEE-754 double grows logarithmically with the
//! value, so a linear transform of the high 32 bits of `base` approximates
//! multiplying its logarithm by `exponent`. Reassembling the transformed
//! bits yields an approximation of `base^exponent` in a handful of integer
//! operations, roughly an order of magnitude faster than `f64::powf`.
//!
//! # Reference
//!
//! Ankerl, M. (2007). "Optimized pow() approximation for Java, C and C++".

/// Bias term for the high-bits linear transform (Ankerl's constant).
const MAGIC: f64 = 1_072_632_447.0;

/// Approximates `base.powf(exponent)` for positive `base`.
///
/// Accuracy is traded for throughput: relative error is typically a few
/// percent and can reach ~25% in extreme ranges. The result is monotone in
/// `base` for a fixed positive `exponent` and monotone in `exponent` for
/// `base > 1`, which is all the trail-desirability computation relies on.
/// `f64::powf` is a drop-in replacement with only a throughput cost.
///
/// Intended for positive, non-extreme bases; very small bases (below roughly
/// `1e-300`) combined with large exponents fall outside the approximation's
/// useful range.
///
/// # Examples
///
/// ```
/// use u_antcolony::math::approx_pow;
///
/// let approx = approx_pow(2.0, 3.0);
/// let exact = 2.0f64.powf(3.0);
/// assert!((approx - exact).abs() / exact < 0.3);
/// ```
#[inline]
#[must_use]
pub fn approx_pow(base: f64, exponent: f64) -> f64 {
    let hi = (base.to_bits() >> 32) as i32;
    let scaled = (exponent * (f64::from(hi) - MAGIC) + MAGIC) as i32;
    f64::from_bits(((scaled as i64) << 32) as u64)
}
