//! Numeric primitives for the probability hot path.

mod fastpow;

pub use fastpow::approx_pow;
