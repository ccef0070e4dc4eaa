//! Decomposer module: express an integer as `base^exponent + remainder`
//!
//! For each chunk value `n` the search looks for the pair `(base, exponent)`
//! whose power lands closest under `n`, so the remainder is as small as
//! possible (zero means `n` is an exact power). The exponent window per base
//! comes from a floating-point logarithm, but that estimate only bounds the
//! probe range: acceptance always uses exact integer arithmetic.

use serde::{Deserialize, Serialize};

/// A triple satisfying `base^exponent + remainder == n` for some chunk
/// value `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    pub base: u64,
    pub exponent: u32,
    pub remainder: u64,
}

impl Decomposition {
    /// Exact integer `base^exponent + remainder`, or `None` on overflow.
    pub fn recompose(&self) -> Option<u64> {
        self.base
            .checked_pow(self.exponent)
            .and_then(|power| power.checked_add(self.remainder))
    }
}

/// Find a decomposition of `n` with the smallest remainder the bounded
/// search encounters.
///
/// Values below 4 return `(n, 1, 0)` directly; the search ranges would be
/// degenerate there. Otherwise bases from 2 through `isqrt(n) + 2` are
/// probed at three exponents around the logarithmic estimate, and the
/// candidate with the minimal remainder wins. An exact power (remainder 0)
/// beats every positive remainder. If nothing lands at or under `n`, the
/// fallback `(n - 1, 1, 1)` still satisfies the identity.
pub fn decompose(n: u64) -> Decomposition {
    if n < 4 {
        return Decomposition {
            base: n,
            exponent: 1,
            remainder: 0,
        };
    }

    let mut best: Option<Decomposition> = None;
    let mut min_remainder = n;

    let max_base = (n as f64).sqrt() as u64 + 2;
    for base in 2..=max_base {
        let estimate = ((n as f64).ln() / (base as f64).ln()) as i64;
        for exponent in (estimate - 1)..=(estimate + 1) {
            if exponent < 1 {
                continue;
            }
            let Some(power) = pow_within(base, exponent as u32, n) else {
                continue;
            };
            let remainder = n - power;
            if remainder < min_remainder || best.is_none() {
                min_remainder = remainder;
                best = Some(Decomposition {
                    base,
                    exponent: exponent as u32,
                    remainder,
                });
            }
        }
    }

    best.unwrap_or(Decomposition {
        base: n - 1,
        exponent: 1,
        remainder: 1,
    })
}

/// Compute `base^exponent` if it stays at or under `limit`; abort the
/// multiplication chain as soon as it would exceed the limit.
fn pow_within(base: u64, exponent: u32, limit: u64) -> Option<u64> {
    let mut result: u64 = 1;
    for _ in 0..exponent {
        if base != 0 && result > limit / base {
            return None;
        }
        result *= base;
        if result > limit {
            return None;
        }
    }
    Some(result)
}
