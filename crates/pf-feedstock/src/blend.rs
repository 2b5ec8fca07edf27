//! Feedstock selection (pure polymer or blended mix).

use crate::error::{FeedstockError, FeedstockResult};
use crate::polymer::Polymer;
use crate::profile::YieldProfile;
use pf_core::numeric::{Real, ensure_finite};

/// Feed charge description: a single polymer or a three-way blend.
///
/// Blend percentages are weights out of 100. The caller-facing boundary is
/// responsible for enforcing that a blend sums to 100; `resolve` itself
/// tolerates open sums (the result simply does not close to 100 and is
/// corrected by the normalizer downstream).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeedstockMix {
    Pure(Polymer),
    Blended {
        hdpe_pct: Real,
        ldpe_pct: Real,
        pp_pct: Real,
    },
}

impl FeedstockMix {
    /// Create a pure-polymer feed.
    pub fn pure(polymer: Polymer) -> Self {
        FeedstockMix::Pure(polymer)
    }

    /// Create a blended feed from mix percentages.
    ///
    /// Validates that all percentages are finite and non-negative. The
    /// sum-to-100 invariant is checked at the simulation boundary, not here.
    pub fn blended(hdpe_pct: Real, ldpe_pct: Real, pp_pct: Real) -> FeedstockResult<Self> {
        for pct in [hdpe_pct, ldpe_pct, pp_pct] {
            ensure_finite(pct, "mix percentage").map_err(|_| FeedstockError::NonPhysical {
                what: "non-finite mix percentage",
            })?;
            if pct < 0.0 {
                return Err(FeedstockError::NonPhysical {
                    what: "negative mix percentage",
                });
            }
        }
        Ok(FeedstockMix::Blended {
            hdpe_pct,
            ldpe_pct,
            pp_pct,
        })
    }

    /// Check if this is a pure-polymer feed.
    pub fn is_pure(&self) -> Option<Polymer> {
        match self {
            FeedstockMix::Pure(polymer) => Some(*polymer),
            FeedstockMix::Blended { .. } => None,
        }
    }

    /// Resolve the feed into one yield profile.
    ///
    /// A pure feed returns its base profile unchanged. A blend averages
    /// oil/wax/char weighted by the mix percentages and derives ncg as the
    /// remainder to 100, so a valid mix closes exactly instead of
    /// accumulating rounding from four independent averages.
    pub fn resolve(&self) -> YieldProfile {
        match *self {
            FeedstockMix::Pure(polymer) => polymer.base_profile(),
            FeedstockMix::Blended {
                hdpe_pct,
                ldpe_pct,
                pp_pct,
            } => {
                let parts = [
                    (Polymer::Hdpe, hdpe_pct),
                    (Polymer::Ldpe, ldpe_pct),
                    (Polymer::Pp, pp_pct),
                ];
                let mut oil_pct = 0.0;
                let mut wax_pct = 0.0;
                let mut char_pct = 0.0;
                for (polymer, weight) in parts {
                    let base = polymer.base_profile();
                    oil_pct += weight * base.oil_pct / 100.0;
                    wax_pct += weight * base.wax_pct / 100.0;
                    char_pct += weight * base.char_pct / 100.0;
                }
                YieldProfile {
                    oil_pct,
                    wax_pct,
                    char_pct,
                    ncg_pct: 100.0 - oil_pct - wax_pct - char_pct,
                }
            }
        }
    }
}
