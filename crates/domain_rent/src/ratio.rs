//! Cost-ratio resolution within a room
//!
//! Residents either state the share of the room they pay or leave it to
//! default. Defaults split whatever the explicit shares leave, evenly. If the
//! explicit shares already exceed the whole room the defaults pay nothing
//! here; reconciliation later spreads the excess across the period.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use core_kernel::{MoneyError, Ratio, ResidentName, RoomName};
use crate::error::RentError;
use crate::residency::{CostRatio, Resident};

/// A resident whose share is known
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedResident {
    pub name: ResidentName,
    pub ratio: Ratio,
    /// Whether the share was stated rather than defaulted
    pub explicit: bool,
}

/// Explicit shares of a room that do not add up to one
///
/// Non-fatal; the shares are used as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatioSumWarning {
    pub room: RoomName,
    pub sum: Decimal,
}

impl std::fmt::Display for RatioSumWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cost ratios in room '{}' sum to {}, not 1",
            self.room,
            self.sum.normalize()
        )
    }
}

/// Fully resolved shares for one room during one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRatios {
    pub residents: Vec<ResolvedResident>,
    pub warning: Option<RatioSumWarning>,
}

impl ResolvedRatios {
    /// Sum of all resolved shares
    pub fn total(&self) -> Decimal {
        self.residents.iter().map(|r| r.ratio.as_decimal()).sum()
    }
}

/// Resolves per-resident shares of a room
pub struct RatioResolver;

impl RatioResolver {
    /// Resolves every resident's share, filling in defaults
    ///
    /// Callers must not pass an empty resident list; an empty room has no
    /// residency entry at all. An empty list resolves to no residents.
    ///
    /// # Errors
    ///
    /// Returns `RentError::Money` if the explicit shares overflow when summed
    pub fn resolve(room: &RoomName, residents: &[Resident]) -> Result<ResolvedRatios, RentError> {
        let explicit_sum = residents
            .iter()
            .filter_map(|r| r.cost_ratio.explicit())
            .try_fold(Decimal::ZERO, |acc, ratio| acc.checked_add(ratio.as_decimal()))
            .ok_or(MoneyError::Overflow)?;
        let default_count = residents
            .iter()
            .filter(|r| matches!(r.cost_ratio, CostRatio::Default))
            .count();

        let mut warning = None;
        let default_share = if default_count == 0 {
            if explicit_sum != Decimal::ONE {
                warn!(
                    room = %room,
                    sum = %explicit_sum,
                    "Cost ratios do not sum to 1; using them as given"
                );
                warning = Some(RatioSumWarning {
                    room: room.clone(),
                    sum: explicit_sum,
                });
            }
            Ratio::ZERO
        } else if explicit_sum > Decimal::ONE {
            debug!(
                room = %room,
                sum = %explicit_sum,
                "Explicit ratios exceed 1; default residents take no share of the room price"
            );
            Ratio::ZERO
        } else {
            let remaining = (Decimal::ONE - explicit_sum) / Decimal::from(default_count);
            // explicit_sum <= 1 so the remainder is never negative
            Ratio::new(remaining).unwrap_or(Ratio::ZERO)
        };

        let residents = residents
            .iter()
            .map(|resident| match resident.cost_ratio {
                CostRatio::Explicit(ratio) => ResolvedResident {
                    name: resident.name.clone(),
                    ratio,
                    explicit: true,
                },
                CostRatio::Default => ResolvedResident {
                    name: resident.name.clone(),
                    ratio: default_share,
                    explicit: false,
                },
            })
            .collect();

        Ok(ResolvedRatios { residents, warning })
    }
}
