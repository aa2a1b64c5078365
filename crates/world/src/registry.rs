//! Startup enumeration of stair states and the decode registry.

use std::collections::HashMap;

use tracing::info;

use crate::facing::Facing;
use crate::stairs::{EncodedVariant, WoodKind, WoodStairs};

/// All valid stair states, in a stable order.
///
/// Grouped by facing, then flip (upside-down first), then species. The
/// order matches how registry ids were historically assigned and must stay
/// stable across runs when ids are derived positionally.
pub fn all_wood_stairs() -> Vec<WoodStairs> {
    let mut stairs = Vec::with_capacity(Facing::ALL.len() * 2 * WoodKind::ALL.len());
    for facing in Facing::ALL {
        for upside_down in [true, false] {
            for wood in WoodKind::ALL {
                stairs.push(WoodStairs {
                    wood,
                    facing,
                    upside_down,
                });
            }
        }
    }
    stairs
}

/// Read-only lookup from encoded variants back to stair states.
///
/// Built once during startup, before any placement traffic is served, and
/// never mutated afterwards, so it can be shared across worker threads
/// without synchronization.
#[derive(Debug, Clone)]
pub struct StairRegistry {
    states: Vec<WoodStairs>,
    by_variant: HashMap<EncodedVariant, WoodStairs>,
}

impl StairRegistry {
    /// Enumerate every stair state and index it by its encoded variant.
    pub fn bootstrap() -> Self {
        let states = all_wood_stairs();
        let mut by_variant = HashMap::with_capacity(states.len());
        for &state in &states {
            let previous = by_variant.insert(state.encode(), state);
            debug_assert!(
                previous.is_none(),
                "duplicate encoded variant for {state:?}"
            );
        }
        info!(states = states.len(), "stair registry bootstrapped");
        Self { states, by_variant }
    }

    /// Every registered state, in registration order.
    pub fn states(&self) -> &[WoodStairs] {
        &self.states
    }

    /// Inverse of [`WoodStairs::encode`].
    pub fn decode(&self, variant: EncodedVariant) -> Option<WoodStairs> {
        self.by_variant.get(&variant).copied()
    }
}
