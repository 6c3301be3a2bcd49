// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use serde::{Deserialize, Serialize};

/// Ordering of the velocity and position updates within one step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Integrator {
    /// Velocities over `dt`, then positions over `dt`.
    #[default]
    SemiImplicitEuler,
    /// Positions over `dt/2`, velocities over `dt`, positions over `dt/2`.
    ///
    /// Exact for constant forces up to round-off.
    Midpoint,
}
