use cubecl::{CubeCount, CubeDim};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::definition::{
    FormattedConfigError, GemmAvailabilityError, GemmProblem, GemmSetupError,
};

/// Tile constants of the block-tiled kernel.
///
/// One cube owns a `bm` x `bn` tile of the output and walks the reduction
/// dimension in chunks of `bk`. The cube holds `bm * bk` units; the load
/// phase assigns exactly one element of each staged tile to each unit, so
/// `bm * bk` must equal `bk * bn` (which forces `bm == bn`). Each unit
/// accumulates a `bk`-tall strip of one output column, so covering the tile
/// exactly once additionally requires `bk * bk == bn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileBlueprint {
    pub bm: u32,
    pub bn: u32,
    pub bk: u32,
}

impl Default for TileBlueprint {
    fn default() -> Self {
        Self {
            bm: 64,
            bn: 64,
            bk: 8,
        }
    }
}

impl Display for TileBlueprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.bm, self.bn, self.bk)
    }
}

impl TileBlueprint {
    pub fn new(bm: u32, bn: u32, bk: u32) -> Self {
        Self { bm, bn, bk }
    }

    /// Number of units cooperating on one output tile.
    pub fn unit_count(&self) -> u32 {
        self.bm * self.bk
    }

    /// Checks the launch invariant `bm * bk == bk * bn == unit_count`.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<(), GemmSetupError> {
        if self.bm == 0 || self.bn == 0 || self.bk == 0 {
            let blueprint = *self;
            return Err(GemmSetupError::InvalidConfig(FormattedConfigError::new(
                move || format!("Tile blueprint {blueprint} has an empty dimension."),
            )));
        }

        if self.bm * self.bk != self.bk * self.bn {
            let blueprint = *self;
            return Err(GemmSetupError::InvalidConfig(FormattedConfigError::new(
                move || {
                    format!(
                        "Tile blueprint {blueprint} can't stage both tiles with one unit per element: bm*bk={} but bk*bn={}.",
                        blueprint.bm * blueprint.bk,
                        blueprint.bk * blueprint.bn,
                    )
                },
            )));
        }

        if self.bk * self.bk != self.bn {
            let blueprint = *self;
            return Err(GemmSetupError::InvalidConfig(FormattedConfigError::new(
                move || {
                    format!(
                        "Tile blueprint {blueprint} can't cover the output tile with bk-tall strips: bk*bk={} but bn={}.",
                        blueprint.bk * blueprint.bk,
                        blueprint.bn,
                    )
                },
            )));
        }

        Ok(())
    }

    /// One unit per staged tile element, on the x axis.
    pub fn cube_dim(&self) -> CubeDim {
        CubeDim::new(self.unit_count(), 1, 1)
    }

    /// One cube per output tile: x spans columns, y spans rows.
    pub fn cube_count(&self, problem: &GemmProblem) -> CubeCount {
        let cubes_x = (problem.n as u32).div_ceil(self.bn);
        let cubes_y = (problem.m as u32).div_ceil(self.bm);

        CubeCount::Static(cubes_x, cubes_y, 1)
    }

    /// Number of reduction steps for a given problem.
    pub fn num_steps(&self, problem: &GemmProblem) -> u32 {
        (problem.k as u32).div_ceil(self.bk)
    }

    #[allow(clippy::result_large_err)]
    pub fn cube_count_checked(
        &self,
        problem: &GemmProblem,
    ) -> Result<CubeCount, GemmSetupError> {
        let cube_count = self.cube_count(problem);
        let max_cube_count = u16::MAX as u32;

        if let CubeCount::Static(x, y, _) = &cube_count
            && (*x > max_cube_count || *y > max_cube_count)
        {
            return Err(GemmSetupError::Unavailable(
                GemmAvailabilityError::CubeCountTooBig(cube_count),
            ));
        }

        Ok(cube_count)
    }
}
