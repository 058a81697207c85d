use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::definition::TileBlueprint;

/// How the tile blueprint for a launch is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Selection {
    /// Use the given blueprint as-is.
    Forced(TileBlueprint),

    /// Use the default blueprint.
    #[default]
    Inferred,
}

impl Selection {
    pub fn blueprint(&self) -> TileBlueprint {
        match self {
            Selection::Forced(blueprint) => *blueprint,
            Selection::Inferred => TileBlueprint::default(),
        }
    }
}

// Display implementations are used to combine and save names when autotuning.

impl Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("gemm_block_tiled")?;

        match self {
            Selection::Forced(blueprint) => f.write_fmt(format_args!("_forced_{blueprint}")),
            Selection::Inferred => Ok(()),
        }
    }
}
