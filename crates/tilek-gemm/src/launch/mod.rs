mod strategy;

pub use strategy::*;

use cubecl::{
    CubeElement, Runtime,
    client::ComputeClient,
    prelude::{Float, ScalarArg, TensorHandleRef},
};

use crate::{
    components::block_tiled_gemm,
    definition::{GemmAvailabilityError, GemmProblem, GemmSetupError},
};

/// Launches `out = alpha * lhs * rhs + beta * out` on the given client.
///
/// All three tensors must be rank two, contiguous row-major, with shapes
/// `m x k`, `k x n` and `m x n`. The output handle is read and overwritten
/// in place; pass `beta = 0` to ignore its prior contents.
#[allow(clippy::result_large_err)]
#[allow(clippy::too_many_arguments)]
pub fn launch_ref<R: Runtime, F: Float + CubeElement>(
    client: &ComputeClient<R>,
    lhs: &TensorHandleRef<'_, R>,
    rhs: &TensorHandleRef<'_, R>,
    out: &TensorHandleRef<'_, R>,
    alpha: F,
    beta: F,
    selection: &Selection,
) -> Result<(), GemmSetupError> {
    let problem = GemmProblem::from_shapes(
        lhs.shape,
        lhs.strides,
        rhs.shape,
        rhs.strides,
        out.shape,
        out.strides,
    )?;

    let blueprint = selection.blueprint();
    blueprint.validate()?;
    debug_assert_eq!(blueprint.unit_count(), blueprint.bk * blueprint.bn);

    let cube_count = blueprint.cube_count_checked(&problem)?;
    let cube_dim = blueprint.cube_dim();

    if cube_dim.num_elems() > client.properties().hardware.max_units_per_cube {
        return Err(GemmAvailabilityError::CubeDimTooBig(cube_dim).into());
    }

    block_tiled_gemm::launch::<F, R>(
        client,
        cube_count,
        cube_dim,
        lhs.as_tensor_arg(1),
        rhs.as_tensor_arg(1),
        out.as_tensor_arg(1),
        ScalarArg::new(alpha),
        ScalarArg::new(beta),
        blueprint.bm,
        blueprint.bn,
        blueprint.bk,
    )?;

    Ok(())
}
