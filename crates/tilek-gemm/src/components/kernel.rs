use cubecl::prelude::*;

use crate::components::tiling::{acc_coords, lhs_stage_coords, rhs_stage_coords, tile_origin};

/// Block-tiled `C = alpha * A * B + beta * C` over row-major f32-like tensors.
///
/// One cube of `bm * bk` units produces one `bm x bn` tile of the output.
/// The reduction dimension is walked in `bk`-wide steps; each step stages a
/// `bm x bk` slice of `lhs` and a `bk x bn` slice of `rhs` in shared memory,
/// one element per unit, then every unit folds the staged slices into its
/// `bk`-tall accumulator strip.
///
/// Out-of-range stage loads substitute zero and out-of-range stores are
/// skipped, so partial edge tiles need no host-side padding.
#[cube(launch)]
pub fn block_tiled_gemm<F: Float>(
    lhs: &Tensor<F>,
    rhs: &Tensor<F>,
    out: &mut Tensor<F>,
    alpha: F,
    beta: F,
    #[comptime] bm: u32,
    #[comptime] bn: u32,
    #[comptime] bk: u32,
) {
    let m = lhs.shape(0);
    let k = lhs.shape(1);
    let n = rhs.shape(1);

    let (row0, col0) = tile_origin(CUBE_POS_X, CUBE_POS_Y, bm, bn);
    let flat = UNIT_POS_X;

    let (lhs_row, lhs_col) = lhs_stage_coords(flat, bk);
    let (rhs_row, rhs_col) = rhs_stage_coords(flat, bn);
    let (acc_row, acc_col) = acc_coords(flat, bn, bk);

    let mut lhs_stage = SharedMemory::<F>::new(comptime!(bm * bk));
    let mut rhs_stage = SharedMemory::<F>::new(comptime!(bk * bn));

    let mut acc = Array::<F>::new(bk);
    #[unroll]
    for i in 0..bk {
        acc[i] = F::new(0.0);
    }

    let num_steps = (k + bk - 1) / bk;

    for step in 0..num_steps {
        let k0 = step * bk;

        let a_row = row0 + lhs_row;
        let a_col = k0 + lhs_col;
        if a_row < m && a_col < k {
            lhs_stage[lhs_row * bk + lhs_col] = lhs[a_row * k + a_col];
        } else {
            lhs_stage[lhs_row * bk + lhs_col] = F::new(0.0);
        }

        let b_row = k0 + rhs_row;
        let b_col = col0 + rhs_col;
        if b_row < k && b_col < n {
            rhs_stage[rhs_row * bn + rhs_col] = rhs[b_row * n + b_col];
        } else {
            rhs_stage[rhs_row * bn + rhs_col] = F::new(0.0);
        }

        sync_cube();

        #[unroll]
        for j in 0..bk {
            let rhs_val = rhs_stage[j * bn + acc_col];
            #[unroll]
            for i in 0..bk {
                acc[i] += lhs_stage[(acc_row + i) * bk + j] * rhs_val;
            }
        }

        // The stages are rewritten next step.
        sync_cube();
    }

    #[unroll]
    for i in 0..bk {
        let c_row = row0 + acc_row + i;
        let c_col = col0 + acc_col;
        if c_row < m && c_col < n {
            let index = c_row * n + c_col;
            let prior = out[index];
            out[index] = alpha * acc[i] + beta * prior;
        }
    }
}
