//! Index mappings between the flat unit index and tile coordinates.
//!
//! The cube holds `bm * bk` units, indexed by `UNIT_POS_X`. Each mapping
//! assigns every unit exactly one slot of the structure it addresses, so
//! the loads and the accumulation partition their targets without overlap.

use cubecl::prelude::*;

/// Origin of the output tile owned by a cube.
///
/// The x axis of the grid spans output columns and the y axis spans rows.
/// Returns `(row, col)`.
#[cube]
pub fn tile_origin(
    cube_x: u32,
    cube_y: u32,
    #[comptime] bm: u32,
    #[comptime] bn: u32,
) -> (u32, u32) {
    (cube_y * bm, cube_x * bn)
}

/// Slot of the `bm x bk` lhs stage written by one unit, as `(row, col)`.
#[cube]
pub fn lhs_stage_coords(flat: u32, #[comptime] bk: u32) -> (u32, u32) {
    (flat / bk, flat % bk)
}

/// Slot of the `bk x bn` rhs stage written by one unit, as `(row, col)`.
#[cube]
pub fn rhs_stage_coords(flat: u32, #[comptime] bn: u32) -> (u32, u32) {
    (flat / bn, flat % bn)
}

/// Strip of the output tile accumulated by one unit.
///
/// Each unit owns a `bk`-tall column strip: rows `row..row + bk` of column
/// `col`, where this returns `(row, col)`. Across the `bm * bk` units the
/// strips cover the `bm x bn` tile exactly once, given `bk * bk == bn`.
#[cube]
pub fn acc_coords(flat: u32, #[comptime] bn: u32, #[comptime] bk: u32) -> (u32, u32) {
    ((flat / bn) * bk, flat % bn)
}
