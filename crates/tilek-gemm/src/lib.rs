/// Components of the block-tiled GEMM kernel
pub mod components;
pub mod definition;
pub mod launch;
