use crate::definition::{FormattedConfigError, GemmSetupError};

/// Shape of a single C = alpha * A * B + beta * C operation.
///
/// `lhs` is m x k, `rhs` is k x n and the output is m x n, all row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GemmProblem {
    pub m: usize,
    pub n: usize,
    pub k: usize,
}

impl GemmProblem {
    pub fn new(m: usize, n: usize, k: usize) -> Self {
        Self { m, n, k }
    }

    /// Builds the problem from tensor metadata, rejecting shapes the kernel
    /// cannot consume.
    ///
    /// All three tensors must be rank two, contiguous row-major, with
    /// matching inner dimensions.
    #[allow(clippy::result_large_err)]
    pub fn from_shapes(
        lhs_shape: &[usize],
        lhs_strides: &[usize],
        rhs_shape: &[usize],
        rhs_strides: &[usize],
        out_shape: &[usize],
        out_strides: &[usize],
    ) -> Result<Self, GemmSetupError> {
        check_matrix("lhs", lhs_shape, lhs_strides)?;
        check_matrix("rhs", rhs_shape, rhs_strides)?;
        check_matrix("out", out_shape, out_strides)?;

        let (m, k) = (lhs_shape[0], lhs_shape[1]);
        let (k_rhs, n) = (rhs_shape[0], rhs_shape[1]);

        if k != k_rhs {
            return Err(GemmSetupError::InvalidConfig(FormattedConfigError::new(
                move || format!("Reduction dims don't match: lhs is _x{k}, rhs is {k_rhs}x_."),
            )));
        }

        if out_shape[0] != m || out_shape[1] != n {
            let (out_m, out_n) = (out_shape[0], out_shape[1]);
            return Err(GemmSetupError::InvalidConfig(FormattedConfigError::new(
                move || format!("Output shape {out_m}x{out_n} doesn't match problem {m}x{n}."),
            )));
        }

        Ok(Self { m, n, k })
    }
}

#[allow(clippy::result_large_err)]
fn check_matrix(ident: &'static str, shape: &[usize], strides: &[usize]) -> Result<(), GemmSetupError> {
    if shape.len() != 2 {
        let rank = shape.len();
        return Err(GemmSetupError::InvalidConfig(FormattedConfigError::new(
            move || format!("Tensor {ident} must be rank 2, got rank {rank}."),
        )));
    }

    if shape[0] == 0 || shape[1] == 0 {
        return Err(GemmSetupError::InvalidConfig(FormattedConfigError::new(
            move || format!("Tensor {ident} has an empty dimension."),
        )));
    }

    if strides.len() != 2 || strides[0] != shape[1] || strides[1] != 1 {
        let strides = strides.to_vec();
        return Err(GemmSetupError::InvalidConfig(FormattedConfigError::new(
            move || format!("Tensor {ident} must be contiguous row-major, got strides {strides:?}."),
        )));
    }

    Ok(())
}
