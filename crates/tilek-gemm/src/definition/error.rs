use cubecl::{CubeCount, CubeDim, server::LaunchError};
use std::fmt::{Debug, Display};

/// Errors that can occur before the GEMM kernel is dispatched.
pub enum GemmSetupError {
    /// The launch shape exceeds what the runtime supports.
    Unavailable(GemmAvailabilityError),

    /// The provided blueprint or tensor shapes are invalid.
    InvalidConfig(InvalidConfigError),

    /// The kernel was rejected by the runtime at dispatch time.
    Launch(LaunchError),
}

/// A launch shape requirement is not satisfied by the current runtime.
pub enum GemmAvailabilityError {
    /// The requested cube count exceeds what the runtime supports.
    CubeCountTooBig(CubeCount),

    /// The requested cube dimensions are too large for the current runtime.
    CubeDimTooBig(CubeDim),
}

impl From<GemmAvailabilityError> for GemmSetupError {
    fn from(value: GemmAvailabilityError) -> Self {
        Self::Unavailable(value)
    }
}

impl From<InvalidConfigError> for GemmSetupError {
    fn from(value: InvalidConfigError) -> Self {
        Self::InvalidConfig(value)
    }
}

impl From<LaunchError> for GemmSetupError {
    fn from(value: LaunchError) -> Self {
        Self::Launch(value)
    }
}

impl Display for GemmSetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Debug for GemmSetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GemmSetupError::Unavailable(err) => {
                writeln!(
                    f,
                    "Unable to launch gemm because a launch shape is unavailable: {err:?}"
                )
            }
            GemmSetupError::InvalidConfig(err) => {
                writeln!(
                    f,
                    "Unable to launch gemm because the config is invalid: {:?}",
                    err.to_string()
                )
            }
            GemmSetupError::Launch(err) => {
                writeln!(f, "Unable to launch gemm kernel: {err:?}")
            }
        }
    }
}

impl Debug for GemmAvailabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GemmAvailabilityError::CubeCountTooBig(count) => {
                writeln!(f, "Cube count too big {count:?}")
            }
            GemmAvailabilityError::CubeDimTooBig(dim) => {
                writeln!(f, "Cube dim too big {dim:?}")
            }
        }
    }
}

/// Error that arises from invalid configurations
pub type InvalidConfigError = Box<dyn Display>;

/// Lazily formatted invalid configuration error
pub struct FormattedConfigError {
    func: Box<dyn Fn() -> String>,
}

impl FormattedConfigError {
    #[allow(clippy::new_ret_no_self)]
    pub fn new<F: Fn() -> String + 'static>(func: F) -> Box<dyn Display> {
        Box::new(Self {
            func: Box::new(func),
        })
    }
}

impl Display for FormattedConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let string = (self.func)();
        write!(f, "{string}")
    }
}
