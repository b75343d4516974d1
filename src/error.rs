use thiserror::Error;

/// Top-level error type for the footprint layout engine.
#[derive(Debug, Error)]
pub enum FootprintError {
    #[error(transparent)]
    Outline(#[from] OutlineError),

    #[error(transparent)]
    Invariant(#[from] InvariantError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors caused by a malformed outline supplied by the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OutlineError {
    #[error("outline is empty")]
    Empty,

    #[error("outline has odd length {0}")]
    OddLength(usize),

    #[error("outline cannot be closed: sum_x = {sum_x}, sum_y = {sum_y}")]
    NotClosable { sum_x: i64, sum_y: i64 },

    #[error("outline perimeter {perimeter} exceeds the limit of {limit} points")]
    TooLong { perimeter: u64, limit: u64 },
}

/// Internal invariant violations. These indicate a logic defect or an
/// outline that passed validation but is still malformed (self-intersecting).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("no corner piece joins direction {incoming} to direction {outgoing}")]
    InvalidCorner { incoming: u8, outgoing: u8 },

    #[error("floor fill escaped the outline bounds at ({x}, {y})")]
    FloodEscaped { x: i32, y: i32 },

    #[error("outline tracer can't turn 180 degrees at ({x}, {y})")]
    TurnAround { x: i32, y: i32 },

    #[error("outline tracer exceeded {0} runs")]
    TraceLimit(usize),
}

/// Errors related to operation parameters.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`FootprintError`].
pub type Result<T> = std::result::Result<T, FootprintError>;
