use thiserror::Error;

/// Everything the engine can refuse to compute.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("attempt count must be at least 1")]
    ZeroAttempts,

    #[error("attempt count {attempts} is above the limit of {max}")]
    TooManyAttempts { attempts: u32, max: u32 },

    #[error("rarity must be a percentage in [0, 100], got {0}")]
    RarityOutOfRange(f64),

    #[error("time per attempt must be a positive number, got {0}")]
    InvalidTimePerAttempt(f64),

    #[error("at least one item is required")]
    EmptyItemSet,

    #[error("item '{0}' has an empty name")]
    EmptyName(String),

    #[error("duplicate item id '{0}'")]
    DuplicateId(String),

    #[error("no item with id '{0}'")]
    UnknownItem(String),

    #[error("threshold must lie strictly between 0 and 1, got {0}")]
    InvalidThreshold(f64),

    /// The joint per-attempt chance is zero, so no finite number of attempts
    /// ever reaches the threshold.
    #[error("joint drop chance is 0%, the item set can never be completed")]
    DegenerateComputation,
}

impl CalcError {
    /// True for errors caused by out-of-contract arguments, as opposed to
    /// valid inputs with no finite answer.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, CalcError::DegenerateComputation)
    }
}

pub type CalcResult<T> = Result<T, CalcError>;
