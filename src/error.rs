use thiserror::Error;

/// Result type for all splitter operations
pub type SplitResult<T> = Result<T, SplitError>;

/// Everything that can go wrong between loading the source files and
/// rendering a split proposal. Failures always propagate to the caller;
/// nothing in the engine prints-and-continues on partial data.
#[derive(Debug, Error)]
pub enum SplitError {
    /// A time string that is not HH:MM:SS or HH:MM
    #[error("time '{0}' is not in HH:MM:SS or HH:MM format")]
    TimeFormat(String),

    /// The schedule catalog is missing, unreadable, or ill-formed
    #[error("schedule catalog error: {0}")]
    CatalogFormat(String),

    /// The roster is missing a required column or is not valid CSV
    #[error("roster schema error: {0}")]
    Schema(String),

    /// The roster parsed but contains no usable rows
    #[error("roster contains no enrollment rows")]
    EmptyData,

    /// A referenced course code or slot label does not exist
    #[error("{0}")]
    NotFound(String),

    /// No student in the target section has any free slot
    #[error("no common free slots found for any students in section '{0}'")]
    NoCandidates(String),

    /// No candidate slot reached the minimum-student threshold
    #[error("no slots found with at least {min_students} students available")]
    ThresholdNotMet { min_students: usize },
}
