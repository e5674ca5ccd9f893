use thiserror::Error;

/// Failures of a single placement request. None of them touch the loaded
/// tables or the fitted models.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("no environmental records are loaded")]
    EmptyDataset,
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("no location selected")]
    NoSelection,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("cannot fit a model on an empty training set")]
    EmptyTrainingSet,
    #[error("{samples} training samples but {targets} targets")]
    LengthMismatch { samples: usize, targets: usize },
    #[error("least squares solve failed: {0}")]
    Solve(String),
    #[error(transparent)]
    Input(#[from] CoreError),
}
