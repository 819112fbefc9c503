//! Orchestrator states and the failure type carrying them.

use std::fmt;

use thiserror::Error;

use crate::domain::AppError;

/// States of the list-published-url pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStage {
    Validating,
    Resolving,
    Requesting,
    Parsing,
    Selecting,
    Writing,
}

impl StepStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStage::Validating => "validating",
            StepStage::Resolving => "resolving",
            StepStage::Requesting => "requesting",
            StepStage::Parsing => "parsing",
            StepStage::Selecting => "selecting",
            StepStage::Writing => "writing",
        }
    }

    /// Tag an error with this stage.
    pub fn fail(self, error: AppError) -> StepFailure {
        StepFailure { stage: self, error }
    }
}

impl fmt::Display for StepStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A step error together with the state it was raised in.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct StepFailure {
    pub stage: StepStage,
    #[source]
    pub error: AppError,
}
