//! Host-facing step interface.

use crate::domain::{AppError, StepFailure, StepStage};

/// A unit of work the host can validate and execute.
pub trait Step<Ctx> {
    type Output;

    /// Display name used in log banners.
    fn name(&self) -> &'static str;

    /// Check the step's own parameters. Must not touch the context.
    fn validate(&self) -> Result<(), AppError>;

    /// Run the step. Callers validate first.
    fn execute(&self, ctx: &Ctx) -> Result<Self::Output, StepFailure>;
}

/// Validate then execute, stopping at the first failure.
pub fn perform<Ctx, S: Step<Ctx>>(step: &S, ctx: &Ctx) -> Result<S::Output, StepFailure> {
    log_banner(step.name());
    step.validate().map_err(|e| StepStage::Validating.fail(e))?;
    step.execute(ctx)
}

/// Run a step and collapse the outcome into the host's success flag.
pub fn run_step<Ctx, S: Step<Ctx>>(step: &S, ctx: &Ctx) -> bool {
    report(perform(step, ctx))
}

/// Log a failure and turn a step result into success/failure.
pub fn report<T>(result: Result<T, StepFailure>) -> bool {
    match result {
        Ok(_) => true,
        Err(failure) => {
            tracing::error!(stage = %failure.stage, "{}", failure.error);
            tracing::error!("Failing build step.");
            false
        }
    }
}

pub(crate) fn log_banner(name: &str) {
    let rule = "-".repeat(40);
    tracing::info!("{}", rule);
    tracing::info!("{} Step", name);
    tracing::info!("{}", rule);
}
