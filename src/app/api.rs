//! API Facade for the application.
//!
//! Wires the filesystem, environment and HTTP adapters into a context and
//! runs the step against it.

use std::path::PathBuf;

use url::Url;

use crate::adapters::{EnvBuildContext, FileResultWriter, HttpConfigurationClient};
use crate::app::commands::list_published_url::ListPublishedUrlStep;
use crate::app::step::{log_banner, report};
use crate::app::{AppContext, Step, config};
use crate::domain::{AppError, StepFailure, StepParameters, StepStage};

pub use crate::app::commands::list_published_url::ListPublishedUrlOutcome;

/// Where and how an invocation runs.
#[derive(Debug, Clone)]
pub struct InvocationOptions {
    /// Directory relative file names are resolved against.
    pub workspace: PathBuf,
    /// Explicit config file; `pubset.toml` in the workspace otherwise.
    pub config_path: Option<PathBuf>,
    /// Overrides `api.base_url` from the config.
    pub base_url: Option<Url>,
}

impl InvocationOptions {
    pub fn new(workspace: impl Into<PathBuf>) -> Self {
        Self { workspace: workspace.into(), config_path: None, base_url: None }
    }
}

type LiveContext = AppContext<HttpConfigurationClient, EnvBuildContext, FileResultWriter>;

fn create_context(options: &InvocationOptions) -> Result<LiveContext, AppError> {
    let mut config = config::load_config(&options.workspace, options.config_path.as_deref())?;
    if let Some(base_url) = &options.base_url {
        config.api.base_url = base_url.clone();
        config.api.validate()?;
    }

    let client = HttpConfigurationClient::new(&config.api)?;
    let build = EnvBuildContext::from_process_env(&options.workspace, config.credentials);
    Ok(AppContext::new(client, build, FileResultWriter::new(), config.api.base_url))
}

/// Resolve the published URL and save it, reporting the failing stage on error.
pub fn list_published_url(
    params: StepParameters,
    options: &InvocationOptions,
) -> Result<ListPublishedUrlOutcome, StepFailure> {
    let step = ListPublishedUrlStep::new(params);
    log_banner(ListPublishedUrlStep::NAME);

    <ListPublishedUrlStep as Step<LiveContext>>::validate(&step)
        .map_err(|e| StepStage::Validating.fail(e))?;
    let ctx = create_context(options).map_err(|e| StepStage::Validating.fail(e))?;
    step.execute(&ctx)
}

/// Same as [`list_published_url`], collapsed into the host's success flag.
pub fn run_list_published_url(params: StepParameters, options: &InvocationOptions) -> bool {
    report(list_published_url(params, options))
}
