//! List the published URL of a configuration's publish set and save it.

mod identifier;

use std::path::PathBuf;

pub use identifier::resolve_runtime_id;

use crate::app::{AppContext, Step};
use crate::domain::{
    AppError, RuntimeContext, StepFailure, StepParameters, StepStage, build_list_url,
    check_for_api_error, parse_publish_sets, select,
};
use crate::ports::{BuildContext, ConfigurationClient, ResultWriter};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPublishedUrlOutcome {
    pub configuration_id: String,
    pub url: String,
    pub url_file: PathBuf,
}

/// Resolves a named publish set's URL and writes it to a file.
#[derive(Debug, Clone)]
pub struct ListPublishedUrlStep {
    params: StepParameters,
}

impl ListPublishedUrlStep {
    pub fn new(params: StepParameters) -> Self {
        Self { params }
    }

    pub const NAME: &'static str = "List Published URL for Configuration";

    fn prepare<B: BuildContext>(&self, build: &B) -> Result<RuntimeContext, AppError> {
        let credentials = build.auth_credentials()?;

        let configuration_file = self
            .params
            .configuration_file()
            .map(|file| build.to_workspace_path(&build.expand_env_vars(file)));
        let url_file = build.to_workspace_path(&build.expand_env_vars(self.params.url_file()));

        let configuration_id = resolve_runtime_id(
            self.params.configuration_id(),
            configuration_file.as_deref(),
        )?;

        Ok(RuntimeContext { configuration_id, credentials, configuration_file, url_file })
    }
}

impl<C, B, W> Step<AppContext<C, B, W>> for ListPublishedUrlStep
where
    C: ConfigurationClient,
    B: BuildContext,
    W: ResultWriter,
{
    type Output = ListPublishedUrlOutcome;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn validate(&self) -> Result<(), AppError> {
        self.params.validate()
    }

    fn execute(&self, ctx: &AppContext<C, B, W>) -> Result<Self::Output, StepFailure> {
        enter(StepStage::Resolving);
        let runtime = self.prepare(ctx.build()).map_err(|e| StepStage::Resolving.fail(e))?;
        let url_name = self.params.url_name();

        tracing::info!("Configuration ID: {}", runtime.configuration_id);
        tracing::info!(
            "Configuration File: {}",
            runtime.configuration_file().map(|p| p.display().to_string()).unwrap_or_default()
        );
        tracing::info!("URL Name: {}", url_name);
        tracing::info!("URL Save Filename: {}", runtime.url_file().display());

        enter(StepStage::Requesting);
        tracing::info!("Building request url ...");
        let request_url = build_list_url(ctx.base_url(), &runtime.configuration_id);
        let body = ctx
            .client()
            .get_configuration(&request_url, &runtime.credentials)
            .and_then(|body| check_for_api_error(&body).map(|()| body))
            .map_err(|e| StepStage::Requesting.fail(e))?;

        enter(StepStage::Parsing);
        let records = parse_publish_sets(&body).map_err(|e| StepStage::Parsing.fail(e))?;

        enter(StepStage::Selecting);
        let url = select(&records, url_name)
            .into_url(url_name, &runtime.configuration_id)
            .map_err(|e| StepStage::Selecting.fail(e))?;

        enter(StepStage::Writing);
        tracing::info!("Outputting url to file: {}", runtime.url_file().display());
        ctx.writer().write(runtime.url_file(), &url).map_err(|e| StepStage::Writing.fail(e))?;

        let RuntimeContext { configuration_id, url_file, .. } = runtime;
        Ok(ListPublishedUrlOutcome { configuration_id, url, url_file })
    }
}

fn enter(stage: StepStage) {
    tracing::debug!(%stage, "entering stage");
}
