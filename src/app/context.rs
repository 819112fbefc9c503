use url::Url;

use crate::ports::{BuildContext, ConfigurationClient, ResultWriter};

/// Application context holding the collaborators a step runs against.
pub struct AppContext<C: ConfigurationClient, B: BuildContext, W: ResultWriter> {
    client: C,
    build: B,
    writer: W,
    base_url: Url,
}

impl<C: ConfigurationClient, B: BuildContext, W: ResultWriter> AppContext<C, B, W> {
    /// Create a new application context.
    pub fn new(client: C, build: B, writer: W, base_url: Url) -> Self {
        Self { client, build, writer, base_url }
    }

    /// Get a reference to the configuration API client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get a reference to the build context.
    pub fn build(&self) -> &B {
        &self.build
    }

    /// Get a reference to the result writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Host the configuration endpoints live under.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}
