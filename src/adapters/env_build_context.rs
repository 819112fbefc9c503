//! Build context backed by a workspace directory and an environment snapshot.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Credentials, CredentialsConfig};
use crate::ports::BuildContext;

/// Build context for command-line invocations.
///
/// The environment is captured once so a single invocation sees a stable view.
#[derive(Debug, Clone)]
pub struct EnvBuildContext {
    workspace: PathBuf,
    vars: BTreeMap<String, String>,
    credentials: CredentialsConfig,
}

impl EnvBuildContext {
    pub fn new(
        workspace: impl Into<PathBuf>,
        vars: BTreeMap<String, String>,
        credentials: CredentialsConfig,
    ) -> Self {
        Self { workspace: workspace.into(), vars, credentials }
    }

    /// Snapshot the current process environment. Non-UTF-8 entries are skipped.
    pub fn from_process_env(workspace: impl Into<PathBuf>, credentials: CredentialsConfig) -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self::new(workspace, vars, credentials)
    }

    fn required_var(&self, name: &str) -> Result<String, AppError> {
        self.vars
            .get(name)
            .filter(|value| !value.is_empty())
            .cloned()
            .ok_or_else(|| AppError::EnvironmentVariableMissing(name.to_string()))
    }
}

impl BuildContext for EnvBuildContext {
    fn expand_env_vars(&self, value: &str) -> String {
        expand_vars(value, |name| self.vars.get(name).cloned())
    }

    fn to_workspace_path(&self, value: &str) -> PathBuf {
        let path = Path::new(value);
        if path.is_absolute() { path.to_path_buf() } else { self.workspace.join(path) }
    }

    fn auth_credentials(&self) -> Result<Credentials, AppError> {
        let username = self.required_var(&self.credentials.username_env)?;
        let api_key = self.required_var(&self.credentials.api_key_env)?;
        Ok(Credentials::new(username, api_key))
    }
}

/// Replace `$NAME` and `${NAME}` references using `lookup`.
///
/// References to unknown variables and malformed references stay verbatim.
pub fn expand_vars(value: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        let (name, consumed) = if let Some(braced) = after.strip_prefix('{') {
            match braced.find('}') {
                Some(end) if is_var_name(&braced[..end]) => (&braced[..end], end + 2),
                _ => ("", 0),
            }
        } else {
            let end = after
                .char_indices()
                .find(|&(i, c)| !is_name_char(i, c))
                .map(|(i, _)| i)
                .unwrap_or(after.len());
            (&after[..end], end)
        };

        let reference = &rest[pos..pos + 1 + consumed];
        match lookup(name).filter(|_| !name.is_empty()) {
            Some(replacement) => out.push_str(&replacement),
            None if consumed == 0 => out.push('$'),
            None => out.push_str(reference),
        }
        rest = &rest[pos + 1 + consumed..];
    }

    out.push_str(rest);
    out
}

fn is_name_char(index: usize, c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic() || (index > 0 && c.is_ascii_digit())
}

fn is_var_name(name: &str) -> bool {
    !name.is_empty() && name.char_indices().all(|(i, c)| is_name_char(i, c))
}
