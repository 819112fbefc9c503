//! Immutable inputs of the list-published-url step.

use crate::domain::AppError;

/// The four user-supplied values the step is configured with.
///
/// Empty strings mean "not provided", which is how the host hands over unset
/// form fields. Validation enforces the combination rules; construction never
/// fails so that the step can report a readable message instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StepParameters {
    configuration_id: String,
    configuration_file: String,
    url_name: String,
    url_file: String,
}

impl StepParameters {
    pub fn new(
        configuration_id: impl Into<String>,
        configuration_file: impl Into<String>,
        url_name: impl Into<String>,
        url_file: impl Into<String>,
    ) -> Self {
        Self {
            configuration_id: configuration_id.into(),
            configuration_file: configuration_file.into(),
            url_name: url_name.into(),
            url_file: url_file.into(),
        }
    }

    /// Literal configuration id, if one was given.
    pub fn configuration_id(&self) -> Option<&str> {
        non_empty(&self.configuration_id)
    }

    /// Unexpanded configuration file path, if one was given.
    pub fn configuration_file(&self) -> Option<&str> {
        non_empty(&self.configuration_file)
    }

    pub fn url_name(&self) -> &str {
        &self.url_name
    }

    /// Unexpanded path of the file receiving the URL.
    pub fn url_file(&self) -> &str {
        &self.url_file
    }

    /// Check the preflight rules in the order users are expected to fix them.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.url_file.is_empty() {
            return Err(AppError::precondition(
                "No value was provided for the URL save filename. Please provide a filename.",
            ));
        }

        if self.url_name.is_empty() {
            return Err(AppError::precondition(
                "No value was provided for URL name. Please provide a valid url name.",
            ));
        }

        match (self.configuration_id(), self.configuration_file()) {
            (Some(_), Some(_)) => Err(AppError::precondition(
                "Values were provided for both configuration ID and file. Please provide just one or the other.",
            )),
            (None, None) => Err(AppError::precondition(
                "No value was provided for configuration ID or file. Please provide either a valid configuration ID, or a valid configuration file.",
            )),
            _ => Ok(()),
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(params: &StepParameters) -> String {
        match params.validate() {
            Err(AppError::Precondition(message)) => message,
            other => panic!("expected precondition failure, got {:?}", other),
        }
    }

    #[test]
    fn accepts_id_only() {
        let params = StepParameters::new("123", "", "main", "/tmp/out.txt");
        assert!(params.validate().is_ok());
        assert_eq!(params.configuration_id(), Some("123"));
        assert_eq!(params.configuration_file(), None);
    }

    #[test]
    fn accepts_file_only() {
        let params = StepParameters::new("", "conf.json", "main", "out.txt");
        assert!(params.validate().is_ok());
        assert_eq!(params.configuration_id(), None);
        assert_eq!(params.configuration_file(), Some("conf.json"));
    }

    #[test]
    fn rejects_missing_url_file_first() {
        let params = StepParameters::new("", "", "", "");
        assert!(message(&params).contains("URL save filename"));
    }

    #[test]
    fn rejects_missing_url_name() {
        let params = StepParameters::new("123", "", "", "out.txt");
        assert!(message(&params).contains("URL name"));
    }

    #[test]
    fn rejects_both_sources() {
        let params = StepParameters::new("123", "conf.json", "main", "out.txt");
        assert!(message(&params).contains("both configuration ID and file"));
    }

    #[test]
    fn rejects_neither_source() {
        let params = StepParameters::new("", "", "main", "out.txt");
        assert!(message(&params).contains("configuration ID or file"));
    }
}
