//! Import session
//!
//! One [`ImportSession`] wraps a host context for the duration of a batch
//! import: it owns the configuration, tallies what was created, and collects
//! non-fatal findings. All mutations it performs on the host are additive.

use indexmap::IndexMap;
use portage_host::{DomainRef, EnvironmentRef, HostContext, VariableRef};
use portage_model::EnvironmentDef;

use crate::config::ImportConfig;
use crate::importer::ImportReport;
use crate::warning::ImportWarning;

/// Name of the domain all imported variables live under.
pub const ENVIRONMENT_DOMAIN_NAME: &str = "Imported Environments";

/// Name of the environment that receives variables created on demand.
pub const DEFAULT_ENVIRONMENT_NAME: &str = "Default Environment";

/// Tracks one import run against a host context.
pub struct ImportSession<'a, C: HostContext> {
    pub(crate) host: &'a mut C,
    pub(crate) config: ImportConfig,
    warnings: Vec<ImportWarning>,
    pub(crate) requests_imported: usize,
    pub(crate) groups_imported: usize,
    environments_imported: usize,
    variables_imported: usize,
}

impl<'a, C: HostContext> ImportSession<'a, C> {
    /// Starts a session over a host context.
    pub fn new(host: &'a mut C, config: ImportConfig) -> Self {
        Self {
            host,
            config,
            warnings: Vec::new(),
            requests_imported: 0,
            groups_imported: 0,
            environments_imported: 0,
            variables_imported: 0,
        }
    }

    /// Findings collected so far.
    #[must_use]
    pub fn warnings(&self) -> &[ImportWarning] {
        &self.warnings
    }

    /// True when any error-severity finding was recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.warnings.iter().any(ImportWarning::is_error)
    }

    pub(crate) fn warn(&mut self, warning: ImportWarning) {
        self.warnings.push(warning);
    }

    /// Closes the session and summarizes what happened.
    #[must_use]
    pub fn finish(self) -> ImportReport {
        tracing::debug!(
            requests = self.requests_imported,
            groups = self.groups_imported,
            environments = self.environments_imported,
            variables = self.variables_imported,
            warnings = self.warnings.len(),
            "import finished"
        );
        ImportReport {
            requests_imported: self.requests_imported,
            groups_imported: self.groups_imported,
            environments_imported: self.environments_imported,
            variables_imported: self.variables_imported,
            warnings: self.warnings,
        }
    }

    /// The domain imported variables live under, created on first use.
    pub fn environment_domain(&mut self) -> DomainRef {
        match self.host.environment_domain_by_name(ENVIRONMENT_DOMAIN_NAME) {
            Some(domain) => domain,
            None => self.host.create_environment_domain(ENVIRONMENT_DOMAIN_NAME),
        }
    }

    /// The default environment of the given domain, created on first use.
    fn default_environment(&mut self, domain: DomainRef) -> EnvironmentRef {
        match self
            .host
            .environment_by_name(domain, DEFAULT_ENVIRONMENT_NAME)
        {
            Some(environment) => environment,
            None => self
                .host
                .create_environment(domain, DEFAULT_ENVIRONMENT_NAME),
        }
    }

    /// Looks up a variable by name, creating it with an empty value in the
    /// default environment when absent. A variable is created at most once
    /// per distinct name.
    pub fn environment_variable(&mut self, name: &str) -> Option<VariableRef> {
        let domain = self.environment_domain();
        if let Some(variable) = self.host.variable_by_name(domain, name) {
            return Some(variable);
        }

        let environment = self.default_environment(domain);
        let mut values = IndexMap::new();
        values.insert(name.to_string(), String::new());
        self.host.set_variable_values(environment, &values);
        self.host.variable_by_name(domain, name)
    }

    /// Materializes named environment definitions in the host.
    pub(crate) fn import_environments(&mut self, environments: &[EnvironmentDef]) {
        let domain = self.environment_domain();
        for definition in environments {
            let environment = match self.host.environment_by_name(domain, &definition.name) {
                Some(environment) => environment,
                None => self.host.create_environment(domain, &definition.name),
            };
            self.host
                .set_variable_values(environment, &definition.variables);
            self.environments_imported += 1;
            self.variables_imported += definition.variables.len();
        }
        tracing::debug!(count = environments.len(), "materialized environments");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use portage_host::stub::StubHost;

    #[test]
    fn test_environment_variable_is_created_once() {
        let mut host = StubHost::new();
        let mut session = ImportSession::new(&mut host, ImportConfig::default());

        let first = session.environment_variable("token").unwrap();
        let second = session.environment_variable("token").unwrap();
        assert_eq!(first, second);

        assert_eq!(host.calls.create_environment_domain, 1);
        assert_eq!(host.calls.create_environment, 1);
        assert_eq!(host.calls.set_variable_values, 1);

        let domain = host.domain_by_name(ENVIRONMENT_DOMAIN_NAME).unwrap();
        let variable = domain.variable_by_name("token").unwrap();
        assert_eq!(variable.value, "");
    }

    #[test]
    fn test_import_environments_bulk_sets_values() {
        let mut host = StubHost::new();
        let mut session = ImportSession::new(&mut host, ImportConfig::default());

        let mut staging = EnvironmentDef::new("Staging");
        staging
            .variables
            .insert("base_url".to_string(), "http://staging".to_string());
        staging
            .variables
            .insert("token".to_string(), "abc".to_string());
        session.import_environments(&[staging]);

        let report = session.finish();
        assert_eq!(report.environments_imported, 1);
        assert_eq!(report.variables_imported, 2);

        let domain = host.domain_by_name(ENVIRONMENT_DOMAIN_NAME).unwrap();
        assert_eq!(domain.variable_by_name("base_url").unwrap().value, "http://staging");
    }

    #[test]
    fn test_existing_environment_is_reused() {
        let mut host = StubHost::new();
        let mut session = ImportSession::new(&mut host, ImportConfig::default());

        session.import_environments(&[EnvironmentDef::new("Staging")]);
        session.import_environments(&[EnvironmentDef::new("Staging")]);

        assert_eq!(host.calls.create_environment, 1);
    }
}
