//! Public import entry points

use portage_host::{GroupRef, HostContext};
use portage_model::RequestContext;
use serde::{Deserialize, Serialize};

use crate::config::ImportConfig;
use crate::error::ImportError;
use crate::session::ImportSession;
use crate::warning::{ImportWarning, WarningStats};

/// One source to import: its raw content plus whatever names the caller
/// knows about its origin, used when the tree's root group is anonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportItem {
    /// Raw source text.
    pub content: String,
    /// File name of the source, when it came from disk.
    pub file_name: Option<String>,
    /// URL of the source, when it was fetched.
    pub url: Option<String>,
}

impl ImportItem {
    /// Wraps raw content with no origin information.
    #[must_use]
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            file_name: None,
            url: None,
        }
    }

    /// Records the source file name.
    #[must_use]
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Records the source URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Placement options for a batch import.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    /// Explicit ordering hint for the first item; increments per item.
    /// Zero is meaningful and is applied.
    pub order: Option<usize>,
    /// Host group the imported root groups are appended under.
    pub parent: Option<GroupRef>,
}

/// What a finished import produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportReport {
    /// Requests created.
    pub requests_imported: usize,
    /// Groups created (roots included).
    pub groups_imported: usize,
    /// Environments materialized.
    pub environments_imported: usize,
    /// Variables assigned while materializing environments.
    pub variables_imported: usize,
    /// Non-fatal findings, in discovery order.
    pub warnings: Vec<ImportWarning>,
}

impl ImportReport {
    /// Severity tally of the collected findings.
    #[must_use]
    pub fn stats(&self) -> WarningStats {
        WarningStats::from_warnings(&self.warnings)
    }
}

/// A concrete importer supplies the parsing hook; the batch driving comes
/// for free.
///
/// The hook is a required method, so "forgot to implement the parser" is a
/// compile error rather than a runtime fault, and the returned context is
/// well-formed by construction.
pub trait Importer {
    /// Turns one source item into a request context.
    ///
    /// # Errors
    /// [`ImportError::InvalidSource`] when the content is not a valid
    /// description for this importer.
    fn create_request_context(
        &self,
        item: &ImportItem,
        options: &ImportOptions,
    ) -> Result<RequestContext, ImportError>;

    /// Convenience wrapper for sources already in memory.
    ///
    /// # Errors
    /// Same as [`Importer::create_request_context`].
    fn create_request_context_from_string(
        &self,
        content: &str,
    ) -> Result<RequestContext, ImportError> {
        self.create_request_context(&ImportItem::from_content(content), &ImportOptions::default())
    }

    /// Parses `content` and imports it into the host.
    ///
    /// # Errors
    /// Propagates the parsing hook's error; see [`Importer::import`] for the
    /// import-side failures.
    fn import_string<C: HostContext>(
        &self,
        host: &mut C,
        content: &str,
    ) -> Result<ImportReport, ImportError> {
        let context = self.create_request_context_from_string(content)?;
        let mut session = ImportSession::new(host, ImportConfig::default());
        session.import_request_context(&context, None, None, None)?;
        Ok(session.finish())
    }

    /// Imports a batch of items with the default configuration.
    ///
    /// # Errors
    /// [`ImportError::InvalidSource`] from the parsing hook,
    /// [`ImportError::TooManyItems`] for an oversized tree.
    fn import<C: HostContext>(
        &self,
        host: &mut C,
        items: &[ImportItem],
        options: &ImportOptions,
    ) -> Result<ImportReport, ImportError> {
        self.import_with_config(host, items, options, ImportConfig::default())
    }

    /// Imports a batch of items.
    ///
    /// Each item is parsed, materialized under `options.parent` (when given)
    /// and assigned `options.order`, which increments per item.
    ///
    /// # Errors
    /// [`ImportError::InvalidSource`] from the parsing hook,
    /// [`ImportError::TooManyItems`] for an oversized tree, and
    /// [`ImportError::Aborted`] when `skip_on_error` is off and a context
    /// produced error-severity findings.
    fn import_with_config<C: HostContext>(
        &self,
        host: &mut C,
        items: &[ImportItem],
        options: &ImportOptions,
        config: ImportConfig,
    ) -> Result<ImportReport, ImportError> {
        let skip_on_error = config.skip_on_error;
        let mut session = ImportSession::new(host, config);
        let mut order = options.order;
        for item in items {
            let context = self.create_request_context(item, options)?;
            session.import_request_context(&context, Some(item), order, options.parent)?;
            if !skip_on_error && session.has_errors() {
                return Err(ImportError::Aborted);
            }
            if let Some(order) = order.as_mut() {
                *order += 1;
            }
        }
        Ok(session.finish())
    }
}
