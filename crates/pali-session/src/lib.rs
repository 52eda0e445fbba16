//! Stateful viewer session over one Pali document.
//!
//! `ViewerSession` owns the canonical romanized copy, the displayed copy and
//! its text index, and the active search. The host drives it through the
//! methods here and receives results through [`HostHandler`] callbacks.

mod actions;
mod host;
mod search;
mod types;

#[cfg(test)]
mod tests;

use std::sync::{Arc, OnceLock};

use pali_core::document::{Document, TextIndex};
use pali_core::script::Script;
use pali_core::translit::{convert_document, ConvertOptions};
use tracing::debug;

pub use host::{HostHandler, NullHost};
pub use types::{ViewerConfig, ViewerError, MESSAGE_INVALID_PATTERN, MESSAGE_NOT_FOUND};

use types::ActiveSearch;

pub struct ViewerSession {
    host: Arc<dyn HostHandler>,
    /// What the host currently shows.
    displayed: Document,
    /// Romanized original, captured on the first conversion.
    canonical: OnceLock<Document>,
    index: TextIndex,
    current: Script,
    search: Option<ActiveSearch>,
    config: ViewerConfig,
}

impl ViewerSession {
    /// Start a session over a romanized document.
    pub fn new(host: Arc<dyn HostHandler>, document: Document) -> Self {
        Self::with_config(host, document, ViewerConfig::default())
    }

    pub fn with_config(
        host: Arc<dyn HostHandler>,
        document: Document,
        config: ViewerConfig,
    ) -> Self {
        let index = TextIndex::build(&document);
        Self {
            host,
            displayed: document,
            canonical: OnceLock::new(),
            index,
            current: Script::Roman,
            search: None,
            config,
        }
    }

    pub fn document(&self) -> &Document {
        &self.displayed
    }

    pub fn index(&self) -> &TextIndex {
        &self.index
    }

    pub fn current_script(&self) -> Script {
        self.current
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Install a new romanized document, rebuilding the index and dropping
    /// the canonical copy and any search state.
    pub fn replace_document(&mut self, document: Document) {
        self.index = TextIndex::build(&document);
        self.displayed = document;
        self.canonical = OnceLock::new();
        self.current = Script::Roman;
        self.search = None;
    }

    /// Render the canonical document in `script`. `Script::Roman` reverts.
    pub fn convert(&mut self, script: Script, options: ConvertOptions) -> Result<(), ViewerError> {
        let Some(profile) = script.profile() else {
            self.revert_to_roman();
            return Ok(());
        };
        let canonical = self.canonical.get_or_init(|| self.displayed.clone());
        self.displayed = convert_document(canonical, &self.index, profile, options);
        self.current = script;
        debug!(script = script.name(), "converted");
        self.clear_search();
        Ok(())
    }

    /// Host entry point taking the script by name (`ROMAN` reverts).
    /// The native-period choice comes from the session config.
    pub fn convert_named(
        &mut self,
        name: &str,
        localize_numbers: bool,
        alternate_glyphs: bool,
    ) -> Result<(), ViewerError> {
        let script: Script = name.parse()?;
        let options = ConvertOptions {
            localize_numbers,
            alternate_glyphs,
            native_period: self.config.native_period,
        };
        self.convert(script, options)
    }

    /// Restore the canonical romanized text. A no-op before any conversion.
    pub fn revert_to_roman(&mut self) {
        if let Some(canonical) = self.canonical.get() {
            self.displayed = canonical.clone();
        }
        self.current = Script::Roman;
        self.clear_search();
    }

    fn clear_search(&mut self) {
        if self.search.take().is_some() {
            self.host.report_search_found(false);
        }
    }
}
