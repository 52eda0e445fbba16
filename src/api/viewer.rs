use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pali_core::document::Document;
use pali_core::settings::settings;
use pali_session::{ViewerConfig, ViewerSession};

use super::host::HostAdapter;
use super::{PaliDirection, PaliError, PaliHost, PaliSelection, PaliSpanAddress};

/// One open document, shown in whichever script the host last asked for.
#[derive(uniffi::Object)]
pub struct PaliViewer {
    session: Mutex<ViewerSession>,
}

fn parse_json(json: &str) -> Result<Document, PaliError> {
    Document::from_json(json).map_err(|e| PaliError::InvalidData { msg: e.to_string() })
}

impl PaliViewer {
    fn with_document(host: Arc<dyn PaliHost>, document: Document) -> Arc<Self> {
        let session = ViewerSession::with_config(
            Arc::new(HostAdapter(host)),
            document,
            ViewerConfig::from_settings(settings()),
        );
        Arc::new(Self {
            session: Mutex::new(session),
        })
    }

    fn session(&self) -> MutexGuard<'_, ViewerSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[uniffi::export]
impl PaliViewer {
    /// Open a romanized document given as JSON.
    #[uniffi::constructor]
    pub fn new(host: Arc<dyn PaliHost>, document_json: String) -> Result<Arc<Self>, PaliError> {
        Ok(Self::with_document(host, parse_json(&document_json)?))
    }

    /// Open plain romanized text, one paragraph per line.
    #[uniffi::constructor]
    pub fn from_plain_text(host: Arc<dyn PaliHost>, text: String) -> Arc<Self> {
        Self::with_document(host, Document::from_plain_text(&text))
    }

    /// Show the document in `script` (`ROMAN` reverts).
    pub fn convert(
        &self,
        script: String,
        localize_numbers: bool,
        use_alternate_glyphs: bool,
    ) -> Result<(), PaliError> {
        self.session()
            .convert_named(&script, localize_numbers, use_alternate_glyphs)?;
        Ok(())
    }

    pub fn revert_to_roman(&self) {
        self.session().revert_to_roman();
    }

    pub fn current_script(&self) -> String {
        self.session().current_script().name().to_string()
    }

    /// The displayed document as JSON.
    pub fn document_json(&self) -> Result<String, PaliError> {
        self.session()
            .document()
            .to_json()
            .map_err(|e| PaliError::Internal { msg: e.to_string() })
    }

    pub fn replace_document(&self, document_json: String) -> Result<(), PaliError> {
        let document = parse_json(&document_json)?;
        self.session().replace_document(document);
        Ok(())
    }

    pub fn search(&self, query: String, case_sensitive: bool) -> bool {
        self.session().search(&query, case_sensitive)
    }

    pub fn search_regex(
        &self,
        pattern: String,
        whole_word: bool,
        case_sensitive: bool,
    ) -> Result<bool, PaliError> {
        Ok(self
            .session()
            .search_regex(&pattern, whole_word, case_sensitive)?)
    }

    pub fn find_next(&self, direction: PaliDirection) -> Option<PaliSelection> {
        self.session()
            .find_next(direction.into())
            .map(|sel| PaliSelection::from(&sel))
    }

    pub fn handle_selection(&self, text: String) -> bool {
        self.session().handle_selection(&text)
    }

    pub fn handle_click(&self, address: PaliSpanAddress) {
        self.session().handle_click(&(&address).into());
    }

    pub fn copy_selection(&self, text: String) {
        self.session().copy_selection(&text);
    }

    pub fn save_selection(&self, text: String) {
        self.session().save_selection(&text);
    }

    pub fn copy_body(&self) {
        self.session().copy_body();
    }

    pub fn save_body(&self) {
        self.session().save_body();
    }

    pub fn open_declension(&self, term: String) {
        self.session().open_declension(&term);
    }
}
