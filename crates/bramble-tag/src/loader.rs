use std::sync::{Arc, Mutex};

use bramble_core::BrambleResult;
use tracing::info;

use crate::bootstrap;

// the activation contract is "request load", not "confirm load": fetching
// the vendor resource is the page's concern once the markup is in place
pub trait TagLoader: Send + Sync {
    fn request_load(&self, tag_id: &str) -> BrambleResult<()>;
}

// applies the bootstrap markup to an in-memory document
#[derive(Clone)]
pub struct DocumentTagLoader {
    document: Arc<Mutex<String>>,
}

impl DocumentTagLoader {
    pub fn new(document: String) -> Self {
        Self {
            document: Arc::new(Mutex::new(document)),
        }
    }

    pub fn document(&self) -> String {
        self.document.lock().expect("document lock poisoned").clone()
    }
}

impl TagLoader for DocumentTagLoader {
    fn request_load(&self, tag_id: &str) -> BrambleResult<()> {
        let mut document = self.document.lock().expect("document lock poisoned");
        let updated = bootstrap::inject_bootstrap(&document, tag_id)?;
        *document = updated;
        info!(tag_id = %tag_id, "tag bootstrap injected into document");
        Ok(())
    }
}

// records load requests instead of performing them
#[derive(Clone, Default)]
pub struct RecordingLoader {
    requests: Arc<Mutex<Vec<String>>>,
}

impl RecordingLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

impl TagLoader for RecordingLoader {
    fn request_load(&self, tag_id: &str) -> BrambleResult<()> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(tag_id.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_loader_rewrites_its_document() {
        let loader = DocumentTagLoader::new("<html><head></head><body></body></html>".to_string());
        loader.request_load("G-TEST1234").expect("load");
        assert!(loader.document().contains("gtag/js?id=G-TEST1234"));
    }

    #[test]
    fn recording_loader_keeps_request_order() {
        let loader = RecordingLoader::new();
        loader.request_load("G-1").expect("load");
        loader.request_load("G-2").expect("load");
        assert_eq!(loader.requests(), vec!["G-1".to_string(), "G-2".to_string()]);
    }
}
