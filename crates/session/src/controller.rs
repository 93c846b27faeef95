use std::path::Path;

use snapsplit_core::{Money, PersonId};
use snapsplit_ocr::{ExtractError, OcrBackend, PipelineError, ScanPipeline, ScanResult};

use crate::state::{Preview, Session};
use crate::view::SessionView;

const MSG_NOT_AN_IMAGE: &str =
    "That file is not an image. Choose a photo of the receipt.";
const MSG_SCAN_FAILED: &str =
    "Could not read the receipt. Try again with another photo.";
const MSG_NO_PRICES: &str =
    "No prices were found on the receipt. Try a clearer, well-lit photo.";

/// Owns the current session snapshot and the scan pipeline. UI events map
/// onto methods here; every action swaps in a new snapshot, and every scan
/// failure is converted to a single user-visible message — nothing
/// propagates past this boundary.
pub struct SessionController<R: OcrBackend> {
    state: Session,
    pipeline: ScanPipeline<R>,
}

impl<R: OcrBackend> SessionController<R> {
    pub fn new(recognizer: R) -> Self {
        Self {
            state: Session::new(),
            pipeline: ScanPipeline::new(recognizer),
        }
    }

    pub fn state(&self) -> &Session {
        &self.state
    }

    pub fn view(&self) -> SessionView {
        SessionView::of(&self.state)
    }

    pub fn total(&self) -> Money {
        self.state.total()
    }

    pub fn share_of(&self, person: PersonId) -> Money {
        self.state.share_of(person)
    }

    // ── Scanning ──────────────────────────────────────────────────────────────

    /// Run one image through OCR and replace the item list wholesale with
    /// whatever prices come out. At most one scan runs at a time; a request
    /// arriving while one is in flight is ignored. On failure the previous
    /// items and preview are left untouched and the error message is
    /// replaced.
    pub async fn scan_image(&mut self, data: &[u8]) {
        if !self.begin_scan() {
            return;
        }
        let people = self.state.people_ids();
        let result = self.pipeline.process_bytes(data, &people).await;
        self.finish_scan(result);
    }

    /// Scan an image file from disk. A read failure surfaces the same way
    /// any other scan failure does.
    pub async fn scan_file(&mut self, path: &Path) {
        if !self.begin_scan() {
            return;
        }
        let people = self.state.people_ids();
        let result = self.pipeline.process_file(path, &people).await;
        self.finish_scan(result);
    }

    fn begin_scan(&mut self) -> bool {
        if self.state.processing {
            tracing::warn!("scan requested while another is in flight; ignored");
            return false;
        }
        self.state.processing = true;
        true
    }

    fn finish_scan(&mut self, result: Result<ScanResult, PipelineError>) {
        let mut next = self.state.clone();
        next.processing = false;
        match result {
            Ok(scan) => {
                next.items = scan.items;
                next.preview = Some(Preview {
                    hash_hex: scan.hash_hex,
                    png: scan.preview_png,
                });
                next.error = None;
            }
            Err(err) => {
                // The underlying cause is for the log only; the user gets a
                // single generic message per failure class.
                tracing::warn!(%err, "scan failed");
                next.error = Some(user_message(&err).to_string());
            }
        }
        self.state = next;
    }

    // ── People & item edits ───────────────────────────────────────────────────

    pub fn add_person(&mut self) {
        self.state = self.state.add_person();
    }

    pub fn remove_person(&mut self, id: PersonId) {
        self.state = self.state.remove_person(id);
    }

    pub fn rename_person(&mut self, id: PersonId, name: impl Into<String>) {
        self.state = self.state.rename_person(id, name);
    }

    pub fn set_item_description(&mut self, index: usize, text: impl Into<String>) {
        self.state = self.state.set_item_description(index, text);
    }

    pub fn set_item_included(&mut self, index: usize, included: bool) {
        self.state = self.state.set_item_included(index, included);
    }

    pub fn toggle_assignment(&mut self, index: usize, person: PersonId) {
        self.state = self.state.toggle_assignment(index, person);
    }

    /// Discard the current bill and preview, keep the group.
    pub fn start_new(&mut self) {
        self.state = self.state.start_new();
    }
}

fn user_message(err: &PipelineError) -> &'static str {
    match err {
        PipelineError::InvalidFileType => MSG_NOT_AN_IMAGE,
        PipelineError::Extract(ExtractError::NoAmounts) => MSG_NO_PRICES,
        // Decode, engine, and IO failures all read the same to the user.
        PipelineError::Io(_) | PipelineError::Preprocess(_) | PipelineError::Ocr(_) => {
            MSG_SCAN_FAILED
        }
    }
}
