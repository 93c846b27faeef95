use std::path::Path;

use sha2::{Digest, Sha256};
use thiserror::Error;

use snapsplit_core::{BillItem, PersonId};

use crate::extract::{self, ExtractError};
use crate::preprocess::{self, PreprocessError};
use crate::recognizer::{OcrBackend, OcrError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Selected file is not an image")]
    InvalidFileType,
    #[error("Image preprocessing failed: {0}")]
    Preprocess(#[from] PreprocessError),
    #[error("OCR recognition failed: {0}")]
    Ocr(#[from] OcrError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// One successful scan: the normalized preview, its identity, and the items
/// that fell out of the recognized text.
#[derive(Debug)]
pub struct ScanResult {
    /// SHA-256 hex of the uploaded bytes — identifies this scan in logs and views.
    pub hash_hex: String,
    /// Normalized PNG that was handed to the recognizer; doubles as the preview.
    pub preview_png: Vec<u8>,
    /// Raw recognizer output, kept for diagnostics.
    pub ocr_text: String,
    pub items: Vec<BillItem>,
}

/// Orchestrates: file-type check → preprocess → OCR → price extraction.
pub struct ScanPipeline<R: OcrBackend> {
    recognizer: R,
}

impl<R: OcrBackend> ScanPipeline<R> {
    pub fn new(recognizer: R) -> Self {
        Self { recognizer }
    }

    /// Scan an image file on disk.
    pub async fn process_file(
        &self,
        path: &Path,
        people: &[PersonId],
    ) -> Result<ScanResult, PipelineError> {
        let bytes = tokio::fs::read(path).await?;
        self.process_bytes(&bytes, people).await
    }

    /// Scan raw upload bytes (camera capture or file picker). `people` is the
    /// roster snapshot every extracted item gets assigned to.
    pub async fn process_bytes(
        &self,
        data: &[u8],
        people: &[PersonId],
    ) -> Result<ScanResult, PipelineError> {
        // Non-image uploads are rejected before the engine ever sees them.
        if image::guess_format(data).is_err() {
            return Err(PipelineError::InvalidFileType);
        }

        let hash_hex = sha256_hex(data);
        let preview_png = preprocess::normalize_for_ocr(data)?;
        let ocr_text = self.recognizer.recognize(&preview_png)?;
        tracing::debug!(hash = %hash_hex, chars = ocr_text.len(), "recognition finished");

        let items = extract::extract_items(&ocr_text, people)?;
        tracing::info!(hash = %hash_hex, items = items.len(), "scan extracted items");

        Ok(ScanResult { hash_hex, preview_png, ocr_text, items })
    }
}

fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().iter().map(|b| format!("{b:02x}")).collect()
}
