pub mod extract;
pub mod pipeline;
pub mod preprocess;
pub mod recognizer;

pub use extract::{extract_items, ExtractError};
pub use pipeline::{PipelineError, ScanPipeline, ScanResult};
pub use preprocess::{normalize_for_ocr, PreprocessError};
pub use recognizer::{MockRecognizer, OcrBackend, OcrError};
