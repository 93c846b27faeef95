use std::path::PathBuf;
use std::process::ExitCode;

use snapsplit_ocr::OcrBackend;
use snapsplit_session::SessionController;

/// Demo driver: scan one receipt image and print the resulting session as
/// JSON. `snapsplit <image> [people-count]`.
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let Some(image_path) = args.next().map(PathBuf::from) else {
        eprintln!("usage: snapsplit <receipt-image> [people-count]");
        return ExitCode::FAILURE;
    };
    let people: usize = args.next().and_then(|n| n.parse().ok()).unwrap_or(2);

    let mut controller = SessionController::new(recognizer());
    for _ in 2..people {
        controller.add_person();
    }

    controller.scan_file(&image_path).await;

    match serde_json::to_string_pretty(&controller.view()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to render session: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "tesseract")]
fn recognizer() -> impl OcrBackend {
    snapsplit_ocr::recognizer::tesseract_backend::TesseractRecognizer::new(None, "eng")
}

#[cfg(not(feature = "tesseract"))]
fn recognizer() -> impl OcrBackend {
    // Without the tesseract feature there is no real engine; a canned
    // receipt still exercises extraction and the split math end to end.
    snapsplit_ocr::MockRecognizer::new("Item A 12.50\nItem B $4.00\nCoffee 3.25")
}
