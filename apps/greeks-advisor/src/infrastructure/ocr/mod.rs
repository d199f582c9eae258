//! Text recognition adapters.

mod tesseract;

pub use tesseract::TesseractRecognizer;
