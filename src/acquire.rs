use crate::error::{AppResult, Error};
use tracing::info;

/// Pull page-ordered plain text out of an uploaded PDF.
///
/// The extractor core only ever sees the returned string; this is the one
/// step in a request that can fail outright.
pub fn document_text(bytes: &[u8]) -> AppResult<String> {
    info!("Extracting text from {} byte document", bytes.len());

    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|err| Error::Acquisition(err.to_string()))?;

    info!("Extracted {} characters of text", text.len());
    Ok(text)
}
