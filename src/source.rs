//! Document text sources.
//!
//! Turning an uploaded PDF into text is done outside this crate. Any PDF
//! library can be plugged in by implementing [`TextSource`]. The extractor
//! only needs the pages' text concatenated in page order.

use crate::error::ExtractionError;

/// Page separator emitted by common PDF-to-text tools.
pub const PAGE_BREAK: char = '\u{c}';

/// Produces the plain text of an uploaded document.
pub trait TextSource {
    /// Returns the text of each page, in page order.
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractionError>;

    /// Returns the full document text: every page's text concatenated in
    /// page order with no separator.
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        Ok(self.extract_pages(bytes)?.concat())
    }
}

/// A [`TextSource`] for documents already converted to UTF-8 text.
///
/// Form feed characters split the text into pages, matching the output of
/// `pdftotext` and similar tools.
///
/// # Example
///
/// ```
/// use timesheet_engine::source::{PlainTextSource, TextSource};
///
/// let text = PlainTextSource.extract_text(b"page one\n\x0cpage two\n").unwrap();
/// assert_eq!(text, "page one\npage two\n");
/// assert!(PlainTextSource.extract_text(&[0xff, 0xfe]).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
        if bytes.is_empty() {
            return Err(ExtractionError::EmptyDocument);
        }

        let text = std::str::from_utf8(bytes).map_err(|e| ExtractionError::Decode {
            message: e.to_string(),
        })?;

        Ok(text.split(PAGE_BREAK).map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page() {
        let pages = PlainTextSource.extract_pages(b"Employee Name: A").unwrap();
        assert_eq!(pages, vec!["Employee Name: A".to_string()]);
    }

    #[test]
    fn test_pages_split_on_form_feed() {
        let pages = PlainTextSource.extract_pages(b"one\n\x0ctwo\n\x0c").unwrap();
        assert_eq!(pages, vec!["one\n", "two\n", ""]);
    }

    #[test]
    fn test_text_concatenates_pages() {
        let text = PlainTextSource.extract_text(b"one\n\x0ctwo\n").unwrap();
        assert_eq!(text, "one\ntwo\n");
    }

    #[test]
    fn test_empty_document_is_error() {
        assert_eq!(
            PlainTextSource.extract_text(b""),
            Err(ExtractionError::EmptyDocument)
        );
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let err = PlainTextSource.extract_text(b"abc\xff").unwrap_err();
        assert!(matches!(err, ExtractionError::Decode { .. }));
    }

    #[test]
    fn test_custom_source_uses_default_concatenation() {
        struct FixedPages;

        impl TextSource for FixedPages {
            fn extract_pages(&self, _bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
                Ok(vec!["16/06/2025\n".to_string(), "Mon\n".to_string()])
            }
        }

        assert_eq!(FixedPages.extract_text(b"%PDF").unwrap(), "16/06/2025\nMon\n");
    }
}
