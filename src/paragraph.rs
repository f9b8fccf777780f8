//! Paragraph structuring for note content.
//!
//! A note's content is segmented into paragraphs for independent editing.
//! Splitting and joining are exact inverses: empty paragraphs are
//! preserved, so consecutive delimiters produce an empty paragraph slot
//! rather than being collapsed.

use log::debug;

/// The paragraph delimiter inside note content.
pub const PARAGRAPH_DELIMITER: &str = "\n";

/// Splits content into paragraphs, preserving empty segments.
pub fn split_paragraphs(content: &str) -> Vec<String> {
    content
        .split(PARAGRAPH_DELIMITER)
        .map(str::to_string)
        .collect()
}

/// Joins paragraphs back into content with a single delimiter between
/// each, in order. Inverse of [`split_paragraphs`].
pub fn join_paragraphs(paragraphs: &[String]) -> String {
    paragraphs.join(PARAGRAPH_DELIMITER)
}

/// Returns new content with the paragraph at `index` replaced.
///
/// An out-of-range index leaves the content unchanged.
pub fn edit_paragraph(content: &str, index: usize, replacement: &str) -> String {
    let mut paragraphs = split_paragraphs(content);

    if index >= paragraphs.len() {
        debug!(
            "Paragraph index {} out of range ({} paragraphs), content unchanged",
            index,
            paragraphs.len()
        );
        return content.to_string();
    }

    paragraphs[index] = replacement.to_string();
    join_paragraphs(&paragraphs)
}
