//! File selection: the caller's explicit list verbatim, or auto-detection of
//! embeddable files by extension.

use crate::utils::error::{EmbedError, Result};
use regex::Regex;

/// Resolves the final list of file names to embed.
///
/// A non-empty chosen list is used as-is, order and duplicates preserved. An
/// empty one auto-selects every gist file ending in `.js` or `.css`
/// (case-insensitive; a `#js`/`#css` forced-type suffix also counts), in gist
/// order. Auto-selection matching nothing is a failure.
pub fn choose_files(all_files: &[String], chosen_files: &[String]) -> Result<Vec<String>> {
    if !chosen_files.is_empty() {
        return Ok(chosen_files.to_vec());
    }

    let embeddable = Regex::new(r"(?i)[#.]js$|[#.]css$").unwrap();
    let auto: Vec<String> = all_files
        .iter()
        .filter(|name| embeddable.is_match(name))
        .cloned()
        .collect();

    if auto.is_empty() {
        return Err(EmbedError::NoEmbeddableFiles);
    }
    Ok(auto)
}
