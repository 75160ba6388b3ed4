//! Reconstruction of original source text from the gist's rendered HTML
//! fragment.

use crate::utils::error::{EmbedError, Result};
use regex::Regex;
use scraper::{Html, Selector};

/// Rewrites `<template>` wrapper tags to `<div>` so the whole fragment
/// becomes a plainly traversable tree (template contents are otherwise
/// parsed into an inert subtree).
fn normalize_fragment(html: &str) -> String {
    let template_tag = Regex::new(r"(</?\s*)template([\s>])").unwrap();
    template_tag.replace_all(html, "${1}div${2}").into_owned()
}

/// Reconstructs the source text of the file at `index` from the gist's HTML
/// fragment.
///
/// Per-file code blocks are the `.gist-file > .gist-data` containers in
/// document order, index-aligned with the gist's file list. Each line element
/// contributes its text content with trailing whitespace stripped; lines are
/// joined with a single `\n`, leading whitespace and blank lines preserved,
/// no trailing newline appended.
pub fn reconstruct_source(div_html: &str, index: usize) -> Result<String> {
    let normalized = normalize_fragment(div_html);
    let fragment = Html::parse_fragment(&normalized);

    let container_sel = Selector::parse(".gist-file > .gist-data").unwrap();
    let line_sel =
        Selector::parse(r#"[class*="file-line "], [class$="file-line"]"#).unwrap();

    let container = fragment
        .select(&container_sel)
        .nth(index)
        .ok_or_else(|| EmbedError::MalformedPayload {
            reason: format!("no code block at index {index}"),
        })?;

    let lines: Vec<String> = container
        .select(&line_sel)
        .map(|line| line.text().collect::<String>().trim_end().to_string())
        .collect();

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(lines: &[&str]) -> String {
        let rows: String = lines
            .iter()
            .map(|line| format!(r#"<tr><td class="file-line">{line}</td></tr>"#))
            .collect();
        format!(
            r#"<div class="gist-file"><div class="gist-data"><table>{rows}</table></div></div>"#
        )
    }

    #[test]
    fn test_lines_joined_with_single_newline() {
        let html = block(&["const a = 1;", "const b = 2;"]);
        let code = reconstruct_source(&html, 0).unwrap();
        assert_eq!(code, "const a = 1;\nconst b = 2;");
    }

    #[test]
    fn test_trailing_whitespace_stripped_leading_kept() {
        let html = block(&["  indented();   ", "next();\t"]);
        let code = reconstruct_source(&html, 0).unwrap();
        assert_eq!(code, "  indented();\nnext();");
    }

    #[test]
    fn test_blank_lines_survive() {
        let html = block(&["first();", "", "last();"]);
        let code = reconstruct_source(&html, 0).unwrap();
        assert_eq!(code, "first();\n\nlast();");
    }

    #[test]
    fn test_no_trailing_newline() {
        let html = block(&["only();"]);
        let code = reconstruct_source(&html, 0).unwrap();
        assert!(!code.ends_with('\n'));
    }

    #[test]
    fn test_blocks_are_index_aligned() {
        let html = format!("{}{}", block(&["file0();"]), block(&["file1();"]));
        assert_eq!(reconstruct_source(&html, 0).unwrap(), "file0();");
        assert_eq!(reconstruct_source(&html, 1).unwrap(), "file1();");
    }

    #[test]
    fn test_template_wrappers_are_traversed() {
        let inner = block(&["wrapped();"]);
        let html = format!("<template>{inner}</template>");
        assert_eq!(reconstruct_source(&html, 0).unwrap(), "wrapped();");
    }

    #[test]
    fn test_line_class_variants_match() {
        let html = r#"<div class="gist-file"><div class="gist-data"><table>
            <tr><td class="blob-code file-line js">a();</td></tr>
            <tr><td class="file-line extra">b();</td></tr>
        </table></div></div>"#;
        let code = reconstruct_source(html, 0).unwrap();
        assert_eq!(code, "a();\nb();");
    }

    #[test]
    fn test_missing_block_is_an_error() {
        let html = block(&["only();"]);
        let err = reconstruct_source(&html, 3).unwrap_err();
        assert!(matches!(err, EmbedError::MalformedPayload { .. }));
    }
}
