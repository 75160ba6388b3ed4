//! Invocation surface: the embedding script's own `src` URL carries the
//! configuration as `gist` and `file` query parameters.

use crate::domain::model::EmbedRequest;
use crate::utils::error::{EmbedError, Result};
use percent_encoding::percent_decode_str;
use regex::Regex;

const EXAMPLE_QUERY: &str = "?gist=2fe0bfa42237139860f32972ddc608f1&file=readGist.js";

/// Parses the invoking script's URL into an [`EmbedRequest`].
///
/// The scan is deliberately loose: any `key=value` pair introduced by `?` or
/// `&` counts, wherever it sits in the URL. The last `gist` value wins; every
/// `file` value is kept in order, duplicates included. Unknown keys are
/// ignored. A missing `gist` key fails synchronously with a corrected example
/// URL in the message.
pub fn parse_script_url(script_url: &str) -> Result<EmbedRequest> {
    let without_fragment = match script_url.find('#') {
        Some(pos) => &script_url[..pos],
        None => script_url,
    };

    let pair_re = Regex::new(r"[&?]([^&=]+)=([^&]+)").unwrap();

    let mut gist_id: Option<String> = None;
    let mut chosen_files = Vec::new();
    for caps in pair_re.captures_iter(without_fragment) {
        let key = &caps[1];
        let value = decode_component(&caps[2]);
        match key {
            "gist" => gist_id = Some(value),
            "file" => chosen_files.push(value),
            _ => {}
        }
    }

    match gist_id {
        Some(gist_id) => Ok(EmbedRequest {
            gist_id,
            chosen_files,
        }),
        None => Err(EmbedError::MissingGistId {
            example_url: example_url(script_url),
        }),
    }
}

/// URL-decodes one parameter value, treating `+` as space.
fn decode_component(raw: &str) -> String {
    let plus_as_space = raw.replace('+', " ");
    percent_decode_str(&plus_as_space)
        .decode_utf8_lossy()
        .into_owned()
}

/// Rebuilds the caller's URL with a working query string, for the
/// missing-gist error message.
fn example_url(script_url: &str) -> String {
    let head_len = script_url
        .find(|c: char| c == '?' || c == '#')
        .unwrap_or(script_url.len());
    format!("{}{}", &script_url[..head_len], EXAMPLE_QUERY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gist_and_single_file() {
        let request =
            parse_script_url("https://example.com/embed.js?gist=abc123&file=app.js").unwrap();
        assert_eq!(request.gist_id, "abc123");
        assert_eq!(request.chosen_files, vec!["app.js"]);
    }

    #[test]
    fn test_parse_no_files_defaults_to_empty_list() {
        let request = parse_script_url("https://example.com/embed.js?gist=abc123").unwrap();
        assert_eq!(request.gist_id, "abc123");
        assert!(request.chosen_files.is_empty());
    }

    #[test]
    fn test_last_gist_parameter_wins() {
        let request =
            parse_script_url("https://example.com/embed.js?gist=first&gist=second").unwrap();
        assert_eq!(request.gist_id, "second");
    }

    #[test]
    fn test_file_order_and_duplicates_preserved() {
        let request = parse_script_url(
            "https://example.com/embed.js?file=a.js&gist=abc&file=b.css&file=a.js",
        )
        .unwrap();
        assert_eq!(request.chosen_files, vec!["a.js", "b.css", "a.js"]);
    }

    #[test]
    fn test_unknown_parameters_ignored() {
        let request =
            parse_script_url("https://example.com/embed.js?v=2&gist=abc&cache=no").unwrap();
        assert_eq!(request.gist_id, "abc");
        assert!(request.chosen_files.is_empty());
    }

    #[test]
    fn test_values_are_url_decoded() {
        let request =
            parse_script_url("https://example.com/embed.js?gist=abc&file=my+file%2B1.js").unwrap();
        assert_eq!(request.chosen_files, vec!["my file+1.js"]);
    }

    #[test]
    fn test_fragment_is_stripped_before_scanning() {
        let request =
            parse_script_url("https://example.com/embed.js?gist=abc#file=ignored.js").unwrap();
        assert_eq!(request.gist_id, "abc");
        assert!(request.chosen_files.is_empty());
    }

    #[test]
    fn test_missing_gist_produces_example_url() {
        let err = parse_script_url("https://example.com/embed.js?file=a.js").unwrap_err();
        match err {
            EmbedError::MissingGistId { example_url } => {
                assert_eq!(
                    example_url,
                    "https://example.com/embed.js?gist=2fe0bfa42237139860f32972ddc608f1&file=readGist.js"
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_example_url_without_existing_query() {
        let err = parse_script_url("https://example.com/embed.js").unwrap_err();
        assert!(err
            .to_string()
            .contains("https://example.com/embed.js?gist=2fe0bfa42237139860f32972ddc608f1"));
    }
}
