//! Parsing of the free-form app binary list
//!
//! Release pipelines hand the app list over as a single human-edited string.
//! Three separator conventions show up in the wild, often mixed in one value:
//! real newlines, the two-character escape `\n` (a shell that did not expand
//! it), and pipes. This module normalizes any combination of those into an
//! ordered list of trimmed, non-empty path tokens.

pub mod selector;

pub use selector::{Selection, select_apps};

/// Split every fragment further on `sep`, keeping left-to-right order.
fn split_elements(fragments: Vec<String>, sep: &str) -> Vec<String> {
    fragments
        .iter()
        .flat_map(|fragment| fragment.split(sep).map(str::to_string))
        .collect()
}

/// Parse a raw app list string into ordered, trimmed, non-empty path tokens.
///
/// Never fails; garbage input simply yields fewer (or zero) tokens.
pub fn parse_app_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut fragments = vec![trimmed.to_string()];
    for sep in ["\n", r"\n", "|"] {
        fragments = split_elements(fragments, sep);
    }

    fragments
        .iter()
        .map(|fragment| fragment.trim())
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_app_list("").is_empty());
        assert!(parse_app_list("   ").is_empty());
    }

    #[test]
    fn test_parse_newline_separated() {
        assert_eq!(
            parse_app_list("app.apk\napp.aab\n \n"),
            vec!["app.apk", "app.aab"]
        );
    }

    #[test]
    fn test_parse_pipe_separated() {
        assert_eq!(
            parse_app_list("|app.apk|app.aab|"),
            vec!["app.apk", "app.aab"]
        );
    }

    #[test]
    fn test_parse_mixed_separators() {
        assert_eq!(
            parse_app_list("\napp1.apk|app2.apk\napp.aab|"),
            vec!["app1.apk", "app2.apk", "app.aab"]
        );
    }

    #[test]
    fn test_parse_escaped_newline_characters() {
        // A literal backslash-n, as produced by a shell that did not expand it
        assert_eq!(
            parse_app_list(r"/deploy/app-signed.aab\n/deploy/app.aab"),
            vec!["/deploy/app-signed.aab", "/deploy/app.aab"]
        );
    }

    #[test]
    fn test_parse_real_newlines() {
        assert_eq!(
            parse_app_list("/deploy/app-signed.aab\n/deploy/app.aab"),
            vec!["/deploy/app-signed.aab", "/deploy/app.aab"]
        );
    }

    #[test]
    fn test_parse_trims_fragments() {
        assert_eq!(
            parse_app_list("  app.apk  |  app.aab  "),
            vec!["app.apk", "app.aab"]
        );
    }

    #[test]
    fn test_parse_single_token() {
        assert_eq!(parse_app_list("app.aab"), vec!["app.aab"]);
    }
}
