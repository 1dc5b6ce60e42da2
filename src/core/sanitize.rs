use regex::Regex;
use std::sync::LazyLock;

pub const MAX_NAME_CHARS: usize = 100;

static INVALID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[<>:"/\\|?*]"#).expect("valid regex"));
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));
static HYPHEN_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").expect("valid regex"));

/// Maps any string to something usable as a single path segment.
///
/// Reserved characters become `-`, whitespace runs become one space, hyphen
/// runs collapse, the result is trimmed and cut to [`MAX_NAME_CHARS`]
/// characters. An empty result is returned as-is and distinct inputs may
/// map to the same name.
pub fn sanitize_filename(name: &str) -> String {
    let name = INVALID_CHARS.replace_all(name, "-");
    let name = WHITESPACE_RUNS.replace_all(&name, " ");
    let name = HYPHEN_RUNS.replace_all(&name, "-");
    let truncated: String = name.trim().chars().take(MAX_NAME_CHARS).collect();
    // the cut can land right after a space
    truncated.trim_end().to_string()
}
