//! Interpretation of `--version` output.

use super::version::CapturedOutput;
use crate::VersionCheckResult;

/// Pick the text to inspect: stdout if it has content, otherwise stderr.
///
/// Python 2 prints its banner to stderr, so both are consulted. The chosen
/// text is returned trimmed; `None` if both streams are blank.
pub(crate) fn select_output(output: &CapturedOutput) -> Option<&str> {
    [output.stdout.as_str(), output.stderr.as_str()]
        .into_iter()
        .map(str::trim)
        .find(|text| !text.is_empty())
}

/// Extract a version as the last space-separated token of `text`.
///
/// Tuned to the `Python X.Y.Z` banner. Other formats degrade to whatever
/// the last token happens to be, possibly an empty string.
///
/// # Example
///
/// ```rust
/// use python_locator::last_token_version;
///
/// assert_eq!(last_token_version("Python 3.11.4"), "3.11.4");
/// assert_eq!(last_token_version("Python 3.12.0 "), "");
/// ```
pub fn last_token_version(text: &str) -> String {
    text.rsplit(' ').next().unwrap_or_default().trim().to_string()
}

/// Classify captured output as Python or not.
pub(crate) fn interpret_output(output: &CapturedOutput) -> VersionCheckResult {
    let Some(text) = select_output(output) else {
        return VersionCheckResult::no_output();
    };

    if text.to_lowercase().contains("python") {
        VersionCheckResult::python(text.to_string(), last_token_version(text))
    } else {
        VersionCheckResult::not_python(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python3_banner() {
        let result = interpret_output(&CapturedOutput::new("Python 3.11.4\n", ""));
        assert!(result.looks_like_python());
        assert_eq!(result.version(), Some("3.11.4"));
        assert_eq!(result.raw_output(), Some("Python 3.11.4"));
    }

    #[test]
    fn test_python2_banner_on_stderr() {
        let result = interpret_output(&CapturedOutput::new("", "Python 2.7.18\n"));
        assert!(result.looks_like_python());
        assert_eq!(result.version(), Some("2.7.18"));
    }

    #[test]
    fn test_whitespace_stdout_falls_back_to_stderr() {
        let result = interpret_output(&CapturedOutput::new("  \n", "Python 3.8.10"));
        assert_eq!(result.raw_output(), Some("Python 3.8.10"));
        assert_eq!(result.version(), Some("3.8.10"));
    }

    #[test]
    fn test_stdout_wins_over_stderr() {
        let result = interpret_output(&CapturedOutput::new("Python 3.10.0", "warning"));
        assert_eq!(result.raw_output(), Some("Python 3.10.0"));
    }

    #[test]
    fn test_case_insensitive_match() {
        let result = interpret_output(&CapturedOutput::new("PYTHON 3.12.1", ""));
        assert!(result.looks_like_python());
        assert_eq!(result.version(), Some("3.12.1"));
    }

    #[test]
    fn test_unrelated_output() {
        let result = interpret_output(&CapturedOutput::new("hello world", ""));
        assert!(!result.looks_like_python());
        assert_eq!(result.raw_output(), Some("hello world"));
        assert!(result.version().is_none());
    }

    #[test]
    fn test_no_output() {
        let result = interpret_output(&CapturedOutput::new("", " \n\t"));
        assert!(!result.looks_like_python());
        assert!(result.raw_output().is_none());
        assert!(result.version().is_none());
    }

    #[test]
    fn test_malformed_banner_degrades() {
        let result = interpret_output(&CapturedOutput::new("python", ""));
        assert!(result.looks_like_python());
        assert_eq!(result.version(), Some("python"));

        let result = interpret_output(&CapturedOutput::new("Python 3.13.0 (main, Oct 7)", ""));
        assert_eq!(result.version(), Some("7)"));
    }

    #[test]
    fn test_last_token_version() {
        assert_eq!(last_token_version("Python 3.11.4"), "3.11.4");
        assert_eq!(last_token_version("3.11.4"), "3.11.4");
        assert_eq!(last_token_version("Python 3.9.1\r\n"), "3.9.1");
        assert_eq!(last_token_version(""), "");
    }
}
