//! Detection implementation submodule.
//!
//! - `path_finder`: directory probing and `PATH` scanning
//! - `fallback`: per-platform install locations and the registry marker
//! - `version`: launching a candidate with `--version`
//! - `parser`: classifying the captured banner

mod fallback;
mod parser;
mod path_finder;
mod version;

pub(crate) use fallback::search as search_fallback;
pub use parser::last_token_version;
pub(crate) use parser::interpret_output;
pub(crate) use path_finder::find_in_path_variable;
pub use version::{CapturedOutput, ProcessRunner, TokioRunner};
