//! Result printer
//!
//! Emits the execution result as plain text: trimmed, followed by a
//! single line break. No formatting, truncation, or structured encoding.

use crewrun_domain::ExecutionResult;

/// Render the result text exactly as it is printed.
pub fn format_result(result: &ExecutionResult) -> String {
    format!("{}\n", result.trimmed_text())
}

/// Write the result to standard output.
pub fn print_result(result: &ExecutionResult) {
    print!("{}", format_result(result));
}
