//! Supervisor - エラーから終了コードへの対応付け
//!
//! Nothing below `main` ever exits the process. Errors bubble up as
//! `MetricsError`, and this module is where they become an exit code.

use std::process::ExitCode;

use crate::domain::{ExitClass, MetricsError};

/// Exit class of a finished run.
pub fn exit_class_of<T>(result: &Result<T, MetricsError>) -> ExitClass {
    match result {
        Ok(_) => ExitClass::Success,
        Err(e) => e.exit_class(),
    }
}

/// Logs the outcome of a run and returns the process exit code for it.
///
/// # 使用例
/// ```ignore
/// fn main() -> ExitCode {
///     supervisor::report(run())
/// }
/// ```
pub fn report<T>(result: Result<T, MetricsError>) -> ExitCode {
    let class = exit_class_of(&result);
    if let Err(e) = &result {
        if e.is_fatal() {
            tracing::error!(
                error = %e,
                label = e.as_label(),
                exit_code = class.code(),
                "fatal metrics failure; terminating"
            );
        } else {
            tracing::warn!(
                error = %e,
                label = e.as_label(),
                exit_code = class.code(),
                "run failed"
            );
        }
    }
    ExitCode::from(class)
}
