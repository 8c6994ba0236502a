//! Process exit classification.
//!
//! A fixed, read-only table. The supervisor (`app::supervisor`) is the only
//! place that turns a class into a real process exit code.

use std::fmt;

/// Exit code reserved for "metrics subsystem failure".
pub const METRICS_FAILED_CODE: u8 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitClass {
    Success,
    Failure,
    InvalidConfig,
    /// Telemetry could not be encoded. Always fatal.
    MetricsFailed,
}

impl ExitClass {
    /// (class, code, description) for every class.
    pub const TABLE: [(ExitClass, u8, &'static str); 4] = [
        (ExitClass::Success, 0, "success"),
        (ExitClass::Failure, 1, "failure"),
        (ExitClass::InvalidConfig, 2, "invalid configuration"),
        (ExitClass::MetricsFailed, METRICS_FAILED_CODE, "metrics subsystem failure"),
    ];

    /// `TABLE` は variant の宣言順に並んでいる
    fn entry(self) -> (ExitClass, u8, &'static str) {
        Self::TABLE[self as usize]
    }

    pub fn code(self) -> u8 {
        self.entry().1
    }

    pub fn description(self) -> &'static str {
        self.entry().2
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|(_, c, _)| *c == code)
            .map(|(class, _, _)| *class)
    }
}

impl From<ExitClass> for std::process::ExitCode {
    fn from(class: ExitClass) -> Self {
        std::process::ExitCode::from(class.code())
    }
}

impl fmt::Display for ExitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (exit {})", self.description(), self.code())
    }
}
