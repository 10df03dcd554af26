pub use crate::checks::{
    deep_equal, greater_than, greater_than_or_equal, less_than, less_than_or_equal, match_regexp,
    not_deep_equal, not_reflect_nil, numeric_equal, numeric_not_equal, reflect_nil, Check,
    CheckResult,
};
pub use crate::failure::Failure;
pub use crate::format::{format_type, indented_type, set_indent, set_type_formatter, Formatter};
pub use crate::runner::{Block, Runner, RunnerConfig, Test, TestResult};
pub use crate::subject::Subject;
pub use crate::value::{Kind, Value};

pub mod checks;
pub mod failure;
pub mod format;
pub mod runner;
pub mod subject;
pub mod value;
