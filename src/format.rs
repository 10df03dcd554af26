//! Pluggable rendering of values for failure output.
//!
//! Failure fields embed a rendering of the offending values at construction
//! time, produced here. The process-wide configuration (a replaceable render
//! function and an indent string) can be overridden once during test-package
//! initialization; scoped [`Formatter`] instances exist so the rendering
//! rules stay testable without touching the shared state.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use once_cell::sync::Lazy;

use crate::value::Value;

/// A replacement render function for [`Formatter::format_type`].
pub type FormatFn = Box<dyn Fn(&Value) -> String + Send + Sync>;

/// Rendering configuration: an optional custom render function and the
/// indent used when nesting a body under its type-name header.
pub struct Formatter {
    custom: Option<FormatFn>,
    indent: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            custom: None,
            // Four spaces, matching the default test-runner output indent.
            indent: "    ".to_string(),
        }
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the render function used by [`format_type`](Self::format_type).
    pub fn set_type_formatter(&mut self, f: impl Fn(&Value) -> String + Send + Sync + 'static) {
        self.custom = Some(Box::new(f));
    }

    /// Replaces the indent prefix used when nesting rendered blocks.
    pub fn set_indent(&mut self, s: impl Into<String>) {
        self.indent = s.into();
    }

    /// Renders a value with the configured function, or the default rules.
    pub fn format_type(&self, v: &Value) -> String {
        match &self.custom {
            Some(f) => f(v),
            None => default_type_format(v),
        }
    }

    /// Frames a value for embedding inside a failure field: the type name
    /// on its own line, the rendered body indented under it.
    ///
    /// The untyped nil has no type name to head the block and renders as
    /// the literal `untyped nil`. Error-capability values use their message
    /// as the body so nested error causes print legibly.
    pub fn indented_type(&self, v: &Value) -> String {
        match v {
            Value::Nil => "untyped nil".to_string(),
            Value::Error(msg) => format!("{}\n{}", v.type_name(), self.indent_lines(msg)),
            _ => format!(
                "{}\n{}",
                v.type_name(),
                self.indent_lines(&self.format_type(v))
            ),
        }
    }

    /// Prefixes every line of `s` with the configured indent.
    pub fn indent_lines(&self, s: &str) -> String {
        let mut out = String::with_capacity(s.len() + self.indent.len());
        out.push_str(&self.indent);
        out.push_str(&s.replace('\n', &format!("\n{}", self.indent)));
        out
    }
}

/// The default rendering rules, in priority order.
pub fn default_type_format(v: &Value) -> String {
    match v {
        Value::Nil => "nil".to_string(),
        Value::Error(msg) => msg.clone(),
        Value::Bytes(b) => format!("`{}`", String::from_utf8_lossy(b)),
        Value::Str(s) => quote_string(s),
        Value::Ref(None) => "nil".to_string(),
        Value::Ref(Some(inner)) => default_type_format(inner),
        _ => v.to_string(),
    }
}

fn quote_string(s: &str) -> String {
    if s.contains('\n') {
        // Backticks keep multi-line content readable without escape noise.
        format!("`{}`", s)
    } else {
        format!("{:?}", s)
    }
}

// ============================================================================
// PROCESS-WIDE CONFIGURATION
// ============================================================================

static FMT_CFG: Lazy<RwLock<Formatter>> = Lazy::new(|| RwLock::new(Formatter::default()));

fn read_cfg() -> RwLockReadGuard<'static, Formatter> {
    FMT_CFG.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_cfg() -> RwLockWriteGuard<'static, Formatter> {
    FMT_CFG.write().unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the render function used by [`format_type`]. Not safe to call
/// concurrently with running checks; call once during initialization.
pub fn set_type_formatter(f: impl Fn(&Value) -> String + Send + Sync + 'static) {
    write_cfg().set_type_formatter(f);
}

/// Sets the indent used in failure and type formatting. The default is four
/// spaces. Same safety contract as [`set_type_formatter`].
pub fn set_indent(s: impl Into<String>) {
    write_cfg().set_indent(s);
}

/// Renders a value using the process-wide configuration.
pub fn format_type(v: &Value) -> String {
    read_cfg().format_type(v)
}

/// Frames a value for a failure field using the process-wide configuration.
pub fn indented_type(v: &Value) -> String {
    read_cfg().indented_type(v)
}

/// Indents every line of `s` using the process-wide configuration.
pub fn indent_lines(s: &str) -> String {
    read_cfg().indent_lines(s)
}
