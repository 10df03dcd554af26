//! Hierarchical execution and reporting of assertion blocks.
//!
//! The assertion core produces named runnable blocks; this module is the
//! executor that runs them. A [`Runner`] collects path-qualified results
//! from leaves registered with [`run`](Runner::run), nests scopes with
//! [`group`](Runner::group), and reports with colored output and summary
//! counts. Blocks report through the [`Test`] handle they receive; a
//! failing block never aborts the run.

use std::fmt;

// =============================================================================
// CORE TYPES
// =============================================================================

/// A named runnable assertion block, as produced by the value wrapper.
pub type Block = Box<dyn Fn(&mut Test) + Send + Sync>;

/// The reporting handle passed into a running block.
#[derive(Debug, Default)]
pub struct Test {
    failures: Vec<String>,
}

impl Test {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure. Execution continues; reporting never aborts.
    pub fn fail(&mut self, msg: impl fmt::Display) {
        self.failures.push(msg.to_string());
    }

    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// The outcome of executing a single named block.
#[derive(Debug, Clone)]
pub enum TestResult {
    Pass {
        name: String,
    },
    Fail {
        name: String,
        message: String,
    },
    Skipped {
        name: String,
        reason: String,
    },
}

/// Configuration for block execution and reporting.
pub struct RunnerConfig {
    pub use_colors: bool,
    /// Case-insensitive substring filter; non-matching leaves are skipped.
    pub filter: Option<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stderr),
            filter: None,
        }
    }
}

// Color constants for terminal output
const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";

impl RunnerConfig {
    /// Apply color formatting to text if colors are enabled.
    pub fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{}{}{}", color, text, RESET)
        } else {
            text.to_string()
        }
    }
}

// =============================================================================
// EXECUTION
// =============================================================================

/// Executes named assertion blocks and accumulates their results.
#[derive(Default)]
pub struct Runner {
    config: RunnerConfig,
    prefix: Vec<String>,
    results: Vec<TestResult>,
}

impl Runner {
    pub fn new() -> Self {
        Self::with_config(RunnerConfig::default())
    }

    pub fn with_config(config: RunnerConfig) -> Self {
        Self {
            config,
            prefix: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Executes a named leaf block and records its outcome.
    pub fn run(&mut self, name: &str, block: impl FnOnce(&mut Test)) {
        let name = self.qualified(name);
        if let Some(reason) = self.skip_reason(&name) {
            self.results.push(TestResult::Skipped { name, reason });
            return;
        }
        let mut test = Test::new();
        block(&mut test);
        if test.failed() {
            self.results.push(TestResult::Fail {
                name,
                message: test.failures.join("\n"),
            });
        } else {
            self.results.push(TestResult::Pass { name });
        }
    }

    /// Opens a named scope; blocks registered inside it are qualified with
    /// the scope's name.
    pub fn group(&mut self, name: &str, f: impl FnOnce(&mut Runner)) {
        self.prefix.push(name.to_string());
        f(self);
        self.prefix.pop();
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    fn qualified(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            return name.to_string();
        }
        format!("{}/{}", self.prefix.join("/"), name)
    }

    fn skip_reason(&self, qualified: &str) -> Option<String> {
        let filter = self.config.filter.as_deref()?;
        if qualified.to_lowercase().contains(&filter.to_lowercase()) {
            return None;
        }
        Some(format!("filtered out by substring: {}", filter))
    }

    // =========================================================================
    // REPORTING AND OUTPUT
    // =========================================================================

    /// Partitions accumulated results into (passed, failed, skipped) counts.
    pub fn counts(&self) -> (usize, usize, usize) {
        let passed = self
            .results
            .iter()
            .filter(|r| matches!(r, TestResult::Pass { .. }))
            .count();
        let failed = self
            .results
            .iter()
            .filter(|r| matches!(r, TestResult::Fail { .. }))
            .count();
        let skipped = self
            .results
            .iter()
            .filter(|r| matches!(r, TestResult::Skipped { .. }))
            .count();
        (passed, failed, skipped)
    }

    /// Prints all results with colored output and a summary line.
    pub fn report(&self) {
        for r in &self.results {
            match r {
                TestResult::Pass { name } => {
                    println!("{}: {}", self.config.colorize("PASS", GREEN), name)
                }
                TestResult::Fail { name, message } => {
                    eprintln!("{}: {}", self.config.colorize("FAIL", RED), name);
                    for line in message.lines() {
                        eprintln!("    {}", line);
                    }
                }
                TestResult::Skipped { name, reason } => {
                    println!(
                        "{}: {} ({})",
                        self.config.colorize("SKIP", YELLOW),
                        name,
                        reason
                    )
                }
            }
        }

        let (passed, failed, skipped) = self.counts();
        println!(
            "\nblock summary: total {}, {} {}, {} {}, {} {}",
            self.results.len(),
            self.config.colorize("passed", GREEN),
            passed,
            self.config.colorize("failed", RED),
            failed,
            self.config.colorize("skipped", YELLOW),
            skipped,
        );
    }
}
