use std::path::PathBuf;

/// Where the program text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read a file from disk.
    File(PathBuf),
    /// Accept one TCP connection on the port and read until it closes.
    Socket(u16),
    /// Use the given text directly.
    Text(String),
}

/// Settings for one run of the interpreter.
///
/// # Example
/// ```
/// use matlang::config::{Config, InputSource};
///
/// let config = Config::new(InputSource::Text("1 + 1".into())).with_ast_dump(true);
///
/// assert!(config.dump_ast);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The program source.
    pub input:    InputSource,
    /// Print the parsed tree before evaluating it.
    pub dump_ast: bool,
}

impl Config {
    /// Creates a configuration for `input` with the tree dump disabled.
    #[must_use]
    pub const fn new(input: InputSource) -> Self {
        Self { input,
               dump_ast: false }
    }

    /// Enables or disables printing the parsed tree.
    #[must_use]
    pub const fn with_ast_dump(mut self, dump_ast: bool) -> Self {
        self.dump_ast = dump_ast;
        self
    }
}
