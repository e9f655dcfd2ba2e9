/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Declared for hosts that expect it. No scanning rule reads an escape
    /// character yet, so the flag changes nothing.
    pub allow_code_escaping: bool,
    /// Reject scripts with unclosed argument groups or unnamed directives
    /// instead of building a best-effort tree.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            allow_code_escaping: true,
            strict: false,
        }
    }
}
