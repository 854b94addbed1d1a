// crates/daylog-core/src/command.rs - Structured external-command templates
//
// Edit, read, and search commands are configured as template strings
// ("code --wait {}", "grep -n"). They are parsed once into an argument
// vector and never handed to a shell, so paths with spaces or shell
// metacharacters cannot change the invocation.
//
// TEMPLATE CONTRACT:
// - The template is split on whitespace into program + arguments. There is
//   no quoting syntax inside templates; per-word placeholder substitution
//   makes it unnecessary.
// - If any word contains the placeholder `{}`, every occurrence of `{}` in
//   that word is replaced with the target path.
// - If no word contains the placeholder, the target path is appended as a
//   final argument.

/// Placeholder token substituted with the target path.
pub const PLACEHOLDER: &str = "{}";

/// A parsed external-command template: program name plus argument words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    argv: Vec<String>,
}

impl CommandTemplate {
    /// Parse a template string into its argument vector.
    ///
    /// Parsing never fails; an all-whitespace template yields an empty
    /// vector, which configuration validation rejects.
    pub fn parse(template: &str) -> Self {
        Self {
            argv: template.split_whitespace().map(String::from).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    /// Whether any word of the template carries the `{}` placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.argv.iter().any(|word| word.contains(PLACEHOLDER))
    }

    /// The raw template words, without any target applied.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// Build the full argument vector for a target path.
    ///
    /// Placeholder words get the target substituted in place; templates
    /// without a placeholder get the target appended as the last argument.
    pub fn to_argv(&self, target: &str) -> Vec<String> {
        if self.has_placeholder() {
            self.argv
                .iter()
                .map(|word| word.replace(PLACEHOLDER, target))
                .collect()
        } else {
            let mut argv = self.argv.clone();
            argv.push(target.to_string());
            argv
        }
    }
}

impl std::fmt::Display for CommandTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.argv.join(" "))
    }
}
