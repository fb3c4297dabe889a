//! Source generators for helpers, actors and action traits
//!
//! Each generator is built from its inputs and renders PHP source with
//! `produce()`. Placeholders use the `{{name}}` form.

mod actions;
mod actor;
mod helper;
mod modules;

pub use actions::ActionsGenerator;
pub use actor::ActorGenerator;
pub use helper::HelperGenerator;
pub use modules::{ActionSpec, ModuleCatalogue, ModuleSpec};

/// Text with `{{name}}` placeholders
#[derive(Debug, Clone)]
pub struct Template {
    text: String,
}

impl Template {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Replace every `{{name}}` with `value`
    pub fn place(mut self, name: &str, value: &str) -> Self {
        self.text = self.text.replace(&format!("{{{{{name}}}}}"), value);
        self
    }

    pub fn produce(self) -> String {
        self.text
    }
}

/// `namespace Foo\Bar;` line, or nothing for the global namespace
pub(crate) fn namespace_statement(namespace: &str) -> String {
    if namespace.is_empty() {
        String::new()
    } else {
        format!("namespace {namespace};\n")
    }
}

/// Join namespace segments with `\`, skipping empty ones
pub(crate) fn join_namespace(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim_matches('\\'))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_places_all_occurrences() {
        let text = Template::new("{{name}} extends {{base}}; // {{name}}")
            .place("name", "UnitTester")
            .place("base", "Actor")
            .produce();
        assert_eq!(text, "UnitTester extends Actor; // UnitTester");
    }

    #[test]
    fn test_unplaced_placeholders_survive() {
        assert_eq!(Template::new("{{missing}}").produce(), "{{missing}}");
    }

    #[test]
    fn test_namespace_helpers() {
        assert_eq!(namespace_statement(""), "");
        assert_eq!(namespace_statement("App"), "namespace App;\n");
        assert_eq!(join_namespace(&["\\App\\", "", "Helper"]), "App\\Helper");
        assert_eq!(join_namespace(&["", "_generated"]), "_generated");
    }
}
