use super::{join_namespace, Template};

const HELPER_TEMPLATE: &str = r#"<?php
namespace {{namespace}};

// here you can define custom actions
// all public methods declared in helper class will be available in $I

class {{name}} extends \Codeception\Module
{

}
"#;

/// Generates a helper module class living in `<namespace>\Helper`
pub struct HelperGenerator {
    name: String,
    namespace: String,
}

impl HelperGenerator {
    pub fn new(name: &str, namespace: &str) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
        }
    }

    /// Fully qualified class name, with a leading `\`
    pub fn class_name(&self) -> String {
        format!("\\{}", join_namespace(&[&self.namespace, "Helper", &self.name]))
    }

    pub fn produce(&self) -> String {
        Template::new(HELPER_TEMPLATE)
            .place("namespace", &join_namespace(&[&self.namespace, "Helper"]))
            .place("name", &self.name)
            .produce()
    }
}
