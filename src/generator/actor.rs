use anyhow::Result;

use super::{join_namespace, namespace_statement, Template};
use crate::error::ScaffoldError;
use crate::suite::SuiteSettings;

const ACTOR_TEMPLATE: &str = r#"<?php
{{namespace}}
/**
 * Inherited Methods
{{inherited}}
 *
 * @SuppressWarnings(PHPMD)
*/
class {{actor}} extends \Codeception\Actor
{
    use _generated\{{actor}}Actions;

    /**
     * Define custom actions here
     */
}
"#;

/// Methods every actor inherits from `\Codeception\Actor`
const INHERITED_METHODS: &[(&str, &str)] = &[
    ("wantToTest", "$text"),
    ("wantTo", "$text"),
    ("execute", "$callable"),
    ("expectTo", "$prediction"),
    ("expect", "$prediction"),
    ("amGoingTo", "$argumentation"),
    ("am", "$role"),
    ("lookForwardTo", "$achieveValue"),
    ("comment", "$description"),
    ("pause", "$vars = []"),
];

/// Generates the actor class of a suite
pub struct ActorGenerator {
    actor: String,
    namespace: String,
}

impl ActorGenerator {
    pub fn new(settings: &SuiteSettings) -> Result<Self> {
        let class = settings
            .actor_class()
            .ok_or_else(|| ScaffoldError::InvalidSuiteConfig("actor is not set".to_string()))?;

        // `Acme\UnitTester` puts the actor in a sub-namespace of the suite namespace
        let (class_namespace, actor) = match class.rsplit_once('\\') {
            Some((ns, name)) => (ns, name),
            None => ("", class),
        };

        Ok(Self {
            actor: actor.to_string(),
            namespace: join_namespace(&[settings.namespace(), class_namespace]),
        })
    }

    /// Short class name of the actor
    pub fn actor_name(&self) -> &str {
        &self.actor
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn produce(&self) -> String {
        let inherited = INHERITED_METHODS
            .iter()
            .map(|(name, params)| format!(" * @method void {name}({params})"))
            .collect::<Vec<_>>()
            .join("\n");

        Template::new(ACTOR_TEMPLATE)
            .place("namespace", &namespace_statement(&self.namespace))
            .place("inherited", &inherited)
            .place("actor", &self.actor)
            .produce()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suite::{default_suite_settings, merge_configs};

    fn settings(yaml: &str) -> SuiteSettings {
        let overlay: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        SuiteSettings::from_config(&merge_configs(&default_suite_settings(), &overlay)).unwrap()
    }

    #[test]
    fn test_actor_in_global_namespace() {
        let gen = ActorGenerator::new(&settings("actor: UnitTester\n")).unwrap();
        let source = gen.produce();

        assert_eq!(gen.actor_name(), "UnitTester");
        assert!(source.starts_with("<?php\n\n/**"));
        assert!(source.contains("class UnitTester extends \\Codeception\\Actor"));
        assert!(source.contains("use _generated\\UnitTesterActions;"));
        assert!(source.contains(" * @method void wantToTest($text)"));
    }

    #[test]
    fn test_actor_namespace_from_settings_and_class() {
        let gen =
            ActorGenerator::new(&settings("actor: Acme\\Tester\nnamespace: App\n")).unwrap();
        assert_eq!(gen.actor_name(), "Tester");
        assert_eq!(gen.namespace(), "App\\Acme");
        assert!(gen.produce().contains("namespace App\\Acme;"));
    }

    #[test]
    fn test_class_name_fallback() {
        let gen = ActorGenerator::new(&settings("class_name: Tester\n")).unwrap();
        assert_eq!(gen.actor_name(), "Tester");
    }

    #[test]
    fn test_missing_actor() {
        assert!(ActorGenerator::new(&settings("path: .\n")).is_err());
    }
}
