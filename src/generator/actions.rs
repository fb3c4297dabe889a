use anyhow::Result;
use sha2::{Digest, Sha256};
use std::collections::HashSet;

use super::modules::{ActionSpec, ModuleCatalogue};
use super::{join_namespace, ActorGenerator, Template};
use crate::error::ScaffoldError;
use crate::suite::{SuiteSettings, CONDITIONAL_ASSERTION};

const ACTIONS_TEMPLATE: &str = r#"<?php  //[STAMP] {{hash}}
namespace {{namespace}};

// This class was automatically generated by build task
// You should not change it manually as it will be overwritten on next build
// @codingStandardsIgnoreFile

trait {{actor}}Actions
{
    /**
     * @return \Codeception\Scenario
     */
    abstract protected function getScenario();

{{methods}}
}
"#;

const METHOD_TEMPLATE: &str = r#"
    /**
     * [!] Method is generated. Documentation taken from corresponding module.
     *
     * {{doc}}
     * @see {{module}}::{{action}}()
     */
    public function {{method}}({{params}}) {
        return $this->getScenario()->runStep(new \Codeception\Step\{{step}}('{{action}}', func_get_args()));
    }
"#;

const CONDITIONAL_DOC: &str = "[!] Conditional Assertion: Test won't be stopped on fail";

/// Generates the `<Actor>Actions` trait from a suite's enabled modules
pub struct ActionsGenerator {
    actor: String,
    namespace: String,
    conditional: bool,
    actions: Vec<(String, ActionSpec)>,
}

impl ActionsGenerator {
    /// Fails with `ModuleNotFound` when an enabled module is unknown to the catalogue
    pub fn new(settings: &SuiteSettings, catalogue: &ModuleCatalogue) -> Result<Self> {
        let actor = ActorGenerator::new(settings)?;

        let mut seen = HashSet::new();
        let mut actions = Vec::new();
        for name in settings.enabled_modules()? {
            let module = catalogue
                .resolve(&name)
                .ok_or_else(|| ScaffoldError::ModuleNotFound(name.clone()))?;
            for action in &module.actions {
                if seen.insert(action.name.clone()) {
                    actions.push((module.class.clone(), action.clone()));
                } else {
                    tracing::debug!(action = %action.name, module = %module.name, "action already provided by an earlier module");
                }
            }
        }

        Ok(Self {
            actor: actor.actor_name().to_string(),
            namespace: join_namespace(&[actor.namespace(), "_generated"]),
            conditional: settings.has_step_decorator(CONDITIONAL_ASSERTION),
            actions,
        })
    }

    pub fn actor_name(&self) -> &str {
        &self.actor
    }

    /// Number of generated methods, conditional variants included
    #[cfg(test)]
    fn method_count(&self) -> usize {
        self.actions
            .iter()
            .map(|(_, action)| {
                if self.conditional && conditional_name(&action.name).is_some() {
                    2
                } else {
                    1
                }
            })
            .sum()
    }

    pub fn produce(&self) -> String {
        let mut methods = String::new();
        for (module, action) in &self.actions {
            methods.push_str(&render_method(module, action, &action.name, step_for(&action.name), &action.doc));
            if self.conditional {
                if let Some(name) = conditional_name(&action.name) {
                    let doc = format!("{CONDITIONAL_DOC}\n     * {}", action.doc);
                    methods.push_str(&render_method(module, action, &name, "ConditionalAssertion", &doc));
                }
            }
        }

        let hash = Sha256::digest(format!("{}{}", self.actor, methods).as_bytes());

        Template::new(ACTIONS_TEMPLATE)
            .place("hash", &format!("{hash:x}"))
            .place("namespace", &self.namespace)
            .place("actor", &self.actor)
            .place("methods", methods.trim_end())
            .produce()
    }
}

fn render_method(module: &str, action: &ActionSpec, method: &str, step: &str, doc: &str) -> String {
    Template::new(METHOD_TEMPLATE)
        .place("doc", doc)
        .place("module", module)
        .place("action", &action.name)
        .place("method", method)
        .place("params", &action.params)
        .place("step", step)
        .produce()
}

/// Assertions are reported differently from plain actions
fn step_for(action: &str) -> &'static str {
    if ["see", "dontSee", "assert"].iter().any(|p| action.starts_with(p)) {
        "Assertion"
    } else {
        "Action"
    }
}

/// `seeX` -> `canSeeX`, `dontSeeX` -> `cantSeeX`
fn conditional_name(action: &str) -> Option<String> {
    if let Some(rest) = action.strip_prefix("dontSee") {
        Some(format!("cantSee{rest}"))
    } else {
        action.strip_prefix("see").map(|rest| format!("canSee{rest}"))
    }
}
