use anyhow::Result;

use super::{namespace_line, yaml_scalar};
use crate::console::{Answer, Style};
use crate::generator::Template;
use crate::scaffold::{InitTemplate, Scaffold};
use crate::suite::suite_section;

const CONFIG_TEMPLATE: &str = r#"suites:
    unit:
        path: .
{{tester}}
settings:
    shuffle: true
    lint: true
paths:
    tests: {{tests}}
    output: {{output}}
    support: {{support}}
    data: {{data}}
"#;

const TESTER_TEMPLATE: &str = r#"        actor: {{actor}}
        modules:
            enabled:
                # add more modules here
                - Asserts"#;

/// Unit testing only, with an optional actor
#[derive(Debug, Default)]
pub struct Unit;

impl InitTemplate for Unit {
    fn name(&self) -> &'static str {
        "unit"
    }

    fn setup(&mut self, scaffold: &mut Scaffold<'_>) -> Result<()> {
        scaffold.check_installed(".")?;

        scaffold.say_info("This will install Codeception for unit testing only")?;
        scaffold.say("")?;

        let dir = scaffold.ask("Where tests will be stored?", "tests")?;

        if scaffold.namespace().is_empty() {
            let namespace = scaffold.ask(
                "Enter a default namespace for tests (or skip this step)",
                Answer::Text(None),
            )?;
            scaffold.set_namespace(&namespace);
        }

        scaffold.say("Codeception provides additional actions that can be used in unit tests")?;
        scaffold.say("Do you prefer to keep your tests clean or use actions?")?;
        scaffold.say("Examples:")?;
        scaffold.say_styled(Style::Highlight, " With actions: $this->tester->assertTrue($value)")?;
        scaffold.say_styled(Style::Highlight, " Without actions: $this->assertTrue($value)")?;
        scaffold.say("")?;
        let use_actions = scaffold.ask("Would you like to use actions?", ["no", "yes"])? == "yes";

        let actor = format!("Unit{}", scaffold.actor_suffix());
        let output = format!("{dir}/_output");
        let support = format!("{dir}/_support");

        let tester = if use_actions {
            Template::new(TESTER_TEMPLATE)
                .place("actor", &yaml_scalar(&actor)?)
                .produce()
        } else {
            String::new()
        };
        let config = format!(
            "{}{}",
            namespace_line(scaffold.namespace())?,
            Template::new(CONFIG_TEMPLATE)
                .place("tester", &tester)
                .place("tests", &yaml_scalar(&dir)?)
                .place("output", &yaml_scalar(&output)?)
                .place("support", &yaml_scalar(&support)?)
                .place("data", &yaml_scalar(&dir)?)
                .produce()
        );

        scaffold.create_file("codeception.yml", &config)?;

        if use_actions {
            scaffold.create_actor(&actor, &support, suite_section(&config, "unit")?)?;
        }

        scaffold.create_empty_directory(&output)?;
        scaffold.git_ignore(&output)?;

        scaffold.say_success("Created test configuration in codeception.yml")?;
        scaffold.say_success(&format!("Created unit suite in {dir}"))?;
        scaffold.say("")?;
        scaffold.say_styled(Style::Emphasis, "Next steps:")?;
        scaffold.say("Create the first test using: codecept g:test unit MyTest")?;
        scaffold.say("Run tests with: codecept run")?;
        Ok(())
    }
}
