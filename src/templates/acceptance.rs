use anyhow::Result;

use super::{namespace_line, yaml_scalar};
use crate::console::Style;
use crate::generator::{namespace_statement, Template};
use crate::scaffold::{InitTemplate, Scaffold};
use crate::suite::suite_section;

const CONFIG_TEMPLATE: &str = r#"suites:
    acceptance:
        actor: {{actor}}
        path: .
        modules:
            enabled:
                - WebDriver:
                    url: {{url}}
                    browser: {{browser}}
                - {{helper}}
        step_decorators:
            - Codeception\Step\ConditionalAssertion
extensions:
    enabled: [Codeception\Extension\RunFailed]
params:
    - env
gherkin: []
paths:
    tests: {{tests}}
    output: {{output}}
    data: {{data}}
    support: {{support}}
settings:
    shuffle: false
    lint: true
"#;

const FIRST_TEST: &str = r#"<?php
{{namespace}}
class LoginCest
{
    public function _before({{actor}} $I)
    {
        $I->amOnPage('/');
    }

    public function loginSuccessfully({{actor}} $I)
    {
        // write a positive login test
    }

    public function loginWithInvalidPassword({{actor}} $I)
    {
        // write a negative login test
    }
}
"#;

/// Browser acceptance testing with WebDriver
#[derive(Debug, Default)]
pub struct Acceptance;

impl InitTemplate for Acceptance {
    fn name(&self) -> &'static str {
        "acceptance"
    }

    fn setup(&mut self, scaffold: &mut Scaffold<'_>) -> Result<()> {
        scaffold.check_installed(".")?;

        scaffold.say_info("This will install Codeception for acceptance testing")?;
        scaffold.say("It is recommended to use Selenium Server with WebDriver for running browser tests")?;
        scaffold.say("")?;

        let dir = scaffold.ask("Where tests will be stored?", "tests")?;
        let browser = scaffold.ask("Select a browser for testing", ["chrome", "firefox"])?;
        let driver = if browser == "chrome" { "ChromeDriver" } else { "GeckoDriver" };
        scaffold.say_info(&format!(
            "Ensure that you have Selenium Server and {driver} installed before running tests"
        ))?;
        let url = scaffold.ask("Start url for tests", "http://localhost")?;

        let output = format!("{dir}/_output");
        let data = format!("{dir}/_data");
        let support = format!("{dir}/_support");
        let generated = format!("{support}/_generated");
        scaffold.create_empty_directory(&output)?;
        scaffold.create_empty_directory(&data)?;
        scaffold.create_directory_for(&generated, "")?;
        scaffold.git_ignore(&output)?;
        scaffold.git_ignore(&generated)?;

        let actor = format!("Acceptance{}", scaffold.actor_suffix());
        let config = format!(
            "{}{}",
            namespace_line(scaffold.namespace())?,
            Template::new(CONFIG_TEMPLATE)
                .place("actor", &yaml_scalar(&actor)?)
                .place("url", &yaml_scalar(&url)?)
                .place("browser", &yaml_scalar(&browser)?)
                .place("helper", &yaml_scalar(&scaffold.helper_class("Acceptance"))?)
                .place("tests", &yaml_scalar(&dir)?)
                .place("output", &yaml_scalar(&output)?)
                .place("data", &yaml_scalar(&data)?)
                .place("support", &yaml_scalar(&support)?)
                .produce()
        );
        scaffold.create_file("codeception.yml", &config)?;

        scaffold.create_helper("Acceptance", &support)?;
        scaffold.create_actor(&actor, &support, suite_section(&config, "acceptance")?)?;

        let first_test = Template::new(FIRST_TEST)
            .place("namespace", &namespace_statement(scaffold.namespace()))
            .place("actor", &actor)
            .produce();
        scaffold.create_file(format!("{dir}/LoginCest.php"), &first_test)?;

        scaffold.say_success("Created test configuration in codeception.yml")?;
        scaffold.say_success(&format!("Created acceptance suite in {dir}"))?;
        scaffold.say_success(&format!("Created a sample test in {dir}/LoginCest.php"))?;
        scaffold.say("")?;
        scaffold.say_styled(Style::Emphasis, "Next steps:")?;
        scaffold.say(&format!("1. Launch Selenium Server and {driver}"))?;
        scaffold.say(&format!("2. Edit {dir}/LoginCest.php to test login of your application"))?;
        scaffold.say("3. Run tests using: codecept run")?;
        Ok(())
    }
}
