use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use super::{namespace_line, yaml_scalar};
use crate::console::Style;
use crate::scaffold::{InitTemplate, Scaffold};
use crate::suite::parse_suite_config;

const TESTS_DIR: &str = "tests";
const SUPPORT_DIR: &str = "tests/_support";
const OUTPUT_DIR: &str = "tests/_output";
const DATA_DIR: &str = "tests/_data";
const ENVS_DIR: &str = "tests/_envs";

const RUN_FAILED_EXTENSION: &str = "Codeception\\Extension\\RunFailed";

/// Full setup: global config plus unit, functional and acceptance suites
#[derive(Debug, Default)]
pub struct Bootstrap {
    /// Only the global config and directories, no suites
    pub empty: bool,
}

#[derive(Serialize)]
struct GlobalConfig<'a> {
    paths: GlobalPaths,
    actor_suffix: &'a str,
    extensions: Extensions,
}

#[derive(Serialize)]
struct GlobalPaths {
    tests: &'static str,
    output: &'static str,
    data: &'static str,
    support: &'static str,
    envs: &'static str,
}

#[derive(Serialize)]
struct Extensions {
    enabled: Vec<&'static str>,
}

impl InitTemplate for Bootstrap {
    fn name(&self) -> &'static str {
        "bootstrap"
    }

    fn setup(&mut self, scaffold: &mut Scaffold<'_>) -> Result<()> {
        scaffold.check_installed(".")?;

        scaffold.say_styled(Style::Banner, " Bootstrapping Codeception ")?;
        scaffold.say("")?;

        create_global_config(scaffold)?;
        scaffold.say("File codeception.yml created       <- global configuration")?;

        create_dirs(scaffold)?;

        if self.empty {
            return Ok(());
        }

        create_unit_suite(scaffold)?;
        scaffold.say("tests/unit created                 <- unit tests")?;
        scaffold.say("tests/unit.suite.yml written       <- unit tests suite configuration")?;
        create_functional_suite(scaffold)?;
        scaffold.say("tests/functional created           <- functional tests")?;
        scaffold.say("tests/functional.suite.yml written <- functional tests suite configuration")?;
        create_acceptance_suite(scaffold)?;
        scaffold.say("tests/acceptance created           <- acceptance tests")?;
        scaffold.say("tests/acceptance.suite.yml written <- acceptance tests suite configuration")?;

        scaffold.say(" --- ")?;
        scaffold.say("")?;

        if !scaffold.namespace().is_empty() {
            let namespace = scaffold.namespace().to_string();
            scaffold.say_warning(&format!(
                "Test classes use the {namespace} namespace, register it in the autoload-dev section of composer.json"
            ))?;
            scaffold.say("")?;
        }

        scaffold.say_success("Codeception is installed for acceptance, functional, and unit testing")?;
        scaffold.say("")?;
        scaffold.say_styled(Style::Emphasis, "Next steps:")?;
        scaffold.say("1. Edit tests/acceptance.suite.yml to set url of your application. Change PhpBrowser to WebDriver to enable browser testing")?;
        scaffold.say("2. Edit tests/functional.suite.yml to enable a framework module. Remove this file if you don't use a framework")?;
        scaffold.say("3. Create your first acceptance tests using codecept g:cest acceptance First")?;
        scaffold.say("4. Write first test in tests/acceptance/FirstCest.php")?;
        scaffold.say("5. Run tests using: codecept run")?;
        Ok(())
    }
}

fn create_global_config(scaffold: &mut Scaffold<'_>) -> Result<()> {
    let config = GlobalConfig {
        paths: GlobalPaths {
            tests: TESTS_DIR,
            output: OUTPUT_DIR,
            data: DATA_DIR,
            support: SUPPORT_DIR,
            envs: ENVS_DIR,
        },
        actor_suffix: scaffold.actor_suffix(),
        extensions: Extensions {
            enabled: vec![RUN_FAILED_EXTENSION],
        },
    };

    let yaml = format!(
        "{}{}",
        namespace_line(scaffold.namespace())?,
        serde_yaml::to_string(&config)?
    );
    scaffold.create_file("codeception.yml", &yaml)?;
    Ok(())
}

fn create_dirs(scaffold: &mut Scaffold<'_>) -> Result<()> {
    scaffold.create_directory_for(TESTS_DIR, "")?;
    scaffold.create_empty_directory(OUTPUT_DIR)?;
    scaffold.create_empty_directory(DATA_DIR)?;
    scaffold.create_directory_for(Path::new(SUPPORT_DIR).join("_generated"), "")?;
    scaffold.create_directory_for(Path::new(SUPPORT_DIR).join("Helper"), "")?;
    scaffold.git_ignore(OUTPUT_DIR)?;
    scaffold.git_ignore(Path::new(SUPPORT_DIR).join("_generated"))?;
    Ok(())
}

fn create_unit_suite(scaffold: &mut Scaffold<'_>) -> Result<()> {
    let config = format!(
        "# Codeception Test Suite Configuration
#
# Suite for unit or integration tests.

actor: {actor}
modules:
    enabled:
        - Asserts
        - {helper}
step_decorators: ~
",
        actor = yaml_scalar(&format!("Unit{}", scaffold.actor_suffix()))?,
        helper = yaml_scalar(&scaffold.helper_class("Unit"))?,
    );
    create_suite(scaffold, "unit", "Unit", &config)
}

fn create_functional_suite(scaffold: &mut Scaffold<'_>) -> Result<()> {
    let config = format!(
        "# Codeception Test Suite Configuration
#
# Suite for functional tests
# Emulate web requests and make application process them
# Include one of framework modules (Symfony2, Yii2, Laravel5, Phalcon4) to use it
# Remove this suite if you don't use frameworks

actor: {actor}
modules:
    enabled:
        # add a framework module here
        - {helper}
step_decorators: ~
",
        actor = yaml_scalar(&format!("Functional{}", scaffold.actor_suffix()))?,
        helper = yaml_scalar(&scaffold.helper_class("Functional"))?,
    );
    create_suite(scaffold, "functional", "Functional", &config)
}

fn create_acceptance_suite(scaffold: &mut Scaffold<'_>) -> Result<()> {
    let config = format!(
        "# Codeception Test Suite Configuration
#
# Suite for acceptance tests.
# Perform tests in browser using the WebDriver or PhpBrowser.
# If you need both WebDriver and PHPBrowser tests - create a separate suite.

actor: {actor}
modules:
    enabled:
        - PhpBrowser:
            url: http://localhost/myapp
        - {helper}
step_decorators: ~
",
        actor = yaml_scalar(&format!("Acceptance{}", scaffold.actor_suffix()))?,
        helper = yaml_scalar(&scaffold.helper_class("Acceptance"))?,
    );
    create_suite(scaffold, "acceptance", "Acceptance", &config)
}

/// Suite directory, helper, actor with actions, then the suite config itself
fn create_suite(scaffold: &mut Scaffold<'_>, suite: &str, actor: &str, config: &str) -> Result<()> {
    scaffold.create_directory_for(Path::new(TESTS_DIR).join(suite), "")?;
    scaffold.create_helper(actor, SUPPORT_DIR)?;

    let actor_class = format!("{actor}{}", scaffold.actor_suffix());
    scaffold.create_actor(&actor_class, SUPPORT_DIR, parse_suite_config(config)?)?;

    scaffold.create_file(Path::new(TESTS_DIR).join(format!("{suite}.suite.yml")), config)?;
    Ok(())
}
