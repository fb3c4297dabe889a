//! One-time setup of a Codeception test workspace
//!
//! [`Scaffold`] holds the workspace context (root directory, namespace, actor
//! suffix) and the shared steps concrete flows are built from. A flow is an
//! [`InitTemplate`]; its `setup()` calls the steps in whatever order the flow
//! needs.
//!
//! # Example
//!
//! ```no_run
//! use codecept_scaffold::config::Settings;
//! use codecept_scaffold::console::Terminal;
//! use codecept_scaffold::scaffold::Scaffold;
//! use codecept_scaffold::templates::Bootstrap;
//!
//! let mut console = Terminal::new(true);
//! let mut scaffold = Scaffold::new(&mut console, &Settings::load()?);
//! scaffold.init_dir("my-app")?;
//! scaffold.run(&mut Bootstrap::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Nothing is rolled back on failure: a failed run may leave some of its
//! directories and files behind.

mod internal;

use anyhow::{Context, Result};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::console::{self, Answer, Console, Style};
use crate::error::ScaffoldError;
use crate::generator::{ActionsGenerator, ActorGenerator, HelperGenerator, ModuleCatalogue};
use crate::suite::{default_suite_settings, merge_configs, SuiteConfig, SuiteSettings};

pub use internal::short_class_name;

/// Files whose presence means Codeception is already set up
pub const INSTALL_MARKERS: [&str; 2] = ["codeception.yml", "codeception.dist.yml"];

pub const GIT_IGNORE: &str = ".gitignore";

/// A concrete scaffolding flow
pub trait InitTemplate {
    /// Name used to select the flow on the command line
    fn name(&self) -> &'static str;

    /// Build the workspace using the steps `scaffold` provides
    fn setup(&mut self, scaffold: &mut Scaffold<'_>) -> Result<()>;
}

pub struct Scaffold<'c> {
    console: &'c mut dyn Console,
    work_dir: PathBuf,
    namespace: String,
    actor_suffix: String,
    interactive: bool,
    modules: ModuleCatalogue,
    created: Vec<PathBuf>,
}

impl<'c> Scaffold<'c> {
    pub fn new(console: &'c mut dyn Console, settings: &Settings) -> Self {
        Self {
            console,
            work_dir: settings.work_dir.clone(),
            namespace: crate::config::normalize_namespace(&settings.namespace),
            actor_suffix: settings.actor_suffix.clone(),
            interactive: settings.interactive,
            modules: ModuleCatalogue::builtin(),
            created: Vec::new(),
        }
    }

    /// Run a flow against this workspace
    pub fn run(&mut self, template: &mut dyn InitTemplate) -> Result<()> {
        tracing::info!(template = template.name(), work_dir = %self.work_dir.display(), "scaffolding started");
        template.setup(self)?;
        tracing::info!(files = self.created.len(), "scaffolding finished");
        Ok(())
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Only meaningful before anything has been generated
    pub fn set_namespace(&mut self, namespace: &str) {
        self.namespace = crate::config::normalize_namespace(namespace);
    }

    pub fn actor_suffix(&self) -> &str {
        &self.actor_suffix
    }

    /// Files written so far, in order
    pub fn created_files(&self) -> &[PathBuf] {
        &self.created
    }

    pub fn modules(&self) -> &ModuleCatalogue {
        &self.modules
    }

    /// Fully qualified class of a helper created by [`Scaffold::create_helper`]
    pub fn helper_class(&self, name: &str) -> String {
        HelperGenerator::new(name, &self.namespace).class_name()
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.work_dir.join(path)
    }

    // =========================================================================
    // Workspace
    // =========================================================================

    /// Make `path` the workspace root, creating it if needed
    ///
    /// Fails with [`ScaffoldError::AlreadyInstalled`] before touching the
    /// filesystem when `path` already holds a Codeception configuration.
    pub fn init_dir(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let target = self.resolve(path);
        ensure_not_installed(&target)?;

        self.say_info(&format!("Initializing Codeception in {}", path.display()))?;
        internal::create_directory_for(&target, "")?;
        self.work_dir = target;
        Ok(())
    }

    pub fn check_installed(&self, dir: impl AsRef<Path>) -> Result<()> {
        ensure_not_installed(&self.resolve(dir.as_ref()))
    }

    // =========================================================================
    // Console
    // =========================================================================

    /// Ask one question: a default answer or a list of choices
    ///
    /// Non-interactive runs answer with the default without prompting.
    pub fn ask(&mut self, question: &str, answer: impl Into<Answer>) -> Result<String> {
        let answer = answer.into();
        if !self.interactive {
            return console::default_answer(question, &answer);
        }
        console::ask(&mut *self.console, question, &answer)
    }

    pub fn say(&mut self, message: &str) -> Result<()> {
        self.console.emit(Style::Plain, message)
    }

    pub fn say_styled(&mut self, style: Style, message: &str) -> Result<()> {
        self.console.emit(style, message)
    }

    pub fn say_success(&mut self, message: &str) -> Result<()> {
        self.console.emit(Style::Success, &format!(" {message} "))
    }

    pub fn say_warning(&mut self, message: &str) -> Result<()> {
        self.console.emit(Style::Warning, &format!(" {message} "))
    }

    pub fn say_info(&mut self, message: &str) -> Result<()> {
        self.console.emit(Style::Info, &format!("> {message}"))
    }

    // =========================================================================
    // Files
    // =========================================================================

    /// Create the directory for `class_name` under `base` (see `create_directory_for`)
    pub fn create_directory_for(
        &mut self,
        base: impl AsRef<Path>,
        class_name: &str,
    ) -> Result<PathBuf> {
        internal::create_directory_for(&self.resolve(base.as_ref()), class_name)
    }

    /// Write a new file; returns false when it already exists
    pub fn create_file(&mut self, path: impl AsRef<Path>, contents: &str) -> Result<bool> {
        let path = self.resolve(path.as_ref());
        self.write_new(path, contents)
    }

    fn write_new(&mut self, path: PathBuf, contents: &str) -> Result<bool> {
        let written = internal::create_file(&path, contents)?;
        if written {
            self.created.push(path);
        }
        Ok(written)
    }

    /// An empty directory kept under version control through a `.gitkeep`
    pub fn create_empty_directory(&mut self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = self.create_directory_for(dir, "")?;
        self.write_new(dir.join(".gitkeep"), "")?;
        Ok(())
    }

    /// Ignore everything under `path` except the ignore file itself
    ///
    /// Only done when the workspace root has a `.gitignore`.
    pub fn git_ignore(&mut self, path: impl AsRef<Path>) -> Result<()> {
        if !self.work_dir.join(GIT_IGNORE).exists() {
            return Ok(());
        }

        let file = self.resolve(path.as_ref()).join(GIT_IGNORE);
        fs::write(&file, format!("*\n!{GIT_IGNORE}"))
            .with_context(|| format!("Failed to write {}", file.display()))?;
        tracing::debug!(file = %file.display(), "wrote ignore file");
        self.created.push(file);
        Ok(())
    }

    // =========================================================================
    // Generated classes
    // =========================================================================

    /// Write `directory/Helper/<name>.php` and make the helper available as a module
    pub fn create_helper(&mut self, name: &str, directory: impl AsRef<Path>) -> Result<()> {
        let dir = directory.as_ref().join("Helper");
        let resolved = self.create_directory_for(&dir, "")?;

        let generator = HelperGenerator::new(name, &self.namespace);
        self.write_new(resolved.join(format!("{name}.php")), &generator.produce())?;
        self.modules.register_helper(&generator.class_name());

        self.say_info(&format!("{name} helper has been created in {}", dir.display()))
    }

    /// Write the actor class and its generated actions trait
    ///
    /// `suite_config` is merged over the default suite settings with the
    /// workspace namespace injected. The actor is named by the `actor` (or
    /// `class_name`) setting, falling back to `name`.
    pub fn create_actor(
        &mut self,
        name: &str,
        directory: impl AsRef<Path>,
        mut suite_config: SuiteConfig,
    ) -> Result<()> {
        let directory = directory.as_ref();
        let file = self
            .create_directory_for(directory, name)?
            .join(format!("{}.php", short_class_name(name)));

        suite_config.insert(
            Value::String("namespace".to_string()),
            Value::String(self.namespace.clone()),
        );
        let config = merge_configs(&default_suite_settings(), &Value::Mapping(suite_config));
        let mut settings = SuiteSettings::from_config(&config)?;
        if settings.actor_class().is_none() {
            settings.actor = Some(name.to_string());
        }

        let actor = ActorGenerator::new(&settings)?;
        self.write_new(file, &actor.produce())?;
        self.say_info(&format!("{name} actor has been created in {}", directory.display()))?;

        let actions = ActionsGenerator::new(&settings, &self.modules)?;
        let generated_dir = self.create_directory_for(directory.join("_generated"), "")?;
        self.write_new(
            generated_dir.join(format!("{}Actions.php", actions.actor_name())),
            &actions.produce(),
        )?;
        self.say_info("Actions have been loaded")
    }
}

fn ensure_not_installed(dir: &Path) -> Result<()> {
    if INSTALL_MARKERS.iter().any(|marker| dir.join(marker).exists()) {
        return Err(ScaffoldError::AlreadyInstalled(dir.to_path_buf()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use tempfile::TempDir;

    fn settings(root: &Path) -> Settings {
        Settings {
            work_dir: root.to_path_buf(),
            ..Default::default()
        }
    }

    fn is_already_installed(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::AlreadyInstalled(_))
        )
    }

    #[test]
    fn test_check_installed_detects_both_markers() {
        for marker in INSTALL_MARKERS {
            let tmp = TempDir::new().unwrap();
            fs::write(tmp.path().join(marker), "").unwrap();

            let mut console = ScriptedConsole::default();
            let scaffold = Scaffold::new(&mut console, &settings(tmp.path()));
            let err = scaffold.check_installed(".").unwrap_err();
            assert!(is_already_installed(&err), "{marker} not detected");
        }
    }

    #[test]
    fn test_check_installed_passes_clean_dir() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("codeception.yaml"), "").unwrap();
        let mut console = ScriptedConsole::default();
        let scaffold = Scaffold::new(&mut console, &settings(tmp.path()));
        assert!(scaffold.check_installed(".").is_ok());
    }

    #[test]
    fn test_init_dir_refuses_existing_installation() {
        let tmp = TempDir::new().unwrap();
        let target = tmp.path().join("app");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("codeception.dist.yml"), "").unwrap();

        let mut console = ScriptedConsole::default();
        let mut scaffold = Scaffold::new(&mut console, &settings(tmp.path()));
        let err = scaffold.init_dir("app").unwrap_err();

        assert!(is_already_installed(&err));
        assert_eq!(scaffold.work_dir(), tmp.path());
        assert_eq!(fs::read_dir(&target).unwrap().count(), 1);
        drop(scaffold);
        assert!(console.transcript().is_empty());
    }

    #[test]
    fn test_init_dir_creates_and_switches() {
        let tmp = TempDir::new().unwrap();
        let mut console = ScriptedConsole::default();
        let mut scaffold = Scaffold::new(&mut console, &settings(tmp.path()));

        scaffold.init_dir("nested/app").unwrap();
        let expected = tmp.path().join("nested/app");
        assert!(expected.is_dir());
        assert_eq!(scaffold.work_dir(), expected);

        scaffold.create_empty_directory("tests").unwrap();
        assert!(expected.join("tests/.gitkeep").exists());
        drop(scaffold);
        assert!(console.contains("> Initializing Codeception in nested/app"));
    }

    #[test]
    fn test_ask_delegates_to_console() {
        let mut console = ScriptedConsole::new(["1", "", "", "chrome"]);
        let mut scaffold = Scaffold::new(&mut console, &Settings::default());

        assert_eq!(scaffold.ask("browser?", ["firefox", "chrome"]).unwrap(), "chrome");
        assert_eq!(scaffold.ask("browser?", ["firefox", "chrome"]).unwrap(), "firefox");
        assert_eq!(scaffold.ask("browser?", "firefox").unwrap(), "firefox");
        assert_eq!(scaffold.ask("browser?", "firefox").unwrap(), "chrome");
    }

    #[test]
    fn test_ask_uses_defaults_when_not_interactive() {
        let mut console = ScriptedConsole::new(["chrome", "1"]);
        let mut scaffold = Scaffold::new(&mut console, &Settings::default().interactive(false));

        assert_eq!(scaffold.ask("browser?", "firefox").unwrap(), "firefox");
        assert_eq!(scaffold.ask("browser?", ["firefox", "chrome"]).unwrap(), "firefox");
        drop(scaffold);

        assert_eq!(console.remaining(), 2);
        assert!(console.transcript().is_empty());
    }

    #[test]
    fn test_say_styles() {
        let mut console = ScriptedConsole::default();
        let mut scaffold = Scaffold::new(&mut console, &Settings::default());
        scaffold.say("plain").unwrap();
        scaffold.say_success("done").unwrap();
        scaffold.say_warning("careful").unwrap();
        scaffold.say_info("note").unwrap();
        drop(scaffold);

        assert_eq!(
            console.transcript(),
            &[
                (Style::Plain, "plain".to_string()),
                (Style::Success, " done ".to_string()),
                (Style::Warning, " careful ".to_string()),
                (Style::Info, "> note".to_string()),
            ]
        );
    }

    #[test]
    fn test_git_ignore_requires_root_ignore_file() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("tests/_output")).unwrap();
        let mut console = ScriptedConsole::default();
        let mut scaffold = Scaffold::new(&mut console, &settings(tmp.path()));

        scaffold.git_ignore("tests/_output").unwrap();
        assert!(!tmp.path().join("tests/_output/.gitignore").exists());

        fs::write(tmp.path().join(".gitignore"), "vendor/\n").unwrap();
        scaffold.git_ignore("tests/_output").unwrap();
        assert_eq!(
            fs::read_to_string(tmp.path().join("tests/_output/.gitignore")).unwrap(),
            "*\n!.gitignore"
        );
    }

    #[test]
    fn test_create_empty_directory() {
        let tmp = TempDir::new().unwrap();
        let mut console = ScriptedConsole::default();
        let mut scaffold = Scaffold::new(&mut console, &settings(tmp.path()));

        scaffold.create_empty_directory("tests/_data").unwrap();
        let keep = tmp.path().join("tests/_data/.gitkeep");
        assert!(keep.is_file());
        assert_eq!(fs::metadata(&keep).unwrap().len(), 0);
        assert_eq!(scaffold.created_files(), &[keep]);
    }

    #[test]
    fn test_create_helper_registers_module() {
        let tmp = TempDir::new().unwrap();
        let mut console = ScriptedConsole::default();
        let mut scaffold = Scaffold::new(&mut console, &settings(tmp.path()).with_namespace("App"));

        scaffold.create_helper("Unit", "tests/_support").unwrap();
        let file = tmp.path().join("tests/_support/Helper/Unit.php");
        let source = fs::read_to_string(&file).unwrap();
        assert!(source.contains("namespace App\\Helper;"));
        assert!(source.contains("class Unit extends"));
        assert!(scaffold.modules().resolve("\\App\\Helper\\Unit").is_some());
        assert_eq!(scaffold.helper_class("Unit"), "\\App\\Helper\\Unit");
        drop(scaffold);
        assert!(console.contains("Unit helper has been created in tests/_support/Helper"));
    }

    #[test]
    fn test_create_actor_writes_actor_and_actions() {
        let tmp = TempDir::new().unwrap();
        let mut console = ScriptedConsole::default();
        let mut scaffold = Scaffold::new(&mut console, &settings(tmp.path()));

        let mut suite = SuiteConfig::new();
        suite.insert("class_name".into(), "Tester".into());
        scaffold.create_actor("Tester", "tests/unit", suite).unwrap();

        let actor = fs::read_to_string(tmp.path().join("tests/unit/Tester.php")).unwrap();
        let actions =
            fs::read_to_string(tmp.path().join("tests/unit/_generated/TesterActions.php")).unwrap();
        assert!(actor.contains("class Tester extends \\Codeception\\Actor"));
        assert!(actions.contains("trait TesterActions"));
        drop(scaffold);
        assert!(console.contains("Tester actor has been created in tests/unit"));
        assert!(console.contains("Actions have been loaded"));
    }

    #[test]
    fn test_create_actor_uses_helper_and_namespace() {
        let tmp = TempDir::new().unwrap();
        let mut console = ScriptedConsole::default();
        let mut scaffold = Scaffold::new(&mut console, &settings(tmp.path()).with_namespace("App"));

        scaffold.create_helper("Unit", "tests/_support").unwrap();
        let suite = crate::suite::parse_suite_config(
            "actor: UnitTester\nmodules:\n    enabled:\n        - Asserts\n        - \\App\\Helper\\Unit\n",
        )
        .unwrap();
        scaffold.create_actor("UnitTester", "tests/_support", suite).unwrap();

        let actions = fs::read_to_string(
            tmp.path().join("tests/_support/_generated/UnitTesterActions.php"),
        )
        .unwrap();
        assert!(actions.contains("namespace App\\_generated;"));
        assert!(actions.contains("public function assertTrue("));
    }

    #[test]
    fn test_create_actor_unknown_module_leaves_actor_behind() {
        let tmp = TempDir::new().unwrap();
        let mut console = ScriptedConsole::default();
        let mut scaffold = Scaffold::new(&mut console, &settings(tmp.path()));

        let suite =
            crate::suite::parse_suite_config("actor: T\nmodules:\n    enabled: [Nope]\n").unwrap();
        let err = scaffold.create_actor("T", "support", suite).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::ModuleNotFound(_))
        ));
        assert!(tmp.path().join("support/T.php").exists());
        assert!(!tmp.path().join("support/_generated").exists());
    }

    #[test]
    fn test_create_actor_does_not_overwrite() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("tests/unit")).unwrap();
        fs::write(tmp.path().join("tests/unit/Tester.php"), "custom").unwrap();

        let mut console = ScriptedConsole::default();
        let mut scaffold = Scaffold::new(&mut console, &settings(tmp.path()));
        scaffold
            .create_actor("Tester", "tests/unit", SuiteConfig::new())
            .unwrap();

        assert_eq!(
            fs::read_to_string(tmp.path().join("tests/unit/Tester.php")).unwrap(),
            "custom"
        );
        assert!(tmp.path().join("tests/unit/_generated/TesterActions.php").exists());
    }
}
