//! Internal implementation for init command

use anyhow::Result;
use serde_json::Value;

use codecept_scaffold::config::Settings;
use codecept_scaffold::console::Terminal;
use codecept_scaffold::scaffold::Scaffold;
use codecept_scaffold::templates::get_template;
use codecept_scaffold::TemplateKind;

use super::InitOptions;

/// Main execution logic for init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let settings = build_settings(&options, Settings::load()?, atty::is(atty::Stream::Stdin));

    let mut console = Terminal::new(settings.interactive);
    if options.json {
        console = console.quiet();
    }

    let mut template = get_template(options.template, options.empty);
    let mut scaffold = Scaffold::new(&mut console, &settings);

    let outcome = scaffold
        .init_dir(&options.path)
        .and_then(|()| scaffold.run(template.as_mut()));

    if options.json {
        let report = build_report(&scaffold, options.template, outcome.as_ref().err());
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    outcome
}

/// Apply command-line options over `base`
///
/// Piped stdin cannot answer questions, so runs without a TTY fall back to defaults.
fn build_settings(options: &InitOptions, base: Settings, stdin_is_tty: bool) -> Settings {
    let interactive = !options.no_interaction && !options.json && stdin_is_tty;

    let mut settings = base.interactive(interactive);
    if let Some(namespace) = &options.namespace {
        settings = settings.with_namespace(namespace);
    }
    if let Some(suffix) = &options.actor {
        settings = settings.with_actor_suffix(suffix);
    }
    settings
}

/// JSON report of a run; files created before a failure are listed too
fn build_report(scaffold: &Scaffold<'_>, template: TemplateKind, error: Option<&anyhow::Error>) -> Value {
    let created: Vec<String> = scaffold
        .created_files()
        .iter()
        .map(|path| {
            path.strip_prefix(scaffold.work_dir())
                .unwrap_or(path)
                .display()
                .to_string()
        })
        .collect();

    let status = if error.is_some() { "error" } else { "success" };
    let mut report = serde_json::json!({
        "template": template,
        "work_dir": scaffold.work_dir().display().to_string(),
        "namespace": scaffold.namespace(),
        "actor_suffix": scaffold.actor_suffix(),
        "created": created,
        "status": status,
    });
    if let Some(err) = error {
        report["error"] = Value::String(format!("{err:#}"));
    }
    report
}
