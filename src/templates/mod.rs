//! Concrete scaffolding flows
//!
//! - `bootstrap`: global config plus unit, functional and acceptance suites
//! - `unit`: a single unit suite, optionally with an actor
//! - `acceptance`: a WebDriver acceptance suite with a sample test

mod acceptance;
mod bootstrap;
mod unit;

use anyhow::Result;
use serde::Serialize;

use crate::scaffold::InitTemplate;

pub use acceptance::Acceptance;
pub use bootstrap::Bootstrap;
pub use unit::Unit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// Unit, functional and acceptance suites
    Bootstrap,
    /// Unit tests only
    Unit,
    /// Browser acceptance tests only
    Acceptance,
}

/// Build the flow for `kind`; `empty` skips suite creation in the bootstrap flow
pub fn get_template(kind: TemplateKind, empty: bool) -> Box<dyn InitTemplate> {
    match kind {
        TemplateKind::Bootstrap => Box::new(Bootstrap { empty }),
        TemplateKind::Unit => Box::new(Unit),
        TemplateKind::Acceptance => Box::new(Acceptance),
    }
}

/// `namespace: <ns>` line prepended to generated YAML configs
fn namespace_line(namespace: &str) -> Result<String> {
    if namespace.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("namespace: {}\n", yaml_scalar(namespace)?))
    }
}

/// `value` as a single-line YAML scalar, quoted when plain style would change it
fn yaml_scalar(value: &str) -> Result<String> {
    Ok(serde_yaml::to_string(value)?.trim_end().to_string())
}
