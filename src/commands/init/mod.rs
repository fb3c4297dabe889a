//! Initialize a Codeception test workspace
//!
//! Public interface only; the run itself lives in `internal`.
//!
//! # Example
//!
//! ```no_run
//! use codecept_scaffold::TemplateKind;
//!
//! init::execute(init::InitOptions {
//!     path: "my-app".to_string(),
//!     template: TemplateKind::Unit,
//!     namespace: Some("App\\Tests".to_string()),
//!     actor: None,
//!     empty: false,
//!     no_interaction: true,
//!     json: false,
//! })?;
//! ```

mod internal;

use anyhow::Result;

use codecept_scaffold::TemplateKind;

/// Command-line options of `init`
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Workspace directory, `.` for the current one
    pub path: String,
    pub template: TemplateKind,
    pub namespace: Option<String>,
    /// Actor suffix override
    pub actor: Option<String>,
    /// Bootstrap flow only: skip suite creation
    pub empty: bool,
    pub no_interaction: bool,
    /// Print a JSON report instead of console output
    pub json: bool,
}

/// Execute the init command
///
/// # Process
///
/// 1. **Settings**: namespace and actor suffix from flags or environment
/// 2. **Workspace**: refuse existing installations, create the directory
/// 3. **Flow**: run the selected template's setup
/// 4. **Report**: with `--json`, print status and created files, failed runs included
///
/// # Errors
///
/// Returns an error if:
/// - `codeception.yml` or `codeception.dist.yml` already exists in the workspace
/// - A directory or file cannot be created
/// - A suite enables a module that cannot be found
pub fn execute(options: InitOptions) -> Result<()> {
    internal::execute_init(options)
}
