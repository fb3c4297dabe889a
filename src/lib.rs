pub mod config;
pub mod console;
pub mod error;
pub mod generator;
pub mod scaffold;
pub mod suite;
pub mod templates;

// Re-export commonly used types
pub use config::Settings;
pub use error::ScaffoldError;
pub use scaffold::{InitTemplate, Scaffold};
pub use templates::TemplateKind;
