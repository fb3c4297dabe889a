use anyhow::Result;
use std::path::PathBuf;

/// Default suffix appended to suite actor names (`Unit` -> `UnitTester`)
pub const DEFAULT_ACTOR_SUFFIX: &str = "Tester";

/// Settings a scaffolding run starts from
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory relative paths are resolved against
    pub work_dir: PathBuf,
    /// PHP namespace for generated classes, without leading or trailing `\`
    pub namespace: String,
    /// Suffix for actor class names
    pub actor_suffix: String,
    /// When false, questions are answered with their defaults
    pub interactive: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            namespace: String::new(),
            actor_suffix: DEFAULT_ACTOR_SUFFIX.to_string(),
            interactive: true,
        }
    }
}

impl Settings {
    /// Settings rooted at the current directory
    pub fn load() -> Result<Self> {
        Ok(Self {
            work_dir: std::env::current_dir()?,
            ..Default::default()
        })
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespace = normalize_namespace(namespace);
        self
    }

    /// Empty suffixes are ignored so actors never lose their suffix by accident
    pub fn with_actor_suffix(mut self, suffix: &str) -> Self {
        let suffix = suffix.trim();
        if !suffix.is_empty() {
            self.actor_suffix = suffix.to_string();
        }
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }
}

/// Strip whitespace and surrounding namespace separators (`\App\Tests\` -> `App\Tests`)
pub fn normalize_namespace(namespace: &str) -> String {
    namespace.trim().trim_matches('\\').to_string()
}
