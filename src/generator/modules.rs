//! Known modules and the actions they contribute to an actor

/// One public action of a module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSpec {
    pub name: String,
    /// PHP parameter list, without parentheses
    pub params: String,
    /// First line of the module's documentation for the action
    pub doc: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSpec {
    /// Short name used in suite configs (`Asserts`), or the class for helpers
    pub name: String,
    /// Fully qualified class with a leading `\`
    pub class: String,
    pub actions: Vec<ActionSpec>,
}

type ActionRow = (&'static str, &'static str, &'static str);

const BUILTIN_MODULES: &[(&str, &[ActionRow])] = &[
    (
        "Asserts",
        &[
            ("assertEquals", "$expected, $actual, $message = \"\"", "Checks that two variables are equal."),
            ("assertNotEquals", "$expected, $actual, $message = \"\"", "Checks that two variables are not equal."),
            ("assertSame", "$expected, $actual, $message = \"\"", "Checks that two variables are same."),
            ("assertTrue", "$condition, $message = \"\"", "Checks that condition is positive."),
            ("assertFalse", "$condition, $message = \"\"", "Checks that condition is negative."),
            ("assertNull", "$actual, $message = \"\"", "Checks that variable is NULL."),
            ("assertNotNull", "$actual, $message = \"\"", "Checks that variable is not NULL."),
            ("assertCount", "$expectedCount, $haystack, $message = \"\"", "Asserts the number of elements of an array, Countable or Traversable."),
            ("assertContains", "$needle, $haystack, $message = \"\"", "Asserts that a haystack contains a needle."),
            ("expectThrowable", "$throwable, $callback", "Handles and checks throwables (Exceptions/Errors) called inside the callback function."),
            ("fail", "$message", "Fails the test with message."),
        ],
    ),
    (
        "PhpBrowser",
        &[
            ("amOnPage", "$page", "Opens the page for the given relative URI."),
            ("click", "$link, $context = null", "Perform a click on a link or a button, given by a locator."),
            ("fillField", "$field, $value", "Fills a text field or textarea with the given string."),
            ("see", "$text, $selector = null", "Checks that the current page contains the given string."),
            ("dontSee", "$text, $selector = null", "Checks that the current page doesn't contain the text specified."),
            ("seeInCurrentUrl", "$uri", "Checks that current URI contains the given string."),
            ("seeResponseCodeIs", "$code", "Checks that response code is equal to value provided."),
            ("grabTextFrom", "$cssOrXPathOrRegex", "Finds and returns the text contents of the given element."),
        ],
    ),
    (
        "WebDriver",
        &[
            ("amOnPage", "$page", "Opens the page for the given relative URI."),
            ("click", "$link, $context = null", "Perform a click on a link or a button, given by a locator."),
            ("fillField", "$field, $value", "Fills a text field or textarea with the given string."),
            ("see", "$text, $selector = null", "Checks that the current page contains the given string."),
            ("dontSee", "$text, $selector = null", "Checks that the current page doesn't contain the text specified."),
            ("seeElement", "$selector, $attributes = []", "Checks that the given element exists on the page and is visible."),
            ("waitForElement", "$element, $timeout = 10", "Waits up to $timeout seconds for an element to appear on the page."),
            ("makeScreenshot", "$name = null", "Takes a screenshot of the current window and saves it to tests/_output/debug."),
        ],
    ),
    (
        "Filesystem",
        &[
            ("openFile", "$filename", "Opens a file and stores its content."),
            ("seeInThisFile", "$text", "Checks If opened file has `text` in it."),
            ("writeToFile", "$filename, $contents", "Saves contents to file."),
            ("deleteFile", "$filename", "Deletes a file."),
            ("seeFileFound", "$filename, $path = \"\"", "Checks if file exists in path."),
        ],
    ),
    (
        "Cli",
        &[
            ("runShellCommand", "$command, $failNonZero = true", "Executes a shell command."),
            ("seeInShellOutput", "$text", "Checks that output from last executed command contains text."),
            ("dontSeeInShellOutput", "$text", "Checks that output from latest command doesn't contain text."),
            ("seeResultCodeIs", "$code", "Checks result code."),
        ],
    ),
    (
        "Db",
        &[
            ("haveInDatabase", "$table, array $data", "Inserts an SQL record into a database."),
            ("seeInDatabase", "$table, $criteria = []", "Asserts that a row with the given column values exists."),
            ("dontSeeInDatabase", "$table, $criteria = []", "Effect is opposite to ->seeInDatabase."),
            ("grabFromDatabase", "$table, $column, $criteria = []", "Fetches a single column value from a database."),
        ],
    ),
];

/// Modules that can be enabled in a suite
///
/// Starts with the framework's built-in modules; helpers written during a
/// run are registered so suites enabling them resolve.
#[derive(Debug, Clone)]
pub struct ModuleCatalogue {
    modules: Vec<ModuleSpec>,
}

impl Default for ModuleCatalogue {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ModuleCatalogue {
    pub fn builtin() -> Self {
        let modules = BUILTIN_MODULES
            .iter()
            .map(|(name, actions)| ModuleSpec {
                name: name.to_string(),
                class: format!("\\Codeception\\Module\\{name}"),
                actions: actions
                    .iter()
                    .map(|(action, params, doc)| ActionSpec {
                        name: action.to_string(),
                        params: params.to_string(),
                        doc: doc.to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self { modules }
    }

    /// Make a helper class resolvable; helpers start without actions
    pub fn register_helper(&mut self, class: &str) {
        let name = class.trim_start_matches('\\');
        if self.resolve(name).is_some() {
            return;
        }
        self.modules.push(ModuleSpec {
            name: name.to_string(),
            class: format!("\\{name}"),
            actions: Vec::new(),
        });
    }

    /// Find a module by short name or by class, with or without a leading `\`
    pub fn resolve(&self, name: &str) -> Option<&ModuleSpec> {
        let name = name.trim().trim_start_matches('\\');
        self.modules
            .iter()
            .find(|m| m.name == name || m.class.trim_start_matches('\\') == name)
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.modules.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_builtin_by_name_and_class() {
        let catalogue = ModuleCatalogue::builtin();
        assert_eq!(catalogue.resolve("Asserts").unwrap().class, "\\Codeception\\Module\\Asserts");
        assert!(catalogue.resolve("\\Codeception\\Module\\PhpBrowser").is_some());
        assert!(catalogue.resolve("Symfony").is_none());
    }

    #[test]
    fn test_register_helper() {
        let mut catalogue = ModuleCatalogue::builtin();
        let before = catalogue.len();

        catalogue.register_helper("\\App\\Helper\\Unit");
        catalogue.register_helper("App\\Helper\\Unit");

        assert_eq!(catalogue.len(), before + 1);
        let helper = catalogue.resolve("\\App\\Helper\\Unit").unwrap();
        assert_eq!(helper.class, "\\App\\Helper\\Unit");
        assert!(helper.actions.is_empty());
    }
}
