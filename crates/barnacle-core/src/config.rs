//! UI configuration — static values handed down the component tree.

use serde::{Deserialize, Serialize};

/// Configuration the application root constructs once and passes down as
/// props. Only the language tag exists today; a richer propagation
/// mechanism is not needed for a single static value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// BCP 47 language tag applied to rendered text containers.
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".into()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}
