//! Initial buffer contents.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnippetsConfig {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl Default for SnippetsConfig {
    fn default() -> Self {
        Self {
            html: "<h1>Hello World!</h1>".into(),
            css: "h1 { color: blue; }".into(),
            js: "console.log(\"JavaScript is running\");".into(),
        }
    }
}
