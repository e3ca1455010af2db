//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `engine`: an uninitialized engine over the in-memory [`CORPUS`]
//! - `corpus_file`: [`CORPUS`] written to a temp directory, for file-backed loading
//!
//! Engines start uninitialized so tests can observe the lifecycle; call
//! [`ready`] to build the catalog.

use a11y_criteria_mcp::{ContentSource, QueryEngine};
use rstest::fixture;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Small corpus covering both platforms, a how-to-test guide, and components
/// with and without each format.
pub const CORPUS: &str = r#"{
    "web": [
        {
            "name": "controls",
            "label": "Controls",
            "children": [
                {
                    "name": "button",
                    "label": "Button",
                    "generalNotes": "Buttons trigger actions.",
                    "gherkin": "Given a button is focused\nWhen the user presses Space or Enter\nThen the action runs",
                    "condensed": "Name, role, state announced",
                    "developerNotes": "Use the native button element.",
                    "videos": "https://example.com/button.mp4"
                },
                {
                    "name": "toggle-button",
                    "label": "Toggle button",
                    "gherkin": "Given a toggle button\nThen its pressed state is announced",
                    "developerNotes": "Use aria-pressed."
                },
                {
                    "name": "link",
                    "label": "Link",
                    "condensed": "Links navigate to a new page",
                    "developerNotes": "Must be reachable with the keyboard."
                }
            ]
        },
        {
            "name": "forms",
            "label": "Forms",
            "children": [
                {
                    "name": "checkbox",
                    "label": "Checkbox",
                    "gherkin": "Given a checkbox\nWhen it is checked\nThen the state is announced",
                    "developerNotes": "Must be reachable with the keyboard."
                },
                {
                    "name": "text-input",
                    "label": "Text input",
                    "generalNotes": "Every input needs a visible label.",
                    "condensed": ""
                }
            ]
        }
    ],
    "native": [
        {
            "name": "controls",
            "label": "Controls",
            "children": [
                {
                    "name": "button",
                    "label": "Button",
                    "gherkin": "Given a native button",
                    "androidDeveloperNotes": "Use android.widget.Button",
                    "iosDeveloperNotes": "Use UIButton"
                },
                {
                    "name": "switch",
                    "label": "Switch",
                    "condensed": "Announces on and off states",
                    "iosDeveloperNotes": "Use UISwitch"
                }
            ]
        },
        {
            "name": "notifications",
            "label": "Notifications",
            "children": [
                {
                    "name": "alert",
                    "label": "Alert",
                    "generalNotes": "Alerts interrupt the user."
                }
            ]
        }
    ],
    "how-to-test": [
        {
            "name": "screen-readers",
            "label": "Screen readers",
            "children": [
                {
                    "name": "voiceover",
                    "label": "VoiceOver",
                    "generalNotes": "Swipe right to move to the next element"
                }
            ]
        }
    ]
}"#;

/// The single-component corpus from the end-to-end scenario.
#[allow(dead_code)] // Used by a subset of integration test crates
pub const BUTTON_ONLY: &str = r#"{
    "web": [{"name": "controls", "label": "Controls", "children": [
        {"name": "button", "label": "Button", "gherkin": "Given a button..."}
    ]}],
    "native": [],
    "how-to-test": []
}"#;

/// A content file in a temporary directory, removed on drop.
#[allow(dead_code)] // Fields used across different integration test crates
pub struct CorpusFile {
    _temp: TempDir,
    path: PathBuf,
}

#[allow(dead_code)] // Methods used across different integration test crates
impl CorpusFile {
    /// Writes `content` to `content.json` in a fresh temp directory.
    ///
    /// # Panics
    /// Panics if the directory or file cannot be created.
    pub fn new(content: &str) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("content.json");
        std::fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Failed to write '{}': {}", path.display(), e));
        Self { _temp: temp, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> ContentSource {
        ContentSource::file(&self.path)
    }
}

/// Uninitialized engine over [`CORPUS`].
#[fixture]
pub fn engine() -> QueryEngine {
    a11y_criteria_mcp::tracing::init(a11y_criteria_mcp::tracing::LogFormat::Text);
    QueryEngine::new(ContentSource::inline(CORPUS))
}

/// [`CORPUS`] on disk.
#[allow(dead_code)] // Used by a subset of integration test crates
#[fixture]
pub fn corpus_file() -> CorpusFile {
    CorpusFile::new(CORPUS)
}

/// Build the catalog, panicking on failure.
pub async fn ready(engine: QueryEngine) -> QueryEngine {
    engine
        .initialize()
        .await
        .unwrap_or_else(|e| panic!("Failed to initialize test engine: {}", e));
    engine
}
