use serde::{Deserialize, Serialize};

// ============================================================================
// Interaction scripts - recorded user actions replayed over a fixture
// ============================================================================

/// A scripted interaction sequence. Deserialized from YAML and replayed
/// against a page fixture to reproduce a recording session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InteractionScript {
    /// Human-readable name for this script
    pub name: String,

    /// Ordered list of interaction steps
    pub steps: Vec<ScriptStep>,
}

/// A single step in an interaction script. Targets are resolved by DOM id
/// attribute, or by document-order element index when the element has no
/// id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Click an element
    Click {
        #[serde(default)]
        target: Option<String>,

        #[serde(default)]
        target_index: Option<usize>,

        /// Click coordinates, used to anchor the preview panel
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },

    /// Commit a value change on a form control
    Change {
        #[serde(default)]
        target: Option<String>,

        #[serde(default)]
        target_index: Option<usize>,

        value: String,
    },

    /// Close the floating preview panel
    DismissPreview,

    /// Click the in-page stop affordance (finishes with handoff)
    ClickStopBanner,

    /// Deliver an external STOP command
    Stop,
}
