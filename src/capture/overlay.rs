use crate::dom::dom_model::{Document, NodeId, Viewport};
use crate::locator::locator_model::LocatorRecord;

// ============================================================================
// In-page affordances: stop banner and floating preview panel
// ============================================================================

pub const STOP_BANNER_ID: &str = "locator-stop-banner";
pub const STOP_BUTTON_ID: &str = "locator-stop-btn";

/// Panel footprint used for viewport clamping.
pub const PANEL_WIDTH: f64 = 340.0;
pub const PANEL_HEIGHT: f64 = 300.0;

/// Offset of the panel anchor from the click point.
const PANEL_OFFSET: f64 = 10.0;

/// The fixed "stop recording" affordance mounted into the page while the
/// recorder is active. Clicks inside it are never captured; clicking the
/// stop button ends the session.
#[derive(Debug, Clone)]
pub struct StopBanner {
    root: NodeId,
    button: NodeId,
}

impl StopBanner {
    /// Mount the banner under `body` (or the document root when the fixture
    /// has no body). Returns None for an empty document; recording still
    /// proceeds without an in-page stop affordance in that case.
    pub fn mount(doc: &mut Document) -> Option<StopBanner> {
        let host = doc.element_by_tag("body").or(doc.root())?;

        let root = doc.append_element(Some(host), "div", &[("id", STOP_BANNER_ID)]);
        let label = doc.append_element(Some(root), "span", &[]);
        doc.append_text(label, "Recording locators\u{2026}");
        let button = doc.append_element(Some(root), "button", &[("id", STOP_BUTTON_ID)]);
        doc.append_text(button, "Stop recording");

        Some(StopBanner { root, button })
    }

    /// Remove the banner from the page.
    pub fn unmount(self, doc: &mut Document) {
        doc.detach(self.root);
    }

    /// Whether `node` lies inside the banner (self-capture guard).
    pub fn contains(&self, doc: &Document, node: NodeId) -> bool {
        doc.contains(self.root, node)
    }

    /// Whether `node` activates the stop button.
    pub fn is_stop_trigger(&self, doc: &Document, node: NodeId) -> bool {
        doc.contains(self.button, node)
    }
}

/// Where the floating preview panel is anchored on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub top: f64,
    pub left: f64,
}

/// Anchor the panel just below and right of the click point, clamped so the
/// whole panel stays inside the viewport.
pub fn panel_position(click_x: f64, click_y: f64, viewport: &Viewport) -> PanelLayout {
    PanelLayout {
        top: (click_y + PANEL_OFFSET).min(viewport.height - PANEL_HEIGHT),
        left: (click_x + PANEL_OFFSET).min(viewport.width - PANEL_WIDTH),
    }
}

/// Transient preview of the most recent capture: the highlighted element,
/// panel placement, and the non-null locator fields to list. Replaced on
/// every qualifying click, removed on dismiss or deactivation.
#[derive(Debug, Clone)]
pub struct PreviewPanel {
    pub target: NodeId,
    pub layout: PanelLayout,
    pub fields: Vec<(&'static str, String)>,
}

impl PreviewPanel {
    pub fn for_capture(
        record: &LocatorRecord,
        target: NodeId,
        click_x: f64,
        click_y: f64,
        viewport: &Viewport,
    ) -> PreviewPanel {
        PreviewPanel {
            target,
            layout: panel_position(click_x, click_y, viewport),
            fields: record.preview_fields(),
        }
    }
}
