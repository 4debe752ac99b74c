//! Pane identities shared by the layout and the webview registry.

use livepane_common::Language;
use livepane_layout::PanelId;

/// Every webview the window hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaneSlot {
    Toolbar,
    Footer,
    Editor(Language),
    Preview,
}

impl PaneSlot {
    pub const ALL: [PaneSlot; 6] = [
        PaneSlot::Toolbar,
        PaneSlot::Footer,
        PaneSlot::Editor(Language::Html),
        PaneSlot::Editor(Language::Css),
        PaneSlot::Editor(Language::Js),
        PaneSlot::Preview,
    ];

    /// Webview registry id.
    pub fn id(self) -> u32 {
        match self {
            PaneSlot::Toolbar => 1,
            PaneSlot::Footer => 2,
            PaneSlot::Editor(Language::Html) => 3,
            PaneSlot::Editor(Language::Css) => 4,
            PaneSlot::Editor(Language::Js) => 5,
            PaneSlot::Preview => 6,
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.id() == id)
    }

    /// The resizable panel backing this pane, if it has one.
    pub fn panel(self) -> Option<PanelId> {
        match self {
            PaneSlot::Editor(language) => Some(PanelId::Editor(language)),
            PaneSlot::Preview => Some(PanelId::Preview),
            PaneSlot::Toolbar | PaneSlot::Footer => None,
        }
    }

    /// Bundled page URL. The preview has none; it only ever gets inline HTML.
    pub fn url(self) -> Option<String> {
        match self {
            PaneSlot::Toolbar => Some("livepane://localhost/toolbar/index.html".to_string()),
            PaneSlot::Footer => Some("livepane://localhost/footer/index.html".to_string()),
            PaneSlot::Editor(language) => Some(format!(
                "livepane://localhost/editor/index.html?lang={}",
                language.as_str()
            )),
            PaneSlot::Preview => None,
        }
    }

    pub fn is_trusted(self) -> bool {
        self != PaneSlot::Preview
    }
}
