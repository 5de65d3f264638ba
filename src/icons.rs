//! Icon service for managing different icon themes
//!
//! Every glyph the components draw (checkboxes, category icons, action
//! buttons, the spinner) comes from here so the whole UI can switch between
//! emoji, Unicode and plain ASCII rendering.

use crate::task::Category;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Completion toggle and selection indicators
#[derive(Debug, Clone)]
pub struct CheckIcons {
    pub pending: &'static str,
    pub completed: &'static str,
    pub unselected: &'static str,
    pub selected: &'static str,
    pub check: &'static str,
}

/// Category glyphs, in [`Category::ALL`] order
#[derive(Debug, Clone)]
pub struct CategoryIcons {
    pub general: &'static str,
    pub work: &'static str,
    pub study: &'static str,
    pub personal: &'static str,
    pub health: &'static str,
    pub finance: &'static str,
}

/// Buttons and inline affordances
#[derive(Debug, Clone)]
pub struct ActionIcons {
    pub add: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub undo: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub clear: &'static str,
    pub spinner: &'static str,
}

/// Metadata and decoration
#[derive(Debug, Clone)]
pub struct MetaIcons {
    pub due_date: &'static str,
    pub flag: &'static str,
    pub chevron_open: &'static str,
    pub chevron_closed: &'static str,
    pub brand: &'static str,
    pub heart: &'static str,
    pub accent_bar: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub check: CheckIcons,
    pub category: CategoryIcons,
    pub action: ActionIcons,
    pub meta: MetaIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            check: CheckIcons {
                pending: "⚪",
                completed: "✅",
                unselected: "⬜",
                selected: "☑️",
                check: "✔️",
            },
            category: CategoryIcons {
                general: "📋",
                work: "💼",
                study: "📖",
                personal: "👤",
                health: "💗",
                finance: "💰",
            },
            action: ActionIcons {
                add: "➕",
                edit: "✏️",
                delete: "🗑️",
                undo: "↩️",
                save: "✅",
                cancel: "❌",
                clear: "✖️",
                spinner: "⏳",
            },
            meta: MetaIcons {
                due_date: "📅",
                flag: "🚩",
                chevron_open: "🔼",
                chevron_closed: "🔽",
                brand: "🧩",
                heart: "❤️",
                accent_bar: "▌",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            check: CheckIcons {
                pending: "○",
                completed: "●",
                unselected: "☐",
                selected: "☑",
                check: "✓",
            },
            category: CategoryIcons {
                general: "≡",
                work: "▣",
                study: "¶",
                personal: "☺",
                health: "♥",
                finance: "$",
            },
            action: ActionIcons {
                add: "+",
                edit: "✎",
                delete: "✗",
                undo: "↶",
                save: "✓",
                cancel: "×",
                clear: "×",
                spinner: "⟳",
            },
            meta: MetaIcons {
                due_date: "◷",
                flag: "⚑",
                chevron_open: "▴",
                chevron_closed: "▾",
                brand: "◆",
                heart: "♥",
                accent_bar: "▌",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            check: CheckIcons {
                pending: "( )",
                completed: "(x)",
                unselected: "[ ]",
                selected: "[x]",
                check: "*",
            },
            category: CategoryIcons {
                general: "=",
                work: "W",
                study: "S",
                personal: "P",
                health: "+",
                finance: "$",
            },
            action: ActionIcons {
                add: "+",
                edit: "e",
                delete: "d",
                undo: "u",
                save: "ok",
                cancel: "x",
                clear: "x",
                spinner: "...",
            },
            meta: MetaIcons {
                due_date: "@",
                flag: "!",
                chevron_open: "^",
                chevron_closed: "v",
                brand: "#",
                heart: "<3",
                accent_bar: "|",
            },
        }
    }

    /// Completion toggle glyph
    #[must_use]
    pub fn checkbox(&self, completed: bool) -> &'static str {
        let icons = self.icons();
        if completed {
            icons.check.completed
        } else {
            icons.check.pending
        }
    }

    /// Selection-mode indicator glyph
    #[must_use]
    pub fn selection(&self, selected: bool) -> &'static str {
        let icons = self.icons();
        if selected {
            icons.check.selected
        } else {
            icons.check.unselected
        }
    }

    #[must_use]
    pub fn category(&self, category: Category) -> &'static str {
        let icons = self.icons().category;
        match category {
            Category::General => icons.general,
            Category::Work => icons.work,
            Category::Study => icons.study,
            Category::Personal => icons.personal,
            Category::Health => icons.health,
            Category::Finance => icons.finance,
        }
    }

    #[must_use]
    pub fn chevron(&self, open: bool) -> &'static str {
        let meta = self.icons().meta;
        if open {
            meta.chevron_open
        } else {
            meta.chevron_closed
        }
    }

    #[must_use]
    pub fn due_date(&self) -> &'static str {
        self.icons().meta.due_date
    }

    #[must_use]
    pub fn spinner(&self) -> &'static str {
        self.icons().action.spinner
    }
}
