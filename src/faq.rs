//! FAQ tabs with an accordion of questions inside each tab panel.
//!
//! Exactly one tab is active; its panel is shown and the others hidden. Within
//! a panel at most one question is open at a time. Panels remember their open
//! question across tab switches.

use tracing::debug;

use crate::event::Key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqPanel {
    pub id: String,
    pub questions: usize,
}

impl FaqPanel {
    pub fn new(id: impl Into<String>, questions: usize) -> Self {
        Self { id: id.into(), questions }
    }
}

/// The element holding keyboard focus inside the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqTarget {
    Tab(usize),
    Question { panel: usize, item: usize },
}

#[derive(Debug, Clone)]
pub struct Faq {
    panels: Vec<FaqPanel>,
    active_tab: usize,
    open_items: Vec<Option<usize>>,
    focused: Option<FaqTarget>,
}

impl Faq {
    pub fn new(panels: Vec<FaqPanel>) -> Self {
        let open_items = vec![None; panels.len()];
        Self { panels, active_tab: 0, open_items, focused: None }
    }

    pub fn tab_count(&self) -> usize {
        self.panels.len()
    }

    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    pub fn active_panel(&self) -> Option<&FaqPanel> {
        self.panels.get(self.active_tab)
    }

    /// Makes tab `index` active. Out-of-range indices are ignored.
    pub fn select_tab(&mut self, index: usize) -> bool {
        if index >= self.panels.len() {
            return false;
        }
        self.active_tab = index;
        debug!(tab = %self.panels[index].id, "faq tab selected");
        true
    }

    pub fn select_tab_id(&mut self, id: &str) -> bool {
        match self.panels.iter().position(|p| p.id == id) {
            Some(index) => self.select_tab(index),
            None => false,
        }
    }

    /// Drives both the `is-active` marker and `aria-selected` of a tab.
    pub fn is_tab_active(&self, index: usize) -> bool {
        index == self.active_tab && index < self.panels.len()
    }

    pub fn is_panel_hidden(&self, index: usize) -> bool {
        !self.is_tab_active(index)
    }

    /// Opens `item` in `panel`, closing any other open question there, or
    /// closes it if it was already open.
    pub fn toggle(&mut self, panel: usize, item: usize) -> bool {
        let Some(questions) = self.panels.get(panel).map(|p| p.questions) else {
            return false;
        };
        if item >= questions {
            return false;
        }
        let slot = &mut self.open_items[panel];
        *slot = if *slot == Some(item) { None } else { Some(item) };
        debug!(panel, item, open = slot.is_some(), "faq question toggled");
        true
    }

    /// Drives `is-open` and `aria-expanded` of a question.
    pub fn is_open(&self, panel: usize, item: usize) -> bool {
        self.open_items.get(panel).copied().flatten() == Some(item)
    }

    pub fn open_item(&self, panel: usize) -> Option<usize> {
        self.open_items.get(panel).copied().flatten()
    }

    pub fn focus(&mut self, target: FaqTarget) {
        self.focused = Some(target);
    }

    pub fn focused(&self) -> Option<FaqTarget> {
        self.focused
    }

    /// Arrow keys on a tab select and focus its neighbour, wrapping at both
    /// ends. Enter or Space on a question toggles it.
    pub fn handle_key(&mut self, key: Key) {
        match (self.focused, key) {
            (Some(FaqTarget::Tab(current)), Key::ArrowRight | Key::ArrowLeft) => {
                let total = self.panels.len();
                if total == 0 {
                    return;
                }
                let next = if key == Key::ArrowRight {
                    (current + 1) % total
                } else {
                    (current + total - 1) % total
                };
                self.select_tab(next);
                self.focused = Some(FaqTarget::Tab(next));
            }
            (Some(FaqTarget::Question { panel, item }), Key::Enter | Key::Space) => {
                self.toggle(panel, item);
            }
            _ => {}
        }
    }
}
