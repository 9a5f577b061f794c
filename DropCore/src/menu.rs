//! Menu rows and their shortcut bindings
//!
//! A [`MenuItem`] is a leaf: a label, an optional click action and an
//! optional shortcut. Pressing the shortcut runs the same action a click
//! would. A [`Menu`] owns the rows and the registry that maps key presses to
//! them.

use std::rc::Rc;

use crate::shortcut::{KeyChord, Platform, Shortcut, ShortcutRegistry};

/// Click handler for a menu row.
pub type Callback = Rc<dyn Fn()>;

/// Every action the tray menu can offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    SelectFile,
    PasteFromClipboard,
    RecentUploads,
    About,
    CheckForUpdates,
    Settings,
    Quit,
}

/// Static declaration of a menu row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub action: MenuAction,
    pub label: &'static str,
    pub shortcut: Option<&'static str>,
}

const fn entry(action: MenuAction, label: &'static str, shortcut: Option<&'static str>) -> MenuEntry {
    MenuEntry {
        action,
        label,
        shortcut,
    }
}

const DEFAULT_MENU: &[&[MenuEntry]] = &[
    &[
        entry(MenuAction::SelectFile, "Select File", Some("mod+o")),
        entry(MenuAction::PasteFromClipboard, "Upload from clipboard", Some("mod+shift+v")),
        entry(MenuAction::RecentUploads, "Recent uploads", Some("mod+y")),
    ],
    &[
        entry(MenuAction::About, "About TrayDrop...", None),
        entry(MenuAction::CheckForUpdates, "Check for updates", None),
    ],
    &[
        entry(MenuAction::Settings, "Settings", Some("mod+/")),
        entry(MenuAction::Quit, "Quit", Some("mod+q")),
    ],
];

/// The tray menu layout, one slice per separated group.
pub fn default_menu() -> &'static [&'static [MenuEntry]] {
    DEFAULT_MENU
}

/// A single actionable row.
#[derive(Clone)]
pub struct MenuItem {
    action: MenuAction,
    label: String,
    on_click: Option<Callback>,
    shortcut: Option<Shortcut>,
}

impl MenuItem {
    /// Build a row. An empty or malformed shortcut leaves the row unbound.
    pub fn new(
        action: MenuAction,
        label: impl Into<String>,
        on_click: Option<Callback>,
        shortcut: Option<&str>,
    ) -> Self {
        let shortcut = shortcut.filter(|s| !s.is_empty()).and_then(|s| {
            Shortcut::parse(s)
                .inspect_err(|e| tracing::warn!("Ignoring shortcut for {:?}: {}", action, e))
                .ok()
        });

        Self {
            action,
            label: label.into(),
            on_click,
            shortcut,
        }
    }

    pub fn from_entry(entry: &MenuEntry, on_click: Option<Callback>) -> Self {
        Self::new(entry.action, entry.label, on_click, entry.shortcut)
    }

    pub fn action(&self) -> MenuAction {
        self.action
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn shortcut(&self) -> Option<&Shortcut> {
        self.shortcut.as_ref()
    }

    /// Whether clicking the row does anything
    pub fn is_enabled(&self) -> bool {
        self.on_click.is_some()
    }

    /// Glyph text shown at the end of the row
    pub fn glyph(&self, platform: Platform) -> Option<String> {
        self.shortcut.as_ref().map(|s| s.glyph(platform))
    }

    /// Run the row's action as a click. Returns whether anything ran.
    pub fn activate(&self) -> bool {
        match &self.on_click {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    /// Called when the bound shortcut is pressed.
    pub fn on_shortcut_fired(&self) -> bool {
        if self.shortcut.is_none() {
            return false;
        }
        tracing::debug!("Shortcut fired for {:?}", self.action);
        self.activate()
    }
}

/// Grouped menu rows plus their active shortcut bindings.
pub struct Menu {
    groups: Vec<Vec<MenuItem>>,
    registry: ShortcutRegistry<MenuAction>,
}

impl Menu {
    /// Register every row's shortcut for `platform`.
    ///
    /// A row whose shortcut conflicts with an earlier row keeps its glyph
    /// but is not bound.
    pub fn new(groups: Vec<Vec<MenuItem>>, platform: Platform) -> Self {
        let mut registry = ShortcutRegistry::new(platform);
        for item in groups.iter().flatten() {
            if let Some(shortcut) = item.shortcut()
                && let Err(e) = registry.register(shortcut.clone(), item.action())
            {
                tracing::warn!("Not binding {:?}: {}", item.action(), e);
            }
        }
        Self { groups, registry }
    }

    /// Build from static declarations, asking `wire` for each row's action.
    pub fn from_entries(
        entries: &[&[MenuEntry]],
        platform: Platform,
        mut wire: impl FnMut(MenuAction) -> Option<Callback>,
    ) -> Self {
        let groups = entries
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(|e| MenuItem::from_entry(e, wire(e.action)))
                    .collect()
            })
            .collect();
        Self::new(groups, platform)
    }

    pub fn platform(&self) -> Platform {
        self.registry.platform()
    }

    pub fn groups(&self) -> &[Vec<MenuItem>] {
        &self.groups
    }

    pub fn item(&self, action: MenuAction) -> Option<&MenuItem> {
        self.groups.iter().flatten().find(|i| i.action() == action)
    }

    /// Route a key press to the row bound to it. Returns whether an action ran.
    pub fn dispatch(&self, pressed: &KeyChord) -> bool {
        self.registry
            .lookup(pressed)
            .and_then(|action| self.item(*action))
            .is_some_and(MenuItem::on_shortcut_fired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shortcut::Modifiers;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, Callback) {
        let count = Rc::new(Cell::new(0));
        let inner = count.clone();
        (count, Rc::new(move || inner.set(inner.get() + 1)))
    }

    fn ctrl(key: &str) -> KeyChord {
        KeyChord::new(
            Modifiers {
                ctrl: true,
                ..Modifiers::NONE
            },
            key,
        )
    }

    #[test]
    fn test_shortcut_fires_same_action_as_click() {
        let (count, callback) = counter();
        let item = MenuItem::new(MenuAction::Quit, "Quit", Some(callback), Some("mod+q"));

        assert!(item.activate());
        assert!(item.on_shortcut_fired());
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_item_without_shortcut_is_inert() {
        let (count, callback) = counter();
        let item = MenuItem::new(MenuAction::About, "About", Some(callback), None);
        let menu = Menu::new(vec![vec![item.clone()]], Platform::Other);

        assert!(!item.on_shortcut_fired());
        for key in ["a", "q", "o", "/", "v"] {
            assert!(!menu.dispatch(&ctrl(key)));
            assert!(!menu.dispatch(&KeyChord::new(Modifiers::NONE, key)));
        }
        assert_eq!(count.get(), 0);
        assert_eq!(item.glyph(Platform::Other), None);
    }

    #[test]
    fn test_empty_shortcut_string_means_unbound() {
        let item = MenuItem::new(MenuAction::Settings, "Settings", None, Some(""));
        assert!(item.shortcut().is_none());
    }

    #[test]
    fn test_dispatch_routes_to_bound_row() {
        let (opened, open_cb) = counter();
        let (quit, quit_cb) = counter();

        let menu = Menu::from_entries(default_menu(), Platform::Other, |action| match action {
            MenuAction::SelectFile => Some(open_cb.clone()),
            MenuAction::Quit => Some(quit_cb.clone()),
            _ => None,
        });

        assert!(menu.dispatch(&ctrl("o")));
        assert!(menu.dispatch(&ctrl("Q")));
        // Bound but no action wired
        assert!(!menu.dispatch(&ctrl("y")));

        assert_eq!(opened.get(), 1);
        assert_eq!(quit.get(), 1);
    }

    #[test]
    fn test_conflicting_row_stays_unbound() {
        let (first, first_cb) = counter();
        let (second, second_cb) = counter();
        let menu = Menu::new(
            vec![vec![
                MenuItem::new(MenuAction::SelectFile, "Open", Some(first_cb), Some("mod+o")),
                MenuItem::new(MenuAction::RecentUploads, "Also open", Some(second_cb), Some("ctrl+o")),
            ]],
            Platform::Other,
        );

        assert!(menu.dispatch(&ctrl("o")));
        assert_eq!((first.get(), second.get()), (1, 0));
    }

    #[test]
    fn test_default_menu_glyphs() {
        let menu = Menu::from_entries(default_menu(), Platform::Mac, |_| None);
        let glyphs: Vec<_> = menu
            .groups()
            .iter()
            .flatten()
            .filter_map(|i| i.glyph(Platform::Mac))
            .collect();
        assert_eq!(glyphs, vec!["⌘O", "⌘⇧V", "⌘Y", "⌘/", "⌘Q"]);
    }
}
