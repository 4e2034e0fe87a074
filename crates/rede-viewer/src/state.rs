//! Application state for the lab directory viewer.

use dioxus::prelude::*;

use rede_directory::{
    DirectoryConfig, DirectoryController, Language, ListBackend, ListEntry, NavMenu,
    PreferenceStore, Preferences, RecordStore, Theme,
};

use crate::bridge::{script, LeafletMap};

/// How long the exit animation of a notification runs.
pub const TOAST_EXIT_MS: u64 = 300;

/// The directory controller as hosted by the viewer.
pub type LabController = DirectoryController<SignalList, LeafletMap>;

/// Returns the element id of the list entry at `position`.
pub fn list_item_id(position: usize) -> String {
    format!("lab-item-{position}")
}

/// [`ListBackend`] whose entries are rendered by the `LabList` component.
#[derive(Debug, Clone, Default)]
pub struct SignalList {
    entries: Vec<ListEntry>,
    highlighted: Option<usize>,
}

impl SignalList {
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    pub fn is_highlighted(&self, position: usize) -> bool {
        self.highlighted == Some(position)
    }
}

impl ListBackend for SignalList {
    fn replace_entries(&mut self, entries: Vec<ListEntry>) {
        self.entries = entries;
        self.highlighted = None;
    }

    fn set_highlighted(&mut self, position: usize, highlighted: bool) {
        if highlighted {
            self.highlighted = Some(position);
        } else if self.highlighted == Some(position) {
            self.highlighted = None;
        }
    }

    fn scroll_into_view(&mut self, position: usize) {
        document::eval(&script::scroll_into_view(&list_item_id(position)));
    }
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    /// Set once the exit animation has started.
    pub leaving: bool,
}

/// Main application state.
pub struct ViewerState {
    /// Directory with its list and map.
    pub controller: LabController,

    /// Theme and language.
    pub prefs: Preferences,

    /// Where preferences are persisted.
    pref_store: Box<dyn PreferenceStore>,

    /// Collapsible navigation menu.
    pub menu: NavMenu,

    /// Last reported window width in CSS pixels.
    pub window_width: u32,

    /// Visible notifications, oldest first.
    pub toasts: Vec<Toast>,

    next_toast_id: u64,

    pub config: DirectoryConfig,
}

impl ViewerState {
    /// Creates the state and renders the list. The map is rendered once its
    /// container is mounted.
    pub fn new(
        store: RecordStore,
        config: DirectoryConfig,
        pref_store: Box<dyn PreferenceStore>,
    ) -> Self {
        let prefs = Preferences::load(pref_store.as_ref());
        let mut controller = DirectoryController::new(
            store,
            SignalList::default(),
            LeafletMap::new(),
            config.map.clone(),
        );
        controller.refresh();

        Self {
            controller,
            prefs,
            pref_store,
            menu: NavMenu::new(config.menu_breakpoint),
            window_width: 0,
            toasts: Vec::new(),
            next_toast_id: 0,
            config,
        }
    }

    pub fn theme(&self) -> Theme {
        self.prefs.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.prefs.toggle_theme(self.pref_store.as_mut())
    }

    /// Switches the language and returns the notification text.
    pub fn set_language(&mut self, language: Language) -> String {
        self.prefs.set_language(language, self.pref_store.as_mut())
    }

    /// Handles a window resize.
    pub fn window_resized(&mut self, width: u32) {
        self.window_width = width;
        self.menu.resized(width);
        self.controller.resize();
    }

    /// Handles a click on a navigation link.
    pub fn follow_menu_link(&mut self) {
        self.menu.link_clicked(self.window_width);
    }

    /// Shows a notification and returns its id.
    pub fn push_toast(&mut self, message: impl Into<String>) -> u64 {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            leaving: false,
        });
        id
    }

    pub fn mark_toast_leaving(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.id == id) {
            toast.leaving = true;
        }
    }

    pub fn remove_toast(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
