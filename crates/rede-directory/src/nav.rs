//! Collapsible navigation menu used on narrow windows.

/// Open/closed state of the navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
    breakpoint: u32,
}

impl NavMenu {
    /// Creates a closed menu that collapses at widths up to `breakpoint`.
    pub fn new(breakpoint: u32) -> Self {
        Self {
            open: false,
            breakpoint,
        }
    }

    /// Whether the menu is open. Also the `aria-expanded` value and whether
    /// page scrolling is locked.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the menu and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A menu link was followed at window `width`.
    pub fn link_clicked(&mut self, width: u32) {
        if width <= self.breakpoint {
            self.open = false;
        }
    }

    /// The window was resized to `width`.
    pub fn resized(&mut self, width: u32) {
        if width > self.breakpoint {
            self.open = false;
        }
    }

    pub fn is_collapsed_at(&self, width: u32) -> bool {
        width <= self.breakpoint
    }
}
