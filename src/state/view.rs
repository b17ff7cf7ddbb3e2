//! View state for section switching, pointer tracking, and entry transitions.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

/// The four mutually-exclusive content sections.
///
/// Exactly one is active at a time; rendering matches exhaustively on the
/// variant, so adding a section here forces every render site to handle it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// Lowercase caption shown on the navigation button.
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }
}

/// Most recent pointer coordinates, in client (viewport) space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// Transient UI state owned by the mounted application.
///
/// `loaded` starts false, flips true once after the first client render to
/// drive entry transitions, and never reverts.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub active_section: Section,
    pub pointer: PointerPosition,
    pub loaded: bool,
}

impl ViewState {
    /// Switch the active section. No other state is affected.
    pub fn select_section(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Record the most recent pointer coordinates. Last writer wins.
    pub fn track_pointer(&mut self, x: f64, y: f64) {
        self.pointer = PointerPosition { x, y };
    }

    /// Flip the one-shot loaded flag. Idempotent; there is no reset path.
    pub fn mark_loaded(&mut self) {
        self.loaded = true;
    }
}
