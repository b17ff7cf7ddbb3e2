use super::*;

// =============================================================
// ViewState defaults
// =============================================================

#[test]
fn view_state_default_section_is_home() {
    let state = ViewState::default();
    assert_eq!(state.active_section, Section::Home);
}

#[test]
fn view_state_default_pointer_is_origin() {
    let state = ViewState::default();
    assert_eq!(state.pointer, PointerPosition { x: 0.0, y: 0.0 });
}

#[test]
fn view_state_default_is_not_loaded() {
    let state = ViewState::default();
    assert!(!state.loaded);
}

// =============================================================
// Section selection
// =============================================================

#[test]
fn select_section_activates_each_variant() {
    let mut state = ViewState::default();
    for section in Section::ALL {
        state.select_section(section);
        assert_eq!(state.active_section, section);
    }
}

#[test]
fn select_section_leaves_pointer_and_loaded_untouched() {
    let mut state = ViewState::default();
    state.track_pointer(40.0, 80.0);
    state.mark_loaded();

    state.select_section(Section::Projects);

    assert_eq!(state.pointer, PointerPosition { x: 40.0, y: 80.0 });
    assert!(state.loaded);
}

// =============================================================
// Pointer tracking
// =============================================================

#[test]
fn track_pointer_stores_most_recent_coordinates() {
    let mut state = ViewState::default();
    state.track_pointer(12.0, 34.0);
    state.track_pointer(56.5, 78.25);
    assert_eq!(state.pointer, PointerPosition { x: 56.5, y: 78.25 });
}

#[test]
fn track_pointer_leaves_section_and_loaded_untouched() {
    let mut state = ViewState::default();
    state.select_section(Section::About);

    state.track_pointer(100.0, 200.0);

    assert_eq!(state.active_section, Section::About);
    assert!(!state.loaded);
}

// =============================================================
// Loaded flag
// =============================================================

#[test]
fn mark_loaded_flips_once_and_stays_set() {
    let mut state = ViewState::default();
    state.mark_loaded();
    assert!(state.loaded);
    state.mark_loaded();
    assert!(state.loaded);
}

// =============================================================
// Section
// =============================================================

#[test]
fn section_default_is_home() {
    assert_eq!(Section::default(), Section::Home);
}

#[test]
fn section_all_lists_four_distinct_variants_in_nav_order() {
    assert_eq!(
        Section::ALL,
        [
            Section::Home,
            Section::About,
            Section::Projects,
            Section::Contact,
        ]
    );
    for (i, a) in Section::ALL.iter().enumerate() {
        for (j, b) in Section::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn section_labels_are_lowercase_captions() {
    assert_eq!(Section::Home.label(), "home");
    assert_eq!(Section::About.label(), "about");
    assert_eq!(Section::Projects.label(), "projects");
    assert_eq!(Section::Contact.label(), "contact");
}
