use super::*;

// =============================================================
// Skills
// =============================================================

#[test]
fn skills_has_twelve_entries_in_fixed_order() {
    assert_eq!(SKILLS.len(), 12);
    assert_eq!(SKILLS.first(), Some(&"React"));
    assert_eq!(SKILLS.last(), Some(&"CI/CD"));
}

#[test]
fn skills_are_distinct_and_non_empty() {
    for (i, a) in SKILLS.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &SKILLS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

// =============================================================
// Projects
// =============================================================

#[test]
fn projects_has_three_entries_in_fixed_order() {
    assert_eq!(PROJECTS.len(), 3);
    assert_eq!(PROJECTS[0].title, "AI-Powered Analytics Dashboard");
    assert_eq!(PROJECTS[1].title, "Blockchain Voting System");
    assert_eq!(PROJECTS[2].title, "Cloud Infrastructure Manager");
}

#[test]
fn project_titles_are_unique() {
    for (i, a) in PROJECTS.iter().enumerate() {
        for b in &PROJECTS[i + 1..] {
            assert_ne!(a.title, b.title);
        }
    }
}

#[test]
fn project_fields_are_populated() {
    for project in &PROJECTS {
        assert!(!project.tech_stack.is_empty());
        assert!(!project.description.is_empty());
        assert!(project.accent_gradient.starts_with("project-card__wash--"));
    }
}

// =============================================================
// Contact methods
// =============================================================

#[test]
fn contact_methods_has_three_entries_in_fixed_order() {
    assert_eq!(CONTACT_METHODS.len(), 3);
    assert_eq!(CONTACT_METHODS[0].label, "Email");
    assert_eq!(CONTACT_METHODS[1].label, "LinkedIn");
    assert_eq!(CONTACT_METHODS[2].label, "GitHub");
}

#[test]
fn contact_methods_are_populated() {
    for contact in &CONTACT_METHODS {
        assert!(!contact.icon.is_empty());
        assert!(!contact.value.is_empty());
    }
}
