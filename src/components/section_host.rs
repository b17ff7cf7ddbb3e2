//! Chooses which content section renders.

use leptos::prelude::*;

use crate::sections::about::AboutSection;
use crate::sections::contact::ContactSection;
use crate::sections::home::HomeSection;
use crate::sections::projects::ProjectsSection;
use crate::state::view::{Section, ViewState};

/// Renders exactly one content section for the active `Section` variant.
///
/// The match is exhaustive, so a new section cannot be added without
/// giving it a render arm.
#[component]
pub fn SectionHost() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();

    view! {
        <div class="section-host">
            {move || match view.get().active_section {
                Section::Home => view! { <HomeSection/> }.into_any(),
                Section::About => view! { <AboutSection/> }.into_any(),
                Section::Projects => view! { <ProjectsSection/> }.into_any(),
                Section::Contact => view! { <ContactSection/> }.into_any(),
            }}
        </div>
    }
}
