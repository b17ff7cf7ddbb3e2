//! Fixed top navigation bar with the brand mark and section buttons.

use leptos::prelude::*;

use crate::state::view::{Section, ViewState};

/// Navigation bar.
///
/// Shows one button per section in `Section::ALL` order; clicking a button
/// makes that section the active one. The active button is highlighted and
/// carries an animated underline. The brand mark's entry transition is
/// driven by the loaded flag.
#[component]
pub fn Navbar() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <div class="navbar__brand" class=("navbar__brand--loaded", move || view.get().loaded)>
                    "YourName"
                </div>
                <div class="navbar__links">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            let is_active = move || view.get().active_section == section;
                            view! {
                                <button
                                    class="navbar__link"
                                    class=("navbar__link--active", is_active)
                                    on:click=move |_| view.update(|v| v.select_section(section))
                                >
                                    {section.label()}
                                    <Show when=is_active>
                                        <span class="navbar__link-underline"></span>
                                    </Show>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </nav>
    }
}
