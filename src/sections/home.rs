//! Landing hero with staggered entry transitions.

use leptos::prelude::*;

use crate::state::view::ViewState;

/// Home section: headline, tagline, and two decorative call-to-action
/// buttons. Heading, tagline, and button row each transition in once the
/// loaded flag flips, staggered by CSS delays.
#[component]
pub fn HomeSection() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();
    let loaded = move || view.get().loaded;

    view! {
        <section class="section section--home">
            <div class="home-hero">
                <h1 class="home-hero__title" class=("home-hero__title--loaded", loaded)>
                    <span class="home-hero__title-accent">"Full Stack"</span>
                    <br/>
                    <span>"Developer"</span>
                </h1>
                <p class="home-hero__tagline" class=("home-hero__tagline--loaded", loaded)>
                    "Crafting digital experiences that push boundaries"
                </p>
                <div class="home-hero__actions" class=("home-hero__actions--loaded", loaded)>
                    <button class="btn btn--primary">"View My Work"</button>
                    <button class="btn btn--outline">"Get In Touch"</button>
                </div>
            </div>
        </section>
    }
}
