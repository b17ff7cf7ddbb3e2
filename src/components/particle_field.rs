//! Decorative animated background of randomly scattered particles.

use leptos::prelude::*;

use crate::util::particles::ParticleStyle;

/// Full-viewport background layer: gradient wash plus fifty pulsing dots.
///
/// Placement and timing are drawn once per mount from `Math.random`; the
/// server renders the gradient wash only and the dots fill in on hydration.
/// Re-renders never reshuffle an already-scattered field.
#[component]
pub fn ParticleField() -> impl IntoView {
    let dots = RwSignal::new(Vec::<ParticleStyle>::new());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::particles::{PARTICLE_COUNT, scatter};

        Effect::new(move || {
            if dots.with_untracked(|d| d.is_empty()) {
                dots.set(scatter(PARTICLE_COUNT, js_sys::Math::random));
            }
        });
    }

    view! {
        <div class="particle-field">
            <div class="particle-field__wash"></div>
            {move || {
                dots.get()
                    .into_iter()
                    .map(|dot| {
                        view! { <div class="particle-field__dot" style=dot.inline_style()></div> }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
