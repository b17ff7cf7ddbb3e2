//! Pointer-tracked glow layer.

use leptos::prelude::*;

use crate::state::view::ViewState;
use crate::util::glow::glow_style;

/// Radial glow disc centered on the most recent pointer position.
///
/// Purely decorative; position recomputes reactively from the view state
/// written by the global pointer subscription in `app`.
#[component]
pub fn PointerGlow() -> impl IntoView {
    let view = expect_context::<RwSignal<ViewState>>();

    view! {
        <div class="pointer-glow" style=move || glow_style(view.get().pointer)></div>
    }
}
