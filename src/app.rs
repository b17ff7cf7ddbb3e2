//! Root application component and SSR document shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::navbar::Navbar;
use crate::components::particle_field::ParticleField;
use crate::components::pointer_glow::PointerGlow;
use crate::components::section_host::SectionHost;
use crate::state::view::ViewState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared view-state context, owns the global pointer
/// subscription, and composes the background, glow, navigation, and the
/// active content section.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let view = RwSignal::new(ViewState::default());
    provide_context(view);

    // Effects only run client-side, so this flips once after the first
    // render in the browser and the entry transitions play there.
    Effect::new(move || {
        view.update(|v| v.mark_loaded());
    });

    // Global pointer subscription; the handle is released with the owning
    // scope so no listener outlives the mounted app.
    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            view.update(|v| v.track_pointer(f64::from(ev.client_x()), f64::from(ev.client_y())));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Portfolio"/>

        <div class="portfolio">
            <ParticleField/>
            <PointerGlow/>
            <Navbar/>
            <SectionHost/>
        </div>
    }
}
