//! Contact section with channel cards and a closing call to action.

use leptos::prelude::*;

use crate::content::CONTACT_METHODS;

/// Contact section: headline, lead paragraph, one card per
/// `content::CONTACT_METHODS` entry, and a decorative CTA button.
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section class="section section--contact">
            <div class="contact">
                <h2 class="section__heading section__heading--centered">
                    "Let's Build Something Amazing"
                </h2>
                <p class="contact__lead">
                    "Ready to turn your ideas into reality? Let's connect and create \
                    something extraordinary together."
                </p>
                <div class="contact__grid">
                    {CONTACT_METHODS
                        .into_iter()
                        .map(|contact| {
                            view! {
                                <div class="contact-card">
                                    <div class="contact-card__icon">{contact.icon}</div>
                                    <h3 class="contact-card__label">{contact.label}</h3>
                                    <p class="contact-card__value">{contact.value}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <button class="btn btn--primary btn--large">"Start a Conversation"</button>
            </div>
        </section>
    }
}
