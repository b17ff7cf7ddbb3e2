//! About section with bio, skill grid, and spinning ring avatar.

use leptos::prelude::*;

use crate::content::SKILLS;

/// About section: two bio paragraphs, the twelve-skill grid, and the
/// gradient ring avatar. Skill cells stagger in via index-based delays.
#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section class="section section--about">
            <div class="about">
                <div class="about__text">
                    <h2 class="section__heading">"About Me"</h2>
                    <p class="about__lead">
                        "I'm a passionate developer who loves creating innovative solutions \
                        that make a difference. With expertise spanning frontend, backend, \
                        and cloud technologies, I bring ideas to life through clean, \
                        efficient code."
                    </p>
                    <p class="about__detail">
                        "When I'm not coding, you'll find me exploring new technologies, \
                        contributing to open source, or sharing knowledge with the \
                        developer community."
                    </p>
                    <div class="about__skills">
                        {SKILLS
                            .into_iter()
                            .enumerate()
                            .map(|(index, skill)| {
                                let delay = format!("animation-delay: {}ms;", index * 100);
                                view! {
                                    <div class="about__skill" style=delay>
                                        {skill}
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                <div class="about__figure">
                    <div class="about__ring">
                        <div class="about__ring-spin"></div>
                        <div class="about__ring-face">
                            <div class="about__ring-emoji">"\u{1F468}\u{200D}\u{1F4BB}"</div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
