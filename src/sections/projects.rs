//! Featured projects section.

use leptos::prelude::*;

use crate::content::PROJECTS;

/// Projects section: one card per `content::PROJECTS` entry with title,
/// tech stack, description, a per-card gradient hover wash, and two
/// decorative buttons.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section class="section section--projects">
            <div class="projects">
                <h2 class="section__heading section__heading--centered">"Featured Projects"</h2>
                <div class="projects__grid">
                    {PROJECTS
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let delay = format!("animation-delay: {}ms;", index * 200);
                            let wash_class =
                                format!("project-card__wash {}", project.accent_gradient);
                            view! {
                                <div class="project-card" style=delay>
                                    <div class=wash_class></div>
                                    <div class="project-card__body">
                                        <h3 class="project-card__title">{project.title}</h3>
                                        <p class="project-card__tech">{project.tech_stack}</p>
                                        <p class="project-card__description">
                                            {project.description}
                                        </p>
                                        <div class="project-card__actions">
                                            <button class="btn btn--small btn--primary">
                                                "Live Demo"
                                            </button>
                                            <button class="btn btn--small btn--outline">
                                                "GitHub"
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
