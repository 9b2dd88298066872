use content::{DetailState, ProjectView};
use dioxus::prelude::*;

/// Content of `#projects-content`: one collapsible entry per loaded project.
#[component]
pub fn ProjectList(projects: Vec<ProjectView>) -> Element {
    rsx! {
        for (index, project) in projects.into_iter().enumerate() {
            ProjectEntry { key: "{index}", project }
        }
    }
}

/// A project header that toggles its detail block. Entries toggle
/// independently; any number may be open at once.
#[component]
pub fn ProjectEntry(project: ProjectView) -> Element {
    let mut state = use_signal(DetailState::default);

    rsx! {
        div {
            class: "project",
            h3 {
                class: state().header_class(),
                onclick: move |_| state.set(state().toggle()),
                "{project.title} "
                span { class: "icon" }
            }
            div {
                class: "project-content",
                display: state().display(),
                dangerous_inner_html: "{project.detail_html}",
            }
        }
    }
}
