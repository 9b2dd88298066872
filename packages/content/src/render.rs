//! HTML fragments for the page containers.
//!
//! Every function returns the complete new content of one container. Values
//! are interpolated as they appear in the documents; nothing is escaped.

use std::fmt::Write;

use crate::models::{Education, Link, Profile, Project};

/// Content of `#education-content`.
pub fn education_html(education: &Education) -> String {
    let mut html = String::new();

    for e in education.formal.iter().flatten() {
        let _ = write!(
            html,
            "<div class=\"edu-entry\"><strong>{}</strong>, {} ({}–{})</div>",
            e.degree, e.institution, e.start, e.end
        );
    }

    // The heading appears whenever the key is present, even for an empty list.
    if let Some(side_quests) = &education.side_quests {
        html.push_str("<br><h3>Side Quests</h3>");
        for s in side_quests {
            let _ = write!(
                html,
                "<div class=\"side-entry\"><strong>{}</strong> — {}</div>",
                s.title, s.organizer
            );
        }
    }

    html
}

/// Content of `#contact-content`.
pub fn contact_html(profile: &Profile) -> String {
    let mut html = String::new();

    if let Some(email) = &profile.email {
        let _ = write!(html, "<div><a href=\"mailto:{email}\">{email}</a></div>");
    }
    for Link { label, url } in profile.socials.iter().flatten() {
        let _ = write!(html, "<div><a href=\"{url}\" target=\"_blank\">{label}</a></div>");
    }

    html
}

/// Detail block of one project. `markdown_html` is the already rendered
/// project file, when one was available.
pub fn project_detail_html(project: &Project, markdown_html: Option<&str>) -> String {
    let mut html = format!("<p>{}</p>", project.description);

    if let Some(markdown_html) = markdown_html {
        let _ = write!(html, "<div>{markdown_html}</div>");
    }

    if let Some(links) = &project.links {
        html.push_str("<div class=\"links\">");
        for Link { label, url } in links {
            let _ = write!(html, "<a href=\"{url}\" target=\"_blank\">{label}</a>");
        }
        html.push_str("</div>");
    }

    html
}
