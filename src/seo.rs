use serde_json::json;

use crate::content::{LANGUAGES, PROFILE, SKILLS};

/// schema.org `Person` description of the page owner, for search engines.
///
/// The result is safe to embed in a `<script>` element.
pub fn person_json_ld() -> String {
    let knows_about = SKILLS
        .iter()
        .flat_map(|leaf| leaf.description.split(", "))
        .collect::<Vec<_>>();
    let knows_language = LANGUAGES.iter().map(|l| l.name).collect::<Vec<_>>();

    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": PROFILE.name,
        "description": PROFILE.tagline,
        "image": PROFILE.face_image,
        "jobTitle": PROFILE.job_title,
        "knowsAbout": knows_about,
        "knowsLanguage": knows_language,
    })
    .to_string()
    .replace("</", "<\\/")
}
