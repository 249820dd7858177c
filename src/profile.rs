use chrono::{DateTime, Datelike};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::{json, Value};

use crate::i18n::{translations, Lang};

pub const NAME: &str = "JOÃO VITOR";
pub const ROLE: &str = "FULLSTACK DEV";
pub const JOB_TITLE: &str = "Fullstack Developer";
pub const SITE_URL: &str = "https://www.joaovitorafb.site";
pub const IMAGE_URL: &str = "https://www.joaovitorafb.site/assets/3394.jpg";
pub const EMAIL: &str = "jvitorafb@gmail.com";
pub const GITHUB_HANDLE: &str = "JvitorAfb2004";
pub const LINKEDIN_HANDLE: &str = "jvitorafb";
pub const WHATSAPP_NUMBER: &str = "5574999835227";
pub const REVIEWS_URL: &str = "https://www.99freelas.com.br/user/jvitorafb";
pub const CV_PATH: &str = "/Curriculo%20JOAO%20VITOR%20ALVES%20FERNANDES%20BARROS.pdf";
pub const CV_DOWNLOAD_NAME: &str = "Curriculo-JoaoVitor.pdf";
pub const FAVICON_PATH: &str = "/favicon.png";

/// Formspree relay that receives the contact form.
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/movdqyyo";

pub const KNOWS_ABOUT: &[&str] = &[
    "React",
    "Vue.js",
    "Node.js",
    "TypeScript",
    "DevOps",
    "AI Automation",
];

const FALLBACK_YEAR: i32 = 2025;

/// Escapes everything except alphanumerics and `-_.!~*'()`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn mailto_link() -> String {
    format!("mailto:{EMAIL}")
}

pub fn github_link() -> String {
    format!("https://github.com/{GITHUB_HANDLE}")
}

pub fn linkedin_link() -> String {
    format!("https://linkedin.com/in/{LINKEDIN_HANDLE}")
}

pub fn whatsapp_link() -> String {
    format!("https://wa.me/{WHATSAPP_NUMBER}")
}

/// WhatsApp deep link with a prefilled message. Spaces become `%20`, not `+`.
pub fn whatsapp_link_with_text(text: &str) -> String {
    format!(
        "{}?text={}",
        whatsapp_link(),
        utf8_percent_encode(text, URI_COMPONENT)
    )
}

pub fn request_similar_message(lang: Lang, project_title: &str) -> String {
    match lang {
        Lang::Pt => format!(
            "Olá, vi o projeto {project_title} no seu portfólio e gostaria de um igual."
        ),
        Lang::En => format!(
            "Hello, I saw the project {project_title} in your portfolio and would like one like it."
        ),
    }
}

pub fn request_similar_link(lang: Lang, project_title: &str) -> String {
    whatsapp_link_with_text(&request_similar_message(lang, project_title))
}

/// schema.org `Person` block embedded as JSON-LD.
pub fn structured_data(lang: Lang) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Person",
        "name": NAME,
        "jobTitle": JOB_TITLE,
        "url": SITE_URL,
        "image": IMAGE_URL,
        "sameAs": [github_link(), linkedin_link()],
        "knowsAbout": KNOWS_ABOUT,
        "description": translations(lang).meta.description,
    })
}

/// Year the site was built, used for the footer copyright.
pub fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|d| d.year())
        .unwrap_or(FALLBACK_YEAR)
}
