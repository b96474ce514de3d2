use dietwise_core::domain::recommendation::{
    entities::{Age, Gender, Language, RecommendationResult},
    value_objects::SubmitFormInput,
};

use crate::{application::http::html::escape_html, args::ServerArgs};

const TITLE: &str = "Disease Classification and Diet Recommendations";
const HEALTH_TIP: &str = "Maintain a balanced diet, stay hydrated, and get regular exercise.";
const FOODS_NOTE: &str =
    "This section could provide nutritional facts and benefits of recommended foods.";

/// Everything needed to render the single recommendation page.
pub struct PageView<'a> {
    root_path: &'a str,
    contact_email: &'a str,
    form: &'a SubmitFormInput,
    warning: Option<String>,
    result: Option<&'a RecommendationResult>,
}

impl<'a> PageView<'a> {
    pub fn new(server: &'a ServerArgs, form: &'a SubmitFormInput) -> Self {
        Self {
            root_path: &server.root_path,
            contact_email: &server.contact_email,
            form,
            warning: None,
            result: None,
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warning = Some(warning.into());
        self
    }

    pub fn with_result(mut self, result: &'a RecommendationResult) -> Self {
        self.result = Some(result);
        self
    }
}

pub fn render_page(view: &PageView<'_>) -> String {
    let root = escape_html(view.root_path);
    let form = render_form(&root, view.form);
    let warning = view
        .warning
        .as_deref()
        .map(|warning| {
            format!(
                r#"<div class="warning" role="alert">{}</div>"#,
                escape_html(warning)
            )
        })
        .unwrap_or_default();
    let results = view
        .result
        .map(|result| render_results(&root, result))
        .unwrap_or_default();
    let sidebar = render_sidebar(view.contact_email);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{TITLE}</title>
<style>
*,*::before,*::after{{box-sizing:border-box}}
body{{margin:0;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:#fafaf9;color:#1c1917;display:flex;min-height:100vh}}
aside{{width:280px;background:#f0f2f6;padding:32px 24px;flex-shrink:0}}
main{{flex:1;max-width:760px;margin:0 auto;padding:32px 24px}}
h1{{font-size:1.9rem;margin:0 0 24px}}
label{{display:block;font-size:.9rem;margin:16px 0 6px}}
input,select{{width:100%;padding:10px;border:1px solid #d6d3d1;border-radius:8px;font-size:1rem;background:#fff}}
.btn{{margin-top:20px;padding:10px 18px;border:1px solid #d6d3d1;border-radius:8px;background:#fff;font-size:1rem;cursor:pointer}}
.btn:hover{{border-color:#ff4b4b;color:#ff4b4b}}
.warning{{margin-top:20px;padding:14px 16px;border-radius:8px;background:#fffce7;color:#926c05}}
.output{{white-space:pre-wrap;line-height:1.5}}
details{{margin:24px 0;border:1px solid #e7e5e4;border-radius:8px;padding:12px 16px}}
summary{{cursor:pointer}}
</style>
</head>
<body>
{sidebar}
<main>
<h1>{TITLE}</h1>
{form}
{warning}
{results}
</main>
</body>
</html>"##
    )
}

fn render_form(root: &str, form: &SubmitFormInput) -> String {
    let language = form.language.as_deref().unwrap_or(Language::default().as_str());
    let gender = form.gender.as_deref().unwrap_or(Gender::default().as_str());
    let age = form.age.as_deref().unwrap_or("0");

    let language_options = render_options(Language::ALL.iter().map(|l| l.as_str()), language);
    let gender_options = render_options(Gender::ALL.iter().map(|g| g.as_str()), gender);

    format!(
        r#"<form method="post" action="{root}/recommendations">
<label for="language">Select your preferred language:</label>
<select id="language" name="language">{language_options}</select>
<label for="disease">Enter the disease name:</label>
<input id="disease" name="disease" type="text" value="{disease}">
<label for="age">Enter your age:</label>
<input id="age" name="age" type="number" min="{age_min}" max="{age_max}" step="1" value="{age}">
<label for="gender">Select your gender:</label>
<select id="gender" name="gender">{gender_options}</select>
<label for="allergies">List any food allergies or dietary preferences (optional):</label>
<input id="allergies" name="allergies" type="text" value="{allergies}">
<button class="btn" type="submit">Get Recommendations</button>
</form>"#,
        disease = escape_html(form.disease.as_deref().unwrap_or_default()),
        age_min = Age::MIN,
        age_max = Age::MAX,
        age = escape_html(age),
        allergies = escape_html(form.allergies.as_deref().unwrap_or_default()),
    )
}

fn render_options<'a>(values: impl Iterator<Item = &'a str>, selected: &str) -> String {
    values
        .map(|value| {
            let marker = if value == selected { " selected" } else { "" };
            format!(r#"<option value="{value}"{marker}>{value}</option>"#)
        })
        .collect()
}

fn render_results(root: &str, result: &RecommendationResult) -> String {
    let sections: String = result
        .sections()
        .map(|(kind, text)| {
            format!(
                r#"<section id="{id}">
<h2>{label}:</h2>
<div class="output">{text}</div>
</section>
"#,
                id = kind.as_str(),
                label = kind.label(),
                text = escape_html(text),
            )
        })
        .collect();

    let hidden_fields: String = result
        .sections()
        .map(|(kind, text)| {
            format!(
                r#"<input type="hidden" name="{name}" value="{value}">"#,
                name = kind.as_str(),
                value = escape_html(text),
            )
        })
        .collect();

    format!(
        r#"{sections}<details>
<summary>Learn more about recommended foods</summary>
<p>{FOODS_NOTE}</p>
</details>
<form method="post" action="{root}/recommendations/download">
{hidden_fields}
<button class="btn" type="submit">Download Recommendations</button>
</form>"#
    )
}

fn render_sidebar(contact_email: &str) -> String {
    let email = escape_html(contact_email);

    format!(
        r#"<aside>
<h2>Health Tips</h2>
<p>{HEALTH_TIP}</p>
<h3>Contact Us</h3>
<p>For queries or feedback, email us at <a href="mailto:{email}">{email}</a></p>
</aside>"#
    )
}
