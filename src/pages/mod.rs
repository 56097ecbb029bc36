//! Server-rendered HTML pages.

use askama::Template;
use axum::{extract::State, response::Html};

use crate::{
    api::ApiError,
    app_state::AppState,
    form::{ENV_APP_CONFIG, ENV_GAS_URL, FieldSpec},
};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub fields: Vec<FieldSpec>,
    pub configured: bool,
}

#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub title: String,
    pub source: &'static str,
    pub config_json: String,
    pub app_config_var: &'static str,
    pub gas_url_var: &'static str,
}

/// The check-in form, built from the active configuration.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let config = state.resolver.resolve();
    let form = config.form();
    let page = IndexTemplate {
        title: form.title,
        fields: form.fields,
        configured: config.webhook_url().is_some(),
    };
    Ok(Html(page.render()?))
}

/// Read-only instructions for operators.
pub async fn admin(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let config = state.resolver.resolve();
    let config_json = serde_json::to_string_pretty(&config)
        .unwrap_or_else(|err| format!("<unavailable: {err}>"));
    let page = AdminTemplate {
        title: config.form().title,
        source: config.source().as_str(),
        config_json,
        app_config_var: ENV_APP_CONFIG,
        gas_url_var: ENV_GAS_URL,
    };
    Ok(Html(page.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldType, FormConfig};

    #[test]
    fn index_renders_every_field() {
        let form = FormConfig::default_with_url("");
        let html = IndexTemplate {
            title: form.title,
            fields: form.fields,
            configured: false,
        }
        .render()
        .unwrap();

        assert!(html.contains("<h1>Location Check-in</h1>"));
        assert!(html.contains(r#"name="name" type="text" required"#));
        assert!(html.contains(r#"name="phone" type="tel" required"#));
        assert!(html.contains(r#"<textarea id="notes" name="notes" rows="4">"#));
        assert!(html.contains("Submissions are disabled"));
    }

    #[test]
    fn index_escapes_operator_text() {
        let html = IndexTemplate {
            title: "<script>alert(1)</script>".to_string(),
            fields: vec![FieldSpec::new("x", FieldType::Email, "A & B", false)],
            configured: true,
        }
        .render()
        .unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("A &amp; B"));
        assert!(html.contains(r#"type="email""#));
        assert!(!html.contains("Submissions are disabled"));
    }
}
