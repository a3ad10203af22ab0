//! Template engine for assistant replies using Jinja2 syntax.
//!
//! Templates live in `templates/` at the crate root and are compiled into the
//! binary, so rendering never touches the filesystem.

use minijinja::{Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Embedded templates as (name, source)
const TEMPLATES: &[(&str, &str)] = &[
    (
        "assistant/order_summary.sv.jinja",
        include_str!("../../../templates/assistant/order_summary.sv.jinja"),
    ),
    (
        "assistant/order_summary.en.jinja",
        include_str!("../../../templates/assistant/order_summary.en.jinja"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);

    for (name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a template with the given context.
///
/// # Example
/// ```ignore
/// use minijinja::context;
/// use crate::shared::templates::render_template;
///
/// let text = render_template(
///     "assistant/order_summary.sv.jinja",
///     context! { order => order_ctx, hours => "16", materials => names, diary_count => 2 },
/// )?;
/// ```
pub fn render_template(template_name: &str, ctx: Value) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map(|text| text.trim().to_string())
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

#[cfg(test)]
fn template_exists(template_name: &str) -> bool {
    get_environment().get_template(template_name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_missing_template() {
        let result = render_template("nonexistent.jinja", context! {});
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
        assert!(!template_exists("definitely_not_a_real_template.jinja"));
    }

    #[test]
    fn test_embedded_templates_compile() {
        for (name, _) in TEMPLATES {
            assert!(template_exists(name), "{} failed to compile", name);
        }
    }

    #[test]
    fn test_render_order_summary() {
        let text = render_template(
            "assistant/order_summary.en.jinja",
            context! {
                order => context! {
                    id => "1003",
                    client_name => "Stockholm Stad",
                    type_label => "Graffiti Removal",
                    status_label => "Completed",
                    address => "Sergels Torg, Stockholm",
                    date => "2023-10-12",
                    description => "Klottersanering",
                },
                hours => "9",
                materials => vec!["Skyddshandskar (3 par)"],
                diary_count => 1,
            },
        )
        .unwrap();

        assert!(text.starts_with("Order 1003 for Stockholm Stad"));
        assert!(text.contains("Status: Completed"));
        assert!(text.contains("Hours logged so far: 9."));
        assert!(text.contains("Materials: Skyddshandskar (3 par)."));
        assert!(text.contains("The diary has 1 entry."));
    }

    #[test]
    fn test_optional_sections_are_left_out() {
        let text = render_template(
            "assistant/order_summary.sv.jinja",
            context! {
                order => context! {
                    id => "1004",
                    client_name => "ICA Maxi Solna",
                    type_label => "Allmän städning",
                    status_label => "Väntande",
                    address => "Solnavägen 5, Solna",
                    date => "2023-10-25",
                    description => "Djuprengöring",
                },
                hours => None::<String>,
                materials => Vec::<String>::new(),
                diary_count => 0,
            },
        )
        .unwrap();

        assert!(text.ends_with("Djuprengöring"));
        assert!(!text.contains("Material"));
    }
}
