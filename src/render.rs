//! HTML rendering of the dashboard view.
//!
//! The page is a single embedded minijinja template: a heading linking to
//! the repository and one collapsible section per group, labelled with the
//! group name and result count. Auto-escaping is on via the `.html`
//! template name, so titles and logins cannot inject markup.

use minijinja::{Environment, context};

use crate::github::{DashboardError, DashboardView};


const PAGE_TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ repository }} pull requests</title>
    <style>
      main { padding: 16px; max-width: 40rem; margin: 0 auto; font-family: sans-serif; }
      h1 { margin-top: 0; }
      summary strong { font-size: 1.5rem; }
    </style>
  </head>
  <body>
    <main>
      <h1><a href="https://github.com/{{ repository }}">{{ repository }}</a> pull requests</h1>
      <div>
{%- for group in groups %}
        <details>
          <summary><strong>{{ group.label }} ({{ group.results | length }})</strong></summary>
          <ul>
{%- for pr in group.results %}
            <li><a href="{{ pr.url }}" target="_blank" rel="noopener noreferrer">{{ pr.title }}</a> by {% if pr.author %}{{ pr.author }}{% else %}ghost{% endif %}</li>
{%- endfor %}
          </ul>
        </details>
{%- endfor %}
      </div>
    </main>
  </body>
</html>
"#;

/// Renders the dashboard view into the full HTML page.
///
/// # Errors
///
/// Returns [`DashboardError::Template`] when the template fails to compile
/// or render.
pub fn dashboard_page(view: &DashboardView) -> Result<String, DashboardError> {
    let mut env = Environment::new();
    env.add_template("dashboard.html", PAGE_TEMPLATE)
        .map_err(|error| DashboardError::Template {
            message: error.to_string(),
        })?;

    let template =
        env.get_template("dashboard.html")
            .map_err(|error| DashboardError::Template {
                message: error.to_string(),
            })?;

    template
        .render(context! {
            repository => view.repository,
            groups => view.groups,
        })
        .map_err(|error| DashboardError::Template {
            message: error.to_string(),
        })
}
