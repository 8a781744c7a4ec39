//! HTML rendering for the console page.

use std::fmt::Write;

use anyhow::{Context, Result};
use minijinja::{AutoEscape, Environment, Error, Output, State, Value, escape_formatter};
use serde::Serialize;

const PAGE_TEMPLATE: &str = include_str!("templates/page.html");

/// Everything the page displays.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageView {
    /// Status line; hidden when empty.
    pub message: String,
    pub block_list: Vec<String>,
}

/// Template engine wrapper around minijinja.
///
/// The template name ends in `.html`, so interpolated values are
/// HTML-escaped.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_formatter(html_formatter);
        env.add_template("page.html", PAGE_TEMPLATE)
            .context("parse page template")?;
        Ok(Self { env })
    }

    pub fn render(&self, view: &PageView) -> Result<String> {
        let template = self.env.get_template("page.html")?;
        template.render(view).context("render page")
    }
}

/// Escape only `& < > " '` so URLs keep their slashes in the markup.
fn html_formatter(out: &mut Output<'_>, state: &State<'_, '_>, value: &Value) -> Result<(), Error> {
    match value.as_str() {
        Some(text) if matches!(state.auto_escape(), AutoEscape::Html) && !value.is_safe() => {
            for ch in text.chars() {
                match ch {
                    '&' => out.write_str("&amp;")?,
                    '<' => out.write_str("&lt;")?,
                    '>' => out.write_str("&gt;")?,
                    '"' => out.write_str("&quot;")?,
                    '\'' => out.write_str("&#x27;")?,
                    _ => out.write_char(ch)?,
                }
            }
            Ok(())
        }
        _ => escape_formatter(out, state, value),
    }
}
