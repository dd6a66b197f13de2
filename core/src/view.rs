//! Render tree for the search widget, plus HTML and plain-text output.
//!
//! A `View` borrows from the widget and holds no state of its own. Hosts
//! either walk it directly or use [`View::to_html`] / `Display`.

use std::fmt;

use crate::error::ValidationError;
use crate::form::QUERY_FIELD;
use crate::types::Todo;
use crate::widget::SearchWidget;

pub const HEADING: &str = "Todo Search";
pub const PLACEHOLDER: &str = "Search Todos";
pub const SUBMIT_LABEL: &str = "Search";
pub const LOADING_TEXT: &str = "Loading...";
pub const NO_RESULTS_TEXT: &str = "No results found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View<'a> {
    pub heading: &'static str,
    pub form: FormView<'a>,
    pub loading: bool,
    pub error: Option<&'a str>,
    pub list: ListView<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView<'a> {
    pub field: &'static str,
    pub placeholder: &'static str,
    pub value: &'a str,
    pub error: Option<&'a ValidationError>,
    pub submit_label: &'static str,
    /// Always false after a synchronous submit; kept so the button markup
    /// carries the `disabled` attribute slot.
    pub submit_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView<'a> {
    Empty,
    Rows(Vec<Row<'a>>),
}

/// One rendered todo. `key` is the record id and stays stable across
/// re-renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    pub key: u64,
    pub title: &'a str,
    pub user_id: u64,
    pub id: u64,
}

impl<'a> Row<'a> {
    fn from_todo(todo: &'a Todo) -> Self {
        Self {
            key: todo.id,
            title: &todo.title,
            user_id: todo.user_id,
            id: todo.id,
        }
    }

    pub fn detail(&self) -> String {
        format!("User ID: {}, Todo ID: {}", self.user_id, self.id)
    }
}

impl<'a> View<'a> {
    pub(crate) fn new(widget: &'a SearchWidget) -> Self {
        let form = widget.form();
        let visible = widget.visible();
        let list = if visible.is_empty() {
            ListView::Empty
        } else {
            ListView::Rows(visible.into_iter().map(Row::from_todo).collect())
        };
        Self {
            heading: HEADING,
            form: FormView {
                field: QUERY_FIELD,
                placeholder: PLACEHOLDER,
                value: form.value(),
                error: form.error(),
                submit_label: SUBMIT_LABEL,
                submit_disabled: form.is_submitting(),
            },
            loading: widget.is_loading(),
            error: widget.error(),
            list,
        }
    }

    pub fn rows(&self) -> &[Row<'a>] {
        match &self.list {
            ListView::Empty => &[],
            ListView::Rows(rows) => rows.as_slice(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"search-application\">\n");
        html.push_str(&format!("  <h1>{}</h1>\n", escape(self.heading)));

        html.push_str("  <form>\n    <div>\n");
        html.push_str(&format!(
            "      <input type=\"text\" name=\"{}\" placeholder=\"{}\" value=\"{}\">\n",
            self.form.field,
            escape(self.form.placeholder),
            escape(self.form.value),
        ));
        if let Some(error) = self.form.error {
            html.push_str(&format!(
                "      <div class=\"field-error\">{}</div>\n",
                escape(&error.to_string())
            ));
        }
        html.push_str("    </div>\n");
        let disabled = if self.form.submit_disabled { " disabled" } else { "" };
        html.push_str(&format!(
            "    <button type=\"submit\"{disabled}>{}</button>\n  </form>\n",
            escape(self.form.submit_label)
        ));

        if self.loading {
            html.push_str(&format!("  <p class=\"loading\">{LOADING_TEXT}</p>\n"));
        }
        if let Some(error) = self.error {
            html.push_str(&format!("  <p class=\"error\">{}</p>\n", escape(error)));
        }

        match &self.list {
            ListView::Empty => {
                html.push_str(&format!("  <p class=\"empty\">{NO_RESULTS_TEXT}</p>\n"));
            }
            ListView::Rows(rows) => {
                html.push_str("  <ul>\n");
                for row in rows {
                    html.push_str(&format!(
                        "    <li data-key=\"{}\"><span>{}</span><span>{}</span></li>\n",
                        row.key,
                        escape(row.title),
                        row.detail()
                    ));
                }
                html.push_str("  </ul>\n");
            }
        }

        html.push_str("</div>\n");
        html
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f, "[{}: {}] <{}>", self.form.field, self.form.value, self.form.submit_label)?;
        if let Some(error) = self.form.error {
            writeln!(f, "  ! {error}")?;
        }
        if self.loading {
            writeln!(f, "{LOADING_TEXT}")?;
        }
        if let Some(error) = self.error {
            writeln!(f, "{error}")?;
        }
        match &self.list {
            ListView::Empty => writeln!(f, "{NO_RESULTS_TEXT}"),
            ListView::Rows(rows) => {
                for row in rows {
                    writeln!(f, "- {} ({})", row.title, row.detail())?;
                }
                Ok(())
            }
        }
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
