//! Plain-text rendering of a `ViewState`.
//!
//! Items are numbered from 1 in list order; front ends use that number to
//! refer back to an item.

use crate::client::ViewState;
use crate::form::{FormMode, FormState};
use crate::types::TodoItem;

pub const EMPTY_LIST: &str = "No todos yet. Create your first todo!";

pub fn form_heading(form: &FormState) -> &'static str {
    match form.mode() {
        FormMode::Create => "Create Todo",
        FormMode::Edit => "Edit Todo",
    }
}

pub fn submit_label(form: &FormState) -> &'static str {
    match form.mode() {
        FormMode::Create => "Create Todo",
        FormMode::Edit => "Update Todo",
    }
}

pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    render_form(&mut out, &state.form, state.submitting);
    out.push('\n');
    render_list(&mut out, &state.todos);
    out
}

fn render_form(out: &mut String, form: &FormState, submitting: bool) {
    out.push_str(&format!("== {} ==\n", form_heading(form)));
    out.push_str(&format!("Title:       {}\n", form.title()));
    out.push_str(&format!("Description: {}\n", form.description()));
    out.push_str(&format!("[{}]", submit_label(form)));
    if submitting {
        out.push_str(" (sending...)");
    }
    out.push('\n');
}

/// `Created:` line text. Items without a usable timestamp show `unknown`.
pub fn created_label(todo: &TodoItem) -> String {
    match todo.created_at {
        Some(t) => t.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "unknown".to_string(),
    }
}

fn render_list(out: &mut String, todos: &[TodoItem]) {
    out.push_str("== Your Todos ==\n");
    if todos.is_empty() {
        out.push_str(EMPTY_LIST);
        out.push('\n');
        return;
    }
    for (n, todo) in todos.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", n + 1, todo.title));
        out.push_str(&format!("   {}\n", todo.description));
        out.push_str(&format!("   Created: {}\n", created_label(todo)));
    }
}
