use schemaform_schema::{display_value, ChoiceItem};
use serde_json::Value;

/// Renders one choice item as an HTML `<option>`.
///
/// The option is selected when the item says so or when `value` (the field's
/// current value) equals the item's value.
pub fn render_option(item: &ChoiceItem, value: Option<&Value>) -> String {
    let selected = item.selected.is_on() || value == Some(&item.value);
    format!(
        "<option value=\"{}\"{}>{}</option>",
        escape(&display_value(&item.value)),
        if selected { " selected=\"selected\"" } else { "" },
        escape(&item.label)
    )
}

/// Renders every item of a select field, marking the field's current value.
pub fn render_options(items: &[ChoiceItem], value: Option<&Value>) -> String {
    items.iter().map(|item| render_option(item, value)).collect()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c    => out.push(c),
        }
    }
    out
}
