//! Tolerant positional formatting
//!
//! Renders `{}` (next positional) and `{N}` (indexed) placeholders against a
//! list of JSON values. `{{` and `}}` escape literal braces. Formatting never
//! fails: a placeholder without an argument renders as `{!missing N}` and
//! arguments no placeholder consumed are appended as `{!extra a, b}`.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// Placeholder and escape pattern
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{|\}\}|\{(\d*)\}").unwrap());

/// Render a template against positional arguments
pub fn render(template: &str, args: &[Value]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut used = vec![false; args.len()];
    let mut next = 0;
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(template) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        output.push_str(&template[last..whole.start()]);
        last = whole.end();

        match whole.as_str() {
            "{{" => output.push('{'),
            "}}" => output.push('}'),
            _ => {
                let digits = caps.get(1).map_or("", |m| m.as_str());
                let index = if digits.is_empty() {
                    next += 1;
                    Some(next - 1)
                } else {
                    digits.parse::<usize>().ok()
                };

                match index.and_then(|i| args.get(i).map(|value| (i, value))) {
                    Some((i, value)) => {
                        used[i] = true;
                        output.push_str(&value_text(value));
                    }
                    None => {
                        let shown = index.map_or_else(|| digits.to_string(), |i| i.to_string());
                        output.push_str(&format!("{{!missing {}}}", shown));
                    }
                }
            }
        }
    }
    output.push_str(&template[last..]);

    let extra: Vec<String> = args
        .iter()
        .zip(&used)
        .filter(|(_, used)| !**used)
        .map(|(value, _)| value_text(value))
        .collect();
    if !extra.is_empty() {
        output.push_str(&format!("{{!extra {}}}", extra.join(", ")));
    }

    output
}

/// Text form of a single argument; strings render without quotes
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
