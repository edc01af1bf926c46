// Placeholder substitution for email templates.
//
// Rules
// - A token is the full `{{Key}}` literal. Known keys are replaced by their value (blank renders empty).
// - Unknown keys stay in the output untouched.
// - One left-to-right pass: substituted values are never scanned again.

use std::collections::HashMap;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

pub fn render(template: &str, fields: &HashMap<String, String>) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        output.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];

        match after_open.find(CLOSE) {
            Some(end) => match fields.get(&after_open[..end]) {
                Some(value) => {
                    output.push_str(value);
                    rest = &after_open[end + CLOSE.len()..];
                }
                None => {
                    // Emit only the opener so a later `{{` inside the span can still match.
                    output.push_str(OPEN);
                    rest = after_open;
                }
            },
            None => {
                output.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    output.push_str(rest);
    output
}
