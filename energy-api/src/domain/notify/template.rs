use std::collections::HashMap;

/// Substitutes `{{key}}` placeholders. Unknown placeholders are left
/// in place so a misconfigured template is visible in the delivered
/// message instead of silently vanishing.
pub fn render_template(template: &str, vars: &HashMap<String, String>) -> String {
    let mut rendered = template.to_string();
    for (key, value) in vars {
        rendered = rendered.replace(&format!("{{{{{key}}}}}"), value);
    }
    rendered
}
