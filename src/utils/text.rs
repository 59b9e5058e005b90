/// Placeholder substituted with the contributor's login in message templates.
const NAME_PLACEHOLDER: &str = "{{name}}";

/// Substitutes the first occurrence of the name placeholder in a template.
pub fn substitute_name(template: &str, name: &str) -> String {
    template.replacen(NAME_PLACEHOLDER, name, 1)
}
