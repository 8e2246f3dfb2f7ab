//! Configuration template for `hq init`.

/// Example configuration (valid TOML).
const TEMPLATE: &str = include_str!("../templates/config.toml");

/// Returns the example configuration with every setting commented out.
///
/// Comment lines and blank lines are kept; everything else gets a `# `
/// prefix, so the written file changes no defaults until edited.
pub fn config_template() -> String {
    let mut result = String::with_capacity(TEMPLATE.len() + TEMPLATE.lines().count() * 2);
    for line in TEMPLATE.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            result.push_str("# ");
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}
