//! Source path truncation for compact failure prefixes.

use std::path::{Component, Path};

/// Reduce a source path to its final component prefixed by the immediate
/// parent directory.
///
/// Absolute paths reported by build environments are long and
/// machine-specific. The parent directory is kept so that identically named
/// files in different packages stay distinguishable. Output joins with `/`
/// whatever separator the input used, so rendered locations read the same on
/// every platform.
///
/// Inputs with a single component, or none at all, come back unchanged
/// rather than being treated as errors.
///
/// # Example
///
/// ```rust
/// use attest::truncate_path;
///
/// assert_eq!(truncate_path("/home/user/project/src/parser.rs"), "src/parser.rs");
/// assert_eq!(truncate_path("parser.rs"), "parser.rs");
/// ```
pub fn truncate_path(path: &str) -> String {
    let parts: Vec<&str> = Path::new(path)
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();

    match parts.as_slice() {
        [] => String::new(),
        [file] => (*file).to_string(),
        [.., dir, file] => format!("{}/{}", dir, file),
    }
}
