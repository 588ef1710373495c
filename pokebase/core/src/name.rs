/// Upper-cases the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Turns a hyphenated identifier into a capitalized title.
///
/// `"thunder-punch"` becomes `"Thunder Punch"`.
pub fn title(identifier: &str) -> String {
    identifier
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}
