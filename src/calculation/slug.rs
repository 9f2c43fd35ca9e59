//! Product slug to title conversion.

/// The character treated as a word separator in slugs.
pub const SLUG_SEPARATOR: char = '-';

/// Derives a human-readable title from a URL slug.
///
/// Separators become spaces and the first character of every
/// space-delimited word is upper-cased; the rest of each word is left
/// untouched. Runs of separators produce runs of spaces. Any string is
/// accepted.
///
/// # Examples
///
/// ```
/// use idms_site::calculation::title_from_slug;
///
/// assert_eq!(title_from_slug("office-chairs"), "Office Chairs");
/// assert_eq!(title_from_slug("hr-management"), "Hr Management");
/// assert_eq!(title_from_slug(""), "");
/// ```
pub fn title_from_slug(slug: &str) -> String {
    slug.replace(SLUG_SEPARATOR, " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
