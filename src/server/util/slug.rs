/// Derives a URL slug from a title.
///
/// Lowercases the title and joins its ASCII alphanumeric runs with `-`. Titles without
/// any alphanumeric characters produce `"story"`.
pub fn slugify(title: &str) -> String {
    let slug = title
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "story".to_string()
    } else {
        slug
    }
}

/// Appends a numeric suffix for the `n`-th collision of a base slug.
///
/// `n = 1` is the base slug itself, `n = 2` yields `base-2`, and so on.
pub fn with_suffix(base: &str, n: u32) -> String {
    if n <= 1 {
        base.to_string()
    } else {
        format!("{}-{}", base, n)
    }
}
