/// Derives a URL slug from a title.
///
/// Lowercases ASCII alphanumerics and collapses every other run of characters
/// into a single hyphen, trimming hyphens from both ends. Non-ASCII characters
/// are dropped; explicit slugs should be supplied for titles that would
/// otherwise produce an empty result.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}
