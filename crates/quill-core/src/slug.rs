//! Slug derivation.

use ::slug::slugify;

/// Derive the URL-safe identifier for a post from its title.
///
/// Lower-cases, transliterates to ASCII, collapses every run of
/// non-alphanumeric characters into a single hyphen and trims hyphens at
/// both ends. Deterministic: the same title always yields the same slug.
/// Uniqueness across posts is the store's job, not this function's.
pub fn derive_slug(title: &str) -> String {
    slugify(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(derive_slug("Hello, World!"), "hello-world");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(derive_slug("  Multiple   Spaces  "), "multiple-spaces");
    }

    #[test]
    fn deterministic() {
        assert_eq!(derive_slug("Some Title"), derive_slug("Some Title"));
    }

    #[test]
    fn idempotent_on_its_own_output() {
        let once = derive_slug("Grand Re-Opening: Part 2");
        assert_eq!(derive_slug(&once), once);
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(derive_slug("Top 10 Crates (2024)"), "top-10-crates-2024");
    }
}
