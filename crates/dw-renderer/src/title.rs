//! Page title derivation.

/// Derive a page title from file content and file stem.
///
/// If the first line of the content is a level-1 heading, the title is
/// that heading with the `# ` marker stripped. Otherwise the file stem
/// is used, with underscores replaced by spaces and each word
/// title-cased (`api_reference` becomes `Api Reference`).
///
/// Pure and deterministic: the same content and stem always yield the
/// same title.
#[must_use]
pub fn derive_title(content: &str, file_stem: &str) -> String {
    let first_line = content.lines().next().unwrap_or("").trim();
    if let Some(heading) = first_line.strip_prefix("# ") {
        return heading.trim().to_owned();
    }

    title_case(&file_stem.replace('_', " "))
}

/// Uppercase the first letter of each whitespace-separated word and
/// lowercase the rest.
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_title_from_h1() {
        assert_eq!(derive_title("# My Title\nBody text", "overview"), "My Title");
    }

    #[test]
    fn test_h1_with_surrounding_whitespace() {
        assert_eq!(derive_title("  # Spaced Out  \nbody", "x"), "Spaced Out");
    }

    #[test]
    fn test_fallback_to_file_stem() {
        assert_eq!(
            derive_title("No heading here.\n\n## Subsection", "api_reference"),
            "Api Reference"
        );
    }

    #[test]
    fn test_fallback_lowercases_rest_of_word() {
        assert_eq!(derive_title("", "HTTP_API"), "Http Api");
    }

    #[test]
    fn test_deeper_heading_is_not_a_title() {
        assert_eq!(derive_title("## Not The Title", "module_index"), "Module Index");
    }

    #[test]
    fn test_single_word_stem() {
        assert_eq!(derive_title("plain text", "overview"), "Overview");
    }

    #[test]
    fn test_deterministic() {
        let content = "# Stable\nbody";
        assert_eq!(
            derive_title(content, "stable"),
            derive_title(content, "stable")
        );
    }
}
