/// Case-insensitive containment test used by every name query.
///
/// An empty fragment matches everything, unnamed entities included. A
/// non-empty fragment never matches an unnamed or empty-named entity.
pub fn name_matches(name: Option<&str>, fragment: &str) -> bool {
    if fragment.is_empty() {
        return true;
    }
    match name {
        Some(name) if !name.is_empty() => contains_ignore_case(name, fragment),
        _ => false,
    }
}

/// Ordinal containment after per-char simple uppercasing. Characters whose
/// uppercase form is more than one char (`ß`) are compared as they are.
pub fn contains_ignore_case(source: &str, fragment: &str) -> bool {
    if fragment.is_empty() {
        return true;
    }
    source.char_indices().any(|(start, _)| {
        let mut haystack = source[start..].chars().map(fold_case);
        fragment.chars().map(fold_case).all(|c| haystack.next() == Some(c))
    })
}

fn fold_case(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_case() {
        assert!(name_matches(Some("Iron Longsword"), "longSWORD"));
        assert!(name_matches(Some("a grizzled ORC"), "orc"));
        assert!(!name_matches(Some("Iron Longsword"), "axe"));
    }

    #[test]
    fn empty_fragment_matches_everything() {
        assert!(name_matches(Some("Chest"), ""));
        assert!(name_matches(None, ""));
        assert!(name_matches(Some(""), ""));
    }

    #[test]
    fn unnamed_entities_never_match_a_fragment() {
        assert!(!name_matches(None, "chest"));
        assert!(!name_matches(Some(""), "chest"));
    }

    #[test]
    fn folds_case_one_char_at_a_time() {
        assert!(contains_ignore_case("Kelvin", "k"));
        assert!(!contains_ignore_case("\u{212A}elvin", "k"));
        assert!(!contains_ignore_case("\u{130}stanbul", "i"));
        assert!(contains_ignore_case("Stra\u{DF}e", "STRA\u{DF}E"));
        assert!(!contains_ignore_case("Strasse", "stra\u{DF}e"));
        assert!(contains_ignore_case("Orc", "orc"));
        assert!(!contains_ignore_case("Or", "orc"));
    }
}
