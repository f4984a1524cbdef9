//! Fuzzy matching utilities for name lookup
//!
//! Case-insensitive Levenshtein distance used to rank records
//! against a typed-in name.

use strsim::levenshtein;

/// Levenshtein distance between `a` and `b`, ignoring ASCII case.
///
/// Insertion, deletion and substitution each cost one. Characters are
/// folded with `to_ascii_lowercase` before comparison, so non-ASCII
/// letters only match themselves.
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(&fold(a), &fold(b))
}

fn fold(text: &str) -> String {
    text.to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_distances() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("Smyth", "Smith"), 1);
        assert_eq!(edit_distance("Smyth", "Jones"), 5);
        assert_eq!(edit_distance("gumbo", "gambol"), 2);
    }

    #[test]
    fn test_empty_operands() {
        assert_eq!(edit_distance("", ""), 0);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("", "abcd"), 4);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(edit_distance("SMITH", "smith"), 0);
        assert_eq!(edit_distance("McDonald", "mcdonalD"), 0);
        assert_eq!(edit_distance("ann", "ANNE"), 1);
    }

    #[test]
    fn test_symmetry_and_identity() {
        let words = ["", "a", "Smith", "smyth", "Jones", "Johnson", "O'Neil"];
        for a in words {
            assert_eq!(edit_distance(a, a), 0);
            assert_eq!(edit_distance(a, ""), a.chars().count());
            for b in words {
                assert_eq!(edit_distance(a, b), edit_distance(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let words = ["Smith", "Smyth", "Schmidt", "Jones", "Johns", "Jonas", "Ann", "Anna"];
        for a in words {
            for b in words {
                for c in words {
                    assert!(
                        edit_distance(a, c) <= edit_distance(a, b) + edit_distance(b, c),
                        "{a} {b} {c}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_single_edit_costs_one() {
        assert_eq!(edit_distance("Smith", "Smiths"), 1); // insertion
        assert_eq!(edit_distance("Smith", "Smth"), 1); // deletion
        assert_eq!(edit_distance("Smith", "Smitt"), 1); // substitution
        assert_eq!(edit_distance("ab", "ba"), 2);
    }

    #[test]
    fn test_non_ascii_counts_characters() {
        assert_eq!(edit_distance("Müller", "Muller"), 1);
        assert_eq!(edit_distance("é", ""), 1);
    }
}
