//! Public handle generation for new accounts.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Builds a handle like `ada-x7k2` from a first name.
///
/// The slug keeps only ASCII alphanumerics from the name, lowercased; the
/// random suffix makes collisions across accounts vanishingly unlikely
/// without a round trip to the store.
pub fn generate_handle(first_name: &str) -> String {
    let slug: String = first_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let slug = if slug.is_empty() { "user".to_string() } else { slug };

    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(4)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();

    format!("{}-{}", slug, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_the_first_name() {
        let handle = generate_handle("Ada");
        assert!(handle.starts_with("ada-"));
        assert_eq!(handle.len(), "ada-".len() + 4);
    }

    #[test]
    fn strips_non_alphanumerics() {
        let handle = generate_handle("Mary Jane!");
        assert!(handle.starts_with("maryjane-"));
    }

    #[test]
    fn falls_back_for_empty_names() {
        let handle = generate_handle("@@@");
        assert!(handle.starts_with("user-"));
    }

    #[test]
    fn handles_vary_between_calls() {
        assert_ne!(generate_handle("Ada"), generate_handle("Ada"));
    }
}
