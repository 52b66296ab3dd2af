pub mod flags;

pub use flags::*;

/// Normalize a user-typed instance name: surrounding whitespace is dropped and
/// an empty result means "no instance given".
pub fn normalize_instance(input: Option<&str>) -> Option<String> {
    let trimmed = input?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_instance_is_missing() {
        assert_eq!(normalize_instance(None), None);
        assert_eq!(normalize_instance(Some("   ")), None);
        assert_eq!(
            normalize_instance(Some(" mastodon.social \n")),
            Some("mastodon.social".to_string())
        );
    }
}
