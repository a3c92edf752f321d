pub fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() >= prefix.len()
        && s.is_char_boundary(prefix.len())
        && s[..prefix.len()].eq_ignore_ascii_case(prefix)
    {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

pub mod env;

#[cfg(test)]
mod tests {
    use super::strip_prefix_ci;

    #[test]
    fn matches_regardless_of_case() {
        assert_eq!(strip_prefix_ci("FOLDER C:\\x", "folder "), Some("C:\\x"));
        assert_eq!(strip_prefix_ci("folder", "folder "), None);
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        assert_eq!(strip_prefix_ci("ёёёёёё", "run "), None);
    }
}
