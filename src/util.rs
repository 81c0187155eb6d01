pub(crate) fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

pub(crate) fn starts_with_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    haystack.len() >= needle.len()
        && haystack.as_bytes()[..needle.len()].eq_ignore_ascii_case(needle.as_bytes())
}

pub(crate) fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .char_indices()
        .map(|(i, _)| i)
        .find(|&i| starts_with_ignore_ascii_case(&haystack[i..], needle))
}

#[cfg(test)]
mod tests {
    use super::{find_ignore_ascii_case, is_blank, starts_with_ignore_ascii_case};

    #[test]
    fn ascii_case_insensitive_search() {
        assert!(starts_with_ignore_ascii_case("[/IMG] tail", "[/img]"));
        assert!(!starts_with_ignore_ascii_case("[/im", "[/img]"));
        assert_eq!(find_ignore_ascii_case("пример[/Img]", "[/img]"), Some(12));
        assert_eq!(find_ignore_ascii_case("no closer", "[/img]"), None);
    }

    #[test]
    fn blank() {
        assert!(is_blank(" \n\t"));
        assert!(is_blank(""));
        assert!(!is_blank(" a "));
    }
}
