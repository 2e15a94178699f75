//! Shareable page URLs.

/// Drop the query string from a URL, keeping everything before the first `?`.
pub fn strip_query(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

/// Current page URL with the query string stripped.
pub fn current_page_url() -> Option<String> {
    let href = web_sys::window()?.location().href().ok()?;
    Some(strip_query(&href).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_query_string() {
        assert_eq!(
            strip_query("https://x.com/page?ref=1"),
            "https://x.com/page"
        );
    }

    #[test]
    fn leaves_clean_urls_untouched() {
        assert_eq!(strip_query("https://x.com/page"), "https://x.com/page");
    }

    #[test]
    fn keeps_only_the_part_before_the_first_question_mark() {
        assert_eq!(strip_query("https://x.com/p?a=1?b=2"), "https://x.com/p");
    }
}
