//! Raw response parsing into a clean title list

/// Characters stripped from the start of each candidate line
fn is_enumeration_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ' '
}

/// Split raw provider text into an ordered list of titles
///
/// Every ". " is treated as a line break, so sentences emitted on one line are
/// split apart. This also splits abbreviations such as "vs. Python" and any
/// title that legitimately starts with digits ("2024 Trends" becomes
/// "Trends"). Duplicates are kept and order follows first appearance.
pub fn parse_titles(raw_text: &str) -> Vec<String> {
    raw_text
        .replace(". ", "\n")
        .split('\n')
        .map(|line| line.trim().trim_start_matches(is_enumeration_char))
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_on_one_line_are_split() {
        let titles = parse_titles("1. How to Start a Blog. 2. Best SEO Tools in 2024");
        assert_eq!(titles, vec!["How to Start a Blog", "Best SEO Tools in 2024"]);
    }

    #[test]
    fn test_empty_input_yields_no_titles() {
        assert!(parse_titles("").is_empty());
        assert!(parse_titles("\n\n   \n").is_empty());
    }

    #[test]
    fn test_numbered_list_lines() {
        let raw = "1. What Is SEO?\n2. Top Ways to Rank Faster\n3. How to Write Meta Descriptions\n";
        let titles = parse_titles(raw);

        assert_eq!(
            titles,
            vec!["What Is SEO?", "Top Ways to Rank Faster", "How to Write Meta Descriptions"]
        );
    }

    #[test]
    fn test_multi_digit_and_bare_number_prefixes() {
        let raw = "12. Twelfth Title\n3 Third Title\n  7.  Padded Title  ";
        assert_eq!(parse_titles(raw), vec!["Twelfth Title", "Third Title", "Padded Title"]);
    }

    #[test]
    fn test_other_markers_are_kept() {
        // Only digits, periods and spaces are enumeration markers
        let titles = parse_titles("- Dash Title\n* Star Title");
        assert_eq!(titles, vec!["- Dash Title", "* Star Title"]);
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let titles = parse_titles("B Title\nA Title\nB Title");
        assert_eq!(titles, vec!["B Title", "A Title", "B Title"]);
    }

    #[test]
    fn test_known_heuristic_limitations() {
        assert_eq!(parse_titles("Rust vs. Go for Beginners"), vec!["Rust vs", "Go for Beginners"]);
        assert_eq!(parse_titles("2024 Marketing Trends"), vec!["Marketing Trends"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let titles = parse_titles("1. First\r\n2. Second\r\n");
        assert_eq!(titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_no_title_starts_with_enumeration_char() {
        let raw = "1. .. 2 Odd\n . 9. Mixed Prefix\n...\n42";
        let titles = parse_titles(raw);

        assert_eq!(titles, vec!["Odd", "Mixed Prefix"]);
        for title in &titles {
            assert!(!title.is_empty());
            assert!(!title.starts_with(is_enumeration_char));
        }
    }

    #[test]
    fn test_parsing_is_idempotent_on_same_input() {
        let raw = "1. One. 2. Two\n3. Three";
        assert_eq!(parse_titles(raw), parse_titles(raw));
    }
}
