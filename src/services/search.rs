use serde::Serialize;

use crate::models::PostSummary;

use super::listing::title_matches;

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Splits `text` around every case-insensitive occurrence of `query`,
/// matched as literal text. An empty query yields the whole text as one
/// plain segment.
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
    if query.is_empty() || text.is_empty() {
        return vec![Segment {
            text,
            highlighted: false,
        }];
    }

    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    let chars: Vec<(usize, char)> = text.char_indices().collect();

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < chars.len() {
        match match_len(&chars[i..], &needle) {
            Some(len) => {
                let start = chars[i].0;
                let end = chars.get(i + len).map_or(text.len(), |(b, _)| *b);
                if plain_start < start {
                    segments.push(Segment {
                        text: &text[plain_start..start],
                        highlighted: false,
                    });
                }
                segments.push(Segment {
                    text: &text[start..end],
                    highlighted: true,
                });
                plain_start = end;
                i += len;
            }
            None => i += 1,
        }
    }

    if plain_start < text.len() {
        segments.push(Segment {
            text: &text[plain_start..],
            highlighted: false,
        });
    }
    segments
}

/// Number of source chars matching `needle` at the start of `haystack`.
fn match_len(haystack: &[(usize, char)], needle: &[char]) -> Option<usize> {
    let mut lowered = Vec::with_capacity(needle.len());
    for (consumed, (_, c)) in haystack.iter().enumerate() {
        lowered.extend(c.to_lowercase());
        if lowered.len() >= needle.len() {
            return (lowered == needle).then_some(consumed + 1);
        }
        if !needle.starts_with(&lowered) {
            return None;
        }
    }
    None
}

/// Search-results page listing: posts whose title contains the query.
/// An empty query lists everything.
pub fn search_posts<'a>(posts: &'a [PostSummary], query: &str) -> Vec<&'a PostSummary> {
    let query = query.trim();
    posts
        .iter()
        .filter(|post| title_matches(&post.title, query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked<'a>(segments: &[Segment<'a>]) -> Vec<&'a str> {
        segments
            .iter()
            .filter(|s| s.highlighted)
            .map(|s| s.text)
            .collect()
    }

    #[test]
    fn highlights_every_occurrence_case_insensitively() {
        let segments = highlight("React and react-native", "REACT");
        assert_eq!(marked(&segments), vec!["React", "react"]);
        let rebuilt: String = segments.iter().map(|s| s.text).collect();
        assert_eq!(rebuilt, "React and react-native");
    }

    #[test]
    fn empty_query_is_one_plain_segment() {
        let segments = highlight("Design Systems", "");
        assert_eq!(
            segments,
            vec![Segment {
                text: "Design Systems",
                highlighted: false
            }]
        );
    }

    #[test]
    fn query_is_literal_text() {
        let segments = highlight("What is C++ (really)?", "c++ (");
        assert_eq!(marked(&segments), vec!["C++ ("]);
    }

    #[test]
    fn no_match_leaves_text_plain() {
        let segments = highlight("TypeScript", "rust");
        assert_eq!(segments.len(), 1);
        assert!(!segments[0].highlighted);
    }
}
