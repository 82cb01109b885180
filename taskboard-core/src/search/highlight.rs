//! Splitting text into plain and matched segments for display

use super::fuzzy::MatchSpan;

/// A piece of highlighted text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Match(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Self::Plain(text) | Self::Match(text) => text,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }
}

/// Split `text` into plain and matched segments.
///
/// Spans are char offsets. They may be unsorted or overlap; out-of-range ends
/// are clamped. Concatenating the segments gives back `text`.
pub fn highlight<'a>(text: &'a str, spans: &[MatchSpan]) -> Vec<Segment<'a>> {
    let char_count = text.chars().count();
    let mut ranges: Vec<(usize, usize)> = spans
        .iter()
        .map(|span| (span.start.min(char_count), span.end.min(char_count)))
        .filter(|(start, end)| start < end)
        .collect();
    ranges.sort_unstable();

    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some(last) if start <= last.1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    // char offset -> byte offset, with one trailing entry for the end of text
    let byte_at: Vec<usize> = text
        .char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut segments = Vec::new();
    let mut cursor = 0;
    for (start, end) in merged {
        if cursor < start {
            segments.push(Segment::Plain(&text[byte_at[cursor]..byte_at[start]]));
        }
        segments.push(Segment::Match(&text[byte_at[start]..byte_at[end]]));
        cursor = end;
    }
    if cursor < char_count {
        segments.push(Segment::Plain(&text[byte_at[cursor]..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_spans() {
        assert_eq!(highlight("hello", &[]), [Segment::Plain("hello")]);
        assert!(highlight("", &[]).is_empty());
    }

    #[test]
    fn test_middle_match() {
        assert_eq!(
            highlight("Buy more coffee", &[MatchSpan::new(4, 8)]),
            [
                Segment::Plain("Buy "),
                Segment::Match("more"),
                Segment::Plain(" coffee"),
            ]
        );
    }

    #[test]
    fn test_overlapping_and_unsorted_spans_merge() {
        let spans = [MatchSpan::new(3, 5), MatchSpan::new(0, 2), MatchSpan::new(1, 4)];
        assert_eq!(
            highlight("abcdefg", &spans),
            [Segment::Match("abcde"), Segment::Plain("fg")]
        );
    }

    #[test]
    fn test_multibyte_text() {
        let text = "Done ✅ now";
        let segments = highlight(text, &[MatchSpan::new(5, 6)]);
        assert_eq!(
            segments,
            [
                Segment::Plain("Done "),
                Segment::Match("✅"),
                Segment::Plain(" now"),
            ]
        );
        let joined: String = segments.iter().map(|s| s.text()).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_out_of_range_spans_are_clamped() {
        assert_eq!(
            highlight("abc", &[MatchSpan::new(1, 99), MatchSpan::new(50, 60)]),
            [Segment::Plain("a"), Segment::Match("bc")]
        );
    }
}
