/// Split text into overlapping chunks of up to `chunk_size` characters.
///
/// Each chunk shares `overlap` trailing characters with the next one; the
/// final chunk may be shorter and the sequence stops as soon as a slice
/// reaches the end of the text. A non-positive `chunk_size` returns the whole
/// text as a single chunk. The next start position always advances by at
/// least one character, so `overlap >= chunk_size` still terminates.
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    if chunk_size == 0 {
        return vec![text.to_string()];
    }

    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let end = (start + chunk_size).min(chars.len());
        chunks.push(chars[start..end].iter().collect());
        if end == chars.len() {
            break;
        }
        let next = end.saturating_sub(overlap);
        start = next.max(start + 1);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_arithmetic() {
        // step = chunk_size - overlap = 25
        let text: String = ('a'..='z').cycle().take(100).collect();
        let chunks = chunk_text(&text, 30, 5);

        assert_eq!(chunks.len(), 4);
        assert_eq!(chunks[0], text[0..30]);
        assert_eq!(chunks[1], text[25..55]);
        assert_eq!(chunks[2], text[50..80]);
        assert_eq!(chunks[3], text[75..100]);
    }

    #[test]
    fn test_all_but_last_chunk_have_exact_size() {
        let text = "x".repeat(95);
        let chunks = chunk_text(&text, 30, 5);
        for chunk in &chunks[..chunks.len() - 1] {
            assert_eq!(chunk.chars().count(), 30);
        }
        assert!(chunks.last().unwrap().chars().count() <= 30);
    }

    #[test]
    fn test_overlap_removal_reconstructs_original() {
        let text: String = ('0'..='9').cycle().take(83).collect();
        let (chunk_size, overlap) = (20, 7);
        let chunks = chunk_text(&text, chunk_size, overlap);

        let mut rebuilt = chunks[0].clone();
        for chunk in &chunks[1..] {
            rebuilt.extend(chunk.chars().skip(overlap));
        }
        assert_eq!(rebuilt, text);

        // Consecutive chunks share exactly `overlap` characters.
        for pair in chunks.windows(2) {
            let tail: String = pair[0].chars().skip(pair[0].chars().count() - overlap).collect();
            let head: String = pair[1].chars().take(overlap).collect();
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn test_zero_chunk_size_returns_whole_text() {
        let chunks = chunk_text("some text", 0, 3);
        assert_eq!(chunks, vec!["some text".to_string()]);
    }

    #[test]
    fn test_text_shorter_than_chunk_size() {
        let chunks = chunk_text("short", 100, 10);
        assert_eq!(chunks, vec!["short".to_string()]);
    }

    #[test]
    fn test_empty_text_produces_no_chunks() {
        assert!(chunk_text("", 10, 2).is_empty());
    }

    #[test]
    fn test_overlap_not_smaller_than_chunk_size_terminates() {
        let text = "abcdefghij";
        let chunks = chunk_text(text, 3, 3);
        // Forced unit steps: starts at 0, 1, 2, ... until the tail is reached.
        assert_eq!(chunks.first().unwrap(), "abc");
        assert_eq!(chunks.last().unwrap(), "hij");
        assert!(chunks.len() <= text.len());
    }

    #[test]
    fn test_multibyte_characters_counted_not_sliced() {
        let text = "héllo wörld — ünïcode content";
        let chunks = chunk_text(text, 10, 2);
        let rebuilt: String = {
            let mut s = chunks[0].clone();
            for chunk in &chunks[1..] {
                s.extend(chunk.chars().skip(2));
            }
            s
        };
        assert_eq!(rebuilt, text);
    }
}
