//! Fixed-size sliding-window text chunking.

/// One chunk of a split document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// The chunk text.
    pub text: String,
    /// Zero-based position of this chunk in the document.
    pub chunk_index: usize,
    /// Total number of chunks produced for the document.
    pub total_chunks: usize,
}

/// Split text into fixed-size chunks with the given overlap.
///
/// Windows advance by `chunk_size - overlap` characters so consecutive
/// chunks share `overlap` characters of context. Boundaries are snapped
/// to char boundaries; sizes are measured in characters, not bytes.
/// `overlap` must be smaller than `chunk_size` or the window cannot
/// advance; callers get a single full-text chunk in that case.
pub fn split_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<Chunk> {
    if text.is_empty() || chunk_size == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= chunk_size || overlap >= chunk_size {
        return vec![Chunk {
            text: text.to_string(),
            chunk_index: 0,
            total_chunks: 1,
        }];
    }

    let stride = chunk_size - overlap;
    let mut texts = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = (start + chunk_size).min(chars.len());
        texts.push(chars[start..end].iter().collect::<String>());
        if end == chars.len() {
            break;
        }
        start += stride;
    }

    let total = texts.len();
    texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| Chunk {
            text,
            chunk_index: i,
            total_chunks: total,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_single_chunk() {
        let chunks = split_text("hello", 1000, 200);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "hello");
        assert_eq!(chunks[0].total_chunks, 1);
    }

    #[test]
    fn test_windows_overlap() {
        let text = "abcdefghij";
        let chunks = split_text(text, 4, 2);
        assert_eq!(chunks[0].text, "abcd");
        assert_eq!(chunks[1].text, "cdef");
        assert_eq!(chunks[2].text, "efgh");
        // Every chunk shares its first two chars with the previous one's tail.
        for pair in chunks.windows(2) {
            assert_eq!(&pair[0].text[2..], &pair[1].text[..2]);
        }
    }

    #[test]
    fn test_indices_and_totals() {
        let text = "x".repeat(2500);
        let chunks = split_text(&text, 1000, 200);
        let total = chunks.len();
        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.chunk_index, i);
            assert_eq!(chunk.total_chunks, total);
            assert!(chunk.text.len() <= 1000);
        }
        // The windows jointly cover the whole text.
        let covered = 1000 + (total - 1) * 800;
        assert!(covered >= 2500);
    }

    #[test]
    fn test_multibyte_boundaries() {
        let text = "héllo wörld ünïcode çhäracters".repeat(10);
        let chunks = split_text(&text, 50, 10);
        assert!(chunks.len() > 1);
        // Concatenation is valid UTF-8 by construction; verify no panic
        // and per-chunk char counts respect the window size.
        for chunk in &chunks {
            assert!(chunk.text.chars().count() <= 50);
        }
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(split_text("", 1000, 200).is_empty());
    }

    #[test]
    fn test_degenerate_overlap_falls_back_to_one_chunk() {
        let text = "y".repeat(100);
        let chunks = split_text(&text, 10, 10);
        assert_eq!(chunks.len(), 1);
    }
}
