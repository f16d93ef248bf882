//! Byte offset to line/column lookup.

/// Line start offsets of one source file.
///
/// Built the same way as the line table in fob-graph's semantic utilities;
/// columns here count chars rather than bytes.
pub(crate) struct LineIndex {
    line_starts: Vec<u32>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self { line_starts }
    }

    /// 1-based line and 1-based column of `offset`.
    ///
    /// Columns count characters, not bytes, to match what a JS engine reports.
    pub fn line_column(&self, offset: u32, source: &str) -> (u32, u32) {
        let line_idx = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(0) => 0,
            Err(idx) => idx - 1,
        };

        let line_start = self.line_starts[line_idx] as usize;
        let column = source
            .get(line_start..offset as usize)
            .map(|prefix| prefix.chars().count() as u32)
            .unwrap_or(0);

        ((line_idx + 1) as u32, column + 1)
    }

    pub fn line(&self, offset: u32, source: &str) -> u32 {
        self.line_column(offset, source).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line() {
        let src = "it('a')\n";
        let index = LineIndex::new(src);
        assert_eq!(index.line_column(0, src), (1, 1));
        assert_eq!(index.line_column(3, src), (1, 4));
    }

    #[test]
    fn test_later_lines() {
        let src = "a\n\ndescribe('x')\n";
        let index = LineIndex::new(src);
        assert_eq!(index.line(3, src), 3);
        assert_eq!(index.line_column(2, src), (2, 1));
    }

    #[test]
    fn test_multibyte_columns_count_chars() {
        let src = "// é\n  it('ü')";
        let index = LineIndex::new(src);
        let offset = src.find("it").unwrap() as u32;
        assert_eq!(index.line_column(offset, src), (2, 3));
    }

    #[test]
    fn test_offset_past_end() {
        let src = "x";
        let index = LineIndex::new(src);
        assert_eq!(index.line_column(40, src), (1, 1));
    }
}
