//! Byte offset to line/column mapping.
//!
//! Line terminators are `\n`, `\r\n` and a lone `\r`, matching what the
//! scanner emits as newline tokens.

/// Start offsets of every line in a source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<u32>,
    len: u32,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let bytes = source.as_bytes();
        let mut line_starts = vec![0];
        let mut iter = memchr::memchr2_iter(b'\n', b'\r', bytes).peekable();
        while let Some(pos) = iter.next() {
            let mut next = pos + 1;
            if bytes[pos] == b'\r' && bytes.get(next) == Some(&b'\n') {
                iter.next();
                next += 1;
            }
            line_starts.push(to_u32(next));
        }
        Self {
            line_starts,
            len: to_u32(bytes.len()),
        }
    }

    /// Number of lines. A trailing terminator opens an (empty) final line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 1-based line and byte column of `offset`. Offsets past the end clamp to it.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let column = offset - self.line_starts[line];
        (to_u32(line) + 1, column + 1)
    }

    /// Byte offset where the 1-based `line` starts.
    pub fn line_start(&self, line: u32) -> Option<u32> {
        let idx = usize::try_from(line.checked_sub(1)?).ok()?;
        self.line_starts.get(idx).copied()
    }
}

#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
