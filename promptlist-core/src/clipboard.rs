//! Text normalization and selection splicing for the paste interceptor.

/// New field value and caret position after a paste splice. Caret is in
/// UTF-16 code units, the browser's selection unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpliceResult {
    pub value: String,
    pub caret: u32,
}

/// Splices `insert` into `value`, replacing the selected range
/// `[start, end)` expressed in UTF-16 code units. Out-of-range or inverted
/// bounds are clamped rather than rejected, since the host page owns the
/// selection state. The returned caret sits just after the inserted text.
pub fn splice_value(value: &str, start: u32, end: u32, insert: &str) -> SpliceResult {
    let units: Vec<u16> = value.encode_utf16().collect();
    let start = (start as usize).min(units.len());
    let end = (end as usize).min(units.len()).max(start);

    let inserted: Vec<u16> = insert.encode_utf16().collect();
    let caret = (start + inserted.len()) as u32;

    let mut out = Vec::with_capacity(units.len() - (end - start) + inserted.len());
    out.extend_from_slice(&units[..start]);
    out.extend_from_slice(&inserted);
    out.extend_from_slice(&units[end..]);

    SpliceResult {
        value: String::from_utf16_lossy(&out),
        caret,
    }
}

/// Normalizes text destined for the rich editor: CRLF and bare CR become
/// `\n`, tabs expand to two spaces.
pub fn normalize_rich_text(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").replace('\t', "  ")
}
