use snptally_core::models::AlignedSpan;

/// Decode one alignment record into the reference spans it covers.
///
/// Walks the CIGAR run-length code with a reference cursor (starting at
/// `pos - 1`, converting the SAM 1-based POS to 0-based) and a read cursor.
/// Match ops (`M`, `=`, `X`) copy read bases into the span under
/// construction; a skip (`N`) closes the span and starts the next one past
/// the gap; a deletion (`D`) pads the span with space placeholders so
/// coordinate arithmetic stays valid; an insertion (`I`) drops read bases.
/// Other ops (`H`, `P`, ...) are ignored.
///
/// A soft clip (`S`) advances the read cursor only while the cursor is still
/// at 0, i.e. only a leading clip has any effect; a trailing or interior `S`
/// is a no-op. That is how the tally tool has always consumed clips and it
/// is kept as-is.
///
/// Reads whose base string contains an ambiguity code (`N`/`n`) yield no
/// spans at all — a data-quality filter, not an error. Likewise a CIGAR that
/// consumes more read bases than exist drops the whole record.
pub fn spans_from_alignment(pos: u32, cigar: &str, seq: &str) -> Vec<AlignedSpan> {
    if pos == 0 || seq.bytes().any(|b| b == b'N' || b == b'n') {
        return Vec::new();
    }

    let mut spans = Vec::new();
    let mut ref_start = pos - 1;
    let mut buf = String::new();
    let mut read_cursor = 0usize;
    let mut len = 0u32;

    for byte in cigar.bytes() {
        if byte.is_ascii_digit() {
            len = len * 10 + u32::from(byte - b'0');
            continue;
        }
        match byte {
            b'M' | b'=' | b'X' => {
                let Some(bases) = seq.get(read_cursor..read_cursor + len as usize) else {
                    return Vec::new();
                };
                buf.push_str(bases);
                read_cursor += len as usize;
            }
            b'S' => {
                if read_cursor == 0 {
                    read_cursor += len as usize;
                }
            }
            b'N' => {
                if !buf.is_empty() {
                    let emitted = buf.len() as u32;
                    spans.push(AlignedSpan::new(std::mem::take(&mut buf), ref_start));
                    ref_start += emitted;
                }
                ref_start += len;
            }
            b'D' => {
                for _ in 0..len {
                    buf.push(' ');
                }
            }
            b'I' => {
                read_cursor += len as usize;
            }
            _ => {}
        }
        len = 0;
    }

    if !buf.is_empty() {
        spans.push(AlignedSpan::new(buf, ref_start));
    }
    spans
}
