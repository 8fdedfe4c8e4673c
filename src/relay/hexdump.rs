//! Hex dump formatting for relay logs

use std::fmt::Write;

/// Render a payload as a classic hex table, 16 bytes per row.
///
/// Each row carries the byte offset, two 8-byte hex groups, and a printable
/// ASCII column. Non-printable bytes show as `.`.
///
/// ```text
/// 00000000  68 65 6c 6c 6f 20 64 65  76 69 63 65 0a           |hello device.|
/// ```
pub fn hex_dump(data: &[u8]) -> String {
    let mut out = String::new();
    for (row, chunk) in data.chunks(16).enumerate() {
        let _ = write!(out, "{:08x}  ", row * 16);
        for i in 0..16 {
            match chunk.get(i) {
                Some(b) => {
                    let _ = write!(out, "{:02x} ", b);
                }
                None => out.push_str("   "),
            }
            if i == 7 {
                out.push(' ');
            }
        }
        out.push(' ');
        out.push('|');
        for &b in chunk {
            out.push(if (0x20..0x7f).contains(&b) {
                b as char
            } else {
                '.'
            });
        }
        out.push('|');
        out.push('\n');
    }
    out
}
