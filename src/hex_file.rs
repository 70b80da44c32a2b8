// SPDX-License-Identifier: Apache-2.0

//! `$readmemh` data file: one two-digit uppercase hex word per line, address
//! order, newline terminated.

use std::io::Write;

use crate::lut_error::LutError;
use crate::reciprocal_lut::ReciprocalLut;

pub const HEX_DIGITS: usize = 2;

pub fn emit_hex(lut: &ReciprocalLut) -> String {
    let mut text = String::with_capacity(lut.len() * (HEX_DIGITS + 1));
    for value in lut.entries() {
        text.push_str(&format!("{:02X}\n", value));
    }
    text
}

pub fn write_hex<W: Write>(lut: &ReciprocalLut, mut sink: W) -> std::io::Result<()> {
    sink.write_all(emit_hex(lut).as_bytes())?;
    sink.flush()
}

/// Reads a data file in exactly the format `write_hex` produces. Anything
/// else (lower case, other widths, blank lines, a missing final newline) is
/// reported with its 1-based line number.
pub fn parse_hex(text: &str) -> Result<Vec<u32>, LutError> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let body = text
        .strip_suffix('\n')
        .ok_or_else(|| LutError("hex data does not end with a newline".to_string()))?;
    body.split('\n')
        .enumerate()
        .map(|(i, line)| {
            let well_formed = line.len() == HEX_DIGITS
                && line
                    .chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, 'A'..='F'));
            if !well_formed {
                return Err(LutError(format!(
                    "line {}: expected {} uppercase hex digits; got {:?}",
                    i + 1,
                    HEX_DIGITS,
                    line
                )));
            }
            u32::from_str_radix(line, 16)
                .map_err(|e| LutError(format!("line {}: {}", i + 1, e)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lut_config::LutShape;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_emit_small_table() {
        // 2^5 / 4..=7 = 8, 6, 5, 4 -> masked to 2 bits.
        let lut = ReciprocalLut::generate(&LutShape::new(2, 2));
        assert_eq!(lut.entries(), &[0, 2, 1, 0]);
        assert_eq!(emit_hex(&lut), "00\n02\n01\n00\n");
    }

    #[test]
    fn test_write_hex_matches_emit_hex() {
        let lut = ReciprocalLut::generate(&LutShape::default());
        let mut buf: Vec<u8> = Vec::new();
        write_hex(&lut, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), emit_hex(&lut));
    }

    #[test]
    fn test_default_hex_shape() {
        let lut = ReciprocalLut::generate(&LutShape::default());
        let text = emit_hex(&lut);
        assert_eq!(text.lines().count(), 1024);
        assert!(text.ends_with('\n'));
        assert!(text.lines().all(|l| l.len() == 2));
        assert_eq!(text.lines().nth(1), Some("7F"));
    }

    #[test]
    fn test_parse_reproduces_table() {
        let lut = ReciprocalLut::generate(&LutShape::new(10, 8));
        let parsed = parse_hex(&emit_hex(&lut)).unwrap();
        assert_eq!(parsed.as_slice(), lut.entries());
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert!(parse_hex("7f\n").is_err());
        assert!(parse_hex("7F").is_err());
        assert!(parse_hex("7F\n\n").is_err());
        assert!(parse_hex("007F\n").is_err());
        let e = parse_hex("00\nZZ\n").unwrap_err();
        assert!(e.0.starts_with("line 2:"), "{}", e);
    }

    #[test]
    fn test_write_hex_propagates_sink_failure() {
        struct FailingSink;
        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let lut = ReciprocalLut::generate(&LutShape::new(2, 1));
        let e = write_hex(&lut, FailingSink).unwrap_err();
        assert_eq!(e.to_string(), "disk full");
    }
}
