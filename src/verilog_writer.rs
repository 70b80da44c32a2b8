// SPDX-License-Identifier: Apache-2.0

//! Line-oriented text builder for generated Verilog.

pub struct VerilogWriter {
    lines: Vec<String>,
    indent: usize,
}

const INDENT: &str = "  ";

impl VerilogWriter {
    pub fn new() -> Self {
        Self {
            lines: vec![],
            indent: 0,
        }
    }

    pub fn line(&mut self, text: &str) {
        if text.is_empty() {
            self.lines.push(String::new());
        } else {
            self.lines.push(format!("{}{}", INDENT.repeat(self.indent), text));
        }
    }

    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    pub fn indented<F: FnOnce(&mut Self)>(&mut self, body: F) {
        self.indent += 1;
        body(self);
        self.indent -= 1;
    }

    /// Emits `open`, the lines written by `body` one level deeper, then
    /// `close`.
    pub fn block<F: FnOnce(&mut Self)>(&mut self, open: &str, close: &str, body: F) {
        self.line(open);
        self.indented(body);
        self.line(close);
    }

    /// Joins the lines; the result always ends in exactly one newline.
    pub fn build(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

impl Default for VerilogWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// `[msb:0]` span for a fixed bit count; empty for single-bit signals.
/// `bit_count` must be at least 1.
pub fn bit_span(bit_count: u32) -> String {
    debug_assert!(bit_count > 0);
    if bit_count == 1 {
        String::new()
    } else {
        format!("[{}:0] ", bit_count - 1)
    }
}

/// Sized binary literal, e.g. `2'b01`.
pub fn binary_literal(bit_count: u32, value: u32) -> String {
    let width = bit_count as usize;
    format!("{}'b{:0width$b}", bit_count, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_block_indents_body() {
        let mut w = VerilogWriter::new();
        w.block("initial begin", "end", |w| {
            w.line("x = 1;");
            w.blank();
            w.block("begin", "end", |w| w.line("y = 2;"));
        });
        assert_eq!(
            w.build(),
            "initial begin
  x = 1;

  begin
    y = 2;
  end
end
"
        );
    }

    #[test]
    fn test_spans_and_literals() {
        assert_eq!(bit_span(1), "");
        assert_eq!(bit_span(10), "[9:0] ");
        assert_eq!(binary_literal(1, 1), "1'b1");
        assert_eq!(binary_literal(2, 1), "2'b01");
        assert_eq!(binary_literal(3, 0), "3'b000");
    }
}
