use terminal_size::{Width, terminal_size};

use crate::ui::ascii::ESC_BYTE;
type ByteIter<'a> = std::iter::Peekable<std::str::Bytes<'a>>;

#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    fn strip_ansi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut bytes = s.bytes().peekable();

        while let Some(byte) = bytes.next() {
            if byte == ESC_BYTE && matches!(bytes.peek(), Some(b'[')) {
                Self::consume_csi(&mut bytes);
                continue;
            }
            out.push(byte as char);
        }
        out
    }

    fn consume_csi(bytes: &mut ByteIter<'_>) {
        let _ = bytes.next(); // skip '['
        for nb in bytes.by_ref() {
            if (nb as char).is_ascii_alphabetic() {
                break;
            }
        }
    }

    /// Character count with ANSI sequences removed.
    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().count()
    }

    #[cfg(test)]
    pub(crate) fn strip_ansi_for_test(s: &str) -> String {
        Self::strip_ansi(s)
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            s.to_string()
        } else {
            let mut out = String::with_capacity(s.len() + (width - w));
            out.push_str(s);
            out.push_str(&" ".repeat(width - w));
            out
        }
    }

    /// Terminal column count, when a terminal is attached.
    pub fn terminal_width(&self) -> Option<usize> {
        terminal_size().map(|(Width(w), _)| w as usize)
    }
}
