//! Full-screen frame writer:
//! - `Frame` assembles centred lines for one tick
//! - `Screen` clears and writes the whole frame in a single `write_all`
//! - the cursor is hidden for the lifetime of the `Screen`

use std::io::{self, Stdout, Write, stdout};

use crate::core::{
    bounds::{center_pad, text_width},
    color::{AnsiCode, paint},
};

const CLEAR_HOME: &str = "\x1b[2J\x1b[H";
const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";

/// One frame's text, every line centred on a fixed terminal width.
pub struct Frame {
    columns: usize,
    body: String,
}

impl Frame {
    #[must_use]
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            body: String::with_capacity(columns * 32),
        }
    }

    pub fn blank(&mut self) {
        self.body.push('\n');
    }

    /// Centres `line` by its visible width; wider lines start at column 0.
    pub fn centered(&mut self, line: &str) {
        let pad = center_pad(text_width(line), self.columns);
        self.body.extend(std::iter::repeat_n(' ', pad));
        self.body.push_str(line);
        self.body.push('\n');
    }

    /// Centres a block as a unit, aligned on its widest line.
    pub fn centered_block(&mut self, lines: &[String]) {
        let widest = lines.iter().map(|l| text_width(l)).max().unwrap_or(0);
        let pad = center_pad(widest, self.columns);
        for line in lines {
            self.body.extend(std::iter::repeat_n(' ', pad));
            self.body.push_str(line);
            self.body.push('\n');
        }
    }

    /// Three full-width rows in `style`, `text` centred on the middle one.
    pub fn banner(&mut self, text: &str, style: &[AnsiCode]) {
        let full = " ".repeat(self.columns);
        let width = text_width(text);
        let pad = center_pad(width, self.columns);
        let tail = self.columns.saturating_sub(pad + width);
        let middle = format!("{}{text}{}", " ".repeat(pad), " ".repeat(tail));
        for row in [&full, &middle, &full] {
            self.body.push_str(&paint(style, row));
            self.body.push('\n');
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.body
    }

}

/// Owns the terminal output for the life of the program.
pub struct Screen<W: Write> {
    out: W,
    frames: usize,
}

impl Screen<Stdout> {
    pub fn stdout() -> io::Result<Self> {
        Self::new(stdout())
    }
}

impl<W: Write> Screen<W> {
    /// Hides the cursor; it comes back on drop.
    pub fn new(mut out: W) -> io::Result<Self> {
        out.write_all(HIDE_CURSOR.as_bytes())?;
        out.flush()?;
        Ok(Self { out, frames: 0 })
    }

    /// Clear + home + the whole frame, as one write.
    pub fn present(&mut self, frame: &Frame) -> io::Result<()> {
        let mut buf = String::with_capacity(CLEAR_HOME.len() + frame.as_str().len());
        buf.push_str(CLEAR_HOME);
        buf.push_str(frame.as_str());
        self.out.write_all(buf.as_bytes())?;
        self.out.flush()?;
        self.frames += 1;
        Ok(())
    }

    /// Clears the screen and leaves a parting line.
    pub fn farewell(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{CLEAR_HOME}{message}")?;
        self.out.flush()
    }

    #[inline]
    #[must_use]
    pub fn frames(&self) -> usize {
        self.frames
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        let _ = self.out.write_all(SHOW_CURSOR.as_bytes());
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_centred_by_visible_width() {
        let mut f = Frame::new(10);
        f.centered("ab");
        f.centered("\x1b[31mab\x1b[0m");
        f.centered("much-too-wide-line");
        let lines: Vec<&str> = f.as_str().lines().collect();
        assert_eq!(lines[0], "    ab");
        assert_eq!(lines[1], "    \x1b[31mab\x1b[0m");
        assert_eq!(lines[2], "much-too-wide-line");
    }

    #[test]
    fn block_keeps_its_left_edge() {
        let mut f = Frame::new(12);
        f.centered_block(&["abcd".into(), "ab".into()]);
        assert_eq!(f.as_str(), "    abcd\n    ab\n");
    }

    #[test]
    fn banner_spans_the_terminal() {
        let mut f = Frame::new(8);
        f.banner("JST", &[]);
        let lines: Vec<&str> = f.as_str().lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "  JST   \x1b[0m");
        assert_eq!(lines[0], "        \x1b[0m");
    }

    #[test]
    fn banner_with_wide_glyphs_fits_the_terminal() {
        let mut f = Frame::new(80);
        f.banner("🕐 日本標準時 (JST) 🕐", &[AnsiCode::bg_purple()]);
        for row in f.as_str().lines() {
            assert_eq!(text_width(row), 80);
        }
        // 22 columns of text: 29 blanks either side
        let middle = f.as_str().lines().nth(1).unwrap();
        assert!(middle.starts_with(&format!("\x1b[45m{}🕐", " ".repeat(29))));
    }

    #[test]
    fn wide_text_is_centred_by_columns() {
        let mut f = Frame::new(80);
        f.centered("2026年10月18日 (日)");
        assert!(f.as_str().starts_with(&format!("{}2026", " ".repeat(30))));
    }

    #[test]
    fn present_writes_clear_then_frame() {
        let mut screen = Screen::new(Vec::new()).unwrap();
        let mut f = Frame::new(4);
        f.centered("x");
        screen.present(&f).unwrap();
        assert_eq!(screen.frames(), 1);
        let out = String::from_utf8(screen.output().clone()).unwrap();
        assert_eq!(out, format!("{HIDE_CURSOR}{CLEAR_HOME} x\n"));
    }
}
