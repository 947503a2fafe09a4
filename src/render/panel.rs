//! Fixed-size text panels and the side-by-side frame composer.

use crate::core::{
    bounds::text_width,
    color::{AnsiCode, paint},
    constants::PANEL_SEPARATOR,
};

/// Rendered lines plus the box they are laid out in.
///
/// The box is policy, not measurement: content wider than `width` is kept
/// whole and pushes the rest of its row to the right.
#[derive(Clone, Debug)]
pub struct Panel {
    pub lines: Vec<String>,
    pub width: usize,
    pub height: usize,
    /// Codes wrapped around every non-blank cell; empty means plain text.
    pub style: Vec<AnsiCode>,
}

impl Panel {
    /// Box height defaults to the number of lines.
    #[must_use]
    pub fn new(lines: Vec<String>, width: usize) -> Self {
        let height = lines.len();
        Self {
            lines,
            width,
            height,
            style: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn styled(mut self, codes: &[AnsiCode]) -> Self {
        self.style = codes.to_vec();
        self
    }

    /// Rows this panel claims in a composed frame.
    #[inline]
    fn rows(&self) -> usize {
        self.height.max(self.lines.len())
    }

    /// Row `r` padded with trailing blanks to the box width. Rows past the
    /// end are blank, so short panels pad at the bottom.
    fn cell(&self, r: usize, out: &mut String) {
        let text = self.lines.get(r).map_or("", String::as_str);
        let used = text_width(text);
        if self.style.is_empty() || text.trim().is_empty() {
            out.push_str(text);
        } else {
            out.push_str(&paint(&self.style, text));
        }
        out.extend(std::iter::repeat_n(' ', self.width.saturating_sub(used)));
    }
}

/// Lays `panels` out left to right, top-aligned, joined by `" │ "`.
#[must_use]
pub fn compose(panels: &[Panel]) -> Vec<String> {
    let rows = panels.iter().map(Panel::rows).max().unwrap_or(0);
    let width: usize = panels.iter().map(|p| p.width).sum::<usize>()
        + PANEL_SEPARATOR.len() * panels.len().saturating_sub(1);

    (0..rows)
        .map(|r| {
            let mut line = String::with_capacity(width * 3);
            for (i, p) in panels.iter().enumerate() {
                if i > 0 {
                    line.push_str(PANEL_SEPARATOR);
                }
                p.cell(r, &mut line);
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(ch: char, width: usize, rows: usize) -> Panel {
        Panel::new(vec![ch.to_string().repeat(width); rows], width)
    }

    #[test]
    fn three_panels_pad_to_the_tallest() {
        let frame = compose(&[block('a', 20, 10), block('b', 55, 12), block('c', 55, 8)]);
        assert_eq!(frame.len(), 12);
        for row in &frame {
            assert_eq!(text_width(row), 20 + 3 + 55 + 3 + 55);
        }
        // short panels are padded below, never above
        assert!(frame[0].starts_with('a'));
        assert!(frame[9].starts_with('a'));
        assert!(frame[10].starts_with(&" ".repeat(20)));
        assert!(frame[7].ends_with('c'));
        assert!(frame[8].ends_with(&" ".repeat(55)));
        assert_eq!(frame[11].chars().nth(23), Some('b'));
    }

    #[test]
    fn narrow_content_is_padded_to_its_box() {
        let p = Panel::new(vec!["ab".into()], 5);
        let q = Panel::new(vec!["x".into()], 1);
        assert_eq!(compose(&[p, q]), vec!["ab    │ x".to_owned()]);
    }

    #[test]
    fn wide_content_overflows_instead_of_truncating() {
        let p = Panel::new(vec!["abcdef".into()], 3);
        let q = Panel::new(vec!["x".into()], 1);
        assert_eq!(compose(&[p, q]), vec!["abcdef │ x".to_owned()]);
    }

    #[test]
    fn declared_height_adds_blank_rows() {
        let p = Panel::new(vec!["hi".into()], 2).with_height(3);
        assert_eq!(compose(&[p]), vec!["hi", "  ", "  "]);
    }

    #[test]
    fn style_wraps_text_but_not_padding() {
        let p = Panel::new(vec!["ab".into(), String::new()], 4).styled(&[AnsiCode::Sgr("31")]);
        let frame = compose(&[p]);
        assert_eq!(frame[0], "\x1b[31mab\x1b[0m  ");
        assert_eq!(frame[1], "    ");
    }

    #[test]
    fn no_panels_no_rows() {
        assert!(compose(&[]).is_empty());
    }
}
