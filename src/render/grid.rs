//! Character grid + integer line rasteriser shared by every renderer.
//!
//! Coordinates are signed `(x, y)` = (column, row). All writes go through
//! [`Grid::put`], which drops anything outside the grid: a hand or tick that
//! lands past the dial edge simply isn't drawn.

/// Fixed-size 2D array of display characters, blank-filled.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    /// Bounds-checked write; out-of-range cells are silently discarded.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, ch: char) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Writes `s` left to right starting at `(x, y)`, one cell per `char`.
    pub fn put_str(&mut self, x: i32, y: i32, s: &str) {
        for (dx, ch) in (0..).zip(s.chars()) {
            self.put(x + dx, y, ch);
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Stamps every in-bounds cell of a [`Line`].
    pub fn stroke(&mut self, line: Line, ch: char) {
        for (x, y) in line {
            self.put(x, y, ch);
        }
    }

    /// One `String` per row, top first.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); self.height];
        }
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().collect())
            .collect()
    }
}

/// Bresenham walk from `from` to `to`, both ends included.
///
/// When a step crosses both error thresholds, x moves before y; this fixes
/// the exact pixel art of every hand.
#[derive(Clone, Debug)]
pub struct Line {
    x: i32,
    y: i32,
    x2: i32,
    y2: i32,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl Line {
    #[must_use]
    pub fn new((x1, y1): (i32, i32), (x2, y2): (i32, i32)) -> Self {
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        Self {
            x: x1,
            y: y1,
            x2,
            y2,
            dx,
            dy,
            sx: if x1 < x2 { 1 } else { -1 },
            sy: if y1 < y2 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for Line {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let here = (self.x, self.y);
        if here == (self.x2, self.y2) {
            self.done = true;
            return Some(here);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(here)
    }
}
