//! Analog clock face on a character grid.
//!
//! ### Drawing order
//! 1. rim: every cell whose aspect-corrected distance from the centre is
//!    within `rim_tolerance` of the radius,
//! 2. hour ticks, overwriting the rim,
//! 3. hour, minute and second hands, each a Bresenham line from the centre,
//! 4. the centre dot.
//!
//! Angles are clock degrees: 0 is twelve o'clock, increasing clockwise.
//! Polar offsets are truncated toward zero, never rounded, so the hands at
//! 0/90/180/270 degrees don't drift off their axis by a stray 1e-16.

use crate::{
    core::{
        config::{DialSpec, TickStyle},
        constants::{
            CENTER, HOUR_HAND, HOUR_HAND_LENGTH, MINOR_TICK, MINUTE_HAND, MINUTE_HAND_LENGTH, RIM,
            SECOND_HAND, SECOND_HAND_LENGTH,
        },
        reading::ClockReading,
    },
    render::grid::{Grid, Line},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// Back to front: the second hand wins where hands overlap.
    pub const DRAW_ORDER: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];

    /// Clock angle in degrees. The hour hand drifts half a degree a minute.
    #[must_use]
    pub fn angle(self, r: &ClockReading) -> f64 {
        match self {
            Hand::Hour => f64::from(r.hour % 12) * 30.0 + f64::from(r.minute) * 0.5,
            Hand::Minute => f64::from(r.minute) * 6.0,
            Hand::Second => f64::from(r.second) * 6.0,
        }
    }

    /// Fraction of the dial radius.
    #[must_use]
    pub fn length(self) -> f64 {
        match self {
            Hand::Hour => HOUR_HAND_LENGTH,
            Hand::Minute => MINUTE_HAND_LENGTH,
            Hand::Second => SECOND_HAND_LENGTH,
        }
    }

    #[must_use]
    pub fn glyph(self) -> char {
        match self {
            Hand::Hour => HOUR_HAND,
            Hand::Minute => MINUTE_HAND,
            Hand::Second => SECOND_HAND,
        }
    }

    /// Grid cell the hand ends on.
    #[must_use]
    pub fn endpoint(self, dial: &DialSpec, r: &ClockReading) -> (i32, i32) {
        polar(
            dial.center(),
            f64::from(dial.radius) * self.length(),
            self.angle(r),
            dial.aspect,
        )
    }
}

/// Cell at `length` cells from `center` along clock angle `degrees`,
/// horizontally stretched by `aspect`.
#[must_use]
pub fn polar((cx, cy): (i32, i32), length: f64, degrees: f64, aspect: f64) -> (i32, i32) {
    let rad = (degrees - 90.0).to_radians();
    // `as` truncates toward zero
    (
        cx + (length * rad.cos() * aspect) as i32,
        cy + (length * rad.sin()) as i32,
    )
}

/// Label for hour `h` (0 = twelve), or `None` when the style skips it.
fn tick_label(h: u8, style: TickStyle) -> Option<&'static str> {
    match (h, style) {
        (0, _) => Some("12"),
        (3, _) => Some("3"),
        (6, _) => Some("6"),
        (9, _) => Some("9"),
        (_, TickStyle::AllHours) => Some(""),
        (_, TickStyle::Cardinal) => None,
    }
}

fn draw_rim(grid: &mut Grid, dial: &DialSpec) {
    let (cx, cy) = dial.center();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let dx = f64::from(x - cx) / dial.aspect;
            let dy = f64::from(y - cy);
            if dial.on_rim(dx.hypot(dy)) {
                grid.put(x, y, RIM);
            }
        }
    }
}

fn draw_ticks(grid: &mut Grid, dial: &DialSpec) {
    let length = f64::from(dial.radius) - dial.tick_inset;
    for h in 0..12u8 {
        let Some(label) = tick_label(h, dial.ticks) else {
            continue;
        };
        let (x, y) = polar(dial.center(), length, f64::from(h) * 30.0, dial.aspect);
        match label {
            "" => grid.put(x, y, MINOR_TICK),
            // two cells when there's room, else just the leading digit
            "12" if x + 1 >= grid.width() as i32 => grid.put(x, y, '1'),
            text => grid.put_str(x, y, text),
        }
    }
}

/// Renders the dial for one reading.
#[must_use]
pub fn render_dial(dial: &DialSpec, reading: &ClockReading) -> Grid {
    let mut grid = Grid::new(dial.width, dial.height);
    let center = dial.center();

    draw_rim(&mut grid, dial);
    draw_ticks(&mut grid, dial);

    for hand in Hand::DRAW_ORDER {
        grid.stroke(Line::new(center, hand.endpoint(dial, reading)), hand.glyph());
    }

    grid.put(center.0, center.1, CENTER);
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{Layout, Variant};

    fn dial(v: Variant) -> DialSpec {
        Layout::builder(v).build().unwrap().dial
    }

    fn at(h: u8, m: u8, s: u8) -> ClockReading {
        ClockReading::new(h, m, s).unwrap()
    }

    #[test]
    fn hour_hand_on_the_hour_has_no_drift() {
        for h in 0..24u8 {
            let a = Hand::Hour.angle(&at(h, 0, 0));
            assert_eq!(a - 90.0, f64::from(h % 12) * 30.0 - 90.0);
        }
        assert_eq!(Hand::Hour.angle(&at(2, 30, 0)), 75.0);
    }

    #[test]
    fn minute_and_second_hands_step_six_degrees() {
        for m in 0..60u8 {
            assert_eq!(Hand::Minute.angle(&at(0, m, m)), f64::from(m) * 6.0);
            assert_eq!(Hand::Second.angle(&at(0, m, m)), f64::from(m) * 6.0);
        }
    }

    #[test]
    fn minute_hand_at_0_and_30_sits_on_the_12_6_column() {
        for v in [Variant::Classic, Variant::Monitor] {
            let d = dial(v);
            let (cx, cy) = d.center();
            let len = (f64::from(d.radius) * MINUTE_HAND_LENGTH) as i32;
            assert_eq!(Hand::Minute.endpoint(&d, &at(0, 0, 0)), (cx, cy - len));
            assert_eq!(Hand::Minute.endpoint(&d, &at(0, 30, 0)), (cx, cy + len));

            let twelve = polar(d.center(), f64::from(d.radius) - 1.0, 0.0, d.aspect);
            let six = polar(d.center(), f64::from(d.radius) - 1.0, 180.0, d.aspect);
            assert_eq!(twelve.0, cx);
            assert_eq!(six.0, cx);
        }
    }

    #[test]
    fn classic_face_at_nine_oclock_half_minute() {
        let d = dial(Variant::Classic);
        let g = render_dial(&d, &at(21, 0, 30));

        // hour hand runs left along the centre row
        assert_eq!(g.get(10, 10), Some(HOUR_HAND));
        assert_eq!(g.get(15, 10), Some(HOUR_HAND));
        assert_eq!(g.get(9, 10), Some(' '));
        // minute hand straight up, stopping short of the "12"
        assert_eq!(g.get(20, 2), Some(MINUTE_HAND));
        assert_eq!(g.get(20, 6), Some(MINUTE_HAND));
        // second hand straight down over the "6"
        assert_eq!(g.get(20, 15), Some(SECOND_HAND));
        assert_eq!(g.get(20, 19), Some(SECOND_HAND));
        assert_eq!(g.get(20, 10), Some(CENTER));

        assert_eq!(g.get(20, 1), Some('1'));
        assert_eq!(g.get(21, 1), Some('2'));
        assert_eq!(g.get(2, 10), Some('9'));
        assert_eq!(g.get(38, 10), Some('3'));
        assert_eq!(g.get(29, 3), Some(MINOR_TICK));

        assert_eq!(g.get(20, 0), Some(RIM));
        assert_eq!(g.get(0, 10), Some(RIM));
        assert_eq!(g.get(39, 10), Some(RIM));

        let lines = g.into_lines();
        let minor = lines.iter().flat_map(|l| l.chars()).filter(|&c| c == MINOR_TICK);
        assert_eq!(minor.count(), 8);
    }

    #[test]
    fn monitor_face_has_cardinal_ticks_only() {
        let d = dial(Variant::Monitor);
        let g = render_dial(&d, &at(10, 10, 10));
        assert_eq!(g.width(), 17);
        let lines = g.into_lines();
        assert_eq!(lines.len(), 17);
        let text: String = lines.concat();
        assert!(!text.contains(MINOR_TICK));
        for digit in ['3', '6', '9'] {
            assert!(text.contains(digit));
        }
    }

    #[test]
    fn twelve_collapses_to_one_glyph_at_the_edge() {
        let d = Layout::builder(Variant::Classic)
            .grid(1, 21)
            .build()
            .unwrap()
            .dial;
        let g = render_dial(&d, &at(6, 30, 30));
        assert_eq!(g.get(0, 1), Some('1'));
        assert_eq!(g.get(1, 1), None);
    }

    #[test]
    fn centre_dot_always_wins() {
        let d = dial(Variant::Monitor);
        for s in [0, 15, 30, 45] {
            let g = render_dial(&d, &at(0, 0, s));
            assert_eq!(g.get(8, 8), Some(CENTER));
        }
    }
}
