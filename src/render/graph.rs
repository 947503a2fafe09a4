//! Scrolling percentage line chart.
//!
//! ```text
//! CPU  12.3%
//!  100%│
//!   89%│      │
//!   ...│     •│•
//!    0%│•••••  ••
//!      └──────────
//! ```
//! Row 0 holds the title, rows `1..=height` the plot, the last row the
//! x axis. Between two samples whose rows differ by more than one the later
//! column gets a vertical run instead of a true diagonal.

use crate::{
    core::{
        config::GraphSpec,
        constants::{AXIS_COLUMN, AXIS_CORNER, AXIS_H, AXIS_V, PLOT_COLUMN, POINT_MARKER, SEGMENT},
        history::SampleHistory,
        sampler::clamp_percent,
    },
    render::{grid::Grid, panel::Panel},
};

/// Plot row for `value` on a chart `height` rows tall, 1 = top.
#[inline]
#[must_use]
pub fn value_row(value: f64, height: usize) -> i32 {
    let span = (height.saturating_sub(1)) as f64;
    height as i32 - (clamp_percent(value) / 100.0 * span).round() as i32
}

/// Axis label for plot row `i` (0 = top).
#[inline]
#[must_use]
pub fn axis_label(i: usize, height: usize) -> String {
    let pct = 100 - i * 100 / height.saturating_sub(1).max(1);
    format!("{pct:>4}%")
}

fn draw_axes(grid: &mut Grid, spec: &GraphSpec) {
    for i in 0..spec.height {
        let row = i as i32 + 1;
        grid.put_str(0, row, &axis_label(i, spec.height));
        grid.put(AXIS_COLUMN as i32, row, AXIS_V);
    }
    let bottom = spec.height as i32 + 1;
    grid.put(AXIS_COLUMN as i32, bottom, AXIS_CORNER);
    for c in PLOT_COLUMN..grid.width() {
        grid.put(c as i32, bottom, AXIS_H);
    }
}

fn draw_series(grid: &mut Grid, history: &SampleHistory, height: usize) {
    let mut prev: Option<i32> = None;
    for (i, v) in history.iter().enumerate() {
        let col = (PLOT_COLUMN + i) as i32;
        let row = value_row(v, height);
        match prev {
            Some(p) if (row - p).abs() > 1 => {
                for r in p.min(row)..=p.max(row) {
                    grid.put(col, r, SEGMENT);
                }
            }
            _ => grid.put(col, row, POINT_MARKER),
        }
        prev = Some(row);
    }
}

/// Renders one graph panel from its history.
#[must_use]
pub fn render_graph(spec: &GraphSpec, history: &SampleHistory) -> Panel {
    let mut grid = Grid::new(PLOT_COLUMN + spec.capacity, spec.panel_height());

    let latest = history.latest().map_or(0.0, clamp_percent);
    grid.put_str(0, 0, &format!("{} {latest:5.1}%", spec.title));
    draw_axes(&mut grid, spec);
    draw_series(&mut grid, history, spec.height);

    Panel::new(grid.into_lines(), spec.panel_width)
        .with_height(spec.panel_height())
        .styled(&[spec.color])
}
