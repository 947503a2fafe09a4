//! Run-time layout object + fluent builder.
//!
//! One [`Layout`] drives both the plain clock and the clock-plus-graphs
//! screen; the two only differ in the preset the builder starts from.

use crate::core::{
    color::AnsiCode,
    constants::{
        CLOCK_PANEL_WIDTH, GRAPH_HEIGHT, GRAPH_PANEL_WIDTH, HISTORY_CAPACITY, JST_OFFSET_HOURS,
        MAX_GRAPH_HEIGHT, MAX_HISTORY_CAPACITY, TICK_INSET,
    },
    error::ConfigError,
    sampler::Metric,
};

/// Which preset a [`Layout`] starts from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Variant {
    /// Wide, aspect-corrected dial on its own.
    Classic,
    /// Compact dial with CPU and memory graphs beside it.
    Monitor,
}

/// Which hours get a tick mark.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickStyle {
    /// 12, 3, 6 and 9 only.
    Cardinal,
    /// Numerals on the cardinal hours, a dot on the other eight.
    AllHours,
}

/// Fixed dial geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct DialSpec {
    pub radius: u16,
    pub width: usize,
    pub height: usize,
    /// Horizontal stretch; 1.0 draws an uncorrected circle.
    pub aspect: f64,
    pub rim_tolerance: f64,
    pub tick_inset: f64,
    pub ticks: TickStyle,
}

impl DialSpec {
    /// Grid cell of the dial centre as `(x, y)`.
    #[inline]
    #[must_use]
    pub fn center(&self) -> (i32, i32) {
        (self.width as i32 / 2, self.height as i32 / 2)
    }

    /// Is a point `distance` cells from the centre part of the rim?
    #[inline]
    #[must_use]
    pub fn on_rim(&self, distance: f64) -> bool {
        (distance - f64::from(self.radius)).abs() < self.rim_tolerance
    }
}

/// One scrolling percentage graph.
#[derive(Clone, Debug)]
pub struct GraphSpec {
    pub title: String,
    pub metric: Metric,
    /// Plot rows, excluding the title row and the bottom axis.
    pub height: usize,
    /// Rolling history length, which is also the plot width.
    pub capacity: usize,
    /// Declared box width handed to the composer.
    pub panel_width: usize,
    pub color: AnsiCode,
}

impl GraphSpec {
    /// Rows the rendered panel occupies: title + plot + axis.
    #[inline]
    #[must_use]
    pub fn panel_height(&self) -> usize {
        self.height + 2
    }
}

/// Immutable parameters handed to the renderers and the driver.
#[derive(Debug, Clone)]
pub struct Layout {
    pub variant: Variant,
    pub dial: DialSpec,
    /// Side panels; empty for [`Variant::Classic`].
    pub graphs: Vec<GraphSpec>,
    pub clock_panel_width: usize,
    /// Dial and panel body colour (drawn bold).
    pub accent: AnsiCode,
    /// Date, digital time and footer colour.
    pub text: AnsiCode,
    pub offset_hours: f64,
    pub zone_label: String,
    pub header: bool,
}

impl Layout {
    #[inline]
    #[must_use]
    pub fn builder(variant: Variant) -> LayoutBuilder {
        LayoutBuilder::new(variant)
    }
}

/// Fluent builder with zero allocation until `build`.
#[derive(Debug)]
pub struct LayoutBuilder {
    variant: Variant,
    radius: u16,
    grid: Option<(usize, usize)>,
    aspect: f64,
    rim_tolerance: f64,
    ticks: TickStyle,
    graph_height: usize,
    capacity: usize,
    accent: Option<AnsiCode>,
    offset_hours: f64,
    zone_label: Option<String>,
    header: bool,
}

impl LayoutBuilder {
    pub(crate) fn new(variant: Variant) -> Self {
        let (radius, grid, aspect, rim_tolerance, ticks) = match variant {
            // The wide dial is four columns per unit of radius; its right-most
            // rim column falls just outside the grid and is dropped.
            Variant::Classic => (10, Some((40, 21)), 2.0, 0.8, TickStyle::AllHours),
            Variant::Monitor => (8, None, 1.0, 0.6, TickStyle::Cardinal),
        };
        Self {
            variant,
            radius,
            grid,
            aspect,
            rim_tolerance,
            ticks,
            graph_height: GRAPH_HEIGHT,
            capacity: HISTORY_CAPACITY,
            accent: None,
            offset_hours: JST_OFFSET_HOURS,
            zone_label: None,
            header: false,
        }
    }

    /// Changing the radius re-derives the grid size from it.
    #[inline]
    pub fn radius(mut self, r: u16) -> Self {
        self.radius = r;
        self.grid = None;
        self
    }
    #[inline]
    pub fn grid(mut self, width: usize, height: usize) -> Self {
        self.grid = Some((width, height));
        self
    }
    #[inline]
    pub fn aspect(mut self, a: f64) -> Self {
        self.aspect = a;
        self
    }
    #[inline]
    pub fn rim_tolerance(mut self, t: f64) -> Self {
        self.rim_tolerance = t;
        self
    }
    #[inline]
    pub fn graph_height(mut self, h: usize) -> Self {
        self.graph_height = h;
        self
    }
    #[inline]
    pub fn history(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
    #[inline]
    pub fn color(mut self, c: AnsiCode) -> Self {
        self.accent = Some(c);
        self
    }
    #[inline]
    pub fn offset_hours(mut self, h: f64) -> Self {
        self.offset_hours = h;
        self
    }
    #[inline]
    pub fn zone_label(mut self, l: impl Into<String>) -> Self {
        self.zone_label = Some(l.into());
        self
    }
    #[inline]
    pub fn header(mut self, on: bool) -> Self {
        self.header = on;
        self
    }

    pub fn build(self) -> Result<Layout, ConfigError> {
        if self.radius < 2 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        if !self.aspect.is_finite() || self.aspect <= 0.0 {
            return Err(ConfigError::InvalidAspect(self.aspect));
        }
        if !(self.rim_tolerance > 0.0 && self.rim_tolerance < 1.0) {
            return Err(ConfigError::InvalidTolerance(self.rim_tolerance));
        }
        if !self.offset_hours.is_finite() || self.offset_hours.abs() >= 24.0 {
            return Err(ConfigError::InvalidOffset(self.offset_hours));
        }

        let r = usize::from(self.radius);
        let (width, height) = self.grid.unwrap_or_else(|| {
            let half = (f64::from(self.radius) * self.aspect).round() as usize;
            (2 * half + 1, 2 * r + 1)
        });

        let graphs = match self.variant {
            Variant::Classic => Vec::new(),
            Variant::Monitor => {
                if !(2..=MAX_GRAPH_HEIGHT).contains(&self.graph_height) {
                    return Err(ConfigError::InvalidGraphHeight(self.graph_height));
                }
                if !(1..=MAX_HISTORY_CAPACITY).contains(&self.capacity) {
                    return Err(ConfigError::InvalidCapacity(self.capacity));
                }
                let graph = |title: &str, metric: Metric, color: AnsiCode| GraphSpec {
                    title: title.to_owned(),
                    metric,
                    height: self.graph_height,
                    capacity: self.capacity,
                    panel_width: GRAPH_PANEL_WIDTH,
                    color,
                };
                vec![
                    graph("CPU", Metric::Cpu, AnsiCode::cyan()),
                    graph("MEM", Metric::Memory, AnsiCode::green()),
                ]
            }
        };

        Ok(Layout {
            variant: self.variant,
            dial: DialSpec {
                radius: self.radius,
                width,
                height,
                aspect: self.aspect,
                rim_tolerance: self.rim_tolerance,
                tick_inset: TICK_INSET,
                ticks: self.ticks,
            },
            graphs,
            clock_panel_width: CLOCK_PANEL_WIDTH,
            accent: self.accent.unwrap_or_else(AnsiCode::magenta),
            text: AnsiCode::purple(),
            offset_hours: self.offset_hours,
            zone_label: self.zone_label.unwrap_or_else(|| "JST".to_owned()),
            header: self.header,
        })
    }
}
