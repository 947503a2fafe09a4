//! A collection of constants.

/// Hours ahead of UTC for Japan Standard Time.
pub const JST_OFFSET_HOURS: f64 = 9.0;

/// Default tick between frames, in milliseconds.
pub const FRAME_INTERVAL_MS: u64 = 1_000;

// --- Dial ---

/// Rim glyph
pub const RIM: char = '█';
/// Center dot, always drawn last
pub const CENTER: char = '●';
/// Tick for the non-cardinal hours on the wide dial
pub const MINOR_TICK: char = '•';

pub const HOUR_HAND: char = '#';
pub const MINUTE_HAND: char = '+';
pub const SECOND_HAND: char = '.';

/// Hand lengths as a fraction of the dial radius.
pub const HOUR_HAND_LENGTH: f64 = 0.5;
pub const MINUTE_HAND_LENGTH: f64 = 0.8;
pub const SECOND_HAND_LENGTH: f64 = 0.9;

/// Ticks sit one cell inside the rim.
pub const TICK_INSET: f64 = 1.0;

// --- Graph ---

/// Width of the `" 100%"` style label field
pub const LABEL_WIDTH: usize = 5;
/// Column of the vertical axis rule
pub const AXIS_COLUMN: usize = 5;
/// First plotted column
pub const PLOT_COLUMN: usize = 6;

/// Samples kept per history; also the plot width in columns.
pub const HISTORY_CAPACITY: usize = 40;
/// Plot rows between the title and the bottom axis
pub const GRAPH_HEIGHT: usize = 10;
/// Upper bounds for `--history` / `--graph-height`
pub const MAX_HISTORY_CAPACITY: usize = 1024;
pub const MAX_GRAPH_HEIGHT: usize = 100;

pub const POINT_MARKER: char = '•';
pub const SEGMENT: char = '│';
pub const AXIS_V: char = '│';
pub const AXIS_H: char = '─';
pub const AXIS_CORNER: char = '└';

// --- Layout ---

/// Declared box width of the clock panel next to the graphs
pub const CLOCK_PANEL_WIDTH: usize = 20;
/// Declared box width of each graph panel
pub const GRAPH_PANEL_WIDTH: usize = 55;

/// Placed between panels on every composed row
pub const PANEL_SEPARATOR: &str = " │ ";

/// Fallback when the terminal size cannot be queried
pub const FALLBACK_COLUMNS: u16 = 80;
pub const FALLBACK_ROWS: u16 = 24;
