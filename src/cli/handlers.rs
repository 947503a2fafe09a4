use std::{
    io::Write,
    time::{Duration, Instant},
};

use tracing_subscriber::EnvFilter;

use crate::{
    core::{
        bounds::terminal_geometry,
        color::{AnsiCode, NAMED, colorize},
        config::{Layout, LayoutBuilder, Variant},
        error::ClockError,
        reading::TimeSource,
        sampler::LoadSampler,
    },
    render::{
        frame::Screen,
        scene::{FAREWELL, Scene},
    },
};

use super::{
    interrupt,
    parse::{MonitorArgs, ViewArgs},
};

/// Granularity of the interruptible sleep between frames.
const POLL_SLICE: Duration = Duration::from_millis(50);

/// Why the frame loop stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Exit {
    Interrupted,
    FrameLimit,
}

/// Timing totals for the `--debug` summary.
#[derive(Default)]
struct Stats {
    frames: usize,
    render_us: u128,
}

fn init_logging(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // a second init (tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn builder_for(a: &ViewArgs, variant: Variant) -> Result<LayoutBuilder, ClockError> {
    Ok(Layout::builder(variant)
        .color(AnsiCode::from_name(&a.color)?)
        .offset_hours(a.offset)
        .zone_label(a.label.as_str())
        .header(a.header))
}

pub fn clock(a: &ViewArgs) -> Result<(), ClockError> {
    let layout = builder_for(a, Variant::Classic)?.build()?;
    run(a, layout)
}

pub fn monitor(a: &MonitorArgs) -> Result<(), ClockError> {
    let layout = builder_for(&a.view, Variant::Monitor)?
        .history(a.history)
        .graph_height(a.graph_height)
        .build()?;
    run(&a.view, layout)
}

fn run(a: &ViewArgs, layout: Layout) -> Result<(), ClockError> {
    init_logging(a.debug);
    let source = TimeSource::new(layout.offset_hours)?;
    interrupt::init()?;

    tracing::info!(
        variant = ?layout.variant,
        offset_hours = layout.offset_hours,
        interval_ms = a.interval_ms,
        "starting clock"
    );

    let text = layout.text;
    let mut scene = Scene::new(layout);
    let mut sampler = scene.wants_samples().then(LoadSampler::new);
    let mut screen = Screen::stdout()?;
    let interval = Duration::from_millis(a.interval_ms.max(1));

    let mut stats = Stats::default();
    let exit = drive(
        &mut scene,
        &source,
        sampler.as_mut(),
        &mut screen,
        Tick {
            interval,
            frames: a.frames,
            columns: &|| usize::from(terminal_geometry().0.0),
            stop: &interrupt::is_interrupted,
        },
        &mut stats,
    )?;

    if exit == Exit::Interrupted {
        screen.farewell(&colorize(&text, FAREWELL))?;
    }
    drop(screen);

    if a.debug && stats.frames > 0 {
        eprintln!(
            "clock stopped: {} frames   avg render {:.1} µs",
            stats.frames,
            stats.render_us as f64 / stats.frames as f64,
        );
    }
    Ok(())
}

/// Loop knobs, split out so tests can drive the loop without a terminal.
struct Tick<'a> {
    interval: Duration,
    frames: Option<usize>,
    columns: &'a dyn Fn() -> usize,
    stop: &'a dyn Fn() -> bool,
}

/// Time → (samples) → frame → screen, once per tick, until stopped.
fn drive<W: Write>(
    scene: &mut Scene,
    source: &TimeSource,
    mut sampler: Option<&mut LoadSampler>,
    screen: &mut Screen<W>,
    tick: Tick<'_>,
    stats: &mut Stats,
) -> Result<Exit, ClockError> {
    loop {
        if (tick.stop)() {
            return Ok(Exit::Interrupted);
        }

        let t0 = Instant::now();
        if let Some(s) = sampler.as_deref_mut() {
            let sample = s.sample();
            tracing::debug!(cpu = sample.cpu, memory = sample.memory, "sampled load");
            scene.record(sample);
        }
        let frame = scene.frame(&source.now(), (tick.columns)());
        screen.present(&frame)?;

        let render_us = t0.elapsed().as_micros();
        stats.frames += 1;
        stats.render_us += render_us;
        tracing::debug!(
            frame = stats.frames,
            render_us = render_us as u64,
            "frame presented"
        );

        if tick.frames.is_some_and(|n| stats.frames >= n) {
            return Ok(Exit::FrameLimit);
        }
        if pause(tick.interval, tick.stop) {
            return Ok(Exit::Interrupted);
        }
    }
}

/// Sleeps `total` in short slices; `true` if `stop` fired meanwhile.
fn pause(total: Duration, stop: &dyn Fn() -> bool) -> bool {
    let deadline = Instant::now() + total;
    loop {
        if stop() {
            return true;
        }
        let now = Instant::now();
        if now >= deadline {
            return false;
        }
        std::thread::sleep(POLL_SLICE.min(deadline - now));
    }
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    for (name, code) in NAMED {
        println!("{}", colorize(&code, name));
    }
    println!("{}", colorize(&AnsiCode::purple(), "bright-magenta (= purple)"));
    println!(
        "{}  (#6048c1 or any other #RRGGBB)\n",
        colorize(&AnsiCode::Rgb(0x60, 0x48, 0xc1), "#6048c1")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "jst-clock";
    println!(
        "
Example invocations
-------------------
• Wide JST clock      : {bin}
• With banner         : {bin} clock --header
• Another zone        : {bin} clock --offset 5.5 --label IST
• Clock + CPU/memory  : {bin} monitor
• Longer history      : {bin} monitor --history 48 --graph-height 12
• Hex color           : {bin} clock --color '#6048c1'
• Ten frames, timed   : {bin} clock --frames 10 --debug
"
    );
}
