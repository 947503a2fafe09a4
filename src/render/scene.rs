//! Everything that goes on screen for one tick, built from a [`Layout`].

use crate::{
    core::{
        bounds::{center_pad, text_width},
        color::{AnsiCode, colorize},
        config::{Layout, Variant},
        history::SampleHistory,
        reading::{ClockReading, LocalTime},
        sampler::LoadSample,
    },
    render::{
        dial::render_dial,
        frame::Frame,
        graph::render_graph,
        panel::{Panel, compose},
    },
};

pub const FOOTER: &str = "Ctrl+C で終了";
pub const FAREWELL: &str = "時計を終了しました。";

/// Layout plus the sample histories that outlive a single frame.
pub struct Scene {
    layout: Layout,
    histories: Vec<SampleHistory>,
}

impl Scene {
    /// Histories start zero-filled so every graph is full width at once.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        let histories = layout
            .graphs
            .iter()
            .map(|g| SampleHistory::zeroed(g.capacity))
            .collect();
        Self { layout, histories }
    }

    #[inline]
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    #[must_use]
    pub fn histories(&self) -> &[SampleHistory] {
        &self.histories
    }

    /// Does this scene plot anything the sampler feeds?
    #[inline]
    #[must_use]
    pub fn wants_samples(&self) -> bool {
        !self.histories.is_empty()
    }

    /// Appends one tick's sample to each graph's history.
    pub fn record(&mut self, sample: LoadSample) {
        for (graph, history) in self.layout.graphs.iter().zip(&mut self.histories) {
            history.push(sample.get(graph.metric));
        }
    }

    fn accent(&self) -> [AnsiCode; 2] {
        [AnsiCode::bold(), self.layout.accent]
    }

    /// The clock's panel, plus the graphs in monitor mode.
    #[must_use]
    pub fn panels(&self, reading: &ClockReading) -> Vec<Panel> {
        let dial = &self.layout.dial;
        let mut lines = render_dial(dial, reading).into_lines();

        match self.layout.variant {
            Variant::Classic => vec![Panel::new(lines, dial.width).styled(&self.accent())],
            Variant::Monitor => {
                let digital = reading.digital();
                let pad = center_pad(text_width(&digital), dial.width);
                lines.push(format!("{}{digital}", " ".repeat(pad)));

                let clock =
                    Panel::new(lines, self.layout.clock_panel_width).styled(&self.accent());
                std::iter::once(clock)
                    .chain(
                        self.layout
                            .graphs
                            .iter()
                            .zip(&self.histories)
                            .map(|(g, h)| render_graph(g, h)),
                    )
                    .collect()
            }
        }
    }

    fn header_text(&self) -> String {
        let label = &self.layout.zone_label;
        if label == "JST" {
            "🕐 日本標準時 (JST) 🕐".to_owned()
        } else {
            format!("🕐 {label} (UTC{:+}) 🕐", self.layout.offset_hours)
        }
    }

    /// Whole screen for `now`, centred on `columns`.
    #[must_use]
    pub fn frame(&self, now: &LocalTime, columns: usize) -> Frame {
        let text = self.layout.text;
        let paint = |s: &str| colorize(&text, s);
        let reading = now.reading();
        let mut f = Frame::new(columns);

        if self.layout.header {
            f.banner(
                &self.header_text(),
                &[AnsiCode::bg_purple(), AnsiCode::black(), AnsiCode::bold()],
            );
            f.blank();
        }

        f.centered(&paint(&now.date_line()));
        // two rows between date and dial
        f.blank();
        f.blank();

        let rows: Vec<String> = compose(&self.panels(&reading))
            .into_iter()
            .map(|r| r.trim_end().to_owned())
            .collect();
        f.centered_block(&rows);

        if self.layout.variant == Variant::Classic {
            f.blank();
            f.centered(&paint(&reading.digital()));
        }

        f.blank();
        f.centered(&paint(FOOTER));
        f
    }
}
