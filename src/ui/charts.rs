use crate::core::roster::Roster;
use crate::ui::ansi::{FG_PURPLE, FG_ROYAL_BLUE, FG_SKY_BLUE, STYLE_RESET};
use crate::ui::table_printer::TablePrinter;
use crate::ui::width_util::WidthUtil;
use std::io::Write;

/// Shown instead of a chart when the roster has no records.
pub const NO_PLOT_DATA: &str = "No data available for plotting.";

pub const HISTOGRAM_BINS: usize = 10;

const BLOCK: &str = "█";
const DEFAULT_BAR_WIDTH: usize = 40;

/// Renders charts as rows of colored blocks, written to any `Write`.
/// Printing a chart never blocks the menu loop.
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    printer: TablePrinter,
    util: WidthUtil,
    max_bar_width: usize,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        let util = WidthUtil;
        let max_bar_width = util
            .terminal_width()
            .map(|w| (w / 2).clamp(20, 60))
            .unwrap_or(DEFAULT_BAR_WIDTH);
        Self {
            printer: TablePrinter::new(),
            util,
            max_bar_width,
        }
    }
}

impl ChartRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_bar_width(max_bar_width: usize) -> Self {
        Self {
            printer: TablePrinter::new(),
            util: WidthUtil,
            max_bar_width,
        }
    }

    /// One bar per student, scaled against the full 0-100 range.
    pub fn render_bar_chart<W: Write + ?Sized>(
        &self,
        roster: &Roster,
        out: &mut W,
    ) -> std::io::Result<()> {
        if roster.is_empty() {
            return self.render_no_data(out, "Student Grades");
        }

        let label_width = roster
            .records()
            .iter()
            .map(|r| self.util.visible_width(&r.name))
            .max()
            .unwrap_or(0);

        let lines: Vec<String> = roster
            .records()
            .iter()
            .map(|r| {
                let bar = self.scaled_bar(r.grade.value() / 100.0);
                format!(
                    "{} | {FG_SKY_BLUE}{bar}{STYLE_RESET} {}",
                    self.util.pad_visible(&r.name, label_width),
                    r.grade
                )
            })
            .collect();

        self.render_chart(out, "Student Grades", &lines)
    }

    /// Pass/fail shares, the terminal analogue of a two-slice pie chart.
    pub fn render_distribution<W: Write + ?Sized>(
        &self,
        roster: &Roster,
        out: &mut W,
    ) -> std::io::Result<()> {
        if roster.is_empty() {
            return self.render_no_data(out, "Student Pass vs Fail Rates");
        }

        let dist = roster.distribution();
        let total = dist.total() as f32;
        let lines = vec![
            format!(
                "Pass | {FG_ROYAL_BLUE}{}{STYLE_RESET} {} ({:.1}%)",
                self.scaled_bar(dist.pass as f32 / total),
                dist.pass,
                dist.pass_pct()
            ),
            format!(
                "Fail | {FG_PURPLE}{}{STYLE_RESET} {} ({:.1}%)",
                self.scaled_bar(dist.fail as f32 / total),
                dist.fail,
                dist.fail_pct()
            ),
        ];

        self.render_chart(out, "Student Pass vs Fail Rates", &lines)
    }

    /// Frequency of grades across ten equal buckets over [0, 100].
    pub fn render_histogram<W: Write + ?Sized>(
        &self,
        roster: &Roster,
        out: &mut W,
    ) -> std::io::Result<()> {
        if roster.is_empty() {
            return self.render_no_data(out, "Grade Distribution Histogram");
        }

        let counts = roster.histogram(HISTOGRAM_BINS);
        let max_count = counts.iter().copied().max().unwrap_or(0).max(1);
        let bucket_span = 100 / HISTOGRAM_BINS;
        let label_width = self.util.visible_width(&format!(
            "{}-{}",
            100 - bucket_span,
            100
        ));

        let lines: Vec<String> = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let label = format!("{}-{}", i * bucket_span, (i + 1) * bucket_span);
                let bar = self.scaled_bar(count as f32 / max_count as f32);
                format!(
                    "{} | {FG_PURPLE}{bar}{STYLE_RESET} {count}",
                    self.util.pad_visible(&label, label_width)
                )
            })
            .collect();

        self.render_chart(out, "Grade Distribution Histogram", &lines)
    }

    /// Block run for a ratio in [0, 1]; non-zero ratios get at least one block.
    fn scaled_bar(&self, ratio: f32) -> String {
        let len = (ratio * self.max_bar_width as f32).round() as usize;
        let len = if ratio > 0.0 { len.max(1) } else { 0 };
        BLOCK.repeat(len.min(self.max_bar_width))
    }

    fn render_chart<W: Write + ?Sized>(
        &self,
        out: &mut W,
        title: &str,
        lines: &[String],
    ) -> std::io::Result<()> {
        let width = lines
            .iter()
            .map(|l| self.util.visible_width(l))
            .max()
            .unwrap_or(0);
        self.printer.render_banner(title, width, out)?;
        for line in lines {
            writeln!(out, "{line}")?;
        }
        writeln!(out)
    }

    fn render_no_data<W: Write + ?Sized>(&self, out: &mut W, title: &str) -> std::io::Result<()> {
        let rows: Vec<Vec<String>> = Vec::new();
        self.printer
            .render_table(title, &[], &rows, Some(NO_PLOT_DATA), out)
    }
}
