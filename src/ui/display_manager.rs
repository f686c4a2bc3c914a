use crate::core::roster::Roster;
use crate::ui::charts::ChartRenderer;
use crate::ui::table_printer::TablePrinter;
use std::io;
use std::io::Write;

/// Shown instead of statistics when the roster has no records.
pub const NO_DATA: &str = "No data available.";

#[derive(Debug, Default, Clone)]
pub struct DisplayManager {
    pub printer: TablePrinter,
    pub charts: ChartRenderer,
}

impl DisplayManager {
    pub fn new() -> Self {
        Self {
            printer: TablePrinter::new(),
            charts: ChartRenderer::new(),
        }
    }

    fn roster_rows(&self, roster: &Roster) -> Vec<Vec<String>> {
        roster
            .records()
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.name.clone(),
                    format!("{:.2}", r.grade.value()),
                ]
            })
            .collect()
    }

    pub fn display_roster(&self, roster: &Roster) {
        let mut stdout = io::stdout();
        let _ = self.render_roster(roster, &mut stdout);
    }

    pub fn render_roster<W: Write + ?Sized>(
        &self,
        roster: &Roster,
        out: &mut W,
    ) -> io::Result<()> {
        let headers = ["ID", "NAME", "GRADE"];
        let rows = self.roster_rows(roster);
        self.printer.render_table(
            "Students",
            &headers,
            &rows,
            Some("No students in the roster."),
            out,
        )
    }

    pub fn display_summary(&self, roster: &Roster) {
        let mut stdout = io::stdout();
        let _ = self.render_summary(roster, &mut stdout);
    }

    /// Highest / lowest / average grade block, mean with two decimals.
    pub fn render_summary<W: Write + ?Sized>(
        &self,
        roster: &Roster,
        out: &mut W,
    ) -> io::Result<()> {
        let Some(summary) = roster.summary() else {
            let rows: Vec<Vec<String>> = Vec::new();
            return self
                .printer
                .render_table("Analyse Data", &[], &rows, Some(NO_DATA), out);
        };

        let lines = [
            format!("Highest Grade = {}", summary.max),
            format!("Lowest Grade = {}", summary.min),
            format!("Average Grade = {:.2}", summary.mean),
        ];
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        self.printer.render_banner("Analyse Data", width, out)?;
        for line in &lines {
            writeln!(out, "{line}")?;
        }
        writeln!(out)
    }

    pub fn display_bar_chart(&self, roster: &Roster) {
        let mut stdout = io::stdout();
        let _ = self.charts.render_bar_chart(roster, &mut stdout);
    }

    pub fn display_distribution(&self, roster: &Roster) {
        let mut stdout = io::stdout();
        let _ = self.charts.render_distribution(roster, &mut stdout);
    }

    pub fn display_histogram(&self, roster: &Roster) {
        let mut stdout = io::stdout();
        let _ = self.charts.render_histogram(roster, &mut stdout);
    }
}
