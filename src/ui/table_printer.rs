use crate::ui::width_util::WidthUtil;
use std::io::Write;

#[derive(Debug, Default, Clone)]
pub struct TablePrinter {
    util: WidthUtil,
}

impl TablePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_separator<W: Write + ?Sized>(&self, out: &mut W, width: usize) -> std::io::Result<()> {
        let line = if width == 0 {
            "-".into()
        } else {
            "-".repeat(width)
        };
        writeln!(out, "{line}")
    }

    pub fn render_banner<W: Write + ?Sized>(
        &self,
        title: &str,
        width: usize,
        out: &mut W,
    ) -> std::io::Result<()> {
        let w = width.max(self.util.visible_width(title));
        self.write_separator(out, w)?;
        writeln!(out, "{}", title.to_uppercase())?;
        self.write_separator(out, w)
    }

    pub fn compute_table_width<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> usize {
        let col_widths = self.compute_col_widths(headers, rows);
        self.table_natural_width(&col_widths)
    }

    pub fn print_table<T: AsRef<str>>(
        &self,
        table_name: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
    ) {
        let mut stdout = std::io::stdout();
        let _ = self.render_table(table_name, headers, rows, empty_message, &mut stdout);
    }

    /// Render into any writer (used by tests to capture output).
    pub fn render_table<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        table_name: &str,
        headers: &[&str],
        rows: &[Vec<T>],
        empty_message: Option<&str>,
        out: &mut W,
    ) -> std::io::Result<()> {
        let col_widths = self.compute_col_widths(headers, rows);
        let total_width = self.table_natural_width(&col_widths);

        // Empty path
        if rows.is_empty() {
            if let Some(msg) = empty_message {
                self.render_empty_state(out, table_name, msg, total_width)?;
                return Ok(());
            }
        }

        self.render_banner(table_name, total_width, out)?;
        self.render_header(out, headers, &col_widths, total_width)?;
        self.render_rows(out, rows, &col_widths, total_width)?;

        Ok(())
    }

    fn compute_col_widths<T: AsRef<str>>(&self, headers: &[&str], rows: &[Vec<T>]) -> Vec<usize> {
        let col_count = headers.len();
        let mut col_widths = vec![0usize; col_count];
        for (i, h) in headers.iter().enumerate() {
            col_widths[i] = col_widths[i].max(self.util.visible_width(h));
        }
        for r in rows {
            for (i, cell) in r.iter().enumerate().take(col_count) {
                col_widths[i] = col_widths[i].max(self.util.visible_width(cell.as_ref()));
            }
        }
        col_widths
    }

    fn table_natural_width(&self, col_widths: &[usize]) -> usize {
        if col_widths.is_empty() {
            0
        } else {
            col_widths.iter().copied().sum::<usize>() + (col_widths.len() - 1) * 3
        }
    }

    fn render_empty_state<W: Write + ?Sized>(
        &self,
        out: &mut W,
        table_name: &str,
        msg: &str,
        total_width: usize,
    ) -> std::io::Result<()> {
        let width = total_width
            .max(self.util.visible_width(table_name))
            .max(self.util.visible_width(msg));
        self.render_banner(table_name, width, out)?;
        writeln!(out, "{msg}")?;
        self.write_separator(out, width)?;
        Ok(())
    }

    fn render_header<W: Write + ?Sized>(
        &self,
        out: &mut W,
        headers: &[&str],
        col_widths: &[usize],
        total_width: usize,
    ) -> std::io::Result<()> {
        if headers.is_empty() {
            return Ok(());
        }
        let line = headers
            .iter()
            .enumerate()
            .map(|(i, h)| self.util.pad_visible(h, col_widths[i]))
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(out, "{line}")?;
        self.write_separator(out, total_width)?;
        Ok(())
    }

    fn render_rows<T: AsRef<str>, W: Write + ?Sized>(
        &self,
        out: &mut W,
        rows: &[Vec<T>],
        col_widths: &[usize],
        total_width: usize,
    ) -> std::io::Result<()> {
        for row in rows {
            let line = row
                .iter()
                .enumerate()
                .take(col_widths.len())
                .map(|(i, cell)| self.util.pad_visible(cell.as_ref(), col_widths[i]))
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(out, "{line}")?;
        }
        self.write_separator(out, total_width)
    }
}
