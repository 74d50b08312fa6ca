use colored::Color;

use crate::cli::ui::style::UiStyle;

/// Declarative description of a table column.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub width: usize,
    pub align_right: bool,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, width: usize) -> Self {
        Self {
            header: header.into(),
            width,
            align_right: false,
        }
    }

    pub fn right(mut self) -> Self {
        self.align_right = true;
        self
    }

    fn pad(&self, text: &str) -> String {
        if self.align_right {
            format!("{:>width$}", text, width = self.width)
        } else {
            format!("{:width$}", text, width = self.width)
        }
    }
}

/// Row data for a [`Table`]. `accent` colors the last cell after padding.
#[derive(Debug, Clone)]
pub struct TableRow {
    pub cells: Vec<String>,
    pub accent: Option<Color>,
}

#[derive(Debug, Clone)]
pub struct Table {
    pub title: Option<String>,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
    pub empty_message: String,
}

impl Table {
    pub fn new<T: Into<String>>(title: Option<T>, columns: Vec<TableColumn>) -> Self {
        Self {
            title: title.map(|value| value.into()),
            columns,
            rows: Vec::new(),
            empty_message: "(no rows)".into(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>, accent: Option<Color>) {
        self.rows.push(TableRow {
            cells: cells.into_iter().map(|value| value.into()).collect(),
            accent,
        });
    }

    /// Widens columns so every header and cell fits.
    pub fn fit_columns(&mut self) {
        for (idx, column) in self.columns.iter_mut().enumerate() {
            let widest = self
                .rows
                .iter()
                .filter_map(|row| row.cells.get(idx))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(column.header.chars().count()))
                .max()
                .unwrap_or(0);
            column.width = column.width.max(widest);
        }
    }

    /// Lines without a trailing newline, styled per `style`.
    pub fn render_lines(&self, style: &UiStyle) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(style.apply_header_style(&format!("{}{}", style.header_prefix, title)));
        }

        let total_width = self
            .columns
            .iter()
            .map(|col| col.width + 1)
            .sum::<usize>();
        let header = self
            .columns
            .iter()
            .map(|col| col.pad(&col.header))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(style.horizontal_line(total_width));
        lines.push(style.apply_header_style(header.trim_end()));
        lines.push(style.horizontal_line(total_width));

        if self.rows.is_empty() {
            lines.push(self.empty_message.clone());
        }
        for row in &self.rows {
            let last = self.columns.len().saturating_sub(1);
            let line = self
                .columns
                .iter()
                .enumerate()
                .map(|(idx, column)| {
                    let cell = row.cells.get(idx).map(String::as_str).unwrap_or("");
                    let padded = column.pad(cell);
                    if idx == last {
                        style.apply_color(&padded, row.accent)
                    } else {
                        padded
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(line);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_style() -> UiStyle {
        UiStyle {
            header_prefix: "> ".into(),
            horizontal: '-',
            use_color: false,
            color_header: None,
            plain_mode: true,
        }
    }

    #[test]
    fn renders_padded_rows_in_order() {
        let mut table = Table::new(
            Some("Ledger"),
            vec![
                TableColumn::new("Name", 4),
                TableColumn::new("Amount", 6).right(),
            ],
        );
        table.add_row(vec!["Salary", "+₹5000"], None);
        table.add_row(vec!["Rent", "-₹1500"], None);
        table.fit_columns();

        let lines = table.render_lines(&plain_style());
        assert_eq!(lines[0], "> Ledger");
        assert_eq!(lines[2], "Name   Amount");
        assert_eq!(lines[4], "Salary +₹5000");
        assert_eq!(lines[5], "Rent   -₹1500");
    }

    #[test]
    fn empty_tables_show_placeholder() {
        let table = Table::new(None::<String>, vec![TableColumn::new("Name", 10)]);
        let lines = table.render_lines(&plain_style());
        assert_eq!(lines.last().map(String::as_str), Some("(no rows)"));
    }
}
