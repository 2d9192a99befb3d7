//! Plain-text grid tables for terminal output.

use std::fmt;

/// Border drawing style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStyle {
    /// ASCII borders with an `=` rule under the header row
    Grid,
    /// Heavy box-drawing borders
    HeavyGrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

struct Rule {
    left: &'static str,
    fill: &'static str,
    mid: &'static str,
    right: &'static str,
}

struct Glyphs {
    top: Rule,
    below_header: Rule,
    between_rows: Rule,
    bottom: Rule,
    vertical: &'static str,
}

static GRID: Glyphs = Glyphs {
    top: Rule { left: "+", fill: "-", mid: "+", right: "+" },
    below_header: Rule { left: "+", fill: "=", mid: "+", right: "+" },
    between_rows: Rule { left: "+", fill: "-", mid: "+", right: "+" },
    bottom: Rule { left: "+", fill: "-", mid: "+", right: "+" },
    vertical: "|",
};

static HEAVY_GRID: Glyphs = Glyphs {
    top: Rule { left: "┏", fill: "━", mid: "┳", right: "┓" },
    below_header: Rule { left: "┣", fill: "━", mid: "╋", right: "┫" },
    between_rows: Rule { left: "┣", fill: "━", mid: "╋", right: "┫" },
    bottom: Rule { left: "┗", fill: "━", mid: "┻", right: "┛" },
    vertical: "┃",
};

impl TableStyle {
    fn glyphs(self) -> &'static Glyphs {
        match self {
            Self::Grid => &GRID,
            Self::HeavyGrid => &HEAVY_GRID,
        }
    }
}

/// A table with a header row, rendered with a border around every cell.
///
/// Cells may span several lines: embedded `\n` starts a new line and, when a
/// maximum column width is set, long text is word-wrapped to fit.
///
/// ```
/// use sam_inspect::utils::table::{Align, Table};
///
/// let mut table = Table::new(["FLAG", "COUNT"]).with_alignment(1, Align::Right);
/// table.add_row(["PAIRED", "12"]);
/// assert_eq!(
///     table.render(),
///     "+--------+-------+\n\
///      | FLAG   | COUNT |\n\
///      +========+=======+\n\
///      | PAIRED |    12 |\n\
///      +--------+-------+"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    alignments: Vec<Align>,
    style: TableStyle,
    max_column_width: Option<usize>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let alignments = vec![Align::Left; headers.len()];
        Self {
            headers,
            rows: Vec::new(),
            alignments,
            style: TableStyle::Grid,
            max_column_width: None,
        }
    }

    #[must_use]
    pub fn with_style(mut self, style: TableStyle) -> Self {
        self.style = style;
        self
    }

    /// Wrap every column to at most `width` characters.
    #[must_use]
    pub fn with_max_column_width(mut self, width: usize) -> Self {
        self.max_column_width = Some(width.max(1));
        self
    }

    #[must_use]
    pub fn with_alignment(mut self, column: usize, align: Align) -> Self {
        if let Some(slot) = self.alignments.get_mut(column) {
            *slot = align;
        }
        self
    }

    /// Append a row. Missing cells are left blank and extra cells dropped.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .take(self.headers.len())
            .map(Into::into)
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    fn cell_lines(&self, text: &str) -> Vec<String> {
        text.split('\n')
            .flat_map(|segment| match self.max_column_width {
                Some(width) => wrap(segment, width),
                None => vec![segment.to_string()],
            })
            .collect()
    }

    fn row_lines(&self, cells: &[Vec<String>], widths: &[usize], out: &mut Vec<String>) {
        let vertical = self.style.glyphs().vertical;
        let height = cells.iter().map(Vec::len).max().unwrap_or(1);

        for i in 0..height {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths)
                .zip(&self.alignments)
                .map(|((lines, width), align)| {
                    let text = lines.get(i).map_or("", String::as_str);
                    format!(" {} ", pad(text, *width, *align))
                })
                .collect();
            out.push(format!("{vertical}{}{vertical}", padded.join(vertical)));
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let glyphs = self.style.glyphs();

        let header = self
            .headers
            .iter()
            .map(|h| self.cell_lines(h))
            .collect::<Vec<_>>();
        let body = self
            .rows
            .iter()
            .map(|row| row.iter().map(|c| self.cell_lines(c)).collect::<Vec<_>>())
            .collect::<Vec<_>>();

        let mut widths = vec![0; self.headers.len()];
        for row in std::iter::once(&header).chain(&body) {
            for (width, lines) in widths.iter_mut().zip(row) {
                let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
                *width = (*width).max(longest);
            }
        }

        let mut out = vec![rule_line(&glyphs.top, &widths)];
        self.row_lines(&header, &widths, &mut out);

        for (i, row) in body.iter().enumerate() {
            let rule = if i == 0 {
                &glyphs.below_header
            } else {
                &glyphs.between_rows
            };
            out.push(rule_line(rule, &widths));
            self.row_lines(row, &widths, &mut out);
        }

        out.push(rule_line(&glyphs.bottom, &widths));
        out.join("\n")
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

fn rule_line(rule: &Rule, widths: &[usize]) -> String {
    let cells: Vec<String> = widths.iter().map(|w| rule.fill.repeat(w + 2)).collect();
    format!("{}{}{}", rule.left, cells.join(rule.mid), rule.right)
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    match align {
        Align::Left => format!("{text}{fill}"),
        Align::Right => format!("{fill}{text}"),
    }
}

/// Greedy word wrap to lines of at most `width` characters.
///
/// Whitespace between words is kept as written (tabs become single spaces)
/// and only dropped where a line break replaces it. Words longer than
/// `width` are split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let text = text.replace('\t', " ");
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut gap = 0;

    for (i, chunk) in text.split(' ').enumerate() {
        if i > 0 {
            gap += 1;
        }
        if chunk.is_empty() {
            continue;
        }

        let mut chars: Vec<char> = chunk.chars().collect();
        if current_len > 0 && current_len + gap + chars.len() <= width {
            current.push_str(&" ".repeat(gap));
            current.extend(&chars);
            current_len += gap + chars.len();
            gap = 0;
            continue;
        }

        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
        }
        while chars.len() > width {
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }
        current.extend(&chars);
        current_len = chars.len();
        gap = 0;
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
