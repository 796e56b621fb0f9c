//! Page layout for tabular reports.
//!
//! Turns a title, header and pre-projected rows into a list of pages, each
//! holding positioned drawing operations in PDF user space (points, origin
//! at the bottom-left corner).

use super::metrics::{text_width, wrap_text, Font};

/// A4 width in points.
pub const PAGE_WIDTH: f32 = 595.28;
/// A4 height in points.
pub const PAGE_HEIGHT: f32 = 841.89;

pub const MARGIN_LEFT: f32 = 40.0;
pub const MARGIN_RIGHT: f32 = 40.0;
pub const MARGIN_TOP: f32 = 60.0;
pub const MARGIN_BOTTOM: f32 = 40.0;

/// Fraction of the page width taken by the table.
pub const TABLE_WIDTH_RATIO: f32 = 0.90;

const TITLE_SIZE: f32 = 18.0;
const TITLE_LEADING: f32 = 22.0;
const TITLE_SPACE_AFTER: f32 = 20.0;
const TITLE_SPACER: f32 = 15.0;

const GRID_LINE_WIDTH: f32 = 0.5;

/// An RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

/// `#0B5394`
pub const TITLE_COLOR: Rgb = Rgb(11.0 / 255.0, 83.0 / 255.0, 148.0 / 255.0);
/// `#4B8BBE`
pub const HEADER_BACKGROUND: Rgb = Rgb(75.0 / 255.0, 139.0 / 255.0, 190.0 / 255.0);
/// `#F5F5F5`
pub const WHITESMOKE: Rgb = Rgb(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0);
/// `#808080`
pub const GRID_COLOR: Rgb = Rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
pub const BLACK: Rgb = Rgb(0.0, 0.0, 0.0);

/// Axis-aligned rectangle; `y` is the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A single positioned drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Rgb,
    },
    StrokeRect {
        rect: Rect,
        color: Rgb,
        line_width: f32,
    },
    /// One line of text; `(x, y)` is the start of the baseline.
    Text {
        x: f32,
        y: f32,
        font: Font,
        size: f32,
        color: Rgb,
        text: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Text lines drawn on this page, in drawing order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

struct CellStyle {
    font: Font,
    size: f32,
    leading: f32,
    padding_x: f32,
    padding_top: f32,
    padding_bottom: f32,
    text_color: Rgb,
    background: Rgb,
}

const HEADER_STYLE: CellStyle = CellStyle {
    font: Font::HelveticaBold,
    size: 12.0,
    leading: 14.4,
    padding_x: 6.0,
    padding_top: 3.0,
    padding_bottom: 10.0,
    text_color: WHITESMOKE,
    background: HEADER_BACKGROUND,
};

const BODY_STYLE: CellStyle = CellStyle {
    font: Font::Helvetica,
    size: 10.0,
    leading: 12.0,
    padding_x: 6.0,
    padding_top: 3.0,
    padding_bottom: 3.0,
    text_color: BLACK,
    background: WHITESMOKE,
};

/// Lay out a titled table. `rows` must already be projected onto `columns`.
///
/// The title and header row appear once, on the first page. A row that
/// does not fit above the bottom margin moves to a fresh page; a row taller
/// than a whole page is split across pages at line boundaries.
pub fn layout_table(title: &str, columns: &[&str], rows: &[Vec<String>]) -> Vec<Page> {
    let table_width = PAGE_WIDTH * TABLE_WIDTH_RATIO;
    let mut cursor = TableCursor {
        pages: vec![Page::default()],
        y: PAGE_HEIGHT - MARGIN_TOP,
        rows_on_page: 0,
        x: (PAGE_WIDTH - table_width) / 2.0,
        column_width: table_width / columns.len().max(1) as f32,
    };

    cursor.place_title(title);

    let header: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
    cursor.place_row(&header, &HEADER_STYLE);
    for row in rows {
        cursor.place_row(row, &BODY_STYLE);
    }

    cursor.pages
}

struct TableCursor {
    pages: Vec<Page>,
    /// Top of the next element on the current page.
    y: f32,
    rows_on_page: usize,
    x: f32,
    column_width: f32,
}

impl TableCursor {
    fn page(&mut self) -> &mut Page {
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    fn place_title(&mut self, title: &str) {
        let frame_width = PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        let lines = wrap_text(Font::HelveticaBold, TITLE_SIZE, title, frame_width);
        let top = self.y;

        for (i, line) in lines.iter().enumerate() {
            let width = text_width(Font::HelveticaBold, TITLE_SIZE, line);
            self.page().ops.push(DrawOp::Text {
                x: (PAGE_WIDTH - width) / 2.0,
                y: top - TITLE_SIZE - i as f32 * TITLE_LEADING,
                font: Font::HelveticaBold,
                size: TITLE_SIZE,
                color: TITLE_COLOR,
                text: line.clone(),
            });
        }

        self.y = top - lines.len() as f32 * TITLE_LEADING - TITLE_SPACE_AFTER - TITLE_SPACER;
    }

    fn new_page(&mut self) {
        self.pages.push(Page::default());
        self.y = PAGE_HEIGHT - MARGIN_TOP;
        self.rows_on_page = 0;
    }

    /// Place one row. A row that fits on a page is never split; one taller
    /// than a whole page fills the rest of the current page and carries its
    /// remaining lines onto the next.
    fn place_row(&mut self, cells: &[String], style: &CellStyle) {
        let inner_width = (self.column_width - 2.0 * style.padding_x).max(1.0);
        let wrapped: Vec<Vec<String>> = cells
            .iter()
            .map(|cell| wrap_text(style.font, style.size, cell, inner_width))
            .collect();
        let line_count = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);
        let padding = style.padding_top + style.padding_bottom;
        let height = line_count as f32 * style.leading + padding;
        let page_capacity = PAGE_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;

        if self.y - height < MARGIN_BOTTOM && self.rows_on_page > 0 && height <= page_capacity {
            self.new_page();
        }

        let mut first = 0;
        while first < line_count {
            let room = ((self.y - MARGIN_BOTTOM - padding) / style.leading + 1e-5).floor();
            let fit = if room > 0.0 { room as usize } else { 0 };
            if fit == 0 && self.rows_on_page > 0 {
                self.new_page();
                continue;
            }

            let take = fit.max(1).min(line_count - first);
            self.draw_row_segment(&wrapped, first, take, style);
            first += take;

            if first < line_count {
                self.new_page();
            }
        }
    }

    /// Draw lines `first..first + count` of every cell as one band of the
    /// table at the cursor.
    fn draw_row_segment(
        &mut self,
        wrapped: &[Vec<String>],
        first: usize,
        count: usize,
        style: &CellStyle,
    ) {
        let height = count as f32 * style.leading + style.padding_top + style.padding_bottom;
        let top = self.y;
        let (x0, column_width) = (self.x, self.column_width);
        let page = self.page();

        for (i, lines) in wrapped.iter().enumerate() {
            let rect = Rect {
                x: x0 + i as f32 * column_width,
                y: top - height,
                width: column_width,
                height,
            };
            page.ops.push(DrawOp::FillRect {
                rect,
                color: style.background,
            });

            let segment = lines.iter().skip(first).take(count).enumerate();
            for (j, line) in segment.filter(|(_, l)| !l.is_empty()) {
                let width = text_width(style.font, style.size, line);
                page.ops.push(DrawOp::Text {
                    x: rect.x + (column_width - width) / 2.0,
                    y: top - style.padding_top - style.size - j as f32 * style.leading,
                    font: style.font,
                    size: style.size,
                    color: style.text_color,
                    text: line.clone(),
                });
            }

            page.ops.push(DrawOp::StrokeRect {
                rect,
                color: GRID_COLOR,
                line_width: GRID_LINE_WIDTH,
            });
        }

        self.y = top - height;
        self.rows_on_page += 1;
    }
}
