//! Bar chart of the dataset
//!
//! Each terminal column shows one bucket of consecutive indices. With fewer
//! elements than columns a bucket is a single element spread over several
//! columns; with more, a column stands for several elements and shows the
//! tallest of them.
//!
//! # Colors
//!
//! Sorted beats active beats default. A bucket containing an active element
//! that is not yet sorted is drawn active so comparisons stay visible at any
//! width.

use crate::dataset::MAX_MAGNITUDE;
use crate::tracker::SortedRegion;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

/// Eighth-block glyphs for the partial top cell of a bar
const PARTIAL: [&str; 8] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇"];

/// Data needed to render the bars pane
pub struct BarsRenderData<'a> {
    pub values: &'a [u32],
    pub active: &'a [usize],
    pub sorted: &'a SortedRegion,
}

/// Color of a single element
pub fn bar_color(index: usize, active: &[usize], sorted: &SortedRegion) -> Color {
    if sorted.contains(index) {
        DEFAULT_THEME.bar_sorted
    } else if active.contains(&index) {
        DEFAULT_THEME.bar_active
    } else {
        DEFAULT_THEME.bar_default
    }
}

/// Index range drawn in `column` out of `width` columns
pub fn bucket(column: usize, width: usize, len: usize) -> std::ops::Range<usize> {
    let lo = column * len / width;
    let hi = ((column + 1) * len / width).max(lo + 1).min(len);
    lo..hi
}

/// Height of a bar in eighths of a cell
fn bar_eighths(value: u32, rows: u16) -> usize {
    let full = rows as u64 * 8;
    (value.min(MAX_MAGNITUDE) as u64 * full / MAX_MAGNITUDE as u64) as usize
}

struct Bars<'a> {
    data: &'a BarsRenderData<'a>,
}

impl Widget for Bars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let len = self.data.values.len();
        let width = area.width as usize;
        if len == 0 || width == 0 || area.height == 0 {
            return;
        }

        for column in 0..width {
            let range = bucket(column, width, len);
            if range.is_empty() {
                continue;
            }
            let Some(tallest) = range.clone().max_by_key(|&i| self.data.values[i]) else {
                continue;
            };
            let mut color = bar_color(tallest, self.data.active, self.data.sorted);
            if color != DEFAULT_THEME.bar_active
                && range.clone().any(|i| {
                    self.data.active.contains(&i) && !self.data.sorted.contains(i)
                })
            {
                color = DEFAULT_THEME.bar_active;
            }

            let eighths = bar_eighths(self.data.values[tallest], area.height);
            let x = area.x + column as u16;
            for row in 0..area.height {
                // row 0 is the bottom of the chart
                let filled = eighths.saturating_sub(row as usize * 8).min(8);
                if filled == 0 {
                    break;
                }
                let symbol = if filled == 8 { "█" } else { PARTIAL[filled] };
                let y = area.y + area.height - 1 - row;
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(symbol).set_fg(color);
                }
            }
        }
    }
}

/// Render the bars pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, data: BarsRenderData) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ratatui::style::Style::default().fg(DEFAULT_THEME.border));

    if data.values.is_empty() {
        let paragraph = Paragraph::new("(no data)")
            .block(block)
            .style(ratatui::style::Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Bars { data: &data }, inner);
}
