//! Header with the algorithm selector and element count

use crate::algorithms::Algorithm;
use crate::controller::RunState;
use crate::dataset::ElementCount;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Data needed to render the controls pane
pub struct ControlsRenderData {
    pub algorithm: Algorithm,
    pub element_count: ElementCount,
    /// Number of bars currently shown
    pub current_len: usize,
    pub state: RunState,
}

/// Render the controls pane
pub fn render_controls_pane(frame: &mut Frame, area: Rect, data: ControlsRenderData) {
    let locked = data.state == RunState::Running;
    let border_style = Style::default().fg(DEFAULT_THEME.border);

    let block = Block::default()
        .title(" Sorting Visualiser ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(24)])
        .split(inner);

    let selected = Algorithm::ALL
        .iter()
        .position(|&a| a == data.algorithm)
        .unwrap_or(0);
    let highlight = if locked {
        Style::default().fg(DEFAULT_THEME.comment)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    };
    let tabs = Tabs::new(Algorithm::ALL.iter().map(|a| a.name()))
        .select(selected)
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .highlight_style(highlight)
        .divider(Span::styled("│", Style::default().fg(DEFAULT_THEME.comment)));
    frame.render_widget(tabs, columns[0]);

    // Count shown as "current -> next" when the next generate will change it
    let mut count_spans = vec![Span::styled(
        "Bars: ",
        Style::default().fg(DEFAULT_THEME.comment),
    )];
    if data.element_count.get() == data.current_len {
        count_spans.push(Span::styled(
            data.current_len.to_string(),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    } else {
        count_spans.push(Span::styled(
            format!("{} → {}", data.current_len, data.element_count.get()),
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    let count = Paragraph::new(Line::from(count_spans)).alignment(Alignment::Right);
    frame.render_widget(count, columns[1]);
}
