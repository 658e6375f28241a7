use crate::logic::CompareOutcome;
use crate::models::{condition_symbol, CitySnapshot};
use crate::ui::components::InputWidget;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareField {
    Left,
    Right,
}

pub struct CompareScreen<'a> {
    pub left_input: &'a str,
    pub right_input: &'a str,
    pub focus: CompareField,
    pub editing: bool,
    pub outcome: Option<&'a CompareOutcome>,
    pub fetching: bool,
    pub status_message: Option<&'a str>,
}

impl<'a> CompareScreen<'a> {
    pub fn new(
        left_input: &'a str,
        right_input: &'a str,
        focus: CompareField,
        editing: bool,
        outcome: Option<&'a CompareOutcome>,
    ) -> Self {
        Self {
            left_input,
            right_input,
            focus,
            editing,
            outcome,
            fetching: false,
            status_message: None,
        }
    }

    pub fn fetching(mut self, fetching: bool) -> Self {
        self.fetching = fetching;
        self
    }

    pub fn with_status(mut self, status: Option<&'a str>) -> Self {
        self.status_message = status;
        self
    }
}

impl Widget for CompareScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Input row
                Constraint::Min(6),    // Result panels
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        Paragraph::new(Span::styled("Compare Two Cities", Theme::title())).render(chunks[0], buf);

        let inputs = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        InputWidget::new("City 1", self.left_input)
            .focused(self.editing && self.focus == CompareField::Left)
            .render(inputs[0], buf);
        InputWidget::new("City 2", self.right_input)
            .focused(self.editing && self.focus == CompareField::Right)
            .render(inputs[1], buf);

        self.render_result(chunks[2], buf);
        self.render_status_message(chunks[3], buf);
        self.render_nav(chunks[4], buf);
    }
}

impl CompareScreen<'_> {
    fn render_result(&self, area: Rect, buf: &mut Buffer) {
        if self.fetching {
            Paragraph::new(Span::styled("Fetching forecasts...", Theme::dim())).render(area, buf);
            return;
        }

        match self.outcome {
            None => {
                Paragraph::new(Span::styled(
                    "Fill in both cities, then press [g] to compare.",
                    Theme::dim(),
                ))
                .render(area, buf);
            }
            // One message regardless of which side failed
            Some(CompareOutcome::NotFound) => {
                Paragraph::new(Span::styled("One city not found", Theme::error()))
                    .render(area, buf);
            }
            Some(CompareOutcome::View(view)) => {
                let panels = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(area);

                render_snapshot(&view.left, panels[0], buf);
                render_snapshot(&view.right, panels[1], buf);
            }
        }
    }

    fn render_status_message(&self, area: Rect, buf: &mut Buffer) {
        if let Some(msg) = self.status_message {
            let style = if msg.contains("not found") || msg.contains("failed") {
                Theme::warning()
            } else {
                Theme::success()
            };
            Paragraph::new(Span::styled(msg, style)).render(area, buf);
        }
    }

    fn render_nav(&self, area: Rect, buf: &mut Buffer) {
        let nav = Line::from(vec![
            Span::styled("[1]", Theme::nav_key()),
            Span::styled("City ", Theme::nav_label()),
            Span::styled("[2]", Theme::nav_key()),
            Span::styled("Compare ", Theme::nav_label()),
            Span::styled("[Tab]", Theme::nav_key()),
            Span::styled("Switch field ", Theme::nav_label()),
            Span::styled("[Enter]", Theme::nav_key()),
            Span::styled("Edit ", Theme::nav_label()),
            Span::styled("[g]", Theme::nav_key()),
            Span::styled("Compare ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(area, buf);
    }
}

fn render_snapshot(snapshot: &CitySnapshot, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .title(Span::styled(
            format!("{}, {}", snapshot.name, snapshot.country),
            Theme::header(),
        ))
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(area);
    block.render(area, buf);

    let lines = vec![
        Line::from(Span::styled(
            format!("{:.1}°C", snapshot.temp_c),
            Style::default().fg(Theme::temp_color(snapshot.temp_c)),
        )),
        Line::from(vec![
            Span::styled(
                format!("{} ", condition_symbol(&snapshot.condition_text)),
                Theme::normal(),
            ),
            Span::styled(snapshot.condition_text.as_str(), Theme::normal()),
        ]),
    ];
    Paragraph::new(lines).render(inner, buf);
}
