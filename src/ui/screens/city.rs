use crate::logic::CityOutcome;
use crate::models::{condition_symbol, CityView};
use crate::ui::components::{humidity_metric, temperature_metric, wind_metric, InputWidget};
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, List, ListItem, Paragraph, Widget},
};

pub struct CityScreen<'a> {
    pub input: &'a str,
    pub editing: bool,
    pub outcome: Option<&'a CityOutcome>,
    pub fetching: bool,
    pub status_message: Option<&'a str>,
}

impl<'a> CityScreen<'a> {
    pub fn new(input: &'a str, editing: bool, outcome: Option<&'a CityOutcome>) -> Self {
        Self {
            input,
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

impl Widget for CityScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // City input
                Constraint::Min(10),   // Forecast body
                Constraint::Length(1), // Status message
                Constraint::Length(1), // Nav bar
            ])
            .split(area);

        InputWidget::new("City", self.input)
            .focused(self.editing)
            .render(chunks[0], buf);

        self.render_body(chunks[1], buf);
        self.render_status_message(chunks[2], buf);
        self.render_nav(chunks[3], buf);
    }
}

impl CityScreen<'_> {
    fn render_body(&self, area: Rect, buf: &mut Buffer) {
        if self.fetching {
            Paragraph::new(Span::styled("Fetching forecast...", Theme::dim())).render(area, buf);
            return;
        }

        match self.outcome {
            None => {
                let hint = Paragraph::new(Span::styled(
                    "Press [Enter] to type a city name, then [Enter] again to fetch.",
                    Theme::dim(),
                ));
                hint.render(area, buf);
            }
            Some(CityOutcome::NotFound) => {
                Paragraph::new(Span::styled("City not found", Theme::error())).render(area, buf);
            }
            Some(CityOutcome::View(view)) => self.render_view(view, area, buf),
        }
    }

    fn render_view(&self, view: &CityView, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Location header
                Constraint::Length(5), // Current metric tiles
                Constraint::Length(5), // Advisories
                Constraint::Min(8),    // Hourly chart
                Constraint::Length(6), // Daily grid
                Constraint::Length(6), // Air quality + alerts
            ])
            .split(area);

        self.render_header(view, chunks[0], buf);
        self.render_metrics(view, chunks[1], buf);
        self.render_advisories(view, chunks[2], buf);
        self.render_hourly_chart(view, chunks[3], buf);
        self.render_daily_grid(view, chunks[4], buf);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[5]);
        self.render_air_quality(view, bottom[0], buf);
        self.render_alerts(view, bottom[1], buf);
    }

    fn render_header(&self, view: &CityView, area: Rect, buf: &mut Buffer) {
        let header = Line::from(vec![
            Span::styled(
                format!("{} {}, {}", condition_symbol(&view.current.condition_text),
                    view.location.name, view.location.country),
                Theme::title(),
            ),
            Span::styled(
                format!("  {}", view.current.condition_text),
                Theme::normal(),
            ),
        ]);
        Paragraph::new(header).render(area, buf);
    }

    fn render_metrics(&self, view: &CityView, area: Rect, buf: &mut Buffer) {
        let tiles = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(25),
            ])
            .split(area);

        let current = &view.current;
        temperature_metric("Temperature", Some(current.temp_c)).render(tiles[0], buf);
        temperature_metric("Feels Like", Some(current.feelslike_c)).render(tiles[1], buf);
        humidity_metric("Humidity", Some(current.humidity)).render(tiles[2], buf);
        wind_metric("Wind", Some(current.wind_kph)).render(tiles[3], buf);
    }

    fn render_advisories(&self, view: &CityView, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Advisories", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = view
            .advisories
            .iter()
            .map(|advisory| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<9}", advisory.kind.as_str()),
                        Style::default().fg(advisory.kind.color()),
                    ),
                    Span::styled(advisory.message, Theme::normal()),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }

    fn render_hourly_chart(&self, view: &CityView, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("24 Hour Temperature", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        if view.hourly.is_empty() {
            let inner = block.inner(area);
            block.render(area, buf);
            Paragraph::new(Span::styled("No hourly data", Theme::dim())).render(inner, buf);
            return;
        }

        let points: Vec<(f64, f64)> = view
            .hourly
            .iter()
            .enumerate()
            .map(|(i, (_, temp))| (i as f64, *temp))
            .collect();

        let min_temp = points.iter().map(|(_, t)| *t).fold(f64::INFINITY, f64::min);
        let max_temp = points
            .iter()
            .map(|(_, t)| *t)
            .fold(f64::NEG_INFINITY, f64::max);
        let last_index = (points.len() - 1) as f64;

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Theme::ACCENT))
            .data(&points);

        // First, middle, and last time labels along the x axis
        let mid = view.hourly.len() / 2;
        let x_labels = vec![
            Line::from(view.hourly[0].0.as_str()),
            Line::from(view.hourly[mid].0.as_str()),
            Line::from(view.hourly[view.hourly.len() - 1].0.as_str()),
        ];
        let y_labels = vec![
            Line::from(format!("{:.0}", min_temp - 1.0)),
            Line::from(format!("{:.0}", max_temp + 1.0)),
        ];

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(
                Axis::default()
                    .style(Theme::dim())
                    .bounds([0.0, last_index])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Theme::dim())
                    .bounds([min_temp - 1.0, max_temp + 1.0])
                    .labels(y_labels),
            );

        chart.render(area, buf);
    }

    fn render_daily_grid(&self, view: &CityView, area: Rect, buf: &mut Buffer) {
        if view.daily.is_empty() {
            return;
        }

        // One column per forecast day
        let constraints: Vec<Constraint> = view
            .daily
            .iter()
            .map(|_| Constraint::Ratio(1, view.daily.len() as u32))
            .collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area);

        for (day, column) in view.daily.iter().zip(columns.iter()) {
            let block = Block::default()
                .title(day.date.format("%a %m/%d").to_string())
                .borders(Borders::ALL)
                .border_style(Theme::border());

            let inner = block.inner(*column);
            block.render(*column, buf);

            let lines = vec![
                Line::from(Span::styled(
                    format!("{:.0}°C", day.max_temp_c),
                    Style::default().fg(Theme::temp_color(day.max_temp_c)),
                )),
                Line::from(Span::styled(
                    format!("{:.0}°C", day.min_temp_c),
                    Style::default().fg(Theme::temp_color(day.min_temp_c)),
                )),
                Line::from(Span::styled(
                    format!("Rain {}%", day.chance_of_rain_percent),
                    Style::default().fg(Theme::rain_color(day.chance_of_rain_percent)),
                )),
            ];
            Paragraph::new(lines).render(inner, buf);
        }
    }

    fn render_air_quality(&self, view: &CityView, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Air Quality", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let aq = &view.current.air_quality;
        let lines = vec![
            Line::from(vec![
                Span::styled("PM2.5: ", Theme::dim()),
                Span::styled(format!("{:.2}", aq.pm2_5), Theme::normal()),
            ]),
            Line::from(vec![
                Span::styled("PM10:  ", Theme::dim()),
                Span::styled(format!("{:.2}", aq.pm10), Theme::normal()),
            ]),
            Line::from(vec![
                Span::styled("CO:    ", Theme::dim()),
                Span::styled(format!("{:.2}", aq.co), Theme::normal()),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_alerts(&self, view: &CityView, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("Weather Alerts", Theme::header()))
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        if view.alerts.is_empty() {
            Paragraph::new(Span::styled("No active alerts", Theme::dim())).render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = view
            .alerts
            .iter()
            .map(|alert| {
                ListItem::new(Line::from(vec![
                    Span::styled("⚠ ", Theme::warning()),
                    Span::styled(alert.headline.as_str(), Theme::error()),
                ]))
            })
            .collect();

        List::new(items).render(inner, buf);
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
            Span::styled("[Enter]", Theme::nav_key()),
            Span::styled("Edit/Fetch ", Theme::nav_label()),
            Span::styled("[r]", Theme::nav_key()),
            Span::styled("Refresh ", Theme::nav_label()),
            Span::styled("[q]", Theme::nav_key()),
            Span::styled("Quit", Theme::nav_label()),
        ]);
        Paragraph::new(nav).render(area, buf);
    }
}
