use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AdvisoryKind {
    Summary,
    Clothing,
    Activity,
}

impl AdvisoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdvisoryKind::Summary => "Today",
            AdvisoryKind::Clothing => "Clothing",
            AdvisoryKind::Activity => "Activity",
        }
    }

    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            AdvisoryKind::Summary => Color::Cyan,
            AdvisoryKind::Clothing => Color::Green,
            AdvisoryKind::Activity => Color::Yellow,
        }
    }
}

impl std::fmt::Display for AdvisoryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One selected message from a rule chain. Messages come from a fixed set, so
/// they are static.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub kind: AdvisoryKind,
    pub message: &'static str,
}

impl Advisory {
    pub fn new(kind: AdvisoryKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

/// The three advisories derived from one forecast document.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdvisorySet {
    pub summary: Advisory,
    pub clothing: Advisory,
    pub activity: Advisory,
}

impl AdvisorySet {
    pub fn iter(&self) -> impl Iterator<Item = &Advisory> {
        [&self.summary, &self.clothing, &self.activity].into_iter()
    }
}
