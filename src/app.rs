use crate::logic::{CityOutcome, CompareOutcome};
use crate::ui::screens::CompareField;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    City,
    Compare,
}

impl Screen {
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Screen::City),
            '2' => Some(Screen::Compare),
            _ => None,
        }
    }
}

/// A fetch the event loop should run on its next pass.
#[derive(Debug, Clone)]
pub enum FetchRequest {
    City(String),
    Compare(String, String),
}

pub struct CityState {
    pub input: String,
    pub editing: bool,
    pub outcome: Option<CityOutcome>,
}

impl CityState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            editing: false,
            outcome: None,
        }
    }
}

pub struct CompareState {
    pub left_input: String,
    pub right_input: String,
    pub focus: CompareField,
    pub editing: bool,
    pub outcome: Option<CompareOutcome>,
}

impl CompareState {
    pub fn new() -> Self {
        Self {
            left_input: String::new(),
            right_input: String::new(),
            focus: CompareField::Left,
            editing: false,
            outcome: None,
        }
    }

    pub fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            CompareField::Left => &mut self.left_input,
            CompareField::Right => &mut self.right_input,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            CompareField::Left => CompareField::Right,
            CompareField::Right => CompareField::Left,
        };
    }

    pub fn ready(&self) -> bool {
        !self.left_input.trim().is_empty() && !self.right_input.trim().is_empty()
    }
}

pub struct App {
    pub screen: Screen,
    pub city: CityState,
    pub compare: CompareState,
    pub status_message: Option<String>,
    pub pending_fetch: Option<FetchRequest>,
    pub fetching: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::City,
            city: CityState::new(),
            compare: CompareState::new(),
            status_message: None,
            pending_fetch: None,
            fetching: false,
            should_quit: false,
        }
    }

    pub fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
    }

    pub fn set_status(&mut self, message: &str) {
        self.status_message = Some(message.to_string());
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Queue a city fetch for the non-empty input.
    pub fn submit_city(&mut self) {
        let location = self.city.input.trim().to_string();
        if location.is_empty() {
            self.set_status("Enter a city name first");
            return;
        }
        self.pending_fetch = Some(FetchRequest::City(location));
    }

    /// Queue the two-city comparison once both inputs are filled.
    pub fn submit_compare(&mut self) {
        if !self.compare.ready() {
            self.set_status("Enter both city names first");
            return;
        }
        self.pending_fetch = Some(FetchRequest::Compare(
            self.compare.left_input.trim().to_string(),
            self.compare.right_input.trim().to_string(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_keys() {
        assert_eq!(Screen::from_key('1'), Some(Screen::City));
        assert_eq!(Screen::from_key('2'), Some(Screen::Compare));
        assert_eq!(Screen::from_key('x'), None);
    }

    #[test]
    fn empty_city_input_is_not_submitted() {
        let mut app = App::new();
        app.city.input = "   ".into();
        app.submit_city();
        assert!(app.pending_fetch.is_none());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn compare_needs_both_sides() {
        let mut app = App::new();
        app.compare.left_input = "Paris".into();
        app.submit_compare();
        assert!(app.pending_fetch.is_none());

        app.compare.right_input = "Lyon".into();
        app.submit_compare();
        assert!(matches!(
            app.pending_fetch,
            Some(FetchRequest::Compare(_, _))
        ));
    }
}
