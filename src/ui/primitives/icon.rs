use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Pending,
    Arrow,
    Bullet,
    Field,
    Animal,
    Greenhouse,
    Diary,
    Calendar,
    Weather,
    Advice,
    Dashboard,
    Store,
    User,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Bullet) => theme::icons::BULLET,
            (true, Icon::Field) => theme::icons::FIELD,
            (true, Icon::Animal) => theme::icons::ANIMAL,
            (true, Icon::Greenhouse) => theme::icons::GREENHOUSE,
            (true, Icon::Diary) => theme::icons::DIARY,
            (true, Icon::Calendar) => theme::icons::CALENDAR,
            (true, Icon::Weather) => theme::icons::WEATHER,
            (true, Icon::Advice) => theme::icons::ADVICE,
            (true, Icon::Dashboard) => theme::icons::DASHBOARD,
            (true, Icon::Store) => theme::icons::STORE,
            (true, Icon::User) => theme::icons::USER,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Bullet) => theme::icons_ascii::BULLET,
            (false, Icon::Field) => theme::icons_ascii::FIELD,
            (false, Icon::Animal) => theme::icons_ascii::ANIMAL,
            (false, Icon::Greenhouse) => theme::icons_ascii::GREENHOUSE,
            (false, Icon::Diary) => theme::icons_ascii::DIARY,
            (false, Icon::Calendar) => theme::icons_ascii::CALENDAR,
            (false, Icon::Weather) => theme::icons_ascii::WEATHER,
            (false, Icon::Advice) => theme::icons_ascii::ADVICE,
            (false, Icon::Dashboard) => theme::icons_ascii::DASHBOARD,
            (false, Icon::Store) => theme::icons_ascii::STORE,
            (false, Icon::User) => theme::icons_ascii::USER,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Pending | Icon::Arrow | Icon::Bullet => theme::colors::DIM,
            Icon::Field
            | Icon::Animal
            | Icon::Greenhouse
            | Icon::Diary
            | Icon::Calendar
            | Icon::Weather
            | Icon::Advice
            | Icon::Dashboard
            | Icon::Store
            | Icon::User => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
