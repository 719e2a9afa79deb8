use farmbook::domain::entities::{Session, Settings};

use super::hint;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub struct SettingsView<'a> {
    settings: &'a Settings,
}

impl<'a> SettingsView<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut header = CommandHeader::new(Icon::Dashboard, "Settings");
        header.add("language", self.settings.language.as_str());
        header.add("currency", self.settings.currency.as_str());
        header.add(
            "notifications",
            if self.settings.notifications { "on" } else { "off" },
        );
        header.render(supports_color, supports_unicode)
    }
}

pub struct WhoamiView<'a> {
    session: Option<&'a Session>,
}

impl<'a> WhoamiView<'a> {
    pub fn new(session: Option<&'a Session>) -> Self {
        Self { session }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let Some(session) = self.session else {
            let mut out =
                CommandHeader::new(Icon::User, "Not signed in").render(supports_color, supports_unicode);
            out.push_str(&hint(
                "Sign in with `farmbook login --email <EMAIL> --password <PASSWORD>` or create an account with `farmbook register`.",
                supports_color,
            ));
            return out;
        };

        let user = &session.user;
        let mut header = CommandHeader::new(Icon::User, user.name.as_str());
        header.add("Email", user.email.as_str());
        header.add("Farm", user.farm_name.as_str());
        header.add("Role", user.role.as_str());
        header.add(
            "Since",
            session.signed_in_at.format("%Y-%m-%d %H:%M UTC").to_string(),
        );
        header.render(supports_color, supports_unicode)
    }
}
