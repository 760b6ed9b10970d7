#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// `dark` selects the dark theme; every other value is light.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn classes(self) -> &'static str {
        match self {
            Theme::Dark => "bg-black text-purple-300",
            Theme::Light => "bg-gray-100 text-gray-900",
        }
    }

    /// Icon shown on the toggle button: (glyph, class).
    pub fn toggle_icon(self) -> (&'static str, &'static str) {
        match self {
            Theme::Dark => ("☀", "text-yellow-400"),
            Theme::Light => ("☾", "text-purple-700"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_class_set() {
        let mut theme = Theme::default();
        let original = theme.classes();
        theme.toggle();
        assert_eq!(theme.classes(), "bg-black text-purple-300");
        theme.toggle();
        assert_eq!(theme.classes(), original);
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn only_dark_param_selects_dark() {
        assert_eq!(Theme::from_param(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_param(Some("Dark")), Theme::Light);
        assert_eq!(Theme::from_param(None), Theme::Light);
    }
}
