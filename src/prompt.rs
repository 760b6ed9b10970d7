use serde::Serialize;

/// One of the four generator actions offered on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Content,
    Hashtags,
    Caption,
    BestTime,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::Content,
        Action::Hashtags,
        Action::Caption,
        Action::BestTime,
    ];

    /// Resolves an action name by exact match. Anything that is not
    /// `content`, `hashtags` or `caption` resolves to [`Action::BestTime`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "content" => Action::Content,
            "hashtags" => Action::Hashtags,
            "caption" => Action::Caption,
            _ => Action::BestTime,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::Content => "content",
            Action::Hashtags => "hashtags",
            Action::Caption => "caption",
            Action::BestTime => "bestTime",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Action::Content => "Generate Content",
            Action::Hashtags => "Get Hashtags",
            Action::Caption => "Create Caption",
            Action::BestTime => "Best Posting Time",
        }
    }

    fn template_prefix(self) -> &'static str {
        match self {
            Action::Content => "Give me a content idea for: ",
            Action::Hashtags => "Suggest hashtags for: ",
            Action::Caption => "Write an Instagram caption for: ",
            Action::BestTime => "When is the best time to post about: ",
        }
    }

    /// Interpolates the topic verbatim, empty topics included.
    pub fn prompt(self, topic: &str) -> String {
        let prefix = self.template_prefix();
        let mut result = String::with_capacity(prefix.len() + topic.len());
        result.push_str(prefix);
        result.push_str(topic);
        result
    }
}

pub fn build_prompt(action: &str, topic: &str) -> String {
    Action::from_name(action).prompt(topic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_action_uses_its_template() {
        assert_eq!(build_prompt("content", "coffee"), "Give me a content idea for: coffee");
        assert_eq!(build_prompt("hashtags", "coffee"), "Suggest hashtags for: coffee");
        assert_eq!(
            build_prompt("caption", "coffee"),
            "Write an Instagram caption for: coffee"
        );
        assert_eq!(
            build_prompt("bestTime", "coffee"),
            "When is the best time to post about: coffee"
        );
    }

    #[test]
    fn unknown_actions_fall_back_to_best_time() {
        for name in ["", "Content", "best_time", "HASHTAGS", "captions", "🦀"] {
            assert_eq!(Action::from_name(name), Action::BestTime, "{name:?}");
            assert_eq!(
                build_prompt(name, "latte art"),
                "When is the best time to post about: latte art"
            );
        }
    }

    #[test]
    fn empty_topic_still_yields_a_prompt() {
        assert_eq!(build_prompt("content", ""), "Give me a content idea for: ");
    }

    #[test]
    fn topic_is_not_trimmed() {
        assert_eq!(
            build_prompt("hashtags", "  cold brew \n"),
            "Suggest hashtags for:   cold brew \n"
        );
    }

    #[test]
    fn names_resolve_back_to_their_action() {
        for action in Action::ALL {
            assert_eq!(Action::from_name(action.name()), action);
        }
    }
}
