use std::str::FromStr;

use crate::characters::CharacterSet;

/// User intents carried by `data-action` attributes in the rendered markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Select(CharacterSet),
    Flip,
    Answer { correct: bool },
    Exit,
    Retry,
    ToggleWriting,
    Audio,
    CloseWriting,
    ClearAll,
}

impl Action {
    pub fn attr(self) -> String {
        match self {
            Action::Select(set) => format!("select:{}", set.key()),
            Action::Flip => "flip".into(),
            Action::Answer { correct: true } => "answer:correct".into(),
            Action::Answer { correct: false } => "answer:miss".into(),
            Action::Exit => "exit".into(),
            Action::Retry => "retry".into(),
            Action::ToggleWriting => "toggle-writing".into(),
            Action::Audio => "audio".into(),
            Action::CloseWriting => "close-writing".into(),
            Action::ClearAll => "clear-all".into(),
        }
    }

    /// Whether the action changes what the main screen shows.
    pub fn rerenders(self) -> bool {
        !matches!(self, Action::Audio | Action::ClearAll)
    }
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(set) = s.strip_prefix("select:") {
            return set.parse().map(Action::Select);
        }
        Ok(match s {
            "flip" => Action::Flip,
            "answer:correct" => Action::Answer { correct: true },
            "answer:miss" => Action::Answer { correct: false },
            "exit" => Action::Exit,
            "retry" => Action::Retry,
            "toggle-writing" => Action::ToggleWriting,
            "audio" => Action::Audio,
            "close-writing" => Action::CloseWriting,
            "clear-all" => Action::ClearAll,
            _ => return Err(()),
        })
    }
}
