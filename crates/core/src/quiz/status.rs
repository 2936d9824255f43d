use crate::model::OptionId;

/// How a single option should be presented given the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionStatus {
    /// Open question, not selected.
    Neutral,
    /// Selected but not yet submitted.
    SelectedPending,
    /// Submitted question; this is the right answer.
    Correct,
    /// Submitted question; the user picked this and it is wrong.
    IncorrectSelected,
    /// Submitted question; neither picked nor correct.
    Dimmed,
}

impl OptionStatus {
    /// Whether the option accepts clicks.
    #[must_use]
    pub fn is_selectable(self) -> bool {
        matches!(self, Self::Neutral | Self::SelectedPending)
    }
}

#[must_use]
pub fn option_status(
    option: &OptionId,
    selected: Option<&OptionId>,
    correct: &OptionId,
    locked: bool,
) -> OptionStatus {
    let is_selected = selected == Some(option);
    if !locked {
        return if is_selected {
            OptionStatus::SelectedPending
        } else {
            OptionStatus::Neutral
        };
    }
    if option == correct {
        OptionStatus::Correct
    } else if is_selected {
        OptionStatus::IncorrectSelected
    } else {
        OptionStatus::Dimmed
    }
}
