/// `round(100 * part / whole)` with halves rounded up.
///
/// `part` is clamped to `whole`; a zero `whole` yields 0.
#[must_use]
pub fn round_percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole);
    let doubled = part.saturating_mul(200).saturating_add(whole);
    u8::try_from(doubled / whole.saturating_mul(2)).unwrap_or(100)
}

/// Share of the quiz already finished.
///
/// The question at `index` only counts once it has been answered, so the bar
/// shows 0% while the first question is open.
#[must_use]
pub fn progress_percent(index: usize, total: usize, current_answered: bool) -> u8 {
    round_percent(index + usize::from(current_answered), total)
}

/// Where the session stands, as shown above the question card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// 1-based position of the question in view.
    pub position: usize,
    pub total: usize,
    pub percent: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_percent(1, 3), 33);
        assert_eq!(round_percent(2, 3), 67);
        assert_eq!(round_percent(1, 8), 13);
        assert_eq!(round_percent(1, 200), 1);
        assert_eq!(round_percent(3, 3), 100);
    }

    #[test]
    fn degenerate_inputs_stay_in_range() {
        assert_eq!(round_percent(0, 0), 0);
        assert_eq!(round_percent(9, 3), 100);
    }

    #[test]
    fn current_question_counts_only_once_answered() {
        assert_eq!(progress_percent(0, 3, false), 0);
        assert_eq!(progress_percent(0, 3, true), 33);
        assert_eq!(progress_percent(1, 3, false), 33);
        assert_eq!(progress_percent(2, 3, true), 100);
    }
}
