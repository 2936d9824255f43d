use quiz_core::quiz::{QuizResult, ResultTier};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub score: usize,
    pub total: usize,
    pub percent: u8,
    pub tier: ResultTier,
    pub percent_label: String,
    pub count_label: String,
}

impl ResultVm {
    #[must_use]
    pub fn tier_class(&self) -> &'static str {
        match self.tier {
            ResultTier::High => "result__percent result__percent--high",
            ResultTier::Mid => "result__percent result__percent--mid",
            ResultTier::Low => "result__percent result__percent--low",
        }
    }
}

#[must_use]
pub fn map_result(result: &QuizResult) -> ResultVm {
    ResultVm {
        score: result.score,
        total: result.total,
        percent: result.percent,
        tier: result.tier(),
        percent_label: format!("{}% correct", result.percent),
        count_label: format!("({} / {})", result.score, result.total),
    }
}
