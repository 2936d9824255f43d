use quiz_core::model::{OptionDraft, QuestionDraft};

fn options(texts: [&str; 4]) -> Vec<OptionDraft> {
    ["A", "B", "C", "D"]
        .into_iter()
        .zip(texts)
        .map(|(id, text)| OptionDraft::new(id, text))
        .collect()
}

/// Built-in vocabulary and grammar questions used when no bank file is configured.
pub(crate) fn sample_drafts() -> Vec<QuestionDraft> {
    vec![
        QuestionDraft {
            id: 1,
            prompt: "Choose the correct meaning of 'achievement'".to_string(),
            options: options(["Effort", "Accomplishment", "Failure", "Inspiration"]),
            correct_id: "B".to_string(),
            explain: Some(
                "'Achievement' means an accomplishment, something reached through effort."
                    .to_string(),
            ),
        },
        QuestionDraft {
            id: 2,
            prompt: "Choose the sentence in the present perfect tense".to_string(),
            options: options([
                "I eat breakfast now.",
                "I will eat breakfast.",
                "I have eaten breakfast.",
                "I was eating breakfast.",
            ]),
            correct_id: "C".to_string(),
            explain: Some("Present perfect: have/has + past participle (eaten).".to_string()),
        },
        QuestionDraft {
            id: 3,
            prompt: "What is the antonym of 'difficult'?".to_string(),
            options: options(["Hard", "Complicated", "Easy", "Tough"]),
            correct_id: "C".to_string(),
            explain: Some("The antonym of 'difficult' is 'easy'.".to_string()),
        },
    ]
}
