use crate::services::catalog::models::{QuizOption, QuizQuestion};
use crate::services::quiz::accumulator::accumulate;
use crate::services::quiz::score_vector::UserScoreVector;
use crate::types::errors::{AffinityError, AffinityResult};

/// One user's answer sheet: at most one chosen option per question.
///
/// Going back and answering a question again replaces the earlier choice.
#[derive(Debug, Clone)]
pub struct QuizSession<'q> {
    questions: &'q [QuizQuestion],
    answers: Vec<Option<usize>>,
}

impl<'q> QuizSession<'q> {
    pub fn new(questions: &'q [QuizQuestion]) -> Self {
        Self {
            questions,
            answers: vec![None; questions.len()],
        }
    }

    pub fn answer(&mut self, question_index: usize, option_index: usize) -> AffinityResult<()> {
        let question = self.questions.get(question_index).ok_or_else(|| {
            AffinityError::NotFound(format!("question index {question_index}"))
        })?;

        if option_index >= question.options.len() {
            return Err(AffinityError::NotFound(format!(
                "option {option_index} of question '{}'",
                question.id
            )));
        }

        self.answers[question_index] = Some(option_index);
        Ok(())
    }

    pub fn clear(&mut self, question_index: usize) -> AffinityResult<()> {
        let slot = self.answers.get_mut(question_index).ok_or_else(|| {
            AffinityError::NotFound(format!("question index {question_index}"))
        })?;
        *slot = None;
        Ok(())
    }

    pub fn selected(&self, question_index: usize) -> Option<usize> {
        self.answers.get(question_index).copied().flatten()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|answer| answer.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.questions.len()
    }

    /// Chosen options in question order, skipping unanswered questions.
    pub fn chosen_options(&self) -> Vec<&'q QuizOption> {
        let questions = self.questions;
        questions
            .iter()
            .zip(&self.answers)
            .filter_map(|(question, answer)| answer.map(|index| &question.options[index]))
            .collect()
    }

    pub fn score_vector(&self) -> UserScoreVector {
        accumulate(self.chosen_options())
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
