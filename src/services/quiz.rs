// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sequential water quiz with progress stored on the user record.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::catalog::{QuizQuestion, QUIZ_QUESTIONS};
use crate::db::Repository;
use crate::error::{AppError, Result};
use crate::models::QuizProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum QuizRating {
    Expert,
    Good,
    Fair,
    Beginner,
}

/// Rate a final score.
pub fn quiz_rating(score: u32) -> QuizRating {
    match score {
        8.. => QuizRating::Expert,
        6..=7 => QuizRating::Good,
        4..=5 => QuizRating::Fair,
        _ => QuizRating::Beginner,
    }
}

/// Current quiz position as shown to a client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct QuizState {
    /// 1-based number of the pending question
    pub question_number: usize,
    pub total_questions: usize,
    pub question: Option<QuizQuestion>,
    pub correct_answers: u32,
    pub finished: bool,
    /// Present once the quiz is finished
    pub rating: Option<QuizRating>,
}

impl QuizState {
    fn from_progress(progress: &QuizProgress) -> Self {
        let question = if progress.finished {
            None
        } else {
            QUIZ_QUESTIONS.get(progress.current_question).copied()
        };
        Self {
            question_number: (progress.current_question + 1).min(QUIZ_QUESTIONS.len()),
            total_questions: QUIZ_QUESTIONS.len(),
            question,
            correct_answers: progress.correct_answers,
            finished: progress.finished,
            rating: progress
                .finished
                .then(|| quiz_rating(progress.correct_answers)),
        }
    }
}

/// Result of answering one question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub correct_answer: String,
    pub explanation: String,
    pub score: u32,
    pub finished: bool,
    pub rating: Option<QuizRating>,
}

/// Drives quiz progress for users.
#[derive(Clone)]
pub struct QuizSession {
    repo: Repository,
}

impl QuizSession {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Reset progress and return the first question.
    pub fn start(&self, username: &str) -> Result<QuizState> {
        let state = self.repo.update_user(username, |user| {
            user.quiz = QuizProgress::default();
            Ok(QuizState::from_progress(&user.quiz))
        })?;
        tracing::info!(username, "Started quiz");
        Ok(state)
    }

    pub fn current(&self, username: &str) -> Result<QuizState> {
        let user = self.repo.get_user(username)?;
        Ok(QuizState::from_progress(&user.quiz))
    }

    /// Answer the pending question and advance.
    ///
    /// `answer` must be one of the question's options.
    pub fn answer(&self, username: &str, answer: &str) -> Result<AnswerFeedback> {
        let feedback = self.repo.update_user(username, |user| {
            let progress = &mut user.quiz;
            let question = match QUIZ_QUESTIONS.get(progress.current_question) {
                Some(q) if !progress.finished => q,
                _ => {
                    return Err(AppError::BadRequest(
                        "Quiz is finished; start it again to retry".to_string(),
                    ))
                }
            };

            let answer = answer.trim();
            if !question.options.iter().any(|o| *o == answer) {
                return Err(AppError::BadRequest(format!(
                    "'{}' is not an option for this question",
                    answer
                )));
            }

            let correct = answer == question.correct_answer;
            if correct {
                progress.correct_answers += 1;
            }
            progress.current_question += 1;
            if progress.current_question >= QUIZ_QUESTIONS.len() {
                progress.finished = true;
            }

            Ok(AnswerFeedback {
                correct,
                correct_answer: question.correct_answer.to_string(),
                explanation: question.explanation.to_string(),
                score: progress.correct_answers,
                finished: progress.finished,
                rating: progress
                    .finished
                    .then(|| quiz_rating(progress.correct_answers)),
            })
        })?;

        tracing::debug!(
            username,
            correct = feedback.correct,
            score = feedback.score,
            finished = feedback.finished,
            "Answered quiz question"
        );
        Ok(feedback)
    }
}
