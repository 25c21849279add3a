use thiserror::Error;

use crate::assessment::trait_table::{Answer, Category, TraitRecord, TraitTable, QUESTION_COUNT};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Exactly {expected} question answers are required, got {got}")]
    WrongCount { expected: usize, got: usize },

    #[error("Answer {position} is '{value}'; each answer must be one of A, B, C, D")]
    InvalidSymbol { position: usize, value: String },
}

/// Scored outcome of one assessment.
#[derive(Debug, Clone)]
pub struct Profile {
    pub dominant: Category,
    /// One record per question, in question order.
    pub traits: Vec<TraitRecord>,
    /// Category counts in first-occurrence order.
    pub tally: Vec<(Category, usize)>,
}

/// Parses raw answer strings, checking count and alphabet.
/// Positions in errors are one-based.
pub fn parse_answers(raw: &[String]) -> Result<Vec<Answer>, ScoringError> {
    if raw.len() != QUESTION_COUNT {
        return Err(ScoringError::WrongCount {
            expected: QUESTION_COUNT,
            got: raw.len(),
        });
    }
    raw.iter()
        .enumerate()
        .map(|(i, value)| {
            value.parse::<Answer>().map_err(|_| ScoringError::InvalidSymbol {
                position: i + 1,
                value: value.clone(),
            })
        })
        .collect()
}

/// Maps each answer through the table and picks the most frequent category.
///
/// Ties go to the category whose first occurrence comes at the earliest
/// question, so identical answers always produce the same dominant category.
pub fn score(table: &TraitTable, answers: &[Answer]) -> Result<Profile, ScoringError> {
    if answers.len() != QUESTION_COUNT {
        return Err(ScoringError::WrongCount {
            expected: QUESTION_COUNT,
            got: answers.len(),
        });
    }

    let traits: Vec<TraitRecord> = answers
        .iter()
        .enumerate()
        .map(|(position, answer)| table.lookup(position, *answer).clone())
        .collect();

    let mut tally: Vec<(Category, usize)> = Vec::new();
    for record in &traits {
        match tally.iter_mut().find(|(c, _)| *c == record.category) {
            Some((_, count)) => *count += 1,
            None => tally.push((record.category, 1)),
        }
    }

    // strictly-greater keeps the earliest category on ties
    let mut dominant = tally[0];
    for entry in &tally[1..] {
        if entry.1 > dominant.1 {
            dominant = *entry;
        }
    }

    Ok(Profile {
        dominant: dominant.0,
        traits,
        tally,
    })
}
