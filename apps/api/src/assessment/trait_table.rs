use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of scored questions in one assessment.
pub const QUESTION_COUNT: usize = 6;

/// One answer symbol for a scored question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    A,
    B,
    C,
    D,
}

impl Answer {
    pub const ALL: [Answer; 4] = [Answer::A, Answer::B, Answer::C, Answer::D];

    fn index(self) -> usize {
        match self {
            Answer::A => 0,
            Answer::B => 1,
            Answer::C => 2,
            Answer::D => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Answer::A => "A",
            Answer::B => "B",
            Answer::C => "C",
            Answer::D => "D",
        }
    }
}

impl FromStr for Answer {
    /// The rejected input.
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Answer::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Coarse personality category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Leader,
    Strategist,
    Empath,
    Adventurer,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Leader => "Leader",
            Category::Strategist => "Strategist",
            Category::Empath => "Empath",
            Category::Adventurer => "Adventurer",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The trait attached to one (question, answer) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitRecord {
    #[serde(rename = "primary")]
    pub category: Category,
    #[serde(rename = "subtrait")]
    pub label: String,
}

impl TraitRecord {
    pub fn new(category: Category, label: impl Into<String>) -> Self {
        Self {
            category,
            label: label.into(),
        }
    }
}

/// Immutable (question, answer) → trait lookup, built once at startup.
#[derive(Debug, Clone)]
pub struct TraitTable {
    rows: [[TraitRecord; 4]; QUESTION_COUNT],
}

impl TraitTable {
    /// Rows are indexed by question; columns follow `Answer::ALL`.
    pub fn new(rows: [[TraitRecord; 4]; QUESTION_COUNT]) -> Self {
        Self { rows }
    }

    /// The production questionnaire.
    pub fn standard() -> Self {
        use Category::*;
        let t = TraitRecord::new;

        Self::new([
            [
                t(Leader, "Fearless Finisher"),
                t(Strategist, "Smart Planner"),
                t(Empath, "Motivator Extraordinaire"),
                t(Adventurer, "Risk-Taker Extraordinaire"),
            ],
            [
                t(Adventurer, "Free Spirit"),
                t(Strategist, "Practical Planner"),
                t(Empath, "Heartfelt Negotiator"),
                t(Leader, "Visionary Trailblazer"),
            ],
            [
                t(Adventurer, "Thrill-Seeker"),
                t(Strategist, "Master Planner"),
                t(Empath, "Supportive Soul"),
                t(Leader, "The Boss of Fun"),
            ],
            [
                t(Leader, "Visionary Change-Maker"),
                t(Strategist, "Practical Impact-Maker"),
                t(Empath, "The People's Champion"),
                t(Adventurer, "The Innovator"),
            ],
            [
                t(Leader, "Ethical Boss"),
                t(Empath, "Ride-or-Die Friend"),
                t(Strategist, "Clever Fixer"),
                t(Adventurer, "Carefree Rebel"),
            ],
            [
                t(Leader, "The Unstoppable"),
                t(Strategist, "The Game Changer"),
                t(Empath, "The Emotional Anchor"),
                t(Adventurer, "The Rule-Breaker"),
            ],
        ])
    }

    /// `position` is zero-based and must be below `QUESTION_COUNT`.
    pub fn lookup(&self, position: usize, answer: Answer) -> &TraitRecord {
        &self.rows[position][answer.index()]
    }
}
