use std::fmt;
use serde::{Deserialize, Serialize};

use crate::session::store::GameSession;

/// Rating tier shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Perfect,
    Excellent,
    VeryGood,
    GoodTry,
}

impl Rating {
    pub fn from_percentage(percentage: u32) -> Self {
        match percentage {
            100..=u32::MAX => Rating::Perfect,
            80..=99 => Rating::Excellent,
            60..=79 => Rating::VeryGood,
            _ => Rating::GoodTry,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Rating::Perfect   => "🏆",
            Rating::Excellent => "🎉",
            Rating::VeryGood  => "🌟",
            Rating::GoodTry   => "💪",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Rating::Perfect   => "Perfect!",
            Rating::Excellent => "Excellent!",
            Rating::VeryGood  => "Very good!",
            Rating::GoodTry   => "Good try!",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub correct: u32,
    pub total: usize,
    pub points: u32,
    /// Accuracy rounded to the nearest whole percent; 0 for an empty game.
    pub percentage: u32,
    pub rating: Rating,
}

impl ResultSummary {
    pub fn from_session(session: &GameSession) -> Self {
        let correct = session.correct_count();
        let total = session.len();
        let percentage = if total == 0 {
            0
        } else {
            (f64::from(correct) / total as f64 * 100.0).round() as u32
        };
        ResultSummary {
            correct,
            total,
            points: session.total_points(),
            percentage,
            rating: Rating::from_percentage(percentage),
        }
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}  {}/{} correct ({}%), {} points",
            self.rating.emoji(),
            self.rating,
            self.correct,
            self.total,
            self.percentage,
            self.points
        )
    }
}
