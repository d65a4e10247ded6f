use std::fmt;

use crate::state::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Excellent,
    Good,
    NotBad,
    KeepLearning,
}

impl Tier {
    /// Highest tier whose threshold `percentage` reaches.
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage >= 80.0 {
            Tier::Excellent
        } else if percentage >= 60.0 {
            Tier::Good
        } else if percentage >= 40.0 {
            Tier::NotBad
        } else {
            Tier::KeepLearning
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent performance! 🎉",
            Tier::Good => "Good job! 👍",
            Tier::NotBad => "Not bad! Keep practicing.",
            Tier::KeepLearning => "Keep learning! You'll do better next time.",
        }
    }
}

/// Final results of one pass through the questions.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub score: u64,
    pub max_score: u64,
    pub percentage: f64,
    pub tier: Tier,
}

pub fn summarize(session: &Session) -> Summary {
    let score = session.score();
    let max_score = session.max_score();
    // A set worth no points scores 0%.
    let percentage = if max_score == 0 {
        0.0
    } else {
        score as f64 / max_score as f64 * 100.0
    };

    Summary {
        score,
        max_score,
        percentage,
        tier: Tier::for_percentage(percentage),
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nQuiz Complete!")?;
        writeln!(f, "Your score: {}/{}", self.score, self.max_score)?;
        writeln!(f, "Percentage: {:.1}%", self.percentage)?;
        write!(f, "{}", self.tier.message())
    }
}
