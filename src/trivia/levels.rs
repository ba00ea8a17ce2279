//! Score-to-medal table shown on the result screens.

/// One reachable rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    /// Minimum score for this rank.
    pub threshold: u32,
    pub title: &'static str,
    pub phrase: &'static str,
    pub medal: &'static str,
}

/// Ordered low to high; [`level_for_score`] scans from the top.
pub const LEVELS: [Level; 3] = [
    Level {
        threshold: 0,
        title: "Newbie Tourist",
        phrase: "Good start! Don't get lost.",
        medal: "🥉",
    },
    Level {
        threshold: 5,
        title: "Almost Local",
        phrase: "Nice! You almost got the slang.",
        medal: "🥈",
    },
    Level {
        threshold: 15,
        title: "True Ecuadorian!",
        phrase: "Amazing! You are a true Ñaño.",
        medal: "🥇",
    },
];

/// Highest level whose threshold the score meets.
pub fn level_for_score(score: u32) -> &'static Level {
    LEVELS
        .iter()
        .rev()
        .find(|level| score >= level.threshold)
        .unwrap_or(&LEVELS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(level_for_score(0).title, "Newbie Tourist");
        assert_eq!(level_for_score(4).title, "Newbie Tourist");
        assert_eq!(level_for_score(5).title, "Almost Local");
        assert_eq!(level_for_score(14).title, "Almost Local");
        assert_eq!(level_for_score(15).title, "True Ecuadorian!");
        assert_eq!(level_for_score(400).title, "True Ecuadorian!");
    }
}
