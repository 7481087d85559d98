use serde::{Deserialize, Serialize};

use crate::quiz::index::ResultIndex;

/// A terminal personality outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    /// Stable identifier, not necessarily the catalog position.
    pub id: String,
    pub title: String,
    pub overview: String,
    pub description: String,
    /// Opaque asset reference for the portrait.
    pub image_key: String,
    /// Lower is rarer. See [`RarityTier::from_score`].
    pub rarity_score: f64,
    /// Related outcomes, in display order. Usually two or three entries.
    pub friends: Vec<ResultIndex>,
}

impl Animal {
    pub fn tier(&self) -> RarityTier {
        RarityTier::from_score(self.rarity_score)
    }
}

/// Display band derived from a rarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RarityTier {
    Ur,
    SsrHigh,
    SsrMid,
    SsrLow,
}

impl RarityTier {
    /// Bands are half-open on the upper bound: `[0,5)`, `[5,10)`, `[10,15)`,
    /// and everything else, which includes negative and NaN scores.
    pub fn from_score(score: f64) -> Self {
        if (0.0..5.0).contains(&score) {
            RarityTier::Ur
        } else if (5.0..10.0).contains(&score) {
            RarityTier::SsrHigh
        } else if (10.0..15.0).contains(&score) {
            RarityTier::SsrMid
        } else {
            RarityTier::SsrLow
        }
    }

    pub fn stars(self) -> u8 {
        match self {
            RarityTier::Ur => 6,
            RarityTier::SsrHigh => 5,
            RarityTier::SsrMid => 4,
            RarityTier::SsrLow => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RarityTier::Ur => "UR",
            RarityTier::SsrHigh => "SSR-high",
            RarityTier::SsrMid => "SSR-mid",
            RarityTier::SsrLow => "SSR-low",
        }
    }

    /// Asset name of the tier badge.
    pub fn badge_key(self) -> &'static str {
        match self {
            RarityTier::Ur => "UR5",
            _ => "SSR2",
        }
    }
}

/// The sixteen MBTI types, in the order the canonical catalog stores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mbti {
    Istj,
    Isfj,
    Infj,
    Intj,
    Istp,
    Isfp,
    Infp,
    Intp,
    Estp,
    Esfp,
    Enfp,
    Entp,
    Estj,
    Esfj,
    Enfj,
    Entj,
}

impl Mbti {
    pub const ALL: [Mbti; 16] = [
        Mbti::Istj,
        Mbti::Isfj,
        Mbti::Infj,
        Mbti::Intj,
        Mbti::Istp,
        Mbti::Isfp,
        Mbti::Infp,
        Mbti::Intp,
        Mbti::Estp,
        Mbti::Esfp,
        Mbti::Enfp,
        Mbti::Entp,
        Mbti::Estj,
        Mbti::Esfj,
        Mbti::Enfj,
        Mbti::Entj,
    ];

    pub fn result_index(self) -> ResultIndex {
        ResultIndex(self as usize)
    }

    pub fn from_result_index(index: ResultIndex) -> Option<Self> {
        Self::ALL.get(index.0).copied()
    }

    pub fn code(self) -> &'static str {
        match self {
            Mbti::Istj => "ISTJ",
            Mbti::Isfj => "ISFJ",
            Mbti::Infj => "INFJ",
            Mbti::Intj => "INTJ",
            Mbti::Istp => "ISTP",
            Mbti::Isfp => "ISFP",
            Mbti::Infp => "INFP",
            Mbti::Intp => "INTP",
            Mbti::Estp => "ESTP",
            Mbti::Esfp => "ESFP",
            Mbti::Enfp => "ENFP",
            Mbti::Entp => "ENTP",
            Mbti::Estj => "ESTJ",
            Mbti::Esfj => "ESFJ",
            Mbti::Enfj => "ENFJ",
            Mbti::Entj => "ENTJ",
        }
    }
}
