use serde::Serialize;

/// Draft stage, derived from how many champions the team has locked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftPhase {
    Early,
    Mid,
    Late,
}

impl DraftPhase {
    pub fn from_team_size(team_size: usize) -> Self {
        match team_size {
            0..=1 => DraftPhase::Early,
            2..=3 => DraftPhase::Mid,
            _ => DraftPhase::Late,
        }
    }

    pub fn weights(self) -> WeightVector {
        match self {
            // Flexible, individually strong picks
            DraftPhase::Early => WeightVector {
                tier: 0.40,
                synergy: 0.20,
                counter: 0.40,
                vulnerability: -0.45,
                flex: 0.25,
                viability: 0.15,
                balance: 0.05,
                early_jungle: 0.10,
            },
            // Counters and emerging synergy
            DraftPhase::Mid => WeightVector {
                tier: 0.25,
                synergy: 0.40,
                counter: 0.60,
                vulnerability: -0.55,
                flex: 0.10,
                viability: 0.15,
                balance: 0.10,
                early_jungle: 0.10,
            },
            // Fit with the now fixed composition
            DraftPhase::Late => WeightVector {
                tier: 0.15,
                synergy: 0.70,
                counter: 0.50,
                vulnerability: -0.70,
                flex: 0.05,
                viability: 0.10,
                balance: 0.20,
                early_jungle: 0.10,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightVector {
    pub tier: f64,
    pub synergy: f64,
    pub counter: f64,
    /// Negative: exposure to the enemy team lowers the total.
    pub vulnerability: f64,
    pub flex: f64,
    pub viability: f64,
    pub balance: f64,
    pub early_jungle: f64,
}

/// Weights for the current ally team size. Enemy picks do not affect the phase.
pub fn weights_for(team_size: usize) -> WeightVector {
    DraftPhase::from_team_size(team_size).weights()
}
