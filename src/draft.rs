use crate::analysis::recommender::ROLES;
use crate::error::AppError;

pub const TEAM_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Ally,
    Enemy,
}

/// Picks and bans of an ongoing draft, owned by the caller and passed to
/// the engine by value on each query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftState {
    ally: [Option<String>; TEAM_SIZE],
    enemy: [Option<String>; TEAM_SIZE],
    banned: Vec<String>,
}

/// Team/enemy/banned lists as the engine expects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftQuery {
    pub team: Vec<String>,
    pub enemies: Vec<String>,
    pub banned: Vec<String>,
}

/// Role drafted into the given slot (top, jungle, mid, adc, support).
pub fn slot_role(slot: usize) -> Option<&'static str> {
    ROLES.get(slot).copied()
}

impl DraftState {
    pub fn new() -> Self {
        DraftState::default()
    }

    pub fn picks(&self, side: Side) -> Vec<String> {
        self.slots(side).iter().flatten().cloned().collect()
    }

    pub fn banned(&self) -> &[String] {
        &self.banned
    }

    fn slots(&self, side: Side) -> &[Option<String>; TEAM_SIZE] {
        match side {
            Side::Ally => &self.ally,
            Side::Enemy => &self.enemy,
        }
    }

    fn is_taken(&self, id: &str) -> bool {
        self.ally
            .iter()
            .chain(self.enemy.iter())
            .flatten()
            .chain(self.banned.iter())
            .any(|taken| taken == id)
    }

    pub fn pick(&mut self, side: Side, slot: usize, id: &str) -> Result<(), AppError> {
        if slot >= TEAM_SIZE {
            return Err(AppError::PickRejected(format!("slot {} is out of range", slot)));
        }
        if self.is_taken(id) {
            return Err(AppError::PickRejected(format!("{} is already picked or banned", id)));
        }

        let slots = match side {
            Side::Ally => &mut self.ally,
            Side::Enemy => &mut self.enemy,
        };
        slots[slot] = Some(id.to_string());
        Ok(())
    }

    pub fn remove(&mut self, side: Side, slot: usize) -> Option<String> {
        let slots = match side {
            Side::Ally => &mut self.ally,
            Side::Enemy => &mut self.enemy,
        };
        slots.get_mut(slot).and_then(Option::take)
    }

    pub fn ban(&mut self, id: &str) -> Result<(), AppError> {
        if self.is_taken(id) {
            return Err(AppError::PickRejected(format!("{} is already picked or banned", id)));
        }
        self.banned.push(id.to_string());
        Ok(())
    }

    pub fn reset(&mut self) {
        *self = DraftState::default();
    }

    /// Lists for a recommendation on behalf of `side`; selecting for the
    /// enemy swaps which picks count as the team.
    pub fn query(&self, side: Side) -> DraftQuery {
        let (team, enemies) = match side {
            Side::Ally => (self.picks(Side::Ally), self.picks(Side::Enemy)),
            Side::Enemy => (self.picks(Side::Enemy), self.picks(Side::Ally)),
        };

        DraftQuery {
            team,
            enemies,
            banned: self.banned.clone(),
        }
    }
}
