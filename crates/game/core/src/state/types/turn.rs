use super::common::TeamId;

/// Battle-wide turn bookkeeping shared by every encounter of a phase.
///
/// Read-only inside combat: skills may inspect it (e.g. "on the player
/// phase") but only the map layer advances it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    /// 1-based turn counter.
    pub turn: u32,

    /// Team whose phase is in progress.
    pub current_team: TeamId,
}

impl BattleState {
    /// Creates a battle state at turn 1 with the given team acting.
    pub fn new(current_team: TeamId) -> Self {
        Self {
            turn: 1,
            current_team,
        }
    }

    /// Whether `team` is the side whose phase is in progress.
    pub fn is_phase_of(&self, team: TeamId) -> bool {
        self.current_team == team
    }
}

impl Default for BattleState {
    fn default() -> Self {
        Self::new(TeamId::default())
    }
}
