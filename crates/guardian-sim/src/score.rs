//! Running score state tracked by the engine.

use guardian_core::state::ScoreView;

#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub hostiles_spawned: u32,
    pub hostiles_killed: u32,
    pub hostiles_leaked: u32,
    pub projectiles_fired: u32,
    pub defenders_placed: u32,
    pub skills_used: u32,
}

impl ScoreState {
    pub fn view(&self) -> ScoreView {
        ScoreView {
            hostiles_spawned: self.hostiles_spawned,
            hostiles_killed: self.hostiles_killed,
            hostiles_leaked: self.hostiles_leaked,
            projectiles_fired: self.projectiles_fired,
            defenders_placed: self.defenders_placed,
            skills_used: self.skills_used,
        }
    }
}
