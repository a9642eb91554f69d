use super::types::Mark;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
            Mark::Empty => {}
        }
    }

    pub fn add_draw(&mut self) {
        self.draws += 1;
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
            Mark::Empty => 0,
        }
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
