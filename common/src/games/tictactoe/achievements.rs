use std::collections::VecDeque;

use crate::log;
use super::board::Board;
use super::types::{Difficulty, GameMode, Mark};
use super::win_detector::has_two_in_line;

const WIN_STREAK_TARGET: u32 = 3;
const FRIEND_GAMES_TARGET: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementKind {
    FirstVictory,
    AiConqueror,
    WinStreak3,
    FriendlyRivalry,
    PerfectVictory,
}

impl AchievementKind {
    pub const ALL: [AchievementKind; 5] = [
        AchievementKind::FirstVictory,
        AchievementKind::AiConqueror,
        AchievementKind::WinStreak3,
        AchievementKind::FriendlyRivalry,
        AchievementKind::PerfectVictory,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AchievementKind::FirstVictory => "First Victory",
            AchievementKind::AiConqueror => "AI Conqueror",
            AchievementKind::WinStreak3 => "Hat Trick",
            AchievementKind::FriendlyRivalry => "Friendly Rivalry",
            AchievementKind::PerfectVictory => "Perfect Victory",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AchievementKind::FirstVictory => "Win your first game",
            AchievementKind::AiConqueror => "Defeat the Hard AI",
            AchievementKind::WinStreak3 => "Win 3 games in a row",
            AchievementKind::FriendlyRivalry => "Play 10 games against a friend",
            AchievementKind::PerfectVictory => "Win without opponent getting 2 in a row",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub kind: AchievementKind,
    pub unlocked: bool,
}

impl Achievement {
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn description(&self) -> &'static str {
        self.kind.description()
    }
}

#[derive(Debug, Clone)]
pub struct AchievementTracker {
    achievements: Vec<Achievement>,
    win_streak: u32,
    friend_games_played: u32,
    x_had_two_in_line: bool,
    o_had_two_in_line: bool,
    pending_notifications: VecDeque<Achievement>,
}

impl Default for AchievementTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl AchievementTracker {
    pub fn new() -> Self {
        Self {
            achievements: AchievementKind::ALL
                .iter()
                .map(|&kind| Achievement { kind, unlocked: false })
                .collect(),
            win_streak: 0,
            friend_games_played: 0,
            x_had_two_in_line: false,
            o_had_two_in_line: false,
            pending_notifications: VecDeque::new(),
        }
    }

    pub fn win_streak(&self) -> u32 {
        self.win_streak
    }

    pub fn friend_games_played(&self) -> u32 {
        self.friend_games_played
    }

    pub fn on_game_started(&mut self, mode: GameMode) {
        self.x_had_two_in_line = false;
        self.o_had_two_in_line = false;

        if mode == GameMode::PlayerVsPlayer {
            self.friend_games_played += 1;
            if self.friend_games_played >= FRIEND_GAMES_TARGET {
                self.try_unlock(AchievementKind::FriendlyRivalry);
            }
        }
    }

    /// Latches, per mark, whether it ever held two cells of a line this game.
    pub fn on_cell_played(&mut self, board: &Board) {
        self.x_had_two_in_line |= has_two_in_line(board, Mark::X);
        self.o_had_two_in_line |= has_two_in_line(board, Mark::O);
    }

    fn had_two_in_line(&self, mark: Mark) -> bool {
        match mark {
            Mark::X => self.x_had_two_in_line,
            Mark::O => self.o_had_two_in_line,
            Mark::Empty => false,
        }
    }

    /// In bot games only a win by `human` counts as a player win.
    pub fn on_player_win(&mut self, winner: Mark, mode: GameMode, difficulty: Difficulty, human: Mark) {
        let is_player_win = match mode {
            GameMode::PlayerVsBot => winner == human,
            GameMode::PlayerVsPlayer => true,
        };

        if !is_player_win {
            self.win_streak = 0;
            return;
        }

        self.win_streak += 1;
        self.try_unlock(AchievementKind::FirstVictory);
        if self.win_streak >= WIN_STREAK_TARGET {
            self.try_unlock(AchievementKind::WinStreak3);
        }
        if mode == GameMode::PlayerVsBot && difficulty == Difficulty::Hard {
            self.try_unlock(AchievementKind::AiConqueror);
        }
        let spoiled = winner.opponent().is_some_and(|loser| self.had_two_in_line(loser));
        if !spoiled {
            self.try_unlock(AchievementKind::PerfectVictory);
        }
    }

    pub fn on_player_loss(&mut self) {
        self.win_streak = 0;
    }

    pub fn on_draw(&mut self) {
        self.win_streak = 0;
    }

    fn try_unlock(&mut self, kind: AchievementKind) {
        let Some(achievement) = self.achievements.iter_mut().find(|a| a.kind == kind) else {
            return;
        };
        if achievement.unlocked {
            return;
        }

        achievement.unlocked = true;
        log!("Achievement unlocked: {}", kind.title());
        self.pending_notifications.push_back(*achievement);
    }

    pub fn has_pending_notifications(&self) -> bool {
        !self.pending_notifications.is_empty()
    }

    pub fn next_pending_notification(&mut self) -> Option<Achievement> {
        self.pending_notifications.pop_front()
    }

    pub fn clear_pending_notifications(&mut self) {
        self.pending_notifications.clear();
    }

    pub fn achievement(&self, kind: AchievementKind) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.kind == kind)
    }

    pub fn all_achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    pub fn reset_all(&mut self) {
        for achievement in &mut self.achievements {
            achievement.unlocked = false;
        }
        self.win_streak = 0;
        self.friend_games_played = 0;
        self.x_had_two_in_line = false;
        self.o_had_two_in_line = false;
        self.pending_notifications.clear();
    }
}
