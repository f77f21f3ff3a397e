//! Consecutive-win counter that outlives individual games

/// Win streak across games
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Streak {
    current: u32,
    best: u32,
}

impl Streak {
    #[must_use]
    pub const fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub const fn best(&self) -> u32 {
        self.best
    }

    pub fn record_win(&mut self) {
        self.current += 1;
        self.best = self.best.max(self.current);
    }

    pub fn record_loss(&mut self) {
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wins_accumulate_and_loss_resets() {
        let mut streak = Streak::default();
        streak.record_win();
        streak.record_win();
        assert_eq!(streak.current(), 2);

        streak.record_loss();
        assert_eq!(streak.current(), 0);
        assert_eq!(streak.best(), 2);

        streak.record_win();
        assert_eq!(streak.current(), 1);
        assert_eq!(streak.best(), 2);
    }
}
