//! A participant: a display name plus a bounded countdown clock.
//!
//! The rules engine never touches clocks. Whoever drives the game with
//! wall-clock ticks calls [`Player::change_time`].

use chrono::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    starting_time: Duration,
    time: Duration,
}

impl Player {
    /// Negative starting times are treated as zero.
    pub fn new(name: impl Into<String>, starting_time: Duration) -> Self {
        let starting_time = starting_time.max(Duration::zero());
        Self {
            name: name.into(),
            starting_time,
            time: starting_time,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time(&self) -> Duration {
        self.time
    }

    pub fn starting_time(&self) -> Duration {
        self.starting_time
    }

    /// Add `delta` (negative to spend time), clamped to `[0, starting_time]`.
    pub fn change_time(&mut self, delta: Duration) {
        let next = self.time.checked_add(&delta).unwrap_or(if delta > Duration::zero() {
            self.starting_time
        } else {
            Duration::zero()
        });
        self.time = next.clamp(Duration::zero(), self.starting_time);
    }

    pub fn has_lost_on_time(&self) -> bool {
        self.time == Duration::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_counts_down_and_clamps() {
        let mut player = Player::new("harry", Duration::seconds(60));
        assert_eq!(player.name(), "harry");
        player.change_time(Duration::seconds(-15));
        assert_eq!(player.time(), Duration::seconds(45));
        player.change_time(Duration::seconds(100));
        assert_eq!(player.time(), Duration::seconds(60));
        assert!(!player.has_lost_on_time());
        player.change_time(Duration::seconds(-600));
        assert_eq!(player.time(), Duration::zero());
        assert!(player.has_lost_on_time());
    }

    #[test]
    fn only_exactly_zero_loses() {
        let mut player = Player::new("chat", Duration::seconds(1));
        player.change_time(Duration::milliseconds(-999));
        assert!(!player.has_lost_on_time());
        player.change_time(Duration::milliseconds(-1));
        assert!(player.has_lost_on_time());
    }

    #[test]
    fn negative_starting_time_is_zero() {
        let player = Player::new("nobody", Duration::seconds(-5));
        assert_eq!(player.starting_time(), Duration::zero());
        assert!(player.has_lost_on_time());
    }
}
