//! Roll sources: where a non-human player's pin counts come from.

use crate::core::SimpleRng;

/// Supplies the next pin count for a player whose rolls are not typed in.
///
/// Implementations should return a value in `0..=pins_remaining`; the session
/// clamps anything larger.
pub trait RollSource {
    fn next_roll(&mut self, pins_remaining: u8) -> u8;
}

impl<F> RollSource for F
where
    F: FnMut(u8) -> u8,
{
    fn next_roll(&mut self, pins_remaining: u8) -> u8 {
        self(pins_remaining)
    }
}

/// The automated opponent.
///
/// Three bands, picked per roll:
/// - 30%: knock down everything standing
/// - 40%: knock down 60-99% of what is standing (rounded down)
/// - 30%: uniform over `0..=pins_remaining`
#[derive(Debug, Clone)]
pub struct BotRoller {
    rng: SimpleRng,
}

impl BotRoller {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }
}

impl RollSource for BotRoller {
    fn next_roll(&mut self, pins_remaining: u8) -> u8 {
        let skill = self.rng.next_range(100);
        if skill >= 70 {
            pins_remaining
        } else if skill >= 30 {
            let percent = 60 + self.rng.next_range(40);
            (pins_remaining as u32 * percent / 100) as u8
        } else {
            self.rng.next_pins(pins_remaining)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_never_exceeds_standing_pins() {
        let mut bot = BotRoller::new(42);
        for standing in 0..=10u8 {
            for _ in 0..200 {
                assert!(bot.next_roll(standing) <= standing);
            }
        }
    }

    #[test]
    fn test_bot_is_deterministic_per_seed() {
        let mut a = BotRoller::new(7);
        let mut b = BotRoller::new(7);
        for _ in 0..50 {
            assert_eq!(a.next_roll(10), b.next_roll(10));
        }
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_bot_strikes_sometimes() {
        let mut bot = BotRoller::new(3);
        let strikes = (0..1000).filter(|_| bot.next_roll(10) == 10).count();
        // 30% all-pins band plus a sliver of the uniform band.
        assert!(strikes > 200 && strikes < 450, "strikes = {strikes}");
    }

    #[test]
    fn test_closure_roll_source() {
        let mut always_seven = |_: u8| -> u8 { 7 };
        assert_eq!(always_seven.next_roll(10), 7);
    }
}
