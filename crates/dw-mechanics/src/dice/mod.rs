//! Sources of d20 results.
//!
//! Combat never touches an RNG directly; it asks a [`RollSource`] for the
//! next d20. Live play uses a seeded or OS-seeded [`StdRng`], tests and
//! replays use [`ScriptedRolls`].

pub mod scripted;

pub use scripted::ScriptedRolls;

use rand::Rng;
use rand::rngs::StdRng;

/// Number of faces on the only die the game uses.
pub const D20_SIDES: u32 = 20;

/// Something that can roll a d20.
pub trait RollSource {
    /// Roll once, returning a value in 1..=20.
    fn roll_d20(&mut self) -> u32;
}

impl RollSource for StdRng {
    fn roll_d20(&mut self) -> u32 {
        self.random_range(1..=D20_SIDES)
    }
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn roll_d20(&mut self) -> u32 {
        (**self).roll_d20()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = rng.roll_d20();
            assert!((1..=20).contains(&v), "rolled {v}");
        }
    }

    #[test]
    fn seeded_rolls_are_reproducible() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(a.roll_d20(), b.roll_d20());
        }
    }

    #[test]
    fn every_face_shows_up() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 20];
        for _ in 0..2000 {
            seen[(rng.roll_d20() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
