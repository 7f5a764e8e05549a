use rand::{thread_rng, Rng};

#[cfg(feature = "logging")]
use log::debug;

use super::{expression::Expression, roll::RollResult};
use crate::parse::Modifier;

/// Largest die that can be rolled by scaling a single `f32`, which only holds
/// 24 bits of randomness.
const MAX_SCALED_SIDES: u32 = 1 << 24;

/// `number` dice with `faces` faces, combined according to `modifier`.
///
/// Positive faces roll in `[1, faces]`, negative faces in `[faces, -1]` and
/// zero faces always roll 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dice {
    number: u8,
    faces: i32,
    modifier: Modifier,
}

impl Dice {
    pub fn new(number: u8, faces: i32, modifier: Modifier) -> Self {
        Self {
            number,
            faces,
            modifier,
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }
    pub fn faces(&self) -> i32 {
        self.faces
    }
    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    /// Lowest and highest value a single die can roll.
    pub fn bounds(&self) -> (i32, i32) {
        match self.faces {
            0 => (0, 0),
            faces if faces > 0 => (1, faces),
            faces => (faces, -1),
        }
    }

    /// Roll every die.
    /// Uses rand::thread_rng(), if you want to choose the rng yourself use `roll_all_with()`
    pub fn roll_all(&self) -> Vec<i32> {
        self.roll_all_with(&mut thread_rng())
    }

    /// Roll every die with the rng specified.
    /// Exploding dice keep rolling while the last roll is the highest value,
    /// so more than `number` rolls can be returned.
    pub fn roll_all_with(&self, rng: &mut impl Rng) -> Vec<i32> {
        let mut rolls: Vec<i32> = (0..self.number)
            .map(|_| self.roll_value(&mut *rng))
            .collect();

        let (lower, upper) = self.bounds();
        if self.modifier == Modifier::Explode && lower != upper {
            while rolls.last() == Some(&upper) {
                rolls.push(self.roll_value(rng));
            }
        }

        rolls
    }

    fn roll_value(&self, rng: &mut impl Rng) -> i32 {
        if self.faces == 0 {
            return 0;
        }

        let sides = self.faces.unsigned_abs();
        if sides > MAX_SCALED_SIDES {
            let (lower, upper) = self.bounds();
            return rng.gen_range(lower..=upper);
        }

        let random_value: f32 = rng.gen();
        let rolled = ((random_value * sides as f32).ceil() as u32).clamp(1, sides);

        if self.faces > 0 {
            rolled as i32
        } else {
            (-i64::from(rolled)) as i32
        }
    }

    /// Reduces raw rolls to the value of the dice.
    pub fn combine(&self, rolls: &[i32]) -> i32 {
        let sum = || rolls.iter().fold(0i32, |acc, &roll| acc.wrapping_add(roll));
        let highest = || rolls.iter().copied().max().unwrap_or(0);
        let lowest = || rolls.iter().copied().min().unwrap_or(0);

        match self.modifier {
            Modifier::None | Modifier::Explode => sum(),
            Modifier::KeepHigh => highest(),
            Modifier::KeepLow => lowest(),
            Modifier::DropHigh => sum().wrapping_sub(highest()),
            Modifier::DropLow => sum().wrapping_sub(lowest()),
        }
    }

    /// Rolls the dice, recording one step per die.
    pub fn result_with(&self, rng: &mut impl Rng) -> RollResult {
        let rolls = self.roll_all_with(rng);
        let value = self.combine(&rolls);

        #[cfg(feature = "logging")]
        debug!("rolled {self}: {rolls:?} = {value}");

        let steps = rolls
            .into_iter()
            .map(|roll| RollResult::new(Expression::die(self.faces, roll), roll, Vec::new()))
            .collect();

        RollResult::new(Expression::Dice(*self), value, steps)
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.number != 1 {
            write!(f, "{}", self.number)?;
        }
        write!(f, "d{}{}", self.faces, self.modifier)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::{
        rngs::{mock::StepRng, StdRng},
        SeedableRng,
    };

    use super::*;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    fn dice_strategy() -> impl Strategy<Value = Dice> {
        let modifier = prop::sample::select(Modifier::ALL.to_vec());
        (1..=255u8, -1000..=1000i32, modifier).prop_map(|(number, faces, modifier)| {
            let modifier = match (modifier, faces) {
                (Modifier::Explode, -1..=1) => Modifier::None,
                (modifier, _) => modifier,
            };
            Dice::new(number, faces, modifier)
        })
    }

    #[test]
    fn test_rolls_with_known_seed() {
        let dice = Dice::new(5, 6, Modifier::None);
        assert_eq!(dice.roll_all_with(&mut test_rng()), vec![5, 6, 5, 5, 2]);

        let dice = Dice::new(10, 100, Modifier::None);
        assert_eq!(
            dice.roll_all_with(&mut test_rng()),
            vec![83, 98, 80, 70, 20, 43, 22, 18, 78, 26]
        );
    }

    #[test]
    fn test_negative_faces() {
        let dice = Dice::new(3, -6, Modifier::None);
        assert_eq!(dice.roll_all_with(&mut test_rng()), vec![-5, -6, -5]);
        assert_eq!(dice.bounds(), (-6, -1));
    }

    #[test]
    fn test_zero_faces_do_not_need_randomness() {
        let dice = Dice::new(4, 0, Modifier::Explode);
        let mut rng = StepRng::new(0, 0);
        assert_eq!(dice.roll_all_with(&mut rng), vec![0; 4]);
        assert_eq!(dice.bounds(), (0, 0));
    }

    #[test]
    fn test_huge_dice_can_roll_low_values() {
        let dice = Dice::new(1, 100_000_000, Modifier::None);
        let mut rng = StepRng::new(50, 0);
        assert_eq!(dice.roll_all_with(&mut rng), vec![2]);

        let dice = Dice::new(1, -100_000_000, Modifier::None);
        let mut rng = StepRng::new(50, 0);
        assert_eq!(dice.roll_all_with(&mut rng), vec![-99_999_999]);
    }

    #[test]
    fn test_huge_dice_reach_every_low_value() {
        let dice = Dice::new(1, 100_000_000, Modifier::None);
        let reached: HashSet<i32> = (0..4400u64)
            .flat_map(|start| dice.roll_all_with(&mut StepRng::new(start, 1)))
            .collect();

        assert!((1..=100).all(|value| reached.contains(&value)));
    }

    #[test]
    fn test_widest_dice_stay_in_bounds() {
        for faces in [i32::MAX, i32::MIN] {
            let dice = Dice::new(255, faces, Modifier::None);
            let (lower, upper) = dice.bounds();
            let rolls = dice.roll_all_with(&mut test_rng());

            assert!(rolls.iter().all(|roll| (lower..=upper).contains(roll)));
        }
    }

    #[test]
    fn test_single_faced_dice_never_explode() {
        let dice = Dice::new(3, 1, Modifier::Explode);
        assert_eq!(dice.roll_all_with(&mut test_rng()), vec![1, 1, 1]);

        let dice = Dice::new(3, -1, Modifier::Explode);
        assert_eq!(dice.roll_all_with(&mut test_rng()), vec![-1, -1, -1]);
    }

    #[test]
    fn test_explode() {
        let dice = Dice::new(1, 4, Modifier::Explode);
        assert_eq!(dice.roll_all_with(&mut test_rng()), vec![4, 4, 4, 3]);

        // the second roll is a 6, so a third one is added
        let dice = Dice::new(2, 6, Modifier::Explode);
        assert_eq!(dice.roll_all_with(&mut test_rng()), vec![5, 6, 5]);

        let dice = Dice::new(1, 6, Modifier::Explode);
        assert_eq!(dice.roll_all_with(&mut test_rng()), vec![5]);
    }

    #[test]
    fn test_combine() {
        let rolls = [5, 6, 5];
        let value = |modifier| Dice::new(3, 6, modifier).combine(&rolls);

        assert_eq!(value(Modifier::None), 16);
        assert_eq!(value(Modifier::Explode), 16);
        assert_eq!(value(Modifier::KeepHigh), 6);
        assert_eq!(value(Modifier::KeepLow), 5);
        assert_eq!(value(Modifier::DropHigh), 10);
        assert_eq!(value(Modifier::DropLow), 11);
    }

    #[test]
    fn test_combine_without_rolls() {
        for modifier in Modifier::ALL {
            assert_eq!(Dice::new(0, 6, modifier).combine(&[]), 0);
        }
    }

    #[test]
    fn test_result_steps_are_single_dice() {
        let result = Dice::new(3, 6, Modifier::KeepHigh).result_with(&mut test_rng());

        assert_eq!(result.value, 6);
        assert_eq!(result.expression, Expression::Dice(Dice::new(3, 6, Modifier::KeepHigh)));

        let expected_steps: Vec<_> = [5, 6, 5]
            .into_iter()
            .map(|roll| RollResult::new(Expression::die(6, roll), roll, Vec::new()))
            .collect();
        assert_eq!(result.steps, expected_steps);
    }

    #[test]
    fn test_display() {
        assert_eq!(Dice::new(1, 6, Modifier::None).to_string(), "d6");
        assert_eq!(Dice::new(2, 6, Modifier::KeepHigh).to_string(), "2d6H");
        assert_eq!(Dice::new(4, -3, Modifier::Explode).to_string(), "4d-3e");
    }

    proptest! {
        #[test]
        fn test_rolls_stay_in_bounds(dice in dice_strategy(), seed: u64) {
            let rolls = dice.roll_all_with(&mut StdRng::seed_from_u64(seed));
            let (lower, upper) = dice.bounds();

            prop_assert!(rolls.len() >= dice.number() as usize);
            prop_assert!(rolls.iter().all(|roll| (lower..=upper).contains(roll)));
            if dice.modifier() != Modifier::Explode {
                prop_assert_eq!(rolls.len(), dice.number() as usize);
            }
        }

        #[test]
        fn test_exploding_rolls_end_below_the_maximum(number in 1..=20u8, faces in 2..=20i32, seed: u64) {
            let dice = Dice::new(number, faces, Modifier::Explode);
            let rolls = dice.roll_all_with(&mut StdRng::seed_from_u64(seed));

            prop_assert_ne!(rolls.last().copied(), Some(faces));
        }

        #[test]
        fn test_value_matches_modifier(dice in dice_strategy(), seed: u64) {
            let result = dice.result_with(&mut StdRng::seed_from_u64(seed));
            let rolls: Vec<i32> = result.steps.iter().map(|step| step.value).collect();
            let sum: i32 = rolls.iter().sum();
            let highest = *rolls.iter().max().unwrap();
            let lowest = *rolls.iter().min().unwrap();

            let expected = match dice.modifier() {
                Modifier::None | Modifier::Explode => sum,
                Modifier::KeepHigh => highest,
                Modifier::KeepLow => lowest,
                Modifier::DropHigh => sum - highest,
                Modifier::DropLow => sum - lowest,
            };
            prop_assert_eq!(result.value, expected);
        }

        #[test]
        fn test_same_seed_same_result(dice in dice_strategy(), seed: u64) {
            let first = dice.result_with(&mut StdRng::seed_from_u64(seed));
            let second = dice.result_with(&mut StdRng::seed_from_u64(seed));
            prop_assert_eq!(first, second);
        }
    }
}
