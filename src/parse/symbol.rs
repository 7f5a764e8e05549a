#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Post-processing rule applied to the raw rolls of a dice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Modifier {
    /// Sum of every roll.
    #[default]
    None,
    /// `H`\
    /// Only the highest roll counts.
    KeepHigh,
    /// `L`\
    /// Only the lowest roll counts.
    KeepLow,
    /// `h`\
    /// Sum of every roll except the highest one.
    DropHigh,
    /// `l`\
    /// Sum of every roll except the lowest one.
    DropLow,
    /// `e`\
    /// Every time the highest value of the die is rolled another die is added.
    Explode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Sub,
}

impl Modifier {
    pub const ALL: [Modifier; 6] = [
        Modifier::None,
        Modifier::KeepHigh,
        Modifier::KeepLow,
        Modifier::DropHigh,
        Modifier::DropLow,
        Modifier::Explode,
    ];

    /// The character written after a dice, `None` has none.
    pub fn symbol(self) -> Option<char> {
        match self {
            Modifier::None => None,
            Modifier::KeepHigh => Some('H'),
            Modifier::KeepLow => Some('L'),
            Modifier::DropHigh => Some('h'),
            Modifier::DropLow => Some('l'),
            Modifier::Explode => Some('e'),
        }
    }
}

impl TryFrom<char> for Modifier {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'H' => Ok(Modifier::KeepHigh),
            'L' => Ok(Modifier::KeepLow),
            'h' => Ok(Modifier::DropHigh),
            'l' => Ok(Modifier::DropLow),
            'e' => Ok(Modifier::Explode),
            other => Err(other),
        }
    }
}

impl Operator {
    pub const ALL: [Operator; 2] = [Operator::Add, Operator::Sub];

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
        }
    }

    pub fn apply(self, lhs: i32, rhs: i32) -> i32 {
        match self {
            Operator::Add => lhs.wrapping_add(rhs),
            Operator::Sub => lhs.wrapping_sub(rhs),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.symbol() {
            Some(c) => write!(f, "{c}"),
            None => Ok(()),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::{Modifier, Operator};

    #[test]
    fn test_modifier_symbols_map_back() {
        for modifier in Modifier::ALL {
            match modifier.symbol() {
                Some(c) => assert_eq!(Modifier::try_from(c), Ok(modifier)),
                None => assert_eq!(modifier, Modifier::None),
            }
        }
    }

    #[test]
    fn test_operator_symbols_map_back() {
        for operator in Operator::ALL {
            assert_eq!(Operator::try_from(operator.symbol()), Ok(operator));
        }
    }

    #[test]
    fn test_modifier_is_case_sensitive() {
        assert_eq!(Modifier::try_from('H'), Ok(Modifier::KeepHigh));
        assert_eq!(Modifier::try_from('h'), Ok(Modifier::DropHigh));
        assert_eq!(Modifier::try_from('E'), Err('E'));
        assert_eq!(Modifier::try_from('d'), Err('d'));
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(3, 2), 5);
        assert_eq!(Operator::Sub.apply(3, 2), 1);
        assert_eq!(Operator::Add.apply(i32::MAX, 1), i32::MIN);
    }

    #[test]
    fn test_display() {
        assert_eq!(Modifier::None.to_string(), "");
        assert_eq!(Modifier::Explode.to_string(), "e");
        assert_eq!(Operator::Sub.to_string(), "-");
    }
}
