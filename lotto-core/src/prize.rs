//! Match counting and the fixed prize-tier table.

use crate::{DrawnNumbers, UserPick, BALL_COUNT};

/// Count positions where the picked digit equals the drawn digit.
///
/// An empty slot never matches.
pub fn match_count(pick: &UserPick, drawn: &DrawnNumbers) -> usize {
    (0..BALL_COUNT)
        .filter(|&i| pick.get(i).is_some() && pick.get(i) == drawn.get(i))
        .count()
}

/// Map a match count to its prize-tier message.
pub fn prize_message(matches: usize) -> &'static str {
    match matches {
        1 => "Congratulations! You won an amortized prize!",
        2 => "Congratulations! You won $500!",
        3 => "Congratulations! You won $5,000!",
        4 => "Congratulations! You won $10,000!",
        5 => "Congratulations! You won $200,000!",
        6 => "Congratulations! You won $500,000!",
        7 => "Congratulations! You won $1,000,000!",
        _ => "You didn't win this time. Try again!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick_of(digits: [&str; BALL_COUNT]) -> UserPick {
        let mut pick = UserPick::new();
        for (i, raw) in digits.iter().enumerate() {
            assert!(pick.set_digit(i, raw).unwrap());
        }
        pick
    }

    #[test]
    fn test_three_matches_pays_five_thousand() {
        let pick = pick_of(["1", "2", "3", "4", "5", "6", "7"]);
        let drawn = DrawnNumbers::from_digits([1, 2, 3, 9, 9, 9, 9]);

        let matches = match_count(&pick, &drawn);
        assert_eq!(matches, 3);
        assert_eq!(prize_message(matches), "Congratulations! You won $5,000!");
    }

    #[test]
    fn test_empty_slots_never_match() {
        let pick = UserPick::new();
        let drawn = DrawnNumbers::from_digits([0, 0, 0, 0, 0, 0, 0]);

        let matches = match_count(&pick, &drawn);
        assert_eq!(matches, 0);
        assert_eq!(prize_message(matches), "You didn't win this time. Try again!");
    }

    #[test]
    fn test_all_seven_matches_pays_the_jackpot() {
        let pick = pick_of(["3", "1", "4", "1", "5", "9", "2"]);
        let drawn = DrawnNumbers::from_digits([3, 1, 4, 1, 5, 9, 2]);

        let matches = match_count(&pick, &drawn);
        assert_eq!(matches, 7);
        assert_eq!(prize_message(matches), "Congratulations! You won $1,000,000!");
    }

    #[test]
    fn test_message_table_is_keyed_only_by_count() {
        assert_eq!(prize_message(0), "You didn't win this time. Try again!");
        assert_eq!(
            prize_message(1),
            "Congratulations! You won an amortized prize!"
        );
        assert_eq!(prize_message(2), "Congratulations! You won $500!");
        assert_eq!(prize_message(4), "Congratulations! You won $10,000!");
        assert_eq!(prize_message(5), "Congratulations! You won $200,000!");
        assert_eq!(prize_message(6), "Congratulations! You won $500,000!");
    }
}
