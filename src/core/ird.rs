/// New Zealand IRD number check-digit validation
///
/// IRD numbers carry a mod-11 check digit. A primary weighting is tried first;
/// when it yields 10 a secondary weighting decides.

/// Exclusive lower bound on the numeric value of an IRD number
const LOWER_BOUND: u64 = 10_000_000;

/// Exclusive upper bound on the numeric value of an IRD number
const UPPER_BOUND: u64 = 150_000_000;

const PRIMARY_WEIGHTS: [u32; 8] = [3, 2, 7, 6, 5, 4, 3, 2];
const SECONDARY_WEIGHTS: [u32; 8] = [7, 4, 3, 2, 5, 2, 7, 6];

/// Check whether `feature` is a well-formed IRD number.
///
/// Hyphens and spaces are accepted as digit group separators
/// (`49-091-850` and `49 091 850` are both fine). Anything else that is not an
/// ASCII digit makes the value invalid.
pub fn is_valid_ird(feature: &str) -> bool {
    let digits: Option<Vec<u32>> = feature
        .chars()
        .filter(|c| *c != '-' && *c != ' ')
        .map(|c| c.to_digit(10))
        .collect();

    let digits = match digits {
        Some(d) if (8..=9).contains(&d.len()) => d,
        _ => return false,
    };

    let value = digits.iter().fold(0u64, |acc, d| acc * 10 + u64::from(*d));
    if value <= LOWER_BOUND || value >= UPPER_BOUND {
        return false;
    }

    let (base, check) = digits.split_at(digits.len() - 1);
    let check = check[0];

    // Left-pad the base to eight digits
    let mut padded = [0u32; 8];
    padded[8 - base.len()..].copy_from_slice(base);

    match check_digit(&padded, &PRIMARY_WEIGHTS) {
        10 => check_digit(&padded, &SECONDARY_WEIGHTS) == check,
        expected => expected == check,
    }
}

fn check_digit(base: &[u32; 8], weights: &[u32; 8]) -> u32 {
    let total: u32 = base.iter().zip(weights).map(|(d, w)| d * w).sum();
    match total % 11 {
        0 => 0,
        remainder => 11 - remainder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_numbers() {
        assert!(is_valid_ird("49091850"));
        assert!(is_valid_ird("35901981"));
        assert!(is_valid_ird("49098576"));
        assert!(is_valid_ird("136410132"));
    }

    #[test]
    fn test_known_invalid_numbers() {
        assert!(!is_valid_ird("136410133"));
        assert!(!is_valid_ird("49091851"));
    }

    #[test]
    fn test_secondary_weighting() {
        // Primary weighting yields 10 for both bases
        assert!(is_valid_ird("49098576"));
        assert!(!is_valid_ird("49098570"));
        assert!(is_valid_ird("136410132"));
    }

    #[test]
    fn test_separators_are_ignored() {
        assert!(is_valid_ird("49-091-850"));
        assert!(is_valid_ird("136 410 132"));
    }

    #[test]
    fn test_out_of_range_and_garbage() {
        assert!(!is_valid_ird("9999999"));
        assert!(!is_valid_ird("150000000"));
        assert!(!is_valid_ird("ABC123"));
        assert!(!is_valid_ird(""));
        assert!(!is_valid_ird("4909185O"));
    }
}
