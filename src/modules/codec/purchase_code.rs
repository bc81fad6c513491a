// Purchase-code codec: the shop records each line item's true unit cost as a
// short alphabetic code on the bill, using a fixed letter-for-digit
// substitution. The decoded cost is never persisted in plain form, so every
// profit figure in the system is recovered through this table.

/// The decoded unit cost recovered from a purchase code.
///
/// Two equal raw strings (modulo case and whitespace) always decode to the
/// same value; decoding is pure and side-effect free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedCost {
    /// Recovered unit purchase cost, 0 when the code is invalid
    pub value: u64,
    /// Whether the raw string was a well-formed code
    pub valid: bool,
}

impl DecodedCost {
    fn invalid() -> Self {
        Self { value: 0, valid: false }
    }
}

/// Stateless codec for the shop's cost-obfuscation cipher.
pub struct PurchaseCode;

impl PurchaseCode {
    /// Maps one letter of the cost alphabet to its decimal digit.
    ///
    /// The table is fixed: D I N E S H J A T P stand for 1..9 and 0.
    fn digit_for(letter: char) -> Option<char> {
        match letter {
            'D' => Some('1'),
            'I' => Some('2'),
            'N' => Some('3'),
            'E' => Some('4'),
            'S' => Some('5'),
            'H' => Some('6'),
            'J' => Some('7'),
            'A' => Some('8'),
            'T' => Some('9'),
            'P' => Some('0'),
            _ => None,
        }
    }

    /// Uppercases and strips all whitespace. No other normalization is
    /// applied: internal punctuation or separators make a code invalid.
    fn normalize(raw: &str) -> String {
        raw.chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Checks whether a raw string is a well-formed purchase code.
    ///
    /// Used to gate data entry: an item cannot be added to a bill when its
    /// code fails here. Empty and whitespace-only strings are invalid.
    pub fn is_valid(raw: &str) -> bool {
        let normalized = Self::normalize(raw);
        !normalized.is_empty() && normalized.chars().all(|c| Self::digit_for(c).is_some())
    }

    /// Decodes a raw purchase code into its unit cost.
    ///
    /// The first character outside the alphabet invalidates the whole code;
    /// there is no partial decode. Leading zeros in the digit string collapse,
    /// so an all-`P` code is a legitimate, valid zero cost while an invalid
    /// code reports zero with `valid: false`.
    pub fn decode(raw: &str) -> DecodedCost {
        let normalized = Self::normalize(raw);
        if normalized.is_empty() {
            return DecodedCost::invalid();
        }

        let mut digits = String::with_capacity(normalized.len());
        for letter in normalized.chars() {
            match Self::digit_for(letter) {
                Some(digit) => digits.push(digit),
                None => return DecodedCost::invalid(),
            }
        }

        let significant = digits.trim_start_matches('0');
        let significant = if significant.is_empty() { "0" } else { significant };

        // Codes beyond u64 range do not occur for real unit costs; treat
        // them as undecodable rather than wrapping.
        match significant.parse::<u64>() {
            Ok(value) => DecodedCost { value, valid: true },
            Err(_) => DecodedCost::invalid(),
        }
    }
}
