//! Letter substitution model
//!
//! Maps a single character to the ordered list of strings it may become in a
//! leetspeak candidate: its lowercase form, its uppercase form (letters only),
//! then a digit and a symbol look-alike where the table defines one.

/// Fixed substitution tables keyed by lowercase letter
#[derive(Debug, Clone, Copy)]
pub struct LeetTable {
    digits: &'static [(char, char)],
    symbols: &'static [(char, char)],
}

/// The substitution table used by every generator
pub const LEET_TABLE: LeetTable = LeetTable {
    digits: &[
        ('a', '4'),
        ('e', '3'),
        ('g', '9'),
        ('i', '1'),
        ('l', '1'),
        ('o', '0'),
        ('s', '5'),
        ('t', '7'),
    ],
    symbols: &[
        ('a', '@'),
        ('e', '€'),
        ('i', '!'),
        ('s', '$'),
        ('t', '+'),
    ],
};

impl LeetTable {
    /// Digit look-alike for a character, matched on its lowercase form
    pub fn digit_of(&self, c: char) -> Option<char> {
        lookup(self.digits, c)
    }

    /// Symbol look-alike for a character, matched on its lowercase form
    pub fn symbol_of(&self, c: char) -> Option<char> {
        lookup(self.symbols, c)
    }

    /// All variants of a character in emission order
    pub fn variants_of(&self, c: char) -> Vec<String> {
        let mut variants = Vec::with_capacity(4);
        variants.push(single_char(c.to_lowercase(), c).to_string());

        if c.is_alphabetic() {
            variants.push(single_char(c.to_uppercase(), c).to_string());
        }
        if let Some(digit) = self.digit_of(c) {
            variants.push(digit.to_string());
        }
        if let Some(symbol) = self.symbol_of(c) {
            variants.push(symbol.to_string());
        }

        variants
    }

    /// Number of variants of a character, without building them
    #[inline]
    pub fn variant_count(&self, c: char) -> usize {
        let base = if c.is_alphabetic() { 2 } else { 1 };
        base + usize::from(self.digit_of(c).is_some()) + usize::from(self.symbol_of(c).is_some())
    }
}

/// The mapped character when a case mapping yields exactly one, else `None`
fn only_char(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => Some(single),
        _ => None,
    }
}

/// Case-mapped form of `c`, kept as `c` itself when the mapping would
/// expand to several characters (`ß` uppercases to `SS`).
fn single_char(mapped: impl Iterator<Item = char>, c: char) -> char {
    only_char(mapped).unwrap_or(c)
}

/// Single-character lowercase key; characters that lowercase to several
/// characters never match the table.
fn table_key(c: char) -> Option<char> {
    only_char(c.to_lowercase())
}

fn lookup(table: &[(char, char)], c: char) -> Option<char> {
    let key = table_key(c)?;
    table
        .iter()
        .find(|(letter, _)| *letter == key)
        .map(|(_, replacement)| *replacement)
}

/// Variants of a character using the default table
pub fn letter_variants(c: char) -> Vec<String> {
    LEET_TABLE.variants_of(c)
}

/// Variant count of a character using the default table
#[inline]
pub fn variant_count(c: char) -> usize {
    LEET_TABLE.variant_count(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_of_a() {
        assert_eq!(letter_variants('a'), vec!["a", "A", "4", "@"]);
    }

    #[test]
    fn test_variants_of_plain_letter() {
        assert_eq!(letter_variants('b'), vec!["b", "B"]);
        assert_eq!(letter_variants('l'), vec!["l", "L", "1"]);
    }

    #[test]
    fn test_uppercase_input_starts_lowercase() {
        assert_eq!(letter_variants('E'), vec!["e", "E", "3", "€"]);
        assert_eq!(letter_variants('T'), vec!["t", "T", "7", "+"]);
    }

    #[test]
    fn test_non_alphabetic() {
        assert_eq!(letter_variants('1'), vec!["1"]);
        assert_eq!(letter_variants('-'), vec!["-"]);
        assert_eq!(variant_count(' '), 1);
    }

    #[test]
    fn test_count_matches_generated() {
        let sample = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#-_ éÉßñ€";
        for c in sample.chars() {
            assert_eq!(
                letter_variants(c).len(),
                variant_count(c),
                "variant count mismatch for {:?}",
                c
            );
        }
    }

    #[test]
    fn test_expanding_case_mappings_keep_one_char() {
        assert_eq!(letter_variants('ß'), vec!["ß", "ß"]);
        assert_eq!(letter_variants('İ'), vec!["İ", "İ"]);

        for c in "ßİŉǰ".chars() {
            assert!(letter_variants(c).iter().all(|v| v.chars().count() == 1), "char {:?}", c);
        }
    }

    #[test]
    fn test_table_lookup() {
        assert_eq!(LEET_TABLE.digit_of('o'), Some('0'));
        assert_eq!(LEET_TABLE.digit_of('O'), Some('0'));
        assert_eq!(LEET_TABLE.symbol_of('o'), None);
        assert_eq!(LEET_TABLE.symbol_of('S'), Some('$'));
    }
}
