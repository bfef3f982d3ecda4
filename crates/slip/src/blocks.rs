//! Block formatting for human-readable numbers.
//!
//! `000000000000000` reads better as `00000 00000 00000`. Formatting is for
//! display only; check digits are always computed over the unformatted digits.

/// Block size used for reference numbers.
pub const DEFAULT_BLOCK_SIZE: usize = 5;

/// Splits `text` into runs of `block_size` characters joined by one space.
///
/// With `align_from_right` the short remainder block comes first
/// (`123456789` → `1234 56789`), otherwise it comes last. A block size of zero
/// returns the text unchanged.
pub fn group_into_blocks(text: &str, block_size: usize, align_from_right: bool) -> String {
    let text = text.trim();
    if block_size == 0 || text.is_empty() {
        return text.to_string();
    }

    let mut chars: Vec<char> = text.chars().collect();
    if align_from_right {
        chars.reverse();
    }

    let mut out: Vec<char> = Vec::with_capacity(chars.len() + chars.len() / block_size);
    for (i, chunk) in chars.chunks(block_size).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.extend_from_slice(chunk);
    }

    if align_from_right {
        out.reverse();
    }
    out.into_iter().collect()
}

/// [`group_into_blocks`] with blocks of five aligned from the right.
pub fn group_into_default_blocks(text: &str) -> String {
    group_into_blocks(text, DEFAULT_BLOCK_SIZE, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_blocks() {
        assert_eq!(group_into_blocks("000000000000000", 5, true), "00000 00000 00000");
        assert_eq!(group_into_blocks("000000000000000", 5, false), "00000 00000 00000");
    }

    #[test]
    fn remainder_is_on_the_left_when_aligned_from_right() {
        assert_eq!(group_into_blocks("123456789", 5, true), "1234 56789");
        assert_eq!(group_into_default_blocks("123456789"), "1234 56789");
    }

    #[test]
    fn remainder_is_on_the_right_when_aligned_from_left() {
        assert_eq!(group_into_blocks("123456789", 5, false), "12345 6789");
        assert_eq!(
            group_into_blocks("CH3808888123456789012", 4, false),
            "CH38 0888 8123 4567 8901 2"
        );
    }

    #[test]
    fn short_and_degenerate_input() {
        assert_eq!(group_into_blocks("123", 5, true), "123");
        assert_eq!(group_into_blocks("", 5, true), "");
        assert_eq!(group_into_blocks("12345", 0, true), "12345");
        assert_eq!(group_into_blocks(" 12345 ", 5, true), "12345");
    }

    #[test]
    fn keeps_the_character_sequence() {
        let grouped = group_into_blocks("120000000000234478943216899", 5, true);
        assert_eq!(grouped, "12 00000 00000 23447 89432 16899");
        assert_eq!(grouped.replace(' ', ""), "120000000000234478943216899");
    }
}
