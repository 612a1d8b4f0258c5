/*!
 * Hint lookup table.
 *
 * Maps the length of an answer word to the number of leading letters that
 * are revealed to the learner before they type the rest of the word.
 */

/// Number of letters shown for words of this length or longer, and for any
/// length the table does not list explicitly.
pub const MAX_VISIBLE_LETTERS: u64 = 5;

/// Returns how many letters of a word with `word_length` characters are shown as a hint.
///
/// | length  | visible |
/// |---------|---------|
/// | 0, 2    | 0       |
/// | 3       | 1       |
/// | 4, 5    | 2       |
/// | 6, 7    | 3       |
/// | 8, 9    | 4       |
/// | 1, 10+  | 5       |
///
/// Length 1 is not listed and therefore reveals [`MAX_VISIBLE_LETTERS`],
/// which shows the whole word. Existing datasets depend on this value.
pub fn visible_letters(word_length: usize) -> u64 {
    match word_length {
        0 | 2 => 0,
        3 => 1,
        4 | 5 => 2,
        6 | 7 => 3,
        8 | 9 => 4,
        _ => MAX_VISIBLE_LETTERS,
    }
}

/// Convenience wrapper counting characters, not bytes.
pub fn visible_letters_for(word: &str) -> u64 {
    visible_letters(word.chars().count())
}
