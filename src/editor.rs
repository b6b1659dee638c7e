// Amount entry reducer
//
// The interactive half of the pipeline: one pure transition function from
// (display text, caret) and a keystroke to the next (display text, caret).
// The UI binding layer only commits the returned state and moves the caret,
// so the same logic sits behind the terminal form and the test harness
// without change.
//
// Keystrokes must be applied in arrival order; each transition reads the
// text the previous one produced.

use crate::money::formatter::{normalize, remap_cursor, to_number};
use crate::money::verbalizer::verbalize;
use crate::money::{Amount, AmountError};

/// One text-entry event, already decoded from whatever the UI layer speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    /// A printable character; anything the formatter does not recognize is
    /// discarded by normalization
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Display text plus caret, always holding canonical amount text.
///
/// The text is the only persistent value; the numeric amount and the
/// verbalized clause are recomputed from it on demand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorState {
    text: String,
    cursor: usize,
}

impl EditorState {
    /// Empty field, nothing entered yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the editor from externally stored text, e.g. a persisted
    /// record. The text passes through the same normalization as live input
    /// so the canonical invariant holds even for external sources; an
    /// over-magnitude record is rejected rather than clipped.
    pub fn from_stored(text: &str) -> Result<Self, AmountError> {
        let canonical = normalize(text);
        to_number(&canonical)?;
        let cursor = canonical.chars().count();
        Ok(Self {
            text: canonical,
            cursor,
        })
    }

    /// Current canonical display text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position, a character index into [`text`](Self::text)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The numeric amount the field currently holds
    pub fn amount(&self) -> Amount {
        // The reducer rejects any edit that would not parse, so the stored
        // text always does
        to_number(&self.text).unwrap_or(Amount::zero())
    }

    /// The written-out clause for the current amount
    pub fn verbalized(&self) -> String {
        verbalize(self.amount())
    }

    /// Apply one keystroke and return the next state.
    ///
    /// Editing keystrokes splice the raw text, re-normalize, and remap the
    /// caret so it stays anchored to the same logical digit across
    /// regrouping. An edit that would push the amount past the magnitude
    /// bound leaves the state untouched; the field simply refuses to grow.
    pub fn apply(&self, key: Keystroke) -> Self {
        let len = self.text.chars().count();
        match key {
            Keystroke::Left => self.with_cursor(self.cursor.saturating_sub(1)),
            Keystroke::Right => self.with_cursor((self.cursor + 1).min(len)),
            Keystroke::Home => self.with_cursor(0),
            Keystroke::End => self.with_cursor(len),
            Keystroke::Char(ch) => {
                let mut raw: Vec<char> = self.text.chars().collect();
                raw.insert(self.cursor.min(len), ch);
                self.reformatted(raw, self.cursor + 1)
            }
            Keystroke::Backspace => {
                let Some(target) = self.erase_target_left() else {
                    return self.clone();
                };
                let mut raw: Vec<char> = self.text.chars().collect();
                raw.remove(target);
                self.reformatted(raw, target)
            }
            Keystroke::Delete => {
                let Some(target) = self.erase_target_right() else {
                    return self.clone();
                };
                let mut raw: Vec<char> = self.text.chars().collect();
                raw.remove(target);
                self.reformatted(raw, target)
            }
        }
    }

    fn with_cursor(&self, cursor: usize) -> Self {
        Self {
            text: self.text.clone(),
            cursor,
        }
    }

    /// Index of the character Backspace removes: the one left of the caret,
    /// skipping over a grouping dot so the user always erases a digit
    fn erase_target_left(&self) -> Option<usize> {
        let chars: Vec<char> = self.text.chars().collect();
        let mut target = self.cursor.min(chars.len()).checked_sub(1)?;
        if chars.get(target) == Some(&'.') {
            target = target.checked_sub(1)?;
        }
        Some(target)
    }

    /// Index of the character Delete removes, skipping a grouping dot to
    /// the right
    fn erase_target_right(&self) -> Option<usize> {
        let chars: Vec<char> = self.text.chars().collect();
        let mut target = self.cursor;
        if chars.get(target) == Some(&'.') {
            target += 1;
        }
        if target < chars.len() {
            Some(target)
        } else {
            None
        }
    }

    /// Normalize spliced raw text and land the caret; reject the edit if
    /// the result is over the magnitude bound
    fn reformatted(&self, raw: Vec<char>, raw_cursor: usize) -> Self {
        let raw: String = raw.into_iter().collect();
        let canonical = normalize(&raw);
        if to_number(&canonical).is_err() {
            return self.clone();
        }
        let cursor = remap_cursor(&raw, &canonical, raw_cursor);
        Self {
            text: canonical,
            cursor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(state: EditorState, input: &str) -> EditorState {
        input
            .chars()
            .fold(state, |s, ch| s.apply(Keystroke::Char(ch)))
    }

    #[test]
    fn test_typing_groups_digits() {
        let state = type_str(EditorState::new(), "1234567");
        assert_eq!(state.text(), "1.234.567");
        assert_eq!(state.cursor(), 9);
    }

    #[test]
    fn test_typing_comma_and_cents() {
        let state = type_str(EditorState::new(), "1234,5");
        assert_eq!(state.text(), "1.234,50");
        // Caret sits after the '5', before the padded zero
        assert_eq!(state.cursor(), 7);
        assert_eq!(state.amount().to_f64(), 1234.5);
    }

    #[test]
    fn test_stray_characters_ignored() {
        let state = type_str(EditorState::new(), "a1b2");
        assert_eq!(state.text(), "12");
    }

    #[test]
    fn test_insert_in_middle_keeps_anchor() {
        let mut state = type_str(EditorState::new(), "1234");
        assert_eq!(state.text(), "1.234");
        // Move caret between '2' and '3', type '9' -> 12.934
        state = state.apply(Keystroke::Left).apply(Keystroke::Left);
        state = state.apply(Keystroke::Char('9'));
        assert_eq!(state.text(), "12.934");
        // Still right after the '9'
        assert_eq!(state.cursor(), 4);
    }

    #[test]
    fn test_backspace_erases_digit_across_dot() {
        let state = type_str(EditorState::new(), "1234");
        assert_eq!(state.text(), "1.234");
        // Caret at end; backspace eats the '4'
        let state = state.apply(Keystroke::Backspace);
        assert_eq!(state.text(), "123");
        // Caret just left of the dot: the next backspace must erase the
        // '3', not bounce off the separator
        let state = type_str(EditorState::new(), "1234")
            .apply(Keystroke::Left)
            .apply(Keystroke::Left)
            .apply(Keystroke::Left)
            .apply(Keystroke::Backspace);
        assert_eq!(state.text(), "234");
    }

    #[test]
    fn test_delete_forward() {
        let state = type_str(EditorState::new(), "1234").apply(Keystroke::Home);
        let state = state.apply(Keystroke::Delete);
        assert_eq!(state.text(), "234");
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let state = EditorState::new().apply(Keystroke::Backspace);
        assert_eq!(state, EditorState::new());
    }

    #[test]
    fn test_magnitude_overflow_rejected() {
        // Twelve nines fill the field; a thirteenth digit must bounce
        let state = type_str(EditorState::new(), "999999999999");
        assert_eq!(state.text(), "999.999.999.999");
        let after = state.apply(Keystroke::Char('9'));
        assert_eq!(after, state);
    }

    #[test]
    fn test_from_stored_normalizes() {
        let state = EditorState::from_stored("1234,5").unwrap();
        assert_eq!(state.text(), "1.234,50");
        assert_eq!(state.cursor(), 8);
    }

    #[test]
    fn test_from_stored_rejects_oversized() {
        assert!(EditorState::from_stored("1000000000000").is_err());
    }

    #[test]
    fn test_cursor_always_in_bounds() {
        let keys = [
            Keystroke::Char('1'),
            Keystroke::Char('0'),
            Keystroke::Char(','),
            Keystroke::Char('x'),
            Keystroke::Backspace,
            Keystroke::Delete,
            Keystroke::Left,
            Keystroke::Right,
            Keystroke::Home,
            Keystroke::End,
        ];
        // Exhaustive-ish walk over short keystroke sequences
        let mut states = vec![EditorState::new()];
        for _ in 0..4 {
            let mut next = Vec::new();
            for state in &states {
                for &key in &keys {
                    let s = state.apply(key);
                    assert!(s.cursor() <= s.text().chars().count(), "cursor out of bounds");
                    next.push(s);
                }
            }
            states = next;
        }
    }

    #[test]
    fn test_verbalized_preview() {
        let state = type_str(EditorState::new(), "1021,05");
        assert_eq!(state.verbalized(), "Mil e vinte e um reais e cinco centavos");
    }
}
