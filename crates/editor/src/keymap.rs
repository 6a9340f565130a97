//! Decodes raw keyboard events into editor navigation intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A navigation intent produced by one keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// Enter: advance to the next logical field, growing the list past the
    /// last value field.
    FocusNext,
    /// Backspace on an empty field: retreat to the previous logical field,
    /// deleting the current pair when it holds no content at all.
    FocusPrevious,
    /// ArrowDown: same field, next pair (growing at the end).
    NextPair,
    /// ArrowUp: same field, previous pair.
    PreviousPair,
}

/// Maps a key event to a navigation intent, or `None` when the editor should
/// let the keystroke fall through to ordinary text input.
///
/// `field_is_empty` reflects the text content of the input the event landed
/// in; it gates Backspace, which only navigates once there is nothing left to
/// erase. Control/alt/meta chords never navigate. ArrowLeft and ArrowRight
/// are reserved: they are matched and deliberately dropped rather than left
/// to fall through.
pub fn decode(event: KeyEvent, field_is_empty: bool) -> Option<NavIntent> {
    if event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::META | KeyModifiers::SUPER)
    {
        return None;
    }

    match event.code {
        KeyCode::Enter => Some(NavIntent::FocusNext),
        KeyCode::Backspace if field_is_empty => Some(NavIntent::FocusPrevious),
        KeyCode::Down => Some(NavIntent::NextPair),
        KeyCode::Up => Some(NavIntent::PreviousPair),
        // Reserved: matched so the inert behavior is explicit, not accidental.
        KeyCode::Left | KeyCode::Right => None,
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn enter_focuses_next() {
        assert_eq!(decode(key(KeyCode::Enter), false), Some(NavIntent::FocusNext));
    }

    #[test]
    fn backspace_navigates_only_on_empty_field() {
        assert_eq!(decode(key(KeyCode::Backspace), true), Some(NavIntent::FocusPrevious));
        assert_eq!(decode(key(KeyCode::Backspace), false), None);
    }

    #[test]
    fn arrows_map_to_pair_navigation() {
        assert_eq!(decode(key(KeyCode::Down), false), Some(NavIntent::NextPair));
        assert_eq!(decode(key(KeyCode::Up), false), Some(NavIntent::PreviousPair));
    }

    #[test]
    fn horizontal_arrows_are_reserved_no_ops() {
        assert_eq!(decode(key(KeyCode::Left), true), None);
        assert_eq!(decode(key(KeyCode::Right), true), None);
    }

    #[test]
    fn modifier_chords_never_navigate() {
        let chord = KeyEvent::new(KeyCode::Enter, KeyModifiers::CONTROL);
        assert_eq!(decode(chord, true), None);

        let chord = KeyEvent::new(KeyCode::Backspace, KeyModifiers::ALT);
        assert_eq!(decode(chord, true), None);
    }

    #[test]
    fn shift_does_not_block_navigation() {
        let shifted = KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT);
        assert_eq!(decode(shifted, false), Some(NavIntent::FocusNext));
    }

    #[test]
    fn plain_characters_fall_through() {
        assert_eq!(decode(key(KeyCode::Char('b')), false), None);
    }
}
