//! Text helpers shared by grammatical functions.

use unicode_segmentation::UnicodeSegmentation;

/// Uppercase the first grapheme cluster of `s`, leaving the rest unchanged.
///
/// Idempotent: an already-capitalized string comes back identical. Built-in
/// grammatical functions apply this only when an explicit `CAPITALIZED`
/// option resolves to `true`.
///
/// # Example
///
/// ```
/// use locfmt::capitalize;
///
/// assert_eq!(capitalize("ogre"), "Ogre");
/// assert_eq!(capitalize("Ogre"), "Ogre");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut graphemes = s.graphemes(true);
    match graphemes.next() {
        Some(first) => first.to_uppercase() + graphemes.as_str(),
        None => String::new(),
    }
}
