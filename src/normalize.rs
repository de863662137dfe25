use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Map accented characters to their unaccented base letters.
///
/// Canonical decomposition (NFD) followed by dropping combining marks,
/// so `é` becomes `e` and `ñ` becomes `n`. Characters with no
/// decomposition pass through unchanged; the function is total over any
/// input and never fails.
///
/// Folding is one-directional on purpose: the target sentence is folded
/// once at session start and user input is compared as typed. Folding
/// keystrokes as well would change observable behavior.
pub fn fold_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
