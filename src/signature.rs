// Filename signatures.
//
// A signature is the set of words left in a filename after stripping the
// extension, bracketed tags, punctuation, short tokens, and stop words.
// Two files naming the same song tend to end up with overlapping
// signatures even when their naming styles differ.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

/// Regex to match parenthesized or bracketed tags like (Official Video) or [320 kbps]
static RE_BRACKET_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)|\[.*?\]").expect("Invalid bracket tag regex"));

/// Regex to match characters that never belong to a song word.
/// Turkish letters are kept alongside ASCII letters and digits.
static RE_NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-ZçğıiöşüÇĞIİÖŞÜ0-9 ]").expect("Invalid non-word regex"));

/// Words too generic to identify a song, dropped from every signature
pub const STOP_WORDS: &[&str] = &[
    "feat",
    "featuring",
    "official",
    "video",
    "audio",
    "lyrics",
    "live",
    "konser",
    "remix",
    "acoustic",
    "version",
    "prod",
    "mix",
    "master",
    "cover",
    "karaoke",
    "edit",
    "club",
    "extended",
    "original",
    "full",
    "single",
    "explicit",
    "clean",
    "radio",
    "remastered",
    "remaster",
    "demo",
    "session",
    "performance",
    "clip",
    "kbps",
];

/// Minimum length, in characters, for a word to enter a signature
pub const MIN_WORD_LEN: usize = 3;

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Reduce a filename to its signature words.
pub fn normalize(filename: &str) -> HashSet<String> {
    let stem = Path::new(filename)
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let untagged = RE_BRACKET_TAGS.replace_all(&stem, "");
    let spaced = RE_NON_WORD.replace_all(&untagged, " ");
    spaced
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() >= MIN_WORD_LEN && !STOP_WORD_SET.contains(*word))
        .map(str::to_owned)
        .collect()
}
