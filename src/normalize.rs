/*! Text normalisation.

Reduces a raw comment to a canonical form restricted to
`{a-z, 0-9, Arabic-script letters, single spaces}`:

1. bidirectional/zero-width marks are dropped,
2. URLs, @-mentions, #-hashtags, clock times and emoji are stripped,
3. Arabic letter variants are folded to canonical forms,
4. elongated character runs are collapsed,
5. Latin text is lowercased,
6. punctuation (ASCII and Arabic) is removed,
7. anything left outside the permitted set is removed,
8. whitespace runs are collapsed.

Every step is a pure function of its input; unparseable content
degrades to an empty string, never to a panic. Running [normalize] on
its own output is a no-op.
!*/
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref URL: Regex = Regex::new(r"(?i)https?://\S+|www\.\S+").unwrap();
    static ref MENTION: Regex = Regex::new(r"@\w+").unwrap();
    static ref HASHTAG: Regex = Regex::new(r"#\w+").unwrap();
    static ref CLOCK_TIME: Regex = Regex::new(r"\b\d{1,2}:\d{2}(?::\d{2})?\b").unwrap();
    /// Pictographs plus the pieces emoji sequences are assembled from:
    /// regional-indicator flag pairs, variation selectors, the combining
    /// keycap and the zero-width joiner. Stripping every component takes
    /// ZWJ and skin-tone sequences apart along with standalone emoji.
    static ref EMOJI: Regex = Regex::new(
        r"[\p{Extended_Pictographic}\x{1F1E6}-\x{1F1FF}\x{FE00}-\x{FE0F}\x{20E3}\x{200D}]+"
    )
    .unwrap();
    static ref PUNCTUATION: Regex = Regex::new(
        r#"[!"\#$%&'()*+,\-./:;<=>?@\[\\\]^_`{|}~\x{060C}\x{061B}\x{061F}\x{0640}\x{066A}-\x{066D}\x{00AB}\x{00BB}\x{2018}\x{2019}\x{201C}\x{201D}\x{2026}\x{2013}\x{2014}]+"#
    )
    .unwrap();
    /// Complement of the permitted output alphabet.
    static ref FORBIDDEN: Regex = Regex::new(
        r"[^a-z0-9\s\x{0600}-\x{06FF}\x{0750}-\x{077F}\x{08A0}-\x{08FF}]"
    )
    .unwrap();
}

/// Arabic-script codepoint (base block plus supplements).
pub fn is_arabic_script(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}' | '\u{08A0}'..='\u{08FF}')
}

/// ASCII letter.
pub fn is_latin_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn has_arabic_letters(text: &str) -> bool {
    text.chars().any(is_arabic_script)
}

pub fn has_latin_letters(text: &str) -> bool {
    text.chars().any(is_latin_letter)
}

/// Whether any alphabetic signal is left at all.
pub fn has_letters(text: &str) -> bool {
    text.chars().any(|c| is_arabic_script(c) || is_latin_letter(c))
}

/// Directional marks become separators, invisible joiners vanish.
fn strip_marks(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '\u{200F}' | '\u{200E}' => Some(' '),
            '\u{200B}' | '\u{200C}' | '\u{200D}' => None,
            c => Some(c),
        })
        .collect()
}

/// Remove URLs, handles, hashtags, clock times and emoji.
fn strip_noise(text: &str) -> String {
    let text = URL.replace_all(text, " ");
    let text = MENTION.replace_all(&text, " ");
    let text = HASHTAG.replace_all(&text, " ");
    let text = CLOCK_TIME.replace_all(&text, " ");
    EMOJI.replace_all(&text, " ").into_owned()
}

/// Fold Arabic letter variants: hamza-bearing alef forms to bare alef,
/// alef maksura to ya, ta marbuta to ha; diacritics and tatweel out.
fn fold_arabic(text: &str) -> String {
    text.chars()
        .filter(|&c| !matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}' | '\u{0640}'))
        .map(|c| match c {
            'أ' | 'إ' | 'آ' | 'ٱ' => 'ا',
            'ى' | 'ئ' => 'ي',
            'ؤ' => 'و',
            'ة' => 'ه',
            c => c,
        })
        .collect()
}

/// Collapse runs of 3+ identical Arabic or Latin letters down to 2.
fn collapse_elongation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev = None;
    let mut run = 0usize;
    for c in text.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run > 2 && (is_arabic_script(c) || c.is_ascii_alphabetic()) {
            continue;
        }
        out.push(c);
    }
    out
}

/// Full normalisation chain. Total and deterministic: any input string
/// maps to a canonical form or to the empty string.
pub fn normalize(text: &str) -> String {
    let text = strip_marks(text);
    let text = strip_noise(&text);
    let text = fold_arabic(&text);
    let text = collapse_elongation(&text);
    let text = text.to_lowercase();
    let text = PUNCTUATION.replace_all(&text, " ");
    let text = FORBIDDEN.replace_all(&text, " ");
    text.split_whitespace().join(" ")
}

/// True when nothing alphabetic survives noise stripping: the comment
/// is emoji, URLs, mentions and digits all the way down.
pub fn is_emoji_only(text: &str) -> bool {
    !has_letters(&strip_noise(text))
}
