//! Arabic legal ordinals as they appear in article headings
//! ("المادة الحادية والعشرون"), plus the looser reverse table used when a
//! citation spells its article number out in words.

const UNITS: [&str; 10] = [
    "",
    "الأولى",
    "الثانية",
    "الثالثة",
    "الرابعة",
    "الخامسة",
    "السادسة",
    "السابعة",
    "الثامنة",
    "التاسعة",
];

const TEENS: [&str; 10] = [
    "العاشرة",
    "الحادية عشرة",
    "الثانية عشرة",
    "الثالثة عشرة",
    "الرابعة عشرة",
    "الخامسة عشرة",
    "السادسة عشرة",
    "السابعة عشرة",
    "الثامنة عشرة",
    "التاسعة عشرة",
];

const TENS: [&str; 10] = [
    "",
    "العاشرة",
    "العشرون",
    "الثلاثون",
    "الأربعون",
    "الخمسون",
    "الستون",
    "السبعون",
    "الثمانون",
    "التسعون",
];

const HUNDREDS: [&str; 10] = [
    "",
    "المائة",
    "المائتان",
    "الثلاثمائة",
    "الأربعمائة",
    "الخمسمائة",
    "الستمائة",
    "السبعمائة",
    "الثمانمائة",
    "التسعمائة",
];

pub(super) fn is_tens_word(word: &str) -> bool {
    TENS[2..].contains(&word)
}

/// Unit ordinal used inside a compound with a tens word (21 → "الحادية والعشرون").
const COMPOUND_ONE: &str = "الحادية";

/// Converts an article number to the feminine ordinal used in legal headings.
///
/// Numbers of 1000 and above have no ordinal form here and come back as plain
/// digits. Zero is outside the domain and is returned the same way.
pub fn to_ordinal(number: u32) -> String {
    match number {
        1..=9 => UNITS[number as usize].to_string(),
        10..=19 => TEENS[(number - 10) as usize].to_string(),
        20..=99 => {
            let unit = (number % 10) as usize;
            let ten = (number / 10) as usize;
            if unit == 0 {
                return TENS[ten].to_string();
            }
            let unit_word = if unit == 1 { COMPOUND_ONE } else { UNITS[unit] };
            format!("{unit_word} و{}", TENS[ten])
        }
        100 => HUNDREDS[1].to_string(),
        101..=199 => format!("{} بعد المائة", to_ordinal(number - 100)),
        200 => HUNDREDS[2].to_string(),
        201..=299 => format!("{} بعد المائتين", to_ordinal(number - 200)),
        300..=999 => {
            let hundreds = HUNDREDS[(number / 100) as usize];
            let remainder = number % 100;
            if remainder == 0 {
                hundreds.to_string()
            } else {
                format!("{} بعد {hundreds}", to_ordinal(remainder))
            }
        }
        _ => number.to_string(),
    }
}

const WORD_NUMBERS: &[(&str, u32)] = &[
    ("الأولى", 1),
    ("الاولى", 1),
    ("أولى", 1),
    ("اولى", 1),
    ("الأول", 1),
    ("الاول", 1),
    ("واحد", 1),
    ("الثانية", 2),
    ("الثانيه", 2),
    ("ثانية", 2),
    ("ثانيه", 2),
    ("الثاني", 2),
    ("اثنان", 2),
    ("اثنين", 2),
    ("الثالثة", 3),
    ("الثالثه", 3),
    ("ثالثة", 3),
    ("ثالثه", 3),
    ("الثالث", 3),
    ("ثلاثة", 3),
    ("ثلاثه", 3),
    ("الرابعة", 4),
    ("الرابعه", 4),
    ("رابعة", 4),
    ("رابعه", 4),
    ("الرابع", 4),
    ("أربعة", 4),
    ("اربعة", 4),
    ("اربعه", 4),
    ("الخامسة", 5),
    ("الخامسه", 5),
    ("خامسة", 5),
    ("خامسه", 5),
    ("الخامس", 5),
    ("خمسة", 5),
    ("خمسه", 5),
    ("السادسة", 6),
    ("السادسه", 6),
    ("سادسة", 6),
    ("سادسه", 6),
    ("السادس", 6),
    ("ستة", 6),
    ("سته", 6),
    ("السابعة", 7),
    ("السابعه", 7),
    ("سابعة", 7),
    ("سابعه", 7),
    ("السابع", 7),
    ("سبعة", 7),
    ("سبعه", 7),
    ("الثامنة", 8),
    ("الثامنه", 8),
    ("ثامنة", 8),
    ("ثامنه", 8),
    ("الثامن", 8),
    ("ثمانية", 8),
    ("ثمانيه", 8),
    ("التاسعة", 9),
    ("التاسعه", 9),
    ("تاسعة", 9),
    ("تاسعه", 9),
    ("التاسع", 9),
    ("تسعة", 9),
    ("تسعه", 9),
    ("العاشرة", 10),
    ("العاشره", 10),
    ("عاشرة", 10),
    ("عاشره", 10),
    ("العاشر", 10),
    ("عشرة", 10),
    ("عشره", 10),
];

/// Looks up a spelled-out article number (1 to 10).
///
/// The token is reduced to Arabic letters first, so diacritics, tatweel and
/// trailing punctuation never block a match.
pub fn word_to_number(word: &str) -> Option<u32> {
    let cleaned = arabic_letters_only(word);
    if cleaned.is_empty() {
        return None;
    }

    WORD_NUMBERS
        .iter()
        .find(|(candidate, _)| *candidate == cleaned)
        .map(|(_, number)| *number)
}

fn arabic_letters_only(word: &str) -> String {
    word.chars()
        .filter(|ch| matches!(ch, '\u{0621}'..='\u{063A}' | '\u{0641}'..='\u{064A}'))
        .collect()
}

/// Maps an Arabic-Indic digit (`٠`..`٩`) or ASCII digit to its value.
pub fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(ch as u32 - '0' as u32),
        '\u{0660}'..='\u{0669}' => Some(ch as u32 - '\u{0660}' as u32),
        _ => None,
    }
}

/// Writes a number with Arabic-Indic digits, the way some scanned codes
/// number their articles.
pub fn to_arabic_indic_digits(number: u32) -> String {
    number
        .to_string()
        .chars()
        .filter_map(|ch| ch.to_digit(10))
        .filter_map(|digit| char::from_u32('\u{0660}' as u32 + digit))
        .collect()
}
