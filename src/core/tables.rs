// File: src/core/tables.rs
//! Static symbol tables. Every table is an ordered slice; order is
//! significant for the contraction rules and irrelevant everywhere else.

use crate::core::symbols::SymbolEntry;

/// International Morse code for letters, digits and the word space.
pub static MORSE: &[SymbolEntry] = &[
    ('a', ".-"), ('b', "-..."), ('c', "-.-."), ('d', "-.."), ('e', "."), ('f', "..-."),
    ('g', "--."), ('h', "...."), ('i', ".."), ('j', ".---"), ('k', "-.-"), ('l', ".-.."),
    ('m', "--"), ('n', "-."), ('o', "---"), ('p', ".--."), ('q', "--.-"), ('r', ".-."),
    ('s', "..."), ('t', "-"), ('u', "..-"), ('v', "...-"), ('w', ".--"), ('x', "-..-"),
    ('y', "-.--"), ('z', "--.."), ('0', "-----"), ('1', ".----"), ('2', "..---"), ('3', "...--"),
    ('4', "....-"), ('5', "....."), ('6', "-...."), ('7', "--..."), ('8', "---.."), ('9', "----."),
    (' ', " "),
];

/// Grade-1 Braille: one cell per letter or digit, no indicators.
pub static BRAILLE1: &[SymbolEntry] = &[
    ('a', "⠁"), ('b', "⠃"), ('c', "⠉"), ('d', "⠙"), ('e', "⠑"), ('f', "⠋"), ('g', "⠛"),
    ('h', "⠓"), ('i', "⠊"), ('j', "⠚"), ('k', "⠅"), ('l', "⠇"), ('m', "⠍"), ('n', "⠝"),
    ('o', "⠕"), ('p', "⠏"), ('q', "⠟"), ('r', "⠗"), ('s', "⠎"), ('t', "⠞"), ('u', "⠥"),
    ('v', "⠧"), ('w', "⠺"), ('x', "⠭"), ('y', "⠽"), ('z', "⠵"), ('0', "⠴"), ('1', "⠂"),
    ('2', "⠆"), ('3', "⠒"), ('4', "⠲"), ('5', "⠢"), ('6', "⠖"), ('7', "⠶"), ('8', "⠦"),
    ('9', "⠔"), (' ', " "),
];

pub static BRAILLE_LETTERS: &[SymbolEntry] = &[
    ('a', "⠁"), ('b', "⠃"), ('c', "⠉"), ('d', "⠙"), ('e', "⠑"), ('f', "⠋"), ('g', "⠛"),
    ('h', "⠓"), ('i', "⠊"), ('j', "⠚"), ('k', "⠅"), ('l', "⠇"), ('m', "⠍"), ('n', "⠝"),
    ('o', "⠕"), ('p', "⠏"), ('q', "⠟"), ('r', "⠗"), ('s', "⠎"), ('t', "⠞"), ('u', "⠥"),
    ('v', "⠧"), ('w', "⠺"), ('x', "⠭"), ('y', "⠽"), ('z', "⠵"),
];

pub static BRAILLE_PUNCTUATION: &[SymbolEntry] = &[
    ('.', "⠲"), (',', "⠂"), (';', "⠆"), (':', "⠒"), ('?', "⠦"), ('!', "⠖"),
    ('"', "⠶"), ('(', "⠐⠣"), (')', "⠐⠜"), ('[', "⠶⠣"), (']', "⠶⠜"), ('/', "⠸⠌"),
    ('\\', "⠸⠡"), ('-', "⠤"), ('_', "⠨⠤"), ('@', "⠈⠁"), ('#', "⠨⠼"), ('$', "⠈⠎"),
    ('%', "⠨⠴"), ('&', "⠈⠯"), ('*', "⠐⠔"), ('+', "⠐⠖"), ('=', "⠐⠶"), ('<', "⠈⠣"),
    ('>', "⠈⠜"), ('^', "⠈⠢"), ('~', "⠈⠔"), ('`', "⠈⠑"), ('|', "⠸⠳"), ('{', "⠸⠣"),
    ('}', "⠸⠜"),
];

/// Digit cells, only meaningful after the numeric indicator.
pub static BRAILLE_DIGITS: &[SymbolEntry] = &[
    ('0', "⠴"), ('1', "⠂"), ('2', "⠆"), ('3', "⠒"), ('4', "⠲"),
    ('5', "⠢"), ('6', "⠖"), ('7', "⠶"), ('8', "⠦"), ('9', "⠔"),
];

/// Alphabetic word signs: a whole short word written as its letter's cell.
pub static WORD_SIGNS: &[(&str, &str)] = &[
    ("but", "⠃"), ("can", "⠉"), ("do", "⠙"), ("every", "⠑"), ("from", "⠋"),
    ("go", "⠛"), ("have", "⠓"), ("just", "⠚"), ("knowledge", "⠅"), ("like", "⠇"),
    ("more", "⠍"), ("not", "⠝"), ("people", "⠏"), ("quite", "⠟"), ("rather", "⠗"),
    ("so", "⠎"), ("that", "⠞"), ("us", "⠥"), ("very", "⠧"), ("will", "⠺"),
    ("it", "⠭"), ("you", "⠽"), ("as", "⠵"),
];

pub static SHORT_FORMS: &[(&str, &str)] = &[
    ("about", "⠁⠃"), ("above", "⠁⠃⠧"), ("according", "⠁⠉"), ("across", "⠁⠉⠗"),
    ("after", "⠁⠋"), ("afternoon", "⠁⠋⠝"), ("afterward", "⠁⠋⠺"), ("again", "⠁⠛"),
    ("against", "⠁⠛⠌"), ("almost", "⠁⠇⠍"), ("already", "⠁⠇⠗"), ("also", "⠁⠇"),
    ("although", "⠁⠇⠹"), ("altogether", "⠁⠇⠞"), ("always", "⠁⠇⠺"), ("before", "⠃⠋"),
    ("behind", "⠃⠓"), ("below", "⠃⠇"), ("beneath", "⠃⠝"), ("beside", "⠃⠎"),
    ("between", "⠃⠞"), ("beyond", "⠃⠽"), ("blind", "⠃⠇"), ("braille", "⠃⠗⠇"),
    ("children", "⠡⠝"), ("conceive", "⠒⠉⠧"), ("conceiving", "⠒⠉⠧⠛"), ("could", "⠉⠙"),
    ("deceive", "⠙⠉⠧"), ("deceiving", "⠙⠉⠧⠛"), ("declare", "⠙⠉⠇"), ("declaring", "⠙⠉⠇⠛"),
    ("either", "⠑⠊"), ("friend", "⠋⠗"), ("first", "⠋⠌"), ("good", "⠛⠙"),
    ("great", "⠛⠗⠞"), ("herself", "⠓⠻⠋"), ("himself", "⠓⠍⠋"), ("immediate", "⠊⠍⠍"),
    ("little", "⠇⠇"), ("letter", "⠇⠗"), ("myself", "⠍⠽⠋"), ("much", "⠍⠡"),
    ("must", "⠍⠌"), ("necessary", "⠝⠑⠉"), ("neither", "⠝⠑⠊"), ("paid", "⠏⠙"),
    ("perceive", "⠏⠻⠉"), ("perhaps", "⠏⠻⠓"), ("quick", "⠟⠅"), ("receive", "⠗⠉⠧"),
    ("receiving", "⠗⠉⠧⠛"), ("rejoice", "⠗⠚⠉"), ("rejoicing", "⠗⠚⠉⠛"), ("said", "⠎⠙"),
    ("should", "⠩⠙"), ("such", "⠎⠡"), ("themselves", "⠮⠍⠎"), ("together", "⠞⠛⠗"),
    ("tomorrow", "⠞⠍"), ("today", "⠞⠙"), ("tonight", "⠞⠝"), ("would", "⠺⠙"),
    ("your", "⠽⠗"), ("yourself", "⠽⠗⠋"), ("yourselves", "⠽⠗⠧⠎"),
];

/// Initial-letter contractions, grouped by prefix cell: dot 5, dots 45, dots 456.
pub static INITIAL_LETTER_CONTRACTIONS: &[(&str, &str)] = &[
    ("day", "⠐⠙"), ("ever", "⠐⠑"), ("father", "⠐⠋"), ("here", "⠐⠓"), ("know", "⠐⠅"),
    ("lord", "⠐⠇"), ("mother", "⠐⠍"), ("name", "⠐⠝"), ("one", "⠐⠕"), ("part", "⠐⠏"),
    ("question", "⠐⠟"), ("right", "⠐⠗"), ("some", "⠐⠎"), ("time", "⠐⠞"), ("under", "⠐⠥"),
    ("work", "⠐⠺"), ("young", "⠐⠽"), ("upon", "⠨⠥"), ("these", "⠨⠮"), ("those", "⠨⠹"),
    ("whose", "⠨⠱"), ("where", "⠨⠺"), ("through", "⠨⠹"), ("character", "⠸⠉"), ("ought", "⠸⠕"),
    ("there", "⠸⠮"), ("were", "⠸⠺"),
];
