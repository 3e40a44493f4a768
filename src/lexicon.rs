/*! Lexicon store.

Immutable word sets and compiled morphology patterns backing dialect
classification. Everything here is built once at first use and shared
read-only across threads; nothing is mutated after construction.

Latin-script entries are stored lowercase and matched against already
lowercased tokens.
!*/
use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

/// Function words removed from kept comments, across the scripts and
/// languages that show up in Moroccan comment sections.
const STOPWORD_LIST: &[&str] = &[
    // MSA function words
    "و", "في", "على", "من", "الى", "إلى", "عن", "نعم", "هو", "هي", "هم", "ها", "هذا", "هذه",
    "ذلك", "تلك", "ان", "أن", "إن",
    // French
    "a", "b", "c", "d", "de", "des", "du", "et", "le", "la", "les", "un", "une", "est", "sont",
    "avec", "pour", "pas", "que", "qui",
    // English
    "the", "and", "to", "of", "for", "in", "is", "are", "it", "this", "that", "you", "i", "an",
    "be", "have", "has", "was", "were",
    // Darija function words
    "واش", "شنو", "هاد", "هادي", "هادو", "ديال", "لي", "اللي", "كان", "يكون", "غادي", "كاين",
    "راه", "عند", "كل", "بحال", "أو", "او", "يعني", "كيف", "باش", "حتى", "بلي", "شي", "داك",
    "ديك", "هداك", "فيه", "فيها", "معا", "عليه", "عليها", "بيه", "بيها", "ليه", "ليها", "منين",
    "كيفما", "فاش", "ملي", "غي", "غير", "تا", "حتا", "را", "يالاه", "اوا", "ايوا", "آش", "شكون",
    "كون", "الا", "إلا",
];

/// Dialect evidence: words that are Darija and not MSA.
/// Arabic-script entries first, Arabizi transliterations after.
const DARIJA_MARKER_LIST: &[&str] = &[
    "بزاف", "واش", "عافاك", "حيت", "كاين", "غادي", "خايب", "زوين", "مزيان", "مكاين", "بغيت",
    "راك", "دابا", "شوية", "هاد", "ديال", "مسكين", "واعر", "كندير", "كنشوف", "كنقول", "كيقول",
    "كيدير", "كنموت", "بغا", "كلشي", "عندو", "عندها", "ماكاين", "خاصك", "خاصني", "بصح", "صافي",
    "زعما", "عاد", "يالاه", "ماشي", "كيفاش", "هادشي", "راه", "كاع", "والو", "يقدر", "خصك",
    "خصني", "مابغيتش", "كنبغي", "عجبني", "كرهت", "ضحكت", "بكيت", "خفت", "فرحت", "زعفت",
    "عرفتي", "عرفت", "عرفنا", "عرفو", "ندير", "نديرو", "دير", "ديري", "دارت", "دار", "بقات",
    "بقا", "بقيت", "بقينا", "تلعبو", "تلعب", "كيلعب", "كيلعبو", "كيخليني", "كيخلي", "خلاني",
    "خلات", "نشوف", "نشوفو", "شفت", "شفتي", "شافو", "نقول", "نقولو", "قلت", "قلتي", "قالو",
    "نمشي", "نمشيو", "مشيت", "مشا", "مشات", "نوقف", "وقفت", "وقف", "نكتب", "كتبت", "كتب",
    "نفهم", "فهمت", "فهمتي", "فهمنا", "نسمع", "سمعت", "سمعتي", "نخدم", "خدمت", "خدام", "خدامة",
    "جبت", "جيت", "جاب", "جابت", "بدا", "بديت", "بدينا", "درت", "دارو", "درنا", "طلع", "طلعت",
    "طلعو", "دوز", "دوزت", "دوزها", "هديك", "هدا", "هدوك", "هادوك", "هادو", "ديالي", "ديالك",
    "ديالو", "ديالها", "ديالنا", "ديالكم", "ديالهم", "وصافي", "سافي", "واخا", "خلاص", "الاه",
    "بصاح", "صحيح", "يالله", "اجي", "سير", "جي", "ماعرفتش", "ماكانش", "مافهمتش", "ماعجبنيش",
    "ماقدرش", "ماعنديش", "مابقاش", "ماجاش", "ماكايناش", "مسمعتش", "مشفتش", "ماشفتش", "لايك",
    "فيديو", "واعرة", "شنو", "علاش", "فين", "خويا", "ختي", "صاحبي", "صاحبتي", "وليدات",
    "دراري", "بنات", "ولاد", "فلوس", "خدمة", "قراية", "زنقة", "حومة", "بلاد", "بلادنا",
    "مغرب", "مغربي", "مغربية", "نتا", "نتي", "حنا", "هوما", "نتوما", "تبارك", "تبارك الله",
    "الله", "لله", "الفردة", "لفردة", "لوال", "لول", "المحسادة", "لمحسادة", "محسادة",
    "المهداوي", "لمهداوي", "مهداوي", "سخونيات", "سخونية", "فرشها", "فراش", "مسمنة", "مسمن",
    "دايرة", "داير", "خاوي", "خاوية", "ميكروب", "دبز", "دابز", "كيتعايرو", "الدعاوي",
    "الزوينين",
    // Arabizi
    "nt", "nta", "nti", "ntoma", "hna", "homa", "bghit", "bghiti", "bghina", "bghitk",
    "bghitkom", "bghitkoum", "ghadi", "ghada", "ghanmchi", "ghanndir", "bzaaf", "bzaf", "bzzaf",
    "7it", "hit", "3lach", "3la", "3lih", "3liha", "wach", "wash", "wesh", "chno", "chnou",
    "chnu", "fin", "feen", "fayn", "kifach", "kifash", "daba", "dab", "db", "bgh", "bghi",
    "brina", "jib", "jibi", "jibha", "jibhom", "ahsan", "a7san", "7san", "b4ina", "had", "hada",
    "hadi", "hadchi", "bda", "bdit", "bdina", "bdaw", "ash", "ach", "ken", "kan", "kant",
    "kano", "zouiin", "zwin", "zwiin", "zouiiin", "jit", "jiti", "jaw", "jina", "bakri",
    "bekri", "bakrii", "bakriii", "akhiran", "akhiiran", "akhiiiiran", "hchouma", "7chouma",
    "hchoumaa", "banliya", "banlia", "banlya", "deratni", "dartni", "dertni", "ferassi",
    "frassi", "frasi", "fiha", "khir", "kheir", "5ir", "malha", "mal7a", "darbo", "darbou",
    "darboh", "msamna", "msemna", "msmnna", "tlah", "tla7", "dayr", "dayer", "dayra", "dayrin",
    "lferda", "ferda", "lfirda", "lowl", "lwel", "louwel", "lowal", "dwzha", "dwzhaa", "dwezha",
    "dwzhaaa", "chkon", "chkoun", "skhoniyat", "skhouniyat", "s5oniyat", "dima", "diima",
    "diiima", "maghrib", "lmaghrib", "lmghrib", "mghrb", "lagitou", "lgito", "lgitoh",
    "lmehssada", "lm7ssada", "lmhssada", "mehssada", "lmehdaoui", "mehdaoui", "mehdawi",
    "lmhdawi", "zmatkoum", "zmatkom", "zmatkum", "frechha", "frachha", "gydato", "gidato",
    "guidato", "gidatou", "dabz", "dabez", "dabzz", "dabzza", "microb", "mikrob", "mkrob",
    "khawi", "khawya", "5awi", "kandir", "katdir", "kaydir", "kanchof", "katchof", "kaychof",
    "kan3rf", "kat3rf", "kay3rf", "kanbghi", "katbghi", "kaybghi", "kanmchi", "katmchi",
    "kaymchi", "mabghitch", "mafhmtch", "ma3rftch", "makynch", "makaynch", "mchitch", "mskine",
    "mskina", "mskin", "wlad", "wld", "wlidi", "kolchi", "kolshi", "kulshi", "mzyan", "mzyana",
    "mezyan", "meziana", "zwina", "zween", "khoya", "khouya", "kho", "sahbi", "sa7bi", "s7abi",
    "dyal", "dial", "fhad", "bach", "bash", "bla", "bila", "ghi", "ghir", "gher", "ta", "taa",
    "rah", "sir", "siri", "aji", "safi", "saafi", "safii", "wa3r", "wa3ra", "waer", "waera",
    "khayb", "khayba", "5ayb", "walakin", "walakine", "machi", "mashi", "saraha", "sara7a",
    "sraha", "hamda", "hamdola", "hamdolah", "hamdoulah", "hamdoullah", "hamdoula",
    "hamdoulillah", "tbarkllah", "tbark", "tbarek", "machallah", "mashallah", "nchalah",
    "inchallah", "nshallah", "chhal", "ch7al", "shkoun", "3jbni", "ajebni", "3ajbni", "dir",
    "diri", "diro", "chouf", "chof", "smiya", "smiti", "zwaj", "khdma", "khedma", "flous",
    "flouss", "drari", "walo", "walou", "walloo", "wakha", "wakhha", "yak", "yakk", "yakkk",
    "ewa", "awa", "awaa", "ewaa", "ila", "ilaa", "ilaaa", "7ta", "hta", "7tta", "httaa",
    "bessa7", "bsa7", "bessa77", "3afak", "3afaak", "3afakk", "chokran", "choukran", "chokraan",
    "smeh", "sme7", "smehli", "sme7li", "blati", "blaati", "baraka", "barakaa", "barakaaa",
    "yalah", "yallah", "yallaah", "hania", "haniaa", "3lash", "3lachh", "finek", "finekk",
    "winek", "winekk", "chnahiya", "chnahia", "chnahiyaa", "labas", "labaas", "labass",
    "bikhir", "bi5ir", "hamdullah", "hamdollah", "7amdollah", "nchofo", "nchofou", "nchofouk",
    "tji", "tjii", "nmchi", "nmchii", "nrj3", "nrje3", "khti", "khtii", "wldi", "wldii",
    "bnti", "bntii", "rajli", "rajlii", "mrati", "mratii",
];

/// Formal-register evidence: connectors and press vocabulary that
/// almost never occur in spontaneous dialect.
const MSA_MARKER_LIST: &[&str] = &[
    "يجب", "ينبغي", "لكن", "لذلك", "بسبب", "الذي", "التي", "الذين", "اللاتي", "اللواتي",
    "حيث", "بالتالي", "كما", "وقد", "تم", "لدى", "أيضاً", "أيضا", "ايضا", "علاوة", "فضلاً",
    "فضلا", "بينما", "رغم", "مما", "إذ", "وفق", "وفقاً", "نحو", "خلال", "ضمن", "تجاه",
    "بشأن", "نظراً", "نظرا", "إثر", "اثر", "عقب", "سوى", "دون", "قبل", "بعد", "عبر", "ضد",
    "يتوجب", "يستلزم", "يتطلب", "يقتضي", "يُعد", "يعد", "تُعد", "تعد", "يُعتبر", "يعتبر",
    "تُعتبر", "تعتبر", "أكد", "أكدت", "يؤكد", "تؤكد", "أشار", "أشارت", "يشير", "تشير",
    "أوضح", "أوضحت", "يوضح", "توضح", "صرح", "صرحت", "يصرح", "تصرح", "المواطنون", "المواطنين",
    "الحكومة", "الدولة", "المجتمع", "السياسة", "الاقتصاد", "التنمية", "المؤسسات", "الإدارة",
    "القانون", "الدستور",
];

/// Religious and pious formulas matched against whole cleaned comments.
const GENERIC_PHRASE_LIST: &[&str] = &[
    "ما شاء الله",
    "ماشاء الله",
    "اللهم بارك",
    "اللهم بارك فيك",
    "الله يبارك",
    "الله يبارك فيك",
    "بارك الله فيك",
    "بارك الله",
    "الحمد لله",
    "سبحان الله",
    "لا اله الا الله",
    "لا إله إلا الله",
    "اللهم صل على محمد",
    "اللهم صل وسلم",
    "ما شاء الله تبارك الرحمن",
    "سبحان الله وبحمده",
    "سبحان الله العظيم",
    "لا حول ولا قوة الا بالله",
    "لا حول ولا قوة إلا بالله",
    "استغفر الله العظيم",
    "استغفر الله",
    "الله اكبر",
    "الله أكبر",
];

/// Tokens that make a short comment formulaic when nothing else is left.
const GENERIC_TOKEN_LIST: &[&str] = &["اللهم", "سبحان", "استغفر", "الحمد"];

/// Sentiment-bearing words, both polarities. Used to rescue short
/// comments that would otherwise be dropped for length.
const SENTIMENT_LIST: &[&str] = &[
    "خايب", "خايبة", "حامض", "يخ", "مقرف", "كارثة", "كارثه", "فاشل", "فاشلة", "تفو", "قبيح",
    "قبيحة", "نقز", "حشومة", "حشومه", "عيب", "حمار", "حمارة", "بغل", "زبل", "قمامة", "قمامه",
    "خنز", "كريه", "كريهة", "مغبن", "ساخط", "ضعيف", "ضعيفة", "صفر", "نازل", "نازلة", "خاسر",
    "خاسرة", "فاسد", "فاسدة", "مريض", "مريضة", "غبي", "غبية", "بليد", "بليدة", "جاهل",
    "جاهلة", "مكروه", "منافق", "كذاب", "كذابة", "حقير", "حقيرة", "وسخ", "وسخة", "قذر", "قذرة",
    "نجس", "ميكروب", "خاوي", "خاوية", "دابز", "tfo", "9bi7", "fashel", "fashla", "hchouma",
    "7chouma", "5ayb", "khayb", "khayba", "7mar", "7mara", "hmar", "hmara", "m9rf", "mqrf",
    "microb", "mikrob", "khawi", "khawya", "dabz", "dabez", "زوين", "زوينة", "زويين",
    "زويينة", "مزيان", "مزيانة", "مزيانين", "روعة", "رائع", "رائعة", "واعر", "واعرة",
    "واعرين", "طوب", "نضيف", "نضيفة", "بومبا", "ممتاز", "ممتازة", "عظيم", "عظيمة", "جميل",
    "جميلة", "حلو", "حلوة", "خطير", "خطيرة", "فابور", "قنبلة", "قنبله", "ديما", "فخر",
    "فخور", "شكرا", "شكراً", "تحية", "تحيه", "نجم", "نجمة", "بطل", "بطلة", "اسطورة",
    "اسطوره", "أسطورة", "حب", "حبيت", "عشق", "عشقت", "فرحان", "فرحانة", "سعيد", "سعيدة",
    "مبروك", "مبروكة", "تهنئة", "أحسن", "احسن", "خير", "top", "tooop", "toooop", "bravo",
    "bravooo", "3jbni", "3ajbni", "ajebni", "zwin", "zwina", "zween", "zweena", "zouiin",
    "zouiiin", "wa3r", "wa3ra", "waer", "waera", "mzyan", "mzyana", "mezyan", "tbarkllah",
    "tbark", "tbarek", "machallah", "mashallah", "nice", "cool", "great", "amazing", "awesome",
    "love", "loved", "best", "ahsan", "a7san", "khir", "kheir", "5ir",
];

/// Strict religious vocabulary for the formula-ratio check.
const RELIGIOUS_MARKER_LIST: &[&str] = &[
    "اللهم", "رسول", "النبي", "المسلمين", "الدعاء", "صحبه", "أجمعين", "وسلم", "نبينا", "آله",
    "استغفر", "وبحمده", "صلى الله عليه وسلم", "عليه السلام", "رضي الله عنه", "رضي الله عنها",
];

/// Self-promotion and off-topic vocabulary (mostly English/French).
const SPAM_PATTERN_LIST: &[&str] = &[
    "subscribe", "channel", "please", "follow", "check", "click", "link", "bio", "visit",
    "website", "free", "win", "gift", "money", "earn", "giveaway", "promotion", "discount",
    "offer", "bonjour", "merci", "salut", "comment", "pourquoi", "parce", "vraiment",
    "tellement", "jamais", "toujours", "aujourd", "demain", "hier",
];

lazy_static! {
    pub static ref STOPWORDS: HashSet<&'static str> = STOPWORD_LIST.iter().copied().collect();
    pub static ref DARIJA_MARKERS: HashSet<&'static str> =
        DARIJA_MARKER_LIST.iter().copied().collect();
    pub static ref MSA_MARKERS: HashSet<&'static str> = MSA_MARKER_LIST.iter().copied().collect();
    pub static ref GENERIC_PHRASES: HashSet<&'static str> =
        GENERIC_PHRASE_LIST.iter().copied().collect();
    pub static ref GENERIC_TOKENS: HashSet<&'static str> =
        GENERIC_TOKEN_LIST.iter().copied().collect();
    pub static ref SENTIMENT_WORDS: HashSet<&'static str> =
        SENTIMENT_LIST.iter().copied().collect();
    pub static ref RELIGIOUS_MARKERS: HashSet<&'static str> =
        RELIGIOUS_MARKER_LIST.iter().copied().collect();
    pub static ref SPAM_PATTERNS: HashSet<&'static str> =
        SPAM_PATTERN_LIST.iter().copied().collect();
}

lazy_static! {
    /// Darija verbal prefixes (durative, future, negated...) on an Arabic stem.
    static ref AR_VERB_PREFIX: Regex =
        Regex::new(r"^(?:كي|كا|كن|كت|غا|ما|تا|نا|يا)[\x{0600}-\x{06FF}]{2,}").unwrap();
    /// Circumfix negation ما...ش / ما...شي.
    static ref AR_NEGATION: Regex =
        Regex::new(r"^ما[\x{0600}-\x{06FF}]{2,}(?:ش|شي)$").unwrap();
    /// Object/possessive clitic endings on an Arabic stem.
    static ref AR_SUFFIX: Regex = Regex::new(
        r"^[\x{0600}-\x{06FF}]{3,}(?:ني|تي|تو|ناه|هاش|نيش|ليه|ليها|ليهم|تهم|ناها|وها|وه|هم|كم|نا)$"
    )
    .unwrap();
    /// Fused preposition+article contractions (dyal-, f-, b-...).
    static ref AR_CONTRACTION: Regex =
        Regex::new(r"^(?:دال|دل|فال|فل|بال|بل|ديال|فيه|بيه|عليه)[\x{0600}-\x{06FF}]*$").unwrap();
    /// Dialect plural endings.
    static ref AR_PLURAL: Regex =
        Regex::new(r"^[\x{0600}-\x{06FF}]{3,}(?:ين|ات|وا|يو|يين)$").unwrap();
    /// ma...ch negation, transliterated.
    static ref LATIN_NEGATION: Regex = Regex::new(r"^ma[a-z]{2,}(?:ch|sh)$").unwrap();
    /// Verbal prefixes, transliterated.
    static ref LATIN_VERB_PREFIX: Regex =
        Regex::new(r"^(?:ka|ki|kan|kat|tan|tat|gha|ghan|na|ta|ya|ba|da)[a-z]{2,}$").unwrap();
}

/// Morphological pattern categories, in matching precedence order.
/// A token is counted under the first category it matches, never twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphKind {
    VerbPrefix,
    Negation,
    Suffix,
    Contraction,
    Plural,
    LatinNegation,
    LatinVerbPrefix,
    VowelElongation,
}

impl MorphKind {
    /// Matching precedence. Arabic-script patterns are tried before
    /// transliterated ones, elongation last.
    pub const PRECEDENCE: [MorphKind; 8] = [
        MorphKind::VerbPrefix,
        MorphKind::Negation,
        MorphKind::Suffix,
        MorphKind::Contraction,
        MorphKind::Plural,
        MorphKind::LatinNegation,
        MorphKind::LatinVerbPrefix,
        MorphKind::VowelElongation,
    ];

    fn matches(&self, token: &str) -> bool {
        match self {
            MorphKind::VerbPrefix => AR_VERB_PREFIX.is_match(token),
            MorphKind::Negation => AR_NEGATION.is_match(token),
            MorphKind::Suffix => AR_SUFFIX.is_match(token),
            MorphKind::Contraction => AR_CONTRACTION.is_match(token),
            MorphKind::Plural => AR_PLURAL.is_match(token),
            MorphKind::LatinNegation => LATIN_NEGATION.is_match(token),
            MorphKind::LatinVerbPrefix => LATIN_VERB_PREFIX.is_match(token),
            MorphKind::VowelElongation => has_vowel_elongation(token),
        }
    }
}

/// First morphology category a token matches, if any.
pub fn morphology_kind(token: &str) -> Option<MorphKind> {
    MorphKind::PRECEDENCE
        .iter()
        .find(|kind| kind.matches(token))
        .copied()
}

/// ma...ch transliterated negation.
pub fn is_latin_negation(token: &str) -> bool {
    LATIN_NEGATION.is_match(token)
}

/// Transliterated verbal prefix.
pub fn is_latin_verb_prefix(token: &str) -> bool {
    LATIN_VERB_PREFIX.is_match(token)
}

/// Digits standing in for Arabic consonants in transliteration.
pub fn is_arabizi_digit(c: char) -> bool {
    matches!(c, '2' | '3' | '5' | '7' | '9')
}

/// A fully-Latin token stretched with a repeated vowel (zwiiin, tooop).
fn has_vowel_elongation(token: &str) -> bool {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_lowercase()) {
        return false;
    }
    let mut prev = '\0';
    let mut run = 0usize;
    for c in token.chars() {
        if c == prev {
            run += 1;
        } else {
            prev = c;
            run = 1;
        }
        if run >= 3 && matches!(c, 'a' | 'e' | 'i' | 'o' | 'u') {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_membership() {
        assert!(DARIJA_MARKERS.contains("بزاف"));
        assert!(DARIJA_MARKERS.contains("wach"));
        assert!(MSA_MARKERS.contains("ينبغي"));
        assert!(STOPWORDS.contains("واش"));
        assert!(SPAM_PATTERNS.contains("subscribe"));
    }

    #[test]
    fn verb_prefix_matches() {
        assert_eq!(morphology_kind("كنهضر"), Some(MorphKind::VerbPrefix));
        assert_eq!(morphology_kind("غادي"), Some(MorphKind::VerbPrefix));
        assert_eq!(morphology_kind("hello"), None);
    }

    #[test]
    fn first_pattern_wins() {
        // ماكلتش matches both the verb-prefix pattern (ما + stem) and the
        // negation circumfix; precedence counts it once, under VerbPrefix.
        assert_eq!(morphology_kind("ماكلتش"), Some(MorphKind::VerbPrefix));
    }

    #[test]
    fn latin_patterns() {
        assert_eq!(morphology_kind("mabghitch"), Some(MorphKind::LatinNegation));
        assert_eq!(morphology_kind("kanhdar"), Some(MorphKind::LatinVerbPrefix));
        assert!(is_latin_negation("mafhemtch"));
        assert!(is_latin_verb_prefix("ghanmchi"));
        assert!(!is_latin_negation("machine"));
    }

    #[test]
    fn vowel_elongation() {
        assert_eq!(morphology_kind("zwiiin"), Some(MorphKind::VowelElongation));
        // runs of two are the normalised form, not an elongation
        assert_eq!(morphology_kind("zwiin"), None);
        // digits disqualify the token
        assert_eq!(morphology_kind("zw3iii"), None);
    }

    #[test]
    fn arabizi_digits() {
        assert!(is_arabizi_digit('3'));
        assert!(!is_arabizi_digit('4'));
        assert!(!is_arabizi_digit('a'));
    }

    #[test]
    fn suffix_and_plural() {
        assert_eq!(morphology_kind("عجبني"), Some(MorphKind::Suffix));
        assert_eq!(morphology_kind("مغاربة"), None);
        assert_eq!(morphology_kind("خدامين"), Some(MorphKind::Plural));
    }
}
