//! Fixed vocabularies used for feature detection.
//!
//! Matching is plain case-sensitive substring containment on the joined
//! reading text. Thai has no letter case, and the English entries are
//! lower-case, so capitalised English words do not match.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Hedge,
    Assertive,
    NegConflict,
    Theta,
    Gamma,
    Alpha,
    Beta,
    Delta,
}

/// A category-tagged, immutable word list.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub category: Category,
    pub terms: &'static [&'static str],
}

impl Vocabulary {
    pub fn matches(&self, text: &str) -> bool {
        contains_any(text, self.terms)
    }
}

pub const HEDGES: &[&str] = &[
    "อาจ",
    "น่าจะ",
    "เหมือน",
    "คิดว่า",
    "คง",
    "ลอง",
    "ถ้า",
    "หรือเปล่า",
    "ไหม",
    "หรือไม่",
    "บางที",
    "ประมาณ",
    "หวังว่า",
    "เชื่อว่า",
    "maybe",
    "might",
    "perhaps",
    "seems",
    "seem",
    "sort of",
    "kind of",
    "try",
    "if",
    "whether",
    "hope",
    "believe",
];

pub const ASSERTIVES: &[&str] = &[
    "ฉันรู้",
    "รู้",
    "พร้อม",
    "ชัดเจน",
    "แน่ชัด",
    "ตั้งใจ",
    "ต้องการ",
    "ยืนยัน",
    "แน่นอน",
    "ขออนุญาต",
    "เห็นชัด",
    "ชัดแจ้ง",
    "พร้อมแล้ว",
    "รับรู้",
    "ยอมรับ",
    "ตกลง",
    "i know",
    "know",
    "ready",
    "clearly",
    "definitely",
    "certainly",
    "intend",
    "intention",
    "want",
    "confirm",
    "agree",
];

pub const NEG_CONFLICT: &[&str] = &[
    "ไม่แน่ใจ",
    "ไม่มั่นใจ",
    "ไม่ชัดเจน",
    "ไม่พร้อม",
    "ลังเล",
    "สับสน",
    "กลัว",
    "กังวล",
    "ขัดแย้ง",
    "ตีกัน",
    "ไม่แน่",
    "ไม่รู้",
    "ไม่เข้าใจ",
    "ไม่อยาก",
];

pub const THETA_TERMS: &[&str] = &[
    "นิ่ง",
    "แก่น",
    "เป็นหนึ่งเดียว",
    "วงกลม",
    "ภายใน",
    "สภาวะ",
    "ความหมาย",
    "เงียบ",
    "รู้โดยไม่พูด",
    "ไม่ต้องพูด",
    "ความจริง",
    "ชัดแจ้ง",
    "ศูนย์กลาง",
    "หนึ่งเดียว",
];

pub const GAMMA_TERMS: &[&str] = &[
    "พร้อม",
    "ยืนยัน",
    "ตกลง",
    "เริ่ม",
    "ทำเลย",
    "ขอ",
    "รับรอง",
    "ตรง",
    "พุ่ง",
    "รู้ทันที",
    "เดี๋ยวนี้",
    "รับรู้",
    "ชัดเจน",
    "ประกาศ",
];

pub const ALPHA_TERMS: &[&str] = &["สงบ", "เบา", "สบาย", "นิ่งๆ", "ช้า", "ผ่อน"];

pub const BETA_TERMS: &[&str] = &[
    "เพราะ",
    "ดังนั้น",
    "เหตุผล",
    "วิเคราะห์",
    "ตรรกะ",
    "โครงสร้าง",
    "ขั้นตอน",
    "ข้อเท็จจริง",
];

pub const DELTA_TERMS: &[&str] = &[
    "พัก",
    "ล้า",
    "เหนื่อย",
    "เจ็บ",
    "ช้า",
    "ฟื้น",
    "หลับ",
    "หยุดพัก",
];

/// Metaphor/abstraction markers that add a small theta bonus. Deliberately a
/// separate, smaller list than [`THETA_TERMS`].
pub const ESSENCE_TERMS: &[&str] = &["วงกลม", "แก่น", "สภาวะ", "หนึ่งเดียว", "เงียบ"];

/// "No need to speak"; lowers discordance on its own.
pub const UNSPOKEN_PHRASE: &str = "ไม่ต้องพูด";

pub const VOCABULARIES: [Vocabulary; 8] = [
    Vocabulary { category: Category::Hedge, terms: HEDGES },
    Vocabulary { category: Category::Assertive, terms: ASSERTIVES },
    Vocabulary { category: Category::NegConflict, terms: NEG_CONFLICT },
    Vocabulary { category: Category::Theta, terms: THETA_TERMS },
    Vocabulary { category: Category::Gamma, terms: GAMMA_TERMS },
    Vocabulary { category: Category::Alpha, terms: ALPHA_TERMS },
    Vocabulary { category: Category::Beta, terms: BETA_TERMS },
    Vocabulary { category: Category::Delta, terms: DELTA_TERMS },
];

pub fn vocabulary(category: Category) -> &'static Vocabulary {
    match category {
        Category::Hedge => &VOCABULARIES[0],
        Category::Assertive => &VOCABULARIES[1],
        Category::NegConflict => &VOCABULARIES[2],
        Category::Theta => &VOCABULARIES[3],
        Category::Gamma => &VOCABULARIES[4],
        Category::Alpha => &VOCABULARIES[5],
        Category::Beta => &VOCABULARIES[6],
        Category::Delta => &VOCABULARIES[7],
    }
}

/// True when `text` contains any of `terms` as a substring.
pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}
