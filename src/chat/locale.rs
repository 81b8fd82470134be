//! Display-language selection and localized UI text.
//!
//! These tables are data, carried over from the product's knowledge base;
//! the only logic here is language selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Active display language.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Thai.
    Th,

    /// English.
    En,
}

impl Language {
    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Language::Th => Language::En,
            Language::En => Language::Th,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Th => f.write_str("th"),
            Language::En => f.write_str("en"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "th" | "thai" => Ok(Language::Th),
            "en" | "english" => Ok(Language::En),
            other => Err(format!("unknown language: {other} (expected th or en)")),
        }
    }
}

/// Localized UI strings.
pub struct UiText {
    /// Composer placeholder / input hint.
    pub placeholder: &'static str,
    /// Generic failure notice appended to the transcript on a remote error.
    pub error_msg: &'static str,
    /// Shown while a request is in flight.
    pub thinking: &'static str,
    /// Transient copy acknowledgment.
    pub copied: &'static str,
    /// Accuracy disclaimer under the composer.
    pub disclaimer: &'static str,
    /// Configuration-prompt description for the API key.
    pub api_key_desc: &'static str,
    /// Menu heading.
    pub menu: &'static str,
    /// Suggested-topics heading.
    pub menu_recommend: &'static str,
}

const UI_TEXT_TH: UiText = UiText {
    placeholder: "พิมพ์คำถาม หรือแนบไฟล์ (PDF, รูปภาพ, CSV)...",
    error_msg: "เกิดข้อผิดพลาดในการเชื่อมต่อ กรุณาตรวจสอบอินเทอร์เน็ตหรือ API Key ของคุณ",
    thinking: "ดร.นาน่า กำลังตรวจสอบข้อมูล...",
    copied: "คัดลอกแล้ว",
    disclaimer: "ดร.นาน่าอาจมีข้อผิดพลาดได้ โปรดตรวจสอบความถูกต้องกับคู่มือ APA 7th Edition อีกครั้ง",
    api_key_desc: "เพื่อเริ่มปรึกษากับ ดร.นาน่า กรุณาระบุ Google AI Studio API Key ของคุณ (คีย์จะถูกบันทึกในเครื่องของคุณเท่านั้น)",
    menu: "เมนูหลัก",
    menu_recommend: "เมนูแนะนำ",
};

const UI_TEXT_EN: UiText = UiText {
    placeholder: "Ask a question or attach files (PDF, Image, CSV)...",
    error_msg: "Connection error. Please check your internet or API Key.",
    thinking: "Dr. Nana is thinking...",
    copied: "Copied",
    disclaimer: "Dr. Nana can make mistakes. Please verify important information with the APA 7th Edition manual.",
    api_key_desc: "To start consulting with Dr. Nana, please provide your Google AI Studio API Key (stored locally on this machine).",
    menu: "Menu",
    menu_recommend: "Suggested Topics",
};

/// UI strings for the given language.
pub fn ui_text(language: Language) -> &'static UiText {
    match language {
        Language::Th => &UI_TEXT_TH,
        Language::En => &UI_TEXT_EN,
    }
}

const WELCOME_TH: &str = "### สวัสดีค่ะ! ดิฉัน **ดร.นาน่า** (Dr. Nana) 👩‍🏫
ผู้เชี่ยวชาญด้าน **APA 7th Edition** ยินดีให้คำปรึกษาค่ะ

สามารถสอบถามเรื่อง:
*   📚 **การเขียนอ้างอิง** (References)
*   📝 **การอ้างอิงในเนื้อหา** (In-text citation)
*   📊 **การรายงานผลสถิติ** (Statistical Reporting)
*   📄 **การจัดรูปแบบเอกสาร** (Formatting)

*เลือกหัวข้อจากเมนู หรือพิมพ์คำถามได้เลยค่ะ* 👇";

const WELCOME_EN: &str = "### Hello! I am **Dr. Nana** 👩‍🏫
An **APA 7th Edition** Expert, here to assist you.

I can help you with:
*   📚 **Reference List Entries**
*   📝 **In-text Citations**
*   📊 **Statistical Reporting**
*   📄 **Paper Formatting**

*Select a topic from the menu or type your question below* 👇";

/// The greeting text shown before any user interaction.
pub fn welcome_message(language: Language) -> &'static str {
    match language {
        Language::Th => WELCOME_TH,
        Language::En => WELCOME_EN,
    }
}

const SUGGESTIONS_TH: &[&str] = &[
    "อ้างอิงเว็บไซต์ที่ไม่มีชื่อผู้แต่งยังไง?",
    "รูปแบบการเขียนบรรณานุกรมหนังสือแปล",
    "ความแตกต่างระหว่างการอ้างอิงในเนื้อหาและท้ายเล่ม",
    "การตั้งค่าหน้ากระดาษตามหลัก APA 7",
    "อ้างอิงคลิป YouTube ต้องใส่อะไรบ้าง?",
    "การรายงานผล t-test ในเนื้อหาทำอย่างไร?",
];

const SUGGESTIONS_EN: &[&str] = &[
    "How to cite a website with no author?",
    "Reference format for translated books",
    "Difference between in-text citation and reference list",
    "Paper formatting guidelines in APA 7",
    "How to cite a YouTube video?",
    "How to report t-test results in text?",
];

/// Starter questions offered while the transcript holds only the greeting.
pub fn suggestion_questions(language: Language) -> &'static [&'static str] {
    match language {
        Language::Th => SUGGESTIONS_TH,
        Language::En => SUGGESTIONS_EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trip() {
        assert_eq!(Language::Th.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn parse_languages() {
        assert_eq!("th".parse::<Language>().unwrap(), Language::Th);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn welcome_differs_by_language() {
        assert_ne!(welcome_message(Language::Th), welcome_message(Language::En));
        assert_eq!(suggestion_questions(Language::En).len(), 6);
    }
}
