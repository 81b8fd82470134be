//! The assistant persona and the canned-prompt menu.
//!
//! Everything in this module is static knowledge-base data: the system
//! instruction that shapes the assistant, and the topic menu whose entries
//! expand into ready-made questions sent through the normal send path.

use crate::chat::locale::Language;

/// System instruction fixed for every conversation.
pub const SYSTEM_INSTRUCTION: &str = r#"
You are Dr. Nana, a world-class expert in APA 7th Edition (American Psychological Association) academic writing and citation style.
Your goal is to assist students, researchers, and academics in perfecting their references and formatting.

**CRITICAL RULE FOR THAI LANGUAGE:**
If the user asks in Thai or the context is Thai, **YOU MUST USE THAI EXAMPLES ONLY** (Thai names, Thai book titles, Thai journals, Buddhist Era years like 2567).
- **DO NOT** use English examples (Smith, Jones, etc.) unless the user specifically asks for an English example.
- **Example**: Instead of "Smith (2020)", use "สมชาย (2563)".
- **Example**: Instead of "Journal of Psychology", use "วารสารจิตวิทยา".

Guidelines:
1. **Expertise**: You have encyclopedic knowledge of the APA 7 Publication Manual.
2. **Tone**: Professional, encouraging, precise, and academic yet accessible.
3. **Language**: **Adapt to the user's language**.
4. **Tasks**:
    - **Citation Correction**: If a user provides a reference, rewrite it in perfect APA 7 format. Point out specific errors you fixed.
    - **In-text Citations**: Explain parenthetical vs. narrative citations.
    - **Formatting**: Answer questions about margins, headings, abstract, title page, etc.
    - **Statistical Reporting**: Explain how to report statistics (Mean, SD, t-test, ANOVA, etc.) in APA style.
5. **Formatting Output**:
    - Use Markdown extensively.
    - Use **Headings (H2, H3)** for structure.
    - Use **Lists (Bullet/Number)** for readability.
    - Use **Tables** for comparisons.
    - Use **Code Blocks** for corrected citations.
"#;

/// A string in both display languages.
#[derive(Debug, Copy, Clone)]
pub struct Localized {
    /// Thai text.
    pub th: &'static str,
    /// English text.
    pub en: &'static str,
}

impl Localized {
    /// The text for the given language.
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Th => self.th,
            Language::En => self.en,
        }
    }
}

/// A selectable menu entry that expands into a canned prompt.
#[derive(Debug, Copy, Clone)]
pub struct MenuEntry {
    /// Display title.
    pub title: Localized,
    /// The question sent on selection.
    pub prompt: Localized,
}

/// A titled group of menu entries.
#[derive(Debug, Copy, Clone)]
pub struct MenuSection {
    /// Section heading.
    pub title: Localized,
    /// Entries in display order.
    pub entries: &'static [MenuEntry],
}

/// The citation-topic menu, in display order.
pub static MENU: &[MenuSection] = &[
    MenuSection {
        title: Localized { th: "การอ้างอิงในเนื้อหา", en: "In-text Citations" },
        entries: &[
            MenuEntry {
                title: Localized { th: "1 ผู้แต่ง (One author)", en: "One Author" },
                prompt: Localized {
                    th: "ขอตัวอย่างการอ้างอิงในเนื้อหา (In-text citation) สำหรับผู้แต่ง 1 คน แบบเน้นผู้แต่งและเน้นข้อความ",
                    en: "Provide examples of in-text citations for one author (parenthetical and narrative).",
                },
            },
            MenuEntry {
                title: Localized { th: "2 ผู้แต่ง (Two authors)", en: "Two Authors" },
                prompt: Localized {
                    th: "ขอตัวอย่างการอ้างอิงในเนื้อหา สำหรับผู้แต่ง 2 คน",
                    en: "Provide examples of in-text citations for two authors.",
                },
            },
            MenuEntry {
                title: Localized { th: "3 คนขึ้นไป (3+ authors)", en: "3+ Authors (et al.)" },
                prompt: Localized {
                    th: "การใช้ et al. สำหรับผู้แต่ง 3 คนขึ้นไปใน APA 7 ทำอย่างไร",
                    en: "How to use 'et al.' for 3 or more authors in APA 7?",
                },
            },
            MenuEntry {
                title: Localized { th: "องค์กร/หน่วยงาน", en: "Group Authors" },
                prompt: Localized {
                    th: "การอ้างอิงในเนื้อหาสำหรับองค์กร (Group Author) ที่มีและไม่มีตัวย่อ",
                    en: "How to cite group authors (with and without abbreviations) in text?",
                },
            },
            MenuEntry {
                title: Localized { th: "การอ้างอิงซ้ำ (Ibid)", en: "Recurring Citations (Ibid)" },
                prompt: Localized {
                    th: "APA 7 ยังใช้ Ibid หรือไม่ และถ้าต้องอ้างอิงซ้ำทำอย่างไร",
                    en: "Does APA 7 use 'Ibid'? How to handle recurring citations?",
                },
            },
        ],
    },
    MenuSection {
        title: Localized { th: "บรรณานุกรม (References)", en: "References List" },
        entries: &[
            MenuEntry {
                title: Localized { th: "หนังสือ (Book)", en: "Book" },
                prompt: Localized {
                    th: "รูปแบบบรรณานุกรมสำหรับหนังสือ (Book) ใน APA 7",
                    en: "Reference format for a Book in APA 7.",
                },
            },
            MenuEntry {
                title: Localized { th: "บทความวารสาร (Journal)", en: "Journal Article" },
                prompt: Localized {
                    th: "รูปแบบบรรณานุกรมสำหรับบทความวารสาร (Journal Article) มี DOI และไม่มี DOI",
                    en: "Reference format for Journal Articles (with and without DOI).",
                },
            },
            MenuEntry {
                title: Localized { th: "เว็บไซต์ (Website)", en: "Website" },
                prompt: Localized {
                    th: "การเขียนอ้างอิงเว็บไซต์ (Website) ในรูปแบบ APA 7",
                    en: "Reference format for a Website in APA 7.",
                },
            },
            MenuEntry {
                title: Localized { th: "วิทยานิพนธ์ (Thesis)", en: "Thesis/Dissertation" },
                prompt: Localized {
                    th: "รูปแบบการอ้างอิงวิทยานิพนธ์ (Thesis/Dissertation)",
                    en: "Reference format for Thesis or Dissertation.",
                },
            },
            MenuEntry {
                title: Localized { th: "รายงานรัฐบาล", en: "Gov/Org Reports" },
                prompt: Localized {
                    th: "การอ้างอิงรายงานของหน่วยงานรัฐ หรือรายงานองค์กร",
                    en: "Reference format for Government or Organizational Reports.",
                },
            },
        ],
    },
    MenuSection {
        title: Localized { th: "การรายงานผลสถิติ", en: "Statistical Reporting" },
        entries: &[
            MenuEntry {
                title: Localized { th: "สถิติพื้นฐาน (Mean, SD)", en: "Basic Stats (Mean, SD)" },
                prompt: Localized {
                    th: "วิธีรายงานค่า Mean (M) และ Standard Deviation (SD) ในตารางและในเนื้อหาตามหลัก APA 7 พร้อมตัวอย่างการอ่านค่าตาราง",
                    en: "How to report Mean (M) and Standard Deviation (SD) in text and tables per APA 7.",
                },
            },
            MenuEntry {
                title: Localized { th: "t-test", en: "t-test" },
                prompt: Localized {
                    th: "วิธีรายงานผลสถิติ t-test (Independent & Paired) ตามหลัก APA 7 พร้อมตัวอย่างตารางและการอ่านค่าแปลผล",
                    en: "How to report t-test results (Independent & Paired) in APA 7.",
                },
            },
            MenuEntry {
                title: Localized { th: "One-way ANOVA", en: "One-way ANOVA" },
                prompt: Localized {
                    th: "วิธีรายงานผลสถิติ One-way ANOVA (F-test) ตามหลัก APA 7 พร้อมตัวอย่างตารางและการอ่านค่าแปลผล",
                    en: "How to report One-way ANOVA (F-test) results in APA 7.",
                },
            },
            MenuEntry {
                title: Localized { th: "Correlation (r)", en: "Correlation (r)" },
                prompt: Localized {
                    th: "วิธีรายงานผลสหสัมพันธ์ Pearson Correlation (r) ตามหลัก APA 7 พร้อมตัวอย่างตารางและการแปลผล",
                    en: "How to report Pearson Correlation (r) in APA 7.",
                },
            },
            MenuEntry {
                title: Localized { th: "Regression (R²)", en: "Regression (R²)" },
                prompt: Localized {
                    th: "วิธีรายงานผล Simple Linear Regression ตามหลัก APA 7 พร้อมตัวอย่างตารางและการแปลผล",
                    en: "How to report Simple Linear Regression results in APA 7.",
                },
            },
            MenuEntry {
                title: Localized { th: "Chi-Square", en: "Chi-Square" },
                prompt: Localized {
                    th: "วิธีรายงานผล Chi-Square Test ตามหลัก APA 7 พร้อมตัวอย่างตารางและการแปลผล",
                    en: "How to report Chi-Square Test results in APA 7.",
                },
            },
            MenuEntry {
                title: Localized { th: "สัญลักษณ์ทางสถิติ", en: "Statistical Symbols" },
                prompt: Localized {
                    th: "สรุปสัญลักษณ์ทางสถิติที่ใช้บ่อยใน APA 7 (เช่น M, SD, p, t, F) และหลักการเขียน (ตัวเอียง/ไม่เอียง)",
                    en: "Common statistical symbols in APA 7 (M, SD, p, t, F) and italics rules.",
                },
            },
        ],
    },
    MenuSection {
        title: Localized { th: "สื่อออนไลน์ & อื่นๆ", en: "Online Media & Others" },
        entries: &[
            MenuEntry {
                title: Localized { th: "YouTube / Video", en: "YouTube / Video" },
                prompt: Localized {
                    th: "การอ้างอิงคลิปวิดีโอ YouTube ใน APA 7",
                    en: "How to cite a YouTube video in APA 7.",
                },
            },
            MenuEntry {
                title: Localized { th: "Social Media (FB/IG)", en: "Social Media (FB/IG)" },
                prompt: Localized {
                    th: "การอ้างอิงโพสต์ Facebook หรือ Instagram",
                    en: "How to cite Facebook or Instagram posts.",
                },
            },
            MenuEntry {
                title: Localized { th: "กฎหมาย/พรบ.", en: "Legal/Acts" },
                prompt: Localized {
                    th: "ตัวอย่างการอ้างอิงพระราชบัญญัติ (พ.ร.บ.) หรือกฎหมายไทย ในรูปแบบ APA",
                    en: "How to cite Laws or Acts in APA format.",
                },
            },
            MenuEntry {
                title: Localized { th: "บทสัมภาษณ์", en: "Personal Comm." },
                prompt: Localized {
                    th: "การอ้างอิงบทสัมภาษณ์ส่วนบุคคล (Personal Communication)",
                    en: "How to cite Personal Communications (interviews, emails).",
                },
            },
        ],
    },
    MenuSection {
        title: Localized { th: "การจัดรูปแบบ (Formatting)", en: "Formatting" },
        entries: &[
            MenuEntry {
                title: Localized { th: "การตั้งค่าหน้ากระดาษ", en: "Page Setup" },
                prompt: Localized {
                    th: "สรุปการตั้งค่าหน้ากระดาษ (Margins, Font, Line Spacing) ตามหลัก APA 7",
                    en: "Page setup guidelines (Margins, Font, Line Spacing) for APA 7.",
                },
            },
            MenuEntry {
                title: Localized { th: "ลำดับหัวข้อ (Headings)", en: "Headings Levels" },
                prompt: Localized {
                    th: "อธิบายลำดับหัวข้อ (Headings) ระดับ 1 ถึง 5 ใน APA 7",
                    en: "Explain Heading Levels 1-5 in APA 7.",
                },
            },
            MenuEntry {
                title: Localized { th: "หน้าปก (Title Page)", en: "Title Page" },
                prompt: Localized {
                    th: "ส่วนประกอบของหน้าปก (Title Page) สำหรับนักศึกษา",
                    en: "Student Title Page components in APA 7.",
                },
            },
            MenuEntry {
                title: Localized { th: "ตารางและภาพประกอบ", en: "Tables & Figures" },
                prompt: Localized {
                    th: "หลักการใส่ตาราง (Tables) และภาพประกอบ (Figures) ใน APA 7",
                    en: "Guidelines for Tables and Figures in APA 7.",
                },
            },
        ],
    },
];

/// Looks up a menu entry by 1-based section and entry number.
pub fn menu_entry(section: usize, entry: usize) -> Option<&'static MenuEntry> {
    MENU.get(section.checked_sub(1)?)?.entries.get(entry.checked_sub(1)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_shape() {
        assert_eq!(MENU.len(), 5);
        assert_eq!(MENU[0].entries.len(), 5);
        assert_eq!(MENU[2].entries.len(), 7);
    }

    #[test]
    fn entry_lookup_one_based() {
        let entry = menu_entry(2, 1).unwrap();
        assert_eq!(entry.title.get(Language::En), "Book");
        assert!(menu_entry(0, 1).is_none());
        assert!(menu_entry(6, 1).is_none());
        assert!(menu_entry(1, 99).is_none());
    }

    #[test]
    fn localized_lookup() {
        let entry = menu_entry(1, 1).unwrap();
        assert!(entry.prompt.get(Language::En).contains("one author"));
        assert!(entry.prompt.get(Language::Th).contains("ผู้แต่ง"));
    }
}
