//! Triage summary prompt

use std::fmt;

/// One of the three ordered summary tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub marker: &'static str,
    pub title: &'static str,
}

impl Section {
    /// The heading line exactly as it must appear in the output.
    pub fn heading(&self) -> String {
        format!("{} {}", self.marker, self.title)
    }
}

/// Summary tiers, most urgent first.
pub const SECTIONS: [Section; 3] = [
    Section {
        marker: "🟥",
        title: "גורמי סיכון מיידיים",
    },
    Section {
        marker: "🟧",
        title: "היסטוריה רפואית רלוונטית",
    },
    Section {
        marker: "🟩",
        title: "מידע כללי",
    },
];

/// Subcategories repeated, in this order, under every section.
pub const SUBSECTIONS: [&str; 4] = [
    "אלרגיות/רגישויות",
    "מחלות רקע",
    "תרופות קבועות",
    "הנחיות/מגבלות",
];

/// Placeholder for a subsection the record says nothing about ("no information").
pub const NO_INFORMATION: &str = "אין מידע";

const INPUT_HEADER: &str = "קלט (טקסט מקורי):";

const INSTRUCTIONS: &str = "הוראות:
אתה מסכם רשומה רפואית עבור פרמדיק בשטח. הפלט חייב להיות קצר, רשימתי ובר־סריקה.
חלק את הפלט לשלושה מקטעים בדיוק, בסדר הבא: 🟥, 🟧, 🟩.
בכל מקטע הצג ארבע תתי־קטגוריות קבועות:
- אלרגיות/רגישויות
- מחלות רקע
- תרופות קבועות
- הנחיות/מגבלות

כללים מחייבים:
- כתוב נקודות בלבד (bullet points), ללא פסקאות חופשיות.
- אל תמציא עובדות. אם מידע חסר – כתוב \"אין מידע\".
- שמור על סדר הכותרות והתתי־כותרות בדיוק כפי שמופיע להלן.";

const OUTPUT_HEADER: &str = "פלט (בדיוק במבנה הבא):";

/// A fully rendered instruction prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The label line used for a subsection in the output skeleton.
pub fn subsection_line(label: &str) -> String {
    format!("- {}:", label)
}

/// Build the deterministic triage prompt for a medical record.
pub fn build_prompt(record_text: &str) -> Prompt {
    let mut prompt = format!("\n{INPUT_HEADER}\n{record_text}\n\n{INSTRUCTIONS}\n\n{OUTPUT_HEADER}\n");

    for section in SECTIONS {
        prompt.push('\n');
        prompt.push_str(&section.heading());
        prompt.push('\n');
        for label in SUBSECTIONS {
            prompt.push_str(&subsection_line(label));
            prompt.push_str("\n  - ");
            prompt.push_str(NO_INFORMATION);
            prompt.push('\n');
        }
    }

    Prompt(prompt.trim_end().to_string())
}
