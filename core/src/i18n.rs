//! The two supported languages and the fixed UI string catalog.
//!
//! Arabic is the default locale; the catalog is authored content and never
//! changes at runtime. Lookups fall back to English and then to the key
//! itself so a missing entry degrades to something readable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Closed set of supported languages. Arabic is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    /// Binary selector over the two locales: "en" maps to English, anything
    /// else to Arabic.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Self::En,
            _ => Self::Ar,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    /// Text direction for the locale, used by the layout chrome.
    pub fn dir(self) -> &'static str {
        match self {
            Self::Ar => "rtl",
            Self::En => "ltr",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Ar => Self::En,
            Self::En => Self::Ar,
        }
    }
}

/// Every supported language, in presentation order.
pub const SUPPORTED_LANGUAGES: &[Language] = &[Language::Ar, Language::En];

// (key, arabic, english)
const CATALOG: &[(&str, &str, &str)] = &[
    ("app.title", "أسرتنا", "Osra"),
    ("app.subtitle", "لوحة العائلة", "Family Dashboard"),
    ("nav.home", "الرئيسية", "Home"),
    ("nav.schedule", "الجدول اليومي", "Schedule"),
    ("nav.expenses", "المصاريف", "Expenses"),
    ("nav.goals", "الأهداف", "Goals"),
    ("welcome", "مرحباً بعودتكم", "Welcome back"),
    ("user.name", "عائلة الأحمد", "The Ahmad Family"),
    ("currency", "ليرة", "Lira"),
    ("lang.switch", "English", "العربية"),
    ("theme.light", "الوضع الفاتح", "Light Mode"),
    ("theme.dark", "الوضع الداكن", "Dark Mode"),
    ("schedule.title", "جدول اليوم", "Today's Schedule"),
    ("schedule.remaining", "مهام متبقية", "tasks remaining"),
    ("tasks.empty", "لا توجد مهام اليوم", "No tasks for today"),
    ("expenses.title", "مصاريف الشهر", "Monthly Expenses"),
    ("expenses.total", "إجمالي المصاريف", "Total Spent"),
    ("expenses.budget", "الميزانية الشهرية", "Monthly Budget"),
    ("expenses.remaining", "المتبقي", "Remaining"),
    ("expenses.distribution", "توزيع المصاريف", "Spending Breakdown"),
    ("expenses.details", "آخر العمليات", "Recent Transactions"),
    ("expenses.empty", "لا توجد مصاريف مسجلة", "No expenses recorded"),
    ("goals.title", "أهداف العائلة", "Family Goals"),
    ("goals.subtitle", "خطوة صغيرة كل يوم", "A small step every day"),
    ("goals.new", "هدف جديد", "New Goal"),
    ("goals.progress", "تقدم", "Progress"),
    ("goals.completed", "تم بحمد الله", "Completed"),
    ("goals.unit", "وحدة", "unit"),
    ("common.delete", "حذف", "Delete"),
    ("assignee.Father", "الأب", "Father"),
    ("assignee.Mother", "الأم", "Mother"),
    ("assignee.Kids", "الأولاد", "Kids"),
    ("assignee.Family", "العائلة", "Family"),
];

/// Look up a UI string for the given language, falling back to English and
/// finally to the key itself.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    match CATALOG.iter().find(|entry| entry.0 == key) {
        Some(&(_, ar, en)) => {
            let chosen = match language {
                Language::Ar => ar,
                Language::En => en,
            };
            if chosen.is_empty() {
                en
            } else {
                chosen
            }
        }
        None => key,
    }
}

/// The full catalog for one language, keyed for the frontend.
pub fn strings_for(language: Language) -> BTreeMap<&'static str, &'static str> {
    CATALOG
        .iter()
        .map(|(key, ar, en)| {
            let value = match language {
                Language::Ar => ar,
                Language::En => en,
            };
            (*key, *value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_is_a_binary_selector() {
        assert_eq!(Language::from_code("en"), Language::En);
        assert_eq!(Language::from_code("EN "), Language::En);
        assert_eq!(Language::from_code("ar"), Language::Ar);
        assert_eq!(Language::from_code("fr"), Language::Ar);
        assert_eq!(Language::from_code(""), Language::Ar);
    }

    #[test]
    fn arabic_is_the_default_and_rtl() {
        assert_eq!(Language::default(), Language::Ar);
        assert_eq!(Language::Ar.dir(), "rtl");
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::Ar.toggled(), Language::En);
    }

    #[test]
    fn translate_resolves_both_locales() {
        assert_eq!(translate(Language::En, "nav.home"), "Home");
        assert_eq!(translate(Language::Ar, "nav.home"), "الرئيسية");
    }

    #[test]
    fn translate_falls_back_to_the_key() {
        assert_eq!(translate(Language::En, "nav.missing"), "nav.missing");
    }

    #[test]
    fn catalog_is_fully_populated() {
        for language in SUPPORTED_LANGUAGES {
            for (key, value) in strings_for(*language) {
                assert!(!value.is_empty(), "empty catalog entry for {key}");
            }
        }
    }
}
