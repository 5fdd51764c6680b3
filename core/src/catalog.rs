//! Localized mock datasets rendered by the dashboard pages.
//!
//! This is seed content, not computed data: every language switch reseeds the
//! session from these tables. Nothing here is persisted.

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// Monthly spending budget shown next to the expense total.
pub const MONTHLY_BUDGET: i64 = 20_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assignee {
    Father,
    Mother,
    Kids,
    Family,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Routine,
    Event,
    Chore,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub time: String,
    pub assignee: Assignee,
    pub completed: bool,
    pub kind: TaskKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub category: String,
    pub amount: i64,
    pub color: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub target: i64,
    pub current: i64,
    pub unit: String,
}

fn pick<'a>(language: Language, ar: &'a str, en: &'a str) -> &'a str {
    match language {
        Language::Ar => ar,
        Language::En => en,
    }
}

fn task(
    id: &str,
    language: Language,
    ar: &str,
    en: &str,
    time: &str,
    assignee: Assignee,
    completed: bool,
    kind: TaskKind,
) -> Task {
    Task {
        id: id.to_string(),
        title: pick(language, ar, en).to_string(),
        time: time.to_string(),
        assignee,
        completed,
        kind,
    }
}

/// The day's schedule, localized.
pub fn seed_tasks(language: Language) -> Vec<Task> {
    use Assignee::*;
    use TaskKind::*;
    vec![
        task("1", language, "صلاة الفجر وقراءة الأذكار", "Fajr Prayer & Athkar", "05:00", Family, true, Routine),
        task("2", language, "تجهيز الفطور والمدرسة", "Prepare Breakfast & School", "06:30", Mother, true, Routine),
        task("3", language, "توصيل الأولاد للمدرسة", "Drop kids at school", "07:15", Father, true, Routine),
        task("4", language, "تسوق احتياجات المنزل", "Grocery Shopping", "14:00", Father, false, Chore),
        task("5", language, "الغداء العائلي", "Family Lunch", "15:30", Family, false, Event),
        task("6", language, "مراجعة دروس الأولاد", "Homework Review", "17:00", Mother, false, Routine),
        task("7", language, "قراءة قصة قبل النوم", "Bedtime Story", "20:30", Father, false, Event),
    ]
}

fn expense(id: &str, language: Language, ar: &str, en: &str, amount: i64, color: &str, date: &str) -> Expense {
    Expense {
        id: id.to_string(),
        category: pick(language, ar, en).to_string(),
        amount,
        color: color.to_string(),
        date: date.to_string(),
    }
}

/// The month's expenses, localized.
pub fn seed_expenses(language: Language) -> Vec<Expense> {
    vec![
        expense("1", language, "بقالة وطعام", "Groceries", 1500, "#16a34a", "2025-01-01"),
        expense("2", language, "فواتير وكهرباء", "Bills & Utilities", 450, "#ea580c", "2025-01-05"),
        expense("3", language, "تعليم ومدرسة", "Education", 800, "#2563eb", "2025-01-10"),
        expense("4", language, "ترفيه وخروجات", "Entertainment", 300, "#db2777", "2025-01-15"),
        expense("5", language, "صيانة", "Maintenance", 150, "#64748b", "2025-01-18"),
    ]
}

fn goal(id: &str, language: Language, ar: &str, en: &str, target: i64, current: i64, unit_ar: &str, unit_en: &str) -> Goal {
    Goal {
        id: id.to_string(),
        title: pick(language, ar, en).to_string(),
        target,
        current,
        unit: pick(language, unit_ar, unit_en).to_string(),
    }
}

/// The family's goals, localized.
pub fn seed_goals(language: Language) -> Vec<Goal> {
    vec![
        goal("1", language, "ختم القرآن الكريم", "Complete Quran", 30, 12, "جزء", "Juz"),
        goal("2", language, "كمبيوتر ابني", "My son's computer", 27_000, 850, "ليرة", "Lira"),
        goal("3", language, "الرياضة العائلية", "Family Sports", 12, 4, "جلسة", "Session"),
        goal("4", language, "زيارة الأقارب", "Family Visits", 4, 1, "زيارة", "Visit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_have_the_expected_shape() {
        assert_eq!(seed_tasks(Language::Ar).len(), 7);
        assert_eq!(seed_expenses(Language::Ar).len(), 5);
        assert_eq!(seed_goals(Language::Ar).len(), 4);
    }

    #[test]
    fn seeds_are_localized() {
        let ar = seed_tasks(Language::Ar);
        let en = seed_tasks(Language::En);
        assert_ne!(ar[0].title, en[0].title);
        assert_eq!(en[0].title, "Fajr Prayer & Athkar");
        assert_eq!(ar[0].time, en[0].time);
    }

    #[test]
    fn expense_total_stays_under_budget() {
        let total: i64 = seed_expenses(Language::En).iter().map(|e| e.amount).sum();
        assert_eq!(total, 3200);
        assert!(total < MONTHLY_BUDGET);
    }

    #[test]
    fn goal_progress_never_exceeds_target() {
        for goal in seed_goals(Language::En) {
            assert!(goal.current <= goal.target);
        }
    }
}
