//! Session-scoped dashboard state.
//!
//! All mutations are ephemeral and client-local: switching the language
//! reseeds every mock dataset from [`crate::catalog`], and nothing survives
//! a relaunch. The verse slot carries a
//! generation counter so a verse fetched for a stale language never
//! overwrites one requested after a switch ("last requested language wins").

use std::sync::Mutex;

use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::catalog::{self, Expense, Goal, Task, MONTHLY_BUDGET};
use crate::errors::DashboardError;
use crate::i18n::{self, Language};
use crate::inspiration::Verse;

/// A verse paired with the language it was requested for, so consumers can
/// discard replies that no longer match the active language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyVerseView {
    pub language: Language,
    pub verse: Verse,
}

/// Budget arithmetic shown on the expenses page.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseSummary {
    pub total: i64,
    pub budget: i64,
    pub remaining: i64,
}

struct Inner {
    language: Language,
    generation: u64,
    tasks: Vec<Task>,
    expenses: Vec<Expense>,
    goals: Vec<Goal>,
    verse: Option<DailyVerseView>,
}

impl Inner {
    fn seeded(language: Language, generation: u64) -> Self {
        Self {
            language,
            generation,
            tasks: catalog::seed_tasks(language),
            expenses: catalog::seed_expenses(language),
            goals: catalog::seed_goals(language),
            verse: None,
        }
    }
}

/// Mutex-guarded owner of the active language, the mock datasets, and the
/// last stored verse.
pub struct DashboardState {
    inner: Mutex<Inner>,
}

impl DashboardState {
    pub fn new(language: Language) -> Self {
        Self {
            inner: Mutex::new(Inner::seeded(language, 0)),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn language(&self) -> Language {
        self.lock().language
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Switch the active language and reseed every dataset. Pending edits
    /// are discarded. Returns the new generation.
    pub fn set_language(&self, language: Language) -> u64 {
        let mut inner = self.lock();
        let generation = inner.generation + 1;
        *inner = Inner::seeded(language, generation);
        generation
    }

    /// Snapshot the active language and generation before an asynchronous
    /// verse request so the reply can be matched against later switches.
    pub fn begin_verse_request(&self) -> (Language, u64) {
        let inner = self.lock();
        (inner.language, inner.generation)
    }

    /// Store a fetched verse unless the language changed while the request
    /// was in flight. Returns false when the stale result was discarded.
    pub fn store_verse(&self, generation: u64, view: DailyVerseView) -> bool {
        let mut inner = self.lock();
        if inner.generation != generation {
            return false;
        }
        inner.verse = Some(view);
        true
    }

    pub fn stored_verse(&self) -> Option<DailyVerseView> {
        self.lock().verse.clone()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.lock().tasks.clone()
    }

    pub fn toggle_task(&self, id: &str) -> Result<Task, DashboardError> {
        let mut inner = self.lock();
        let task = inner
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(DashboardError::TaskNotFound)?;
        task.completed = !task.completed;
        Ok(task.clone())
    }

    pub fn expenses(&self) -> Vec<Expense> {
        self.lock().expenses.clone()
    }

    pub fn add_expense(
        &self,
        category: String,
        amount: i64,
        color: Option<String>,
        date: Option<String>,
    ) -> Result<Expense, DashboardError> {
        if category.trim().is_empty() || amount <= 0 {
            return Err(DashboardError::InvalidExpense);
        }
        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            category,
            amount,
            color: color.unwrap_or_else(|| "#64748b".to_string()),
            date: date.unwrap_or_else(|| OffsetDateTime::now_utc().date().to_string()),
        };
        let mut inner = self.lock();
        inner.expenses.push(expense.clone());
        Ok(expense)
    }

    pub fn expense_summary(&self) -> ExpenseSummary {
        let inner = self.lock();
        let total: i64 = inner.expenses.iter().map(|e| e.amount).sum();
        ExpenseSummary {
            total,
            budget: MONTHLY_BUDGET,
            remaining: MONTHLY_BUDGET - total,
        }
    }

    pub fn goals(&self) -> Vec<Goal> {
        self.lock().goals.clone()
    }

    pub fn add_goal(
        &self,
        title: String,
        target: i64,
        unit: Option<String>,
    ) -> Result<Goal, DashboardError> {
        if title.trim().is_empty() || target <= 0 {
            return Err(DashboardError::InvalidGoal);
        }
        let mut inner = self.lock();
        let unit = unit
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| i18n::translate(inner.language, "goals.unit").to_string());
        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            title,
            target,
            current: 0,
            unit,
        };
        inner.goals.push(goal.clone());
        Ok(goal)
    }

    /// Advance a goal by one step, clamped at its target.
    pub fn increment_goal(&self, id: &str) -> Result<Goal, DashboardError> {
        let mut inner = self.lock();
        let goal = inner
            .goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or(DashboardError::GoalNotFound)?;
        goal.current = (goal.current + 1).min(goal.target);
        Ok(goal.clone())
    }

    pub fn delete_goal(&self, id: &str) -> Result<(), DashboardError> {
        let mut inner = self.lock();
        let before = inner.goals.len();
        inner.goals.retain(|goal| goal.id != id);
        if inner.goals.len() == before {
            return Err(DashboardError::GoalNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspiration::fallback_verse;

    fn state() -> DashboardState {
        DashboardState::new(Language::En)
    }

    #[test]
    fn toggle_task_flips_completion() {
        let state = state();
        let before = state.tasks()[3].clone();
        assert!(!before.completed);

        let after = state.toggle_task(&before.id).unwrap();
        assert!(after.completed);
        let again = state.toggle_task(&before.id).unwrap();
        assert!(!again.completed);
    }

    #[test]
    fn toggle_unknown_task_is_an_error() {
        let err = state().toggle_task("missing").unwrap_err();
        assert!(matches!(err, DashboardError::TaskNotFound));
        assert_eq!(err.code(), "TSK-1001");
    }

    #[test]
    fn increment_goal_clamps_at_target() {
        let state = state();
        let goal = state.goals()[3].clone();
        assert_eq!((goal.current, goal.target), (1, 4));

        for _ in 0..10 {
            state.increment_goal(&goal.id).unwrap();
        }
        let done = state
            .goals()
            .into_iter()
            .find(|g| g.id == goal.id)
            .unwrap();
        assert_eq!(done.current, done.target);
    }

    #[test]
    fn add_goal_validates_and_defaults_the_unit() {
        let state = state();
        assert!(matches!(
            state.add_goal("  ".to_string(), 10, None),
            Err(DashboardError::InvalidGoal)
        ));
        assert!(matches!(
            state.add_goal("Savings".to_string(), 0, None),
            Err(DashboardError::InvalidGoal)
        ));

        let goal = state.add_goal("Savings".to_string(), 10, None).unwrap();
        assert_eq!(goal.current, 0);
        assert_eq!(goal.unit, "unit");
        assert_eq!(state.goals().len(), 5);
    }

    #[test]
    fn delete_goal_removes_exactly_one_entry() {
        let state = state();
        let id = state.goals()[0].id.clone();
        state.delete_goal(&id).unwrap();
        assert_eq!(state.goals().len(), 3);
        assert!(matches!(
            state.delete_goal(&id),
            Err(DashboardError::GoalNotFound)
        ));
    }

    #[test]
    fn add_expense_updates_the_summary() {
        let state = state();
        let before = state.expense_summary();
        assert_eq!(before.total, 3200);
        assert_eq!(before.remaining, MONTHLY_BUDGET - 3200);

        state
            .add_expense("Transport".to_string(), 300, None, None)
            .unwrap();
        let after = state.expense_summary();
        assert_eq!(after.total, 3500);

        assert!(matches!(
            state.add_expense("".to_string(), 300, None, None),
            Err(DashboardError::InvalidExpense)
        ));
    }

    #[test]
    fn language_switch_reseeds_and_discards_edits() {
        let state = state();
        state.toggle_task("4").unwrap();
        state.delete_goal("1").unwrap();
        let generation = state.generation();

        let next = state.set_language(Language::Ar);
        assert_eq!(next, generation + 1);
        assert_eq!(state.language(), Language::Ar);

        // Edits are gone and content is reseeded in the new locale.
        let tasks = state.tasks();
        assert_eq!(tasks.len(), 7);
        assert!(!tasks[3].completed);
        assert_eq!(state.goals().len(), 4);
        assert_eq!(tasks[0].title, "صلاة الفجر وقراءة الأذكار");
    }

    #[test]
    fn stale_verse_is_discarded_after_a_language_switch() {
        let state = state();
        let (language, generation) = state.begin_verse_request();
        assert_eq!(language, Language::En);

        state.set_language(Language::Ar);

        let stale = DailyVerseView {
            language,
            verse: fallback_verse(language),
        };
        assert!(!state.store_verse(generation, stale));
        assert!(state.stored_verse().is_none());

        let (language, generation) = state.begin_verse_request();
        let fresh = DailyVerseView {
            language,
            verse: fallback_verse(language),
        };
        assert!(state.store_verse(generation, fresh.clone()));
        assert_eq!(state.stored_verse(), Some(fresh));
    }
}
