use gloo_storage::{LocalStorage, Storage};

pub const REMINDER_PROMPT: &str = "💧 Don't forget to log today's water use! Log it now?";

/// Durable string key/value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Browser localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get(key).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = LocalStorage::set(key, value) {
            log::warn!("Failed to persist {}: {}", key, e);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderOutcome {
    AlreadyShown,
    Accepted,
    Dismissed,
}

/// Once-per-day prompt to log consumption
pub struct Reminder<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Reminder<S> {
    pub fn new(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    /// Prompt unless the reminder already ran on `today`. The date is
    /// recorded whatever the user answers.
    pub fn check(&self, today: &str, prompt: impl FnOnce() -> bool) -> ReminderOutcome {
        if self.store.get(&self.key).as_deref() == Some(today) {
            log::debug!("Reminder already shown on {}", today);
            return ReminderOutcome::AlreadyShown;
        }

        let accepted = prompt();
        self.store.set(&self.key, today);

        if accepted {
            ReminderOutcome::Accepted
        } else {
            ReminderOutcome::Dismissed
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

/// Device-local calendar date
pub fn today_local() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.values
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn test_prompts_once_per_day() {
        let reminder = Reminder::new(MemoryStore::default(), "lastReminder");
        let mut prompts = 0;

        let first = reminder.check("2026-10-16", || {
            prompts += 1;
            true
        });
        let second = reminder.check("2026-10-16", || {
            prompts += 1;
            true
        });

        assert_eq!(first, ReminderOutcome::Accepted);
        assert_eq!(second, ReminderOutcome::AlreadyShown);
        assert_eq!(prompts, 1);
    }

    #[test]
    fn test_dismissal_still_records_date() {
        let reminder = Reminder::new(MemoryStore::default(), "lastReminder");
        assert_eq!(reminder.check("2026-10-16", || false), ReminderOutcome::Dismissed);
        assert_eq!(
            reminder.store().get("lastReminder").as_deref(),
            Some("2026-10-16")
        );
        assert_eq!(reminder.check("2026-10-17", || false), ReminderOutcome::Dismissed);
    }

    #[test]
    fn test_today_local_format() {
        let today = today_local();
        assert_eq!(today.len(), 10);
        assert!(chrono::NaiveDate::parse_from_str(&today, "%Y-%m-%d").is_ok());
    }
}
