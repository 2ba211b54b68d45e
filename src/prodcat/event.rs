//! Interaction events and their one-line text form.
//!
//! | Text              | Event                   |
//! |-------------------|-------------------------|
//! | `all`             | `SelectAllUsers`        |
//! | `user <name>`     | `SelectUser(name)`      |
//! | `search <text>`   | `SetSearchQuery(text)`  |
//! | `clear`           | `ClearSearchQuery`      |
//! | `reset`           | `ResetAll`              |
//! | `categories`      | `SelectAllCategories`   |
//! | `category <id>`   | `ToggleCategory(id)`    |
//!
//! Everything after the keyword and one separating space is taken verbatim for
//! `search`, so `search  a` searches for " a". A `user` name drops trailing
//! whitespace (`user Anna Maria ` selects "Anna Maria"), and the bare keywords
//! ignore it.

use crate::state::ViewState;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectAllUsers,
    SelectUser(String),
    SetSearchQuery(String),
    ClearSearchQuery,
    ResetAll,
    SelectAllCategories,
    ToggleCategory(u32),
}

impl Event {
    pub fn apply(&self, state: &mut ViewState) {
        match self {
            Event::SelectAllUsers => state.select_all_users(),
            Event::SelectUser(name) => state.select_user(name),
            Event::SetSearchQuery(text) => state.set_search_query(text),
            Event::ClearSearchQuery => state.clear_search_query(),
            Event::ResetAll => state.reset_all(),
            Event::SelectAllCategories => state.select_all_categories(),
            Event::ToggleCategory(id) => state.toggle_category(*id),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::SelectAllUsers => write!(f, "all"),
            Event::SelectUser(name) => write!(f, "user {}", name),
            Event::SetSearchQuery(text) => write!(f, "search {}", text),
            Event::ClearSearchQuery => write!(f, "clear"),
            Event::ResetAll => write!(f, "reset"),
            Event::SelectAllCategories => write!(f, "categories"),
            Event::ToggleCategory(id) => write!(f, "category {}", id),
        }
    }
}

impl FromStr for Event {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (keyword, rest) = match s.split_once(' ') {
            Some((keyword, rest)) => (keyword, Some(rest)),
            None => (s, None),
        };
        let bare = rest.map_or(true, |r| r.trim().is_empty());

        match (keyword, rest) {
            ("all", _) if bare => Ok(Event::SelectAllUsers),
            ("clear", _) if bare => Ok(Event::ClearSearchQuery),
            ("reset", _) if bare => Ok(Event::ResetAll),
            ("categories", _) if bare => Ok(Event::SelectAllCategories),
            ("search", text) => Ok(Event::SetSearchQuery(text.unwrap_or_default().to_string())),
            ("user", Some(name)) if !bare => {
                Ok(Event::SelectUser(name.trim_end().to_string()))
            }
            ("user", _) => Err("Missing user name: user <name>".to_string()),
            ("category", Some(id)) => id
                .trim()
                .parse()
                .map(Event::ToggleCategory)
                .map_err(|_| format!("Invalid category id: {}", id.trim())),
            ("category", None) => Err("Missing category id: category <id>".to_string()),
            _ => Err(format!("Unknown event: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryFilterMode;
    use crate::join::join_store;
    use crate::store::memory::fixtures;

    #[test]
    fn parses_bare_keywords() {
        assert_eq!("all".parse::<Event>(), Ok(Event::SelectAllUsers));
        assert_eq!("clear".parse::<Event>(), Ok(Event::ClearSearchQuery));
        assert_eq!("reset".parse::<Event>(), Ok(Event::ResetAll));
        assert_eq!("categories".parse::<Event>(), Ok(Event::SelectAllCategories));
    }

    #[test]
    fn bare_keywords_ignore_trailing_whitespace() {
        assert_eq!("all ".parse::<Event>(), Ok(Event::SelectAllUsers));
        assert_eq!("clear ".parse::<Event>(), Ok(Event::ClearSearchQuery));
        assert_eq!("reset ".parse::<Event>(), Ok(Event::ResetAll));
        assert_eq!("categories  ".parse::<Event>(), Ok(Event::SelectAllCategories));
        assert_eq!("user Max ".parse::<Event>(), Ok(Event::SelectUser("Max".into())));
    }

    #[test]
    fn keeps_arguments_verbatim() {
        assert_eq!(
            "user Anna Maria".parse::<Event>(),
            Ok(Event::SelectUser("Anna Maria".into()))
        );
        assert_eq!(
            "search  Apple ".parse::<Event>(),
            Ok(Event::SetSearchQuery(" Apple ".into()))
        );
        assert_eq!("search".parse::<Event>(), Ok(Event::SetSearchQuery(String::new())));
        assert_eq!("category 20".parse::<Event>(), Ok(Event::ToggleCategory(20)));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!("user".parse::<Event>().is_err());
        assert!("user  ".parse::<Event>().is_err());
        assert!("category".parse::<Event>().is_err());
        assert!("category fruits".parse::<Event>().is_err());
        assert!("reset now".parse::<Event>().is_err());
        assert!("sort name".parse::<Event>().is_err());
    }

    #[test]
    fn display_parses_back() {
        let events = [
            Event::SelectAllUsers,
            Event::SelectUser("Anna Maria".into()),
            Event::SetSearchQuery(" apple ".into()),
            Event::SetSearchQuery(String::new()),
            Event::ClearSearchQuery,
            Event::ResetAll,
            Event::SelectAllCategories,
            Event::ToggleCategory(7),
        ];
        for event in events {
            assert_eq!(event.to_string().parse::<Event>(), Ok(event));
        }
    }

    #[test]
    fn applies_in_order() {
        let (items, _) = join_store(&fixtures::market());
        let mut state = ViewState::new(items.into(), CategoryFilterMode::Inert);

        for line in ["user Anna", "search juice"] {
            line.parse::<Event>().unwrap().apply(&mut state);
        }
        assert_eq!(state.visible_items().len(), 1);

        Event::ResetAll.apply(&mut state);
        assert_eq!(state.visible_items().len(), 6);
    }
}
