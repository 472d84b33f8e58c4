//! Menu actions carried in inline keyboard callback data.
//!
//! Navigation is stateless: the action identifier in each callback is the only
//! state, and it is parsed into [`MenuAction`] before anything else happens.

use std::str::FromStr;

/// Movie categories the bot can browse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Bollywood,
    Hollywood,
}

impl Category {
    /// Original language used to select the category in the catalog
    pub fn language_code(&self) -> &'static str {
        match self {
            Category::Bollywood => "hi",
            Category::Hollywood => "en",
        }
    }

    /// Localization key of the category display name
    pub fn name_key(&self) -> &'static str {
        match self {
            Category::Bollywood => "category-bollywood",
            Category::Hollywood => "category-hollywood",
        }
    }
}

/// Every action a user can trigger from the inline menus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    RootMenu,
    MoviesMenu,
    Bollywood,
    Hollywood,
    Songs,
    Videos,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::RootMenu,
        MenuAction::MoviesMenu,
        MenuAction::Bollywood,
        MenuAction::Hollywood,
        MenuAction::Songs,
        MenuAction::Videos,
    ];

    /// Identifier placed in the button's callback data
    pub fn callback_data(&self) -> &'static str {
        match self {
            MenuAction::RootMenu => "root",
            MenuAction::MoviesMenu => "movies",
            MenuAction::Bollywood => "bollywood",
            MenuAction::Hollywood => "hollywood",
            MenuAction::Songs => "songs",
            MenuAction::Videos => "videos",
        }
    }

    /// Category fetched by this action, if it leads to the catalog
    pub fn category(&self) -> Option<Category> {
        match self {
            MenuAction::Bollywood => Some(Category::Bollywood),
            MenuAction::Hollywood => Some(Category::Hollywood),
            _ => None,
        }
    }
}

/// Callback data that does not name a known action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl std::fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown menu action: {:?}", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for MenuAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuAction::ALL
            .into_iter()
            .find(|action| action.callback_data() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}
