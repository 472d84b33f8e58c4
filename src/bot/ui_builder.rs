//! UI Builder module for creating keyboards and user-facing notices

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

// Import localization
use crate::localization::{t_args_lang, t_lang};

// Import menu types
use crate::menu::{Category, MenuAction};

fn action_button(
    label_key: &str,
    action: MenuAction,
    language_code: Option<&str>,
) -> Vec<InlineKeyboardButton> {
    vec![InlineKeyboardButton::callback(
        t_lang(label_key, language_code),
        action.callback_data(),
    )]
}

/// Create the root menu keyboard (one button per row)
pub fn create_root_menu_keyboard(language_code: Option<&str>) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        action_button("menu-movies", MenuAction::MoviesMenu, language_code),
        action_button("menu-songs", MenuAction::Songs, language_code),
        action_button("menu-videos", MenuAction::Videos, language_code),
    ])
}

/// Create the movie category keyboard
pub fn create_movies_menu_keyboard(language_code: Option<&str>) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        action_button("category-bollywood-button", MenuAction::Bollywood, language_code),
        action_button("category-hollywood-button", MenuAction::Hollywood, language_code),
    ])
}

/// Notice sent when a category has nothing to show
pub fn format_no_results(category: Category, language_code: Option<&str>) -> String {
    let name = t_lang(category.name_key(), language_code);
    t_args_lang("no-results", &[("category", name.as_str())], language_code)
}
