//! # Bot Tests
//!
//! Menu navigation tests: every button in the inline keyboards must carry
//! callback data that parses back into a known action, and the stateless
//! navigation must lead from the root menu to both categories.

use movie_browser_bot::bot::{create_movies_menu_keyboard, create_root_menu_keyboard};
use movie_browser_bot::bot::message_handler::{parse_command, Command};
use movie_browser_bot::menu::{Category, MenuAction};
use teloxide::types::{InlineKeyboardButtonKind, InlineKeyboardMarkup};

fn actions(markup: &InlineKeyboardMarkup) -> Vec<MenuAction> {
    markup
        .inline_keyboard
        .iter()
        .flatten()
        .map(|button| match &button.kind {
            InlineKeyboardButtonKind::CallbackData(data) => data
                .parse::<MenuAction>()
                .unwrap_or_else(|e| panic!("Keyboard carries bad callback data: {e}")),
            other => panic!("Unexpected button kind: {other:?}"),
        })
        .collect()
}

#[test]
fn test_root_menu_actions() {
    let markup = create_root_menu_keyboard(Some("en"));
    assert_eq!(
        actions(&markup),
        vec![MenuAction::MoviesMenu, MenuAction::Songs, MenuAction::Videos]
    );
}

#[test]
fn test_movies_menu_leads_to_categories() {
    let markup = create_movies_menu_keyboard(Some("fr"));
    let categories: Vec<Category> = actions(&markup)
        .into_iter()
        .filter_map(|action| action.category())
        .collect();
    assert_eq!(categories, vec![Category::Bollywood, Category::Hollywood]);
}

#[test]
fn test_keyboards_are_localized() {
    let english = create_root_menu_keyboard(Some("en"));
    let french = create_root_menu_keyboard(Some("fr"));
    assert_eq!(english.inline_keyboard[0][0].text, "🎥 Movies");
    assert_eq!(french.inline_keyboard[0][0].text, "🎥 Films");
    // Callback data stays the same whatever the language
    assert_eq!(actions(&english), actions(&french));
}

#[test]
fn test_start_command_opens_menu() {
    assert_eq!(parse_command("/start"), Some(Command::Start));
    assert_eq!(parse_command("hello"), None);
}
