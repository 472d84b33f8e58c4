//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use teloxide::prelude::*;
use tracing::debug;

// Import localization
use crate::localization::t_lang;

// Import UI builder functions
use super::ui_builder::create_root_menu_keyboard;

/// Commands the bot understands in text messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
}

/// Parse a bot command, accepting the `/cmd@BotName` form used in groups
pub fn parse_command(text: &str) -> Option<Command> {
    let first = text.split_whitespace().next()?;
    let command = first.strip_prefix('/')?;
    let command = command.split('@').next().unwrap_or_default();

    match command {
        "start" => Some(Command::Start),
        "help" => Some(Command::Help),
        _ => None,
    }
}

pub async fn message_handler(bot: Bot, msg: Message) -> Result<()> {
    // Extract user's language code from Telegram
    let language_code = msg
        .from
        .as_ref()
        .and_then(|user| user.language_code.as_ref())
        .map(|s| s.as_str());

    match msg.text().and_then(parse_command) {
        Some(Command::Start) => {
            debug!(chat_id = %msg.chat.id, "Sending root menu");
            bot.send_message(msg.chat.id, t_lang("welcome", language_code))
                .reply_markup(create_root_menu_keyboard(language_code))
                .await?;
        }
        Some(Command::Help) | None => {
            debug!(chat_id = %msg.chat.id, "Sending usage notice");
            bot.send_message(msg.chat.id, t_lang("help-text", language_code))
                .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("/start"), Some(Command::Start));
        assert_eq!(parse_command("/start@MovieBrowserBot"), Some(Command::Start));
        assert_eq!(parse_command("/help please"), Some(Command::Help));
        assert_eq!(parse_command("start"), None);
        assert_eq!(parse_command("/unknown"), None);
        assert_eq!(parse_command(""), None);
    }
}
