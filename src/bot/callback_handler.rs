//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::ChatAction;
use tracing::{debug, error, info, warn};

// Import localization
use crate::localization::t_lang;

// Import catalog pipeline
use crate::browse::browse_catalog;
use crate::catalog::{CatalogRequest, CatalogSource};
use crate::catalog_errors::CatalogError;
use crate::config::CatalogConfig;
use crate::menu::{Category, MenuAction};

// Import UI builder functions
use super::ui_builder::{
    create_movies_menu_keyboard, create_root_menu_keyboard, format_no_results,
};

/// Notice to send after a browse run, if any
///
/// A successful run needs no text because the albums are the reply.
pub fn browse_outcome_notice(
    category: Category,
    outcome: &Result<usize, CatalogError>,
    language_code: Option<&str>,
) -> Option<String> {
    match outcome {
        Ok(_) => None,
        Err(CatalogError::EmptyResult) => Some(format_no_results(category, language_code)),
        Err(_) => Some(t_lang("error-load-posters", language_code)),
    }
}

async fn handle_category<C>(
    bot: &Bot,
    chat_id: ChatId,
    category: Category,
    catalog: &C,
    config: &CatalogConfig,
    language_code: Option<&str>,
) -> Result<()>
where
    C: CatalogSource + Sync,
{
    if let Err(e) = bot.send_chat_action(chat_id, ChatAction::UploadPhoto).await {
        warn!(chat_id = %chat_id, error = %e, "Failed to send chat action");
    }

    let request = CatalogRequest::new(category.language_code(), 1, config.result_count);
    let outcome = browse_catalog(catalog, bot, chat_id, &request, &config.image_base_url).await;

    match &outcome {
        Ok(albums) => {
            info!(chat_id = %chat_id, category = ?category, albums, "Category browsed");
        }
        Err(CatalogError::EmptyResult) => {
            info!(chat_id = %chat_id, category = ?category, "No results for category");
        }
        Err(e) => {
            error!(chat_id = %chat_id, category = ?category, error = %e, "Failed to load posters");
        }
    }

    if let Some(notice) = browse_outcome_notice(category, &outcome, language_code) {
        bot.send_message(chat_id, notice).await?;
    }

    Ok(())
}

/// Handle callback queries from inline keyboards
pub async fn callback_handler<C>(
    bot: Bot,
    q: CallbackQuery,
    catalog: Arc<C>,
    config: Arc<CatalogConfig>,
) -> Result<()>
where
    C: CatalogSource + Send + Sync,
{
    debug!(user_id = %q.from.id, "Received callback query from user");

    let language_code = q.from.language_code.as_deref();
    let data = q.data.as_deref().unwrap_or("");

    let action = match data.parse::<MenuAction>() {
        Ok(action) => action,
        Err(e) => {
            warn!(user_id = %q.from.id, error = %e, "Ignoring unknown callback action");
            if let Err(e) = bot
                .answer_callback_query(q.id.clone())
                .text(t_lang("unknown-action", language_code))
                .await
            {
                warn!(user_id = %q.from.id, error = %e, "Failed to answer callback query");
            }
            return Ok(());
        }
    };

    // Answer first so the client stops its loading state while posters load.
    // Stale queries are rejected by Telegram; the action still runs.
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        warn!(
            user_id = %q.from.id,
            action = ?action,
            error = %e,
            "Failed to answer callback query"
        );
    }

    let Some(msg) = &q.message else {
        warn!(user_id = %q.from.id, action = ?action, "Callback query without message");
        return Ok(());
    };
    let chat_id = msg.chat().id;

    match action {
        MenuAction::RootMenu => {
            bot.send_message(chat_id, t_lang("welcome", language_code))
                .reply_markup(create_root_menu_keyboard(language_code))
                .await?;
        }
        MenuAction::MoviesMenu => {
            bot.send_message(chat_id, t_lang("choose-category", language_code))
                .reply_markup(create_movies_menu_keyboard(language_code))
                .await?;
        }
        MenuAction::Bollywood => {
            let category = Category::Bollywood;
            handle_category(&bot, chat_id, category, &*catalog, &config, language_code).await?;
        }
        MenuAction::Hollywood => {
            let category = Category::Hollywood;
            handle_category(&bot, chat_id, category, &*catalog, &config, language_code).await?;
        }
        MenuAction::Songs => {
            bot.send_message(chat_id, t_lang("songs-coming-soon", language_code))
                .await?;
        }
        MenuAction::Videos => {
            bot.send_message(chat_id, t_lang("videos-coming-soon", language_code))
                .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_needs_no_notice() {
        assert_eq!(browse_outcome_notice(Category::Hollywood, &Ok(1), Some("en")), None);
    }

    #[test]
    fn test_empty_result_notice() {
        let outcome = Err(CatalogError::EmptyResult);
        let notice = browse_outcome_notice(Category::Bollywood, &outcome, Some("en"));
        assert_eq!(notice.as_deref(), Some("No Bollywood results found."));
    }

    #[test]
    fn test_failures_share_one_notice() {
        let upstream = Err(CatalogError::upstream_status(401, "Invalid API key"));
        let delivery = Err(CatalogError::Delivery("Bad Request".to_string()));

        let expected = "⚠️ Could not load posters. Check TMDB key and network.";
        assert_eq!(
            browse_outcome_notice(Category::Hollywood, &upstream, None).as_deref(),
            Some(expected)
        );
        assert_eq!(
            browse_outcome_notice(Category::Hollywood, &delivery, None).as_deref(),
            Some(expected)
        );
    }
}
