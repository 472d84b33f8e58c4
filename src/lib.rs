//! # Movie Browser Telegram Bot
//!
//! A Telegram bot that lets users browse popular movies from TMDB through
//! inline menus and replies with poster albums captioned with release date,
//! language and rating.

pub mod album;
pub mod bot;
pub mod browse;
pub mod catalog;
pub mod catalog_errors;
pub mod config;
pub mod language;
pub mod localization;
pub mod menu;
pub mod presentation;
