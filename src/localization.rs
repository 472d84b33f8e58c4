use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use std::collections::HashMap;
use std::sync::OnceLock;
use unic_langid::LanguageIdentifier;
use anyhow::{anyhow, Result};
use tracing::{error, warn};

/// Languages with a bundled translation, the first one being the fallback
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["en", "fr"];
const DEFAULT_LANGUAGE: &str = "en";

const EN_RESOURCE: &str = include_str!("../locales/en/main.ftl");
const FR_RESOURCE: &str = include_str!("../locales/fr/main.ftl");

/// Localization manager for the movie browser bot
pub struct LocalizationManager {
    bundles: HashMap<String, FluentBundle<FluentResource>>,
}

impl LocalizationManager {
    /// Create a new localization manager with every bundled language
    pub fn new() -> Result<Self> {
        let mut bundles = HashMap::new();

        for (language, source) in [("en", EN_RESOURCE), ("fr", FR_RESOURCE)] {
            let locale: LanguageIdentifier = language.parse()?;
            let bundle = Self::create_bundle(&locale, source)?;
            bundles.insert(language.to_string(), bundle);
        }

        Ok(Self { bundles })
    }

    /// Create a fluent bundle for a specific locale
    fn create_bundle(
        locale: &LanguageIdentifier,
        source: &str,
    ) -> Result<FluentBundle<FluentResource>> {
        let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
        // Messages end up in Telegram, no bidi isolation marks around arguments
        bundle.set_use_isolating(false);

        let resource = FluentResource::try_new(source.to_string())
            .map_err(|(_, errors)| anyhow!("Invalid resource for {locale}: {errors:?}"))?;
        bundle
            .add_resource(resource)
            .map_err(|errors| anyhow!("Conflicting messages for {locale}: {errors:?}"))?;

        Ok(bundle)
    }

    /// Get a localized message in the given language, falling back to English
    pub fn get_message_in_language(
        &self,
        key: &str,
        language: &str,
        args: Option<&HashMap<&str, &str>>,
    ) -> String {
        let bundle = match self
            .bundles
            .get(language)
            .or_else(|| self.bundles.get(DEFAULT_LANGUAGE))
        {
            Some(bundle) => bundle,
            None => return format!("Missing translation: {key}"),
        };

        let msg = match bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {key}"),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {key}"),
        };

        let fluent_args = args.map(|args| {
            let mut fluent_args = FluentArgs::new();
            for (name, value) in args {
                fluent_args.set(*name, *value);
            }
            fluent_args
        });

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, fluent_args.as_ref(), &mut errors);
        if !errors.is_empty() {
            warn!(
                key = %key,
                language = %language,
                errors = ?errors,
                "Errors while formatting message"
            );
        }

        value.into_owned()
    }
}

static LOCALIZATION_MANAGER: OnceLock<Option<LocalizationManager>> = OnceLock::new();

fn localization_manager() -> Option<&'static LocalizationManager> {
    LOCALIZATION_MANAGER
        .get_or_init(|| match LocalizationManager::new() {
            Ok(manager) => Some(manager),
            Err(e) => {
                error!(error = %e, "Failed to load localization resources");
                None
            }
        })
        .as_ref()
}

/// Initialize the global localization manager
pub fn init_localization() -> Result<()> {
    localization_manager()
        .map(|_| ())
        .ok_or_else(|| anyhow!("Localization resources could not be loaded"))
}

/// Map a Telegram `language_code` (e.g. `fr-CA`) to a supported language
pub fn detect_language(language_code: Option<&str>) -> String {
    let primary = language_code
        .and_then(|code| code.split(['-', '_']).next())
        .map(|code| code.to_lowercase());

    match primary {
        Some(code) if SUPPORTED_LANGUAGES.contains(&code.as_str()) => code,
        _ => DEFAULT_LANGUAGE.to_string(),
    }
}

/// Get a localized message for the user's language
pub fn t_lang(key: &str, language_code: Option<&str>) -> String {
    match localization_manager() {
        Some(manager) => {
            manager.get_message_in_language(key, &detect_language(language_code), None)
        }
        None => format!("Missing translation: {key}"),
    }
}

/// Get a localized message with arguments for the user's language
pub fn t_args_lang(key: &str, args: &[(&str, &str)], language_code: Option<&str>) -> String {
    let args_map: HashMap<&str, &str> = args.iter().cloned().collect();
    match localization_manager() {
        Some(manager) => {
            manager.get_message_in_language(key, &detect_language(language_code), Some(&args_map))
        }
        None => format!("Missing translation: {key}"),
    }
}
