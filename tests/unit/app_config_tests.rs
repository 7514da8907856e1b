/*!
 * Tests for application configuration
 */

use std::fs::File;
use std::io::BufReader;
use std::str::FromStr;

use doctran::app_config::{
    API_KEY_ENV_VAR, Config, LogLevel, ProviderConfig, TranslationProvider,
};

use crate::common::{create_temp_dir, create_test_file};

/// Defaults: OpenAI provider, all three provider slots, info logging
#[test]
fn test_default_config_shouldCarryExpectedDefaults() {
    let config = Config::default();

    assert_eq!(config.translation.provider, TranslationProvider::OpenAI);
    assert_eq!(config.translation.available_providers.len(), 3);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.translation.common.max_tokens, 2048);
    assert!((config.translation.common.temperature - 0.7).abs() < f32::EPSILON);
}

/// The active provider's model/endpoint resolve through the provider table
#[test]
fn test_translation_config_accessors_shouldResolveActiveProvider() {
    let mut config = Config::default();

    assert_eq!(config.translation.get_model(), "gpt-3.5-turbo");
    assert_eq!(config.translation.get_endpoint(), "https://api.openai.com/v1");

    config.translation.provider = TranslationProvider::Ollama;
    assert_eq!(config.translation.get_model(), "llama2");
    assert_eq!(config.translation.get_endpoint(), "http://localhost:11434");
}

/// Provider identifiers round-trip through Display/FromStr
#[test]
fn test_translation_provider_roundTrip_shouldPreserveIdentity() {
    for provider in [
        TranslationProvider::OpenAI,
        TranslationProvider::Ollama,
        TranslationProvider::Anthropic,
    ] {
        let parsed = TranslationProvider::from_str(&provider.to_string()).unwrap();
        assert_eq!(parsed, provider);
    }

    assert!(TranslationProvider::from_str("llamacpp").is_err());
}

/// A keyed provider without an API key fails validation
#[test]
fn test_validate_withMissingApiKey_shouldFail() {
    let config = Config::default();
    assert!(config.validate().is_err());
}

/// A keyed provider with an API key validates
#[test]
fn test_validate_withApiKey_shouldSucceed() {
    let mut config = Config::default();
    if let Some(provider) = config
        .translation
        .available_providers
        .iter_mut()
        .find(|p| p.provider_type == "openai")
    {
        provider.api_key = "test-api-key".to_string();
    }

    config.validate().unwrap();
}

/// Ollama needs no API key
#[test]
fn test_validate_withOllamaProvider_shouldNotRequireApiKey() {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::Ollama;
    config.validate().unwrap();
}

/// A prompt template without the placeholders is rejected
#[test]
fn test_validate_withBrokenPromptTemplate_shouldFail() {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::Ollama;
    config.translation.common.prompt_template = "Translate this".to_string();
    assert!(config.validate().is_err());
}

/// The credential environment variable fills the active provider slot
#[test]
fn test_apply_env_api_key_shouldFillActiveProvider() {
    let mut config = Config::default();

    unsafe {
        std::env::set_var(API_KEY_ENV_VAR, "env-api-key");
    }
    config.apply_env_api_key();
    unsafe {
        std::env::remove_var(API_KEY_ENV_VAR);
    }

    assert_eq!(config.translation.get_api_key(), "env-api-key");
}

/// Config round-trips through a JSON file the way the binary loads it
#[test]
fn test_config_jsonFileRoundTrip_shouldPreserveSettings() {
    let mut config = Config::default();
    config.translation.provider = TranslationProvider::Anthropic;
    config.server.port = 3000;
    config.log_level = LogLevel::Debug;

    let dir = create_temp_dir().unwrap();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let path = create_test_file(&dir.path().to_path_buf(), "conf.json", &json).unwrap();

    let file = File::open(path).unwrap();
    let reader = BufReader::new(file);
    let loaded: Config = serde_json::from_reader(reader).unwrap();

    assert_eq!(loaded.translation.provider, TranslationProvider::Anthropic);
    assert_eq!(loaded.server.port, 3000);
    assert_eq!(loaded.log_level, LogLevel::Debug);
    assert_eq!(loaded.translation.available_providers.len(), 3);
}

/// Partial config files pick up serde defaults
#[test]
fn test_config_withMinimalJson_shouldFillDefaults() {
    let json = r#"{ "translation": { "provider": "ollama" } }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.translation.provider, TranslationProvider::Ollama);
    assert_eq!(config.server.port, 8080);
    assert_eq!(
        config.translation.common.prompt_template,
        "Translate the following text to {target_language}:\n\n{text}"
    );
}

/// Provider configs carry their per-provider defaults
#[test]
fn test_provider_config_new_shouldUseProviderDefaults() {
    let openai = ProviderConfig::new(TranslationProvider::OpenAI);
    assert_eq!(openai.provider_type, "openai");
    assert_eq!(openai.model, "gpt-3.5-turbo");

    let anthropic = ProviderConfig::new(TranslationProvider::Anthropic);
    assert_eq!(anthropic.provider_type, "anthropic");
    assert_eq!(anthropic.model, "claude-3-haiku");
}
