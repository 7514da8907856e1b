/*!
 * Tests for provider request/response types and the Provider trait
 */

use doctran::errors::ProviderError;
use doctran::providers::Provider;
use doctran::providers::anthropic::{Anthropic, AnthropicRequest, AnthropicResponse};
use doctran::providers::ollama::{GenerationRequest, GenerationResponse, Ollama};
use doctran::providers::openai::{OpenAI, OpenAIRequest, OpenAIResponse};

use crate::common::mock_providers::{MockErrorType, MockOpenAI};

/// OpenAI requests serialize to the chat completions wire shape
#[test]
fn test_openai_request_serialization_shouldMatchWireShape() {
    let request = OpenAIRequest::new("gpt-3.5-turbo", 2048)
        .temperature(0.7)
        .add_message("user", "Translate the following text to French:\n\nHello");

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["model"], "gpt-3.5-turbo");
    assert_eq!(value["max_tokens"], 2048);
    assert_eq!(value["messages"][0]["role"], "user");
    assert!(
        value["messages"][0]["content"]
            .as_str()
            .unwrap()
            .starts_with("Translate the following text to French")
    );
    // Unset sampling knobs stay off the wire
    assert!(value.get("top_p").is_none());
}

/// Documented OpenAI responses deserialize and the first choice is the text
#[test]
fn test_openai_response_parsing_shouldExtractFirstChoice() {
    let json = r#"{
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "choices": [
            {
                "index": 0,
                "message": { "role": "assistant", "content": "Bonjour le monde" },
                "finish_reason": "stop"
            }
        ],
        "usage": { "prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17 }
    }"#;

    let response: OpenAIResponse = serde_json::from_str(json).unwrap();
    assert_eq!(OpenAI::extract_text(&response), "Bonjour le monde");
    assert_eq!(response.usage.unwrap().total_tokens, 17);
}

/// A response without choices extracts to an empty string
#[test]
fn test_openai_response_withoutChoices_shouldExtractEmpty() {
    let response: OpenAIResponse = serde_json::from_str(r#"{ "choices": [] }"#).unwrap();
    assert_eq!(OpenAI::extract_text(&response), "");
}

/// An unexpected OpenAI response shape is a parse failure, not a silent break
#[test]
fn test_openai_response_withUnexpectedShape_shouldFailParsing() {
    let result = serde_json::from_str::<OpenAIResponse>(r#"{ "completions": "nope" }"#);
    assert!(result.is_err());
}

/// Ollama requests carry the prompt and disable streaming
#[test]
fn test_ollama_request_serialization_shouldDisableStreaming() {
    let request = GenerationRequest::new("llama2", "Translate this")
        .temperature(0.7)
        .num_predict(2048);

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["model"], "llama2");
    assert_eq!(value["prompt"], "Translate this");
    assert_eq!(value["stream"], false);
    assert_eq!(value["options"]["num_predict"], 2048);
}

/// Ollama responses deserialize and expose the generated text
#[test]
fn test_ollama_response_parsing_shouldExtractText() {
    let json = r#"{
        "model": "llama2",
        "created_at": "2024-01-01T00:00:00Z",
        "response": "Hallo Welt",
        "done": true,
        "prompt_eval_count": 20,
        "eval_count": 4
    }"#;

    let response: GenerationResponse = serde_json::from_str(json).unwrap();
    assert_eq!(Ollama::extract_text(&response), "Hallo Welt");
    assert!(response.done);
}

/// Anthropic requests serialize to the messages wire shape
#[test]
fn test_anthropic_request_serialization_shouldMatchWireShape() {
    let request = AnthropicRequest::new("claude-3-haiku", 2048)
        .temperature(0.7)
        .add_message("user", "Translate the following text to German:\n\nHello");

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["model"], "claude-3-haiku");
    assert_eq!(value["max_tokens"], 2048);
    assert_eq!(value["messages"][0]["role"], "user");
    assert!(value.get("system").is_none());
}

/// Anthropic responses concatenate their text content blocks
#[test]
fn test_anthropic_response_parsing_shouldJoinTextBlocks() {
    let json = r#"{
        "content": [
            { "type": "text", "text": "Hallo" },
            { "type": "tool_use", "text": "ignored" },
            { "type": "text", "text": " Welt" }
        ],
        "usage": { "input_tokens": 9, "output_tokens": 3 }
    }"#;

    let response: AnthropicResponse = serde_json::from_str(json).unwrap();
    assert_eq!(Anthropic::extract_text(&response), "Hallo Welt");
}

/// The mock provider tracks one call per completion
#[tokio::test]
async fn test_mock_provider_complete_shouldTrackCalls() {
    let mock = MockOpenAI::new();
    let tracker = mock.tracker();

    let request = OpenAIRequest::new("gpt-3.5-turbo", 10).add_message("user", "Hello");
    let response = mock.complete(request).await.unwrap();

    assert_eq!(MockOpenAI::extract_text(&response), "This is a mock response from OpenAI.");
    assert_eq!(tracker.lock().unwrap().call_count, 1);
}

/// Authentication failures surface as authentication errors
#[tokio::test]
async fn test_mock_provider_withAuthFailure_shouldReturnAuthError() {
    let mock = MockOpenAI::new();
    mock.fail_next_call(MockErrorType::Auth);

    let request = OpenAIRequest::new("gpt-3.5-turbo", 10).add_message("user", "Hello");
    let err = mock.complete(request).await.unwrap_err();
    assert!(matches!(err, ProviderError::AuthenticationError(_)));

    // The failure resets after one call
    let request = OpenAIRequest::new("gpt-3.5-turbo", 10).add_message("user", "Hello");
    assert!(mock.complete(request).await.is_ok());
}

/// Rate limiting surfaces as a rate-limit error
#[tokio::test]
async fn test_mock_provider_withRateLimit_shouldReturnRateLimitError() {
    let mock = MockOpenAI::new();
    mock.fail_next_call(MockErrorType::RateLimit);

    let request = OpenAIRequest::new("gpt-3.5-turbo", 10).add_message("user", "Hello");
    let err = mock.complete(request).await.unwrap_err();
    assert!(matches!(err, ProviderError::RateLimitExceeded(_)));
}
