// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use advice::{
  AdviceClient, AdviceOutcome, AdviceParser, AdviceRequest, GeminiClient, GeminiConfig,
  TextGenerator,
};
use error::Error;
use weather::WeatherReading;
use wiremock::{
  matchers::{body_partial_json, body_string_contains, header, method, path},
  Mock, MockServer, ResponseTemplate,
};

const GENERATE_PATH: &str = "/v1beta/models/test-model:generateContent";

fn client_for(server: &MockServer) -> GeminiClient {
  let config = GeminiConfig::new("test-key")
    .unwrap()
    .with_base_url(format!("{}/v1beta", server.uri()))
    .with_model("test-model");
  GeminiClient::new(config).unwrap()
}

fn reply_with(text: &str) -> serde_json::Value {
  serde_json::json!({
    "candidates": [{
      "content": {"role": "model", "parts": [{"text": text}]},
      "finishReason": "STOP"
    }],
    "modelVersion": "test-model"
  })
}

fn request() -> AdviceRequest {
  AdviceRequest::new(
    "wheat",
    "Krakow",
    WeatherReading {
      temperature: 18.0,
      humidity: 55.0,
      precipitation_last_hour: 0.0,
      description: "few clouds".into(),
    },
  )
}

#[tokio::test]
async fn sends_prompt_with_key_header_and_reads_text() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path(GENERATE_PATH))
    .and(header("x-goog-api-key", "test-key"))
    .and(body_partial_json(
      serde_json::json!({"contents": [{"parts": [{"text": "hello model"}]}]}),
    ))
    .respond_with(ResponseTemplate::new(200).set_body_json(reply_with("hello farmer")))
    .expect(1)
    .mount(&server)
    .await;

  let generation = client_for(&server).generate("hello model").await.unwrap();
  assert_eq!(generation.text.as_deref(), Some("hello farmer"));
  assert!(generation.raw.contains("hello farmer"));
}

#[tokio::test]
async fn blocked_reply_has_no_text_but_keeps_raw_body() {
  let server = MockServer::start().await;
  let blocked = serde_json::json!({"promptFeedback": {"blockReason": "SAFETY"}});
  Mock::given(method("POST"))
    .and(path(GENERATE_PATH))
    .respond_with(ResponseTemplate::new(200).set_body_json(blocked))
    .mount(&server)
    .await;

  let generation = client_for(&server).generate("anything").await.unwrap();
  assert_eq!(generation.text, None);
  assert!(generation.raw.contains("blockReason"));
}

#[tokio::test]
async fn rejected_key_is_advice_generation_failure() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path(GENERATE_PATH))
    .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
      "error": {
        "code": 400,
        "message": "API key not valid. Please pass a valid API key.",
        "status": "INVALID_ARGUMENT"
      }
    })))
    .expect(1)
    .mount(&server)
    .await;

  let result = client_for(&server).generate("anything").await;
  match result {
    Err(Error::AdviceGenerationFailed(cause)) => {
      let message = cause.to_string();
      assert!(message.contains("400"), "{message}");
      assert!(message.contains("API key not valid"), "{message}");
    }
    other => panic!("expected AdviceGenerationFailed, got {other:?}"),
  }
}

#[tokio::test]
async fn non_json_success_body_is_failure() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path(GENERATE_PATH))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
    .mount(&server)
    .await;

  let result = client_for(&server).generate("anything").await;
  assert!(matches!(result, Err(Error::AdviceGenerationFailed(_))), "{result:?}");
}

#[tokio::test]
async fn unreachable_server_is_failure() {
  let server = MockServer::start().await;
  let client = client_for(&server);
  drop(server);

  let result = client.generate("anything").await;
  assert!(matches!(result, Err(Error::AdviceGenerationFailed(_))), "{result:?}");
}

#[tokio::test]
async fn advice_client_uses_fallback_prompt_after_empty_reply() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path(GENERATE_PATH))
    .and(body_string_contains("You are an agricultural assistant"))
    .respond_with(ResponseTemplate::new(200).set_body_json(reply_with("")))
    .expect(1)
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path(GENERATE_PATH))
    .and(body_string_contains("You must answer in this format"))
    .respond_with(ResponseTemplate::new(200).set_body_json(reply_with(
      "[IRRIGATION_NEEDED]\nYes\n[/IRRIGATION_NEEDED]\n\
       [REASONING]\nNo rain and mild heat.\n[/REASONING]",
    )))
    .expect(1)
    .mount(&server)
    .await;

  let outcome = AdviceClient::new(client_for(&server))
    .request_advice(&request())
    .await
    .unwrap();
  assert!(matches!(outcome, AdviceOutcome::Fallback(_)), "{outcome:?}");

  let sections = AdviceParser::new().unwrap().parse(outcome.text());
  assert_eq!(sections.irrigation_needed, "Yes");
  assert_eq!(sections.reasoning, "No rain and mild heat.");
  assert_eq!(sections.precautions, "No precautions provided.");
}

#[tokio::test]
async fn advice_client_degrades_when_both_replies_are_empty() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path(GENERATE_PATH))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})))
    .expect(2)
    .mount(&server)
    .await;

  let outcome = AdviceClient::new(client_for(&server))
    .request_advice(&request())
    .await
    .unwrap();

  match outcome {
    AdviceOutcome::Degraded(raw) => assert!(raw.contains("candidates"), "{raw}"),
    other => panic!("expected Degraded, got {other:?}"),
  }
}
