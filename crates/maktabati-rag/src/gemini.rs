//! Gemini API client: generation, embeddings, and prompt assembly.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use maktabati_core::config::rag::{GeminiConfig, RagConfig};
use maktabati_core::error::{AppError, ErrorKind};
use maktabati_core::result::AppResult;
use maktabati_entity::conversation::{ChatMessage, ChatRole};

/// Thin client for the generative-language HTTP API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    generation_model: String,
    embedding_model: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Serialize)]
struct EmbedRequest {
    model: String,
    content: Content,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embedding: EmbeddingValues,
}

#[derive(Debug, Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

impl GeminiClient {
    /// Build a client from RAG configuration.
    pub fn new(config: &RagConfig) -> AppResult<Self> {
        let GeminiConfig {
            api_key,
            base_url,
            generation_model,
            embedding_model,
        } = config.gemini.clone();

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::ExternalService, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            generation_model,
            embedding_model,
        })
    }

    /// Generate a response for a raw prompt.
    pub async fn generate(&self, prompt: &str) -> AppResult<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.generation_model, self.api_key
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response: GenerateResponse = self.post(&url, &request, "generation").await?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AppError::external_service("Generation returned no candidates"))?;

        debug!(chars = text.len(), "Generated response");
        Ok(text)
    }

    /// Embed a text into a vector.
    pub async fn embed(&self, text: &str) -> AppResult<Vec<f32>> {
        let url = format!(
            "{}/models/{}:embedContent?key={}",
            self.base_url, self.embedding_model, self.api_key
        );

        let request = EmbedRequest {
            model: format!("models/{}", self.embedding_model),
            content: Content {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            },
        };

        let response: EmbedResponse = self.post(&url, &request, "embedding").await?;
        Ok(response.embedding.values)
    }

    /// Generate alternative spellings/phrasings of a file name for
    /// semantic filename search.
    pub async fn suggest_filenames(&self, query: &str) -> AppResult<Vec<String>> {
        let prompt = format!(
            "Suggest up to 5 likely document file names matching the description \
             below. Reply with one name per line and nothing else.\n\n{query}"
        );
        let response = self.generate(&prompt).await?;
        let mut suggestions: Vec<String> = response
            .lines()
            .map(|l| l.trim().trim_start_matches(['-', '*', ' ']).to_string())
            .filter(|l| !l.is_empty())
            .collect();
        suggestions.insert(0, query.to_string());
        Ok(suggestions)
    }

    /// Generate assisted writing output from extracted document texts and
    /// a user instruction.
    pub async fn assist(&self, extracted_texts: &[String], instruction: &str) -> AppResult<String> {
        let mut prompt = String::from(
            "You are a writing assistant. Using the following source documents, \
             follow the instruction at the end.\n\n",
        );
        for (i, text) in extracted_texts.iter().enumerate() {
            prompt.push_str(&format!("--- Document {} ---\n{}\n\n", i + 1, text));
        }
        prompt.push_str("Instruction: ");
        prompt.push_str(instruction);
        self.generate(&prompt).await
    }

    async fn post<Req: Serialize, Resp: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        request: &Req,
        what: &str,
    ) -> AppResult<Resp> {
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Gemini {what} request failed"),
                    e,
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::external_service(format!(
                "Gemini {what} returned {status}: {body}"
            )));
        }

        response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to decode Gemini {what} response"),
                e,
            )
        })
    }
}

/// Assemble the generation prompt from retrieved context, threaded
/// history, and the user's question.
///
/// With no context the prompt degrades to a direct question, matching the
/// direct-query flow.
pub fn build_prompt(question: &str, context: &[String], history: &[ChatMessage]) -> String {
    let mut prompt = String::from("You are a helpful assistant. ");

    if !history.is_empty() {
        prompt.push_str("This is the conversation so far:\n\n");
        for message in history {
            let speaker = match message.role {
                ChatRole::User => "User",
                ChatRole::Assistant => "Assistant",
            };
            prompt.push_str(&format!("{speaker}: {}\n", message.content));
        }
        prompt.push('\n');
    }

    if context.is_empty() {
        prompt.push_str("Answer the following question: ");
        prompt.push_str(question);
    } else {
        prompt.push_str("Use the following information to answer the question:\n\n");
        prompt.push_str(&context.join("\n\n"));
        prompt.push_str("\n\nQuestion: ");
        prompt.push_str(question);
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_without_context_is_direct() {
        let prompt = build_prompt("What is Rust?", &[], &[]);
        assert!(prompt.starts_with("You are a helpful assistant. "));
        assert!(prompt.contains("Answer the following question: What is Rust?"));
    }

    #[test]
    fn test_prompt_with_context_includes_chunks() {
        let context = vec!["chunk one".to_string(), "chunk two".to_string()];
        let prompt = build_prompt("Q?", &context, &[]);
        assert!(prompt.contains("chunk one\n\nchunk two"));
        assert!(prompt.ends_with("Question: Q?"));
    }

    #[test]
    fn test_prompt_threads_history_in_order() {
        let history = vec![
            ChatMessage::user("first question"),
            ChatMessage::assistant("first answer", Vec::new()),
        ];
        let prompt = build_prompt("second question", &[], &history);
        let user_pos = prompt.find("User: first question").unwrap();
        let assistant_pos = prompt.find("Assistant: first answer").unwrap();
        assert!(user_pos < assistant_pos);
    }
}
