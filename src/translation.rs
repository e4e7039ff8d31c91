use crate::config::Config;
use crate::error::{Result, TranslateError};
use crate::normalizer::WordNormalizer;
use anyhow::Context;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Source language of every submitted word
pub const SOURCE_LANGUAGE: &str = "en";

/// LibreTranslate-compatible request body
#[derive(Debug, Serialize)]
struct BackendRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BackendResponse {
    translated_text: String,
}

/// A cleaned word together with its translation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationPair {
    pub original_word: String,
    pub translated_word: String,
}

/// HTTP client for the external translation backend
#[derive(Debug, Clone)]
pub struct TranslationClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl TranslationClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            endpoint: config.translate_endpoint(),
            api_key: config.translation_api_key.clone(),
        }
    }

    /// Translate a single English word into `target_language`.
    pub async fn translate_word(&self, word: &str, target_language: &str) -> anyhow::Result<String> {
        let request = BackendRequest {
            q: word,
            source: SOURCE_LANGUAGE,
            target: target_language,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to translation service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            anyhow::bail!("Translation service error ({}): {}", status, body);
        }

        let parsed: BackendResponse = response
            .json()
            .await
            .context("Failed to parse translation service response")?;

        Ok(parsed.translated_text)
    }
}

/// Cleans a word batch and fans translation requests out to the backend.
#[derive(Clone)]
pub struct Translator {
    normalizer: WordNormalizer,
    client: TranslationClient,
}

impl Translator {
    pub fn new(normalizer: WordNormalizer, client: TranslationClient) -> Self {
        Self { normalizer, client }
    }

    /// Translate a batch of raw words.
    ///
    /// One backend request is issued per cleaned word, all concurrently.
    /// Every request runs to completion; if any of them failed the whole
    /// batch fails with [`TranslateError::Backend`] and no pairs are
    /// returned. Pairs come back in cleaned-word order regardless of which
    /// request finished first.
    pub async fn translate<S: AsRef<str>>(
        &self,
        words: &[S],
        target_language: &str,
    ) -> Result<Vec<TranslationPair>> {
        debug!("Translating {} words to {:?}", words.len(), target_language);

        let cleaned = self.normalizer.clean(words);
        if cleaned.is_empty() {
            info!("No valid words to translate");
            return Err(TranslateError::NoValidWords);
        }

        let requests = cleaned
            .iter()
            .map(|word| self.client.translate_word(word, target_language));
        let responses = join_all(requests).await;

        let failures: Vec<String> = responses
            .iter()
            .zip(&cleaned)
            .filter_map(|(response, word)| {
                response.as_ref().err().map(|e| format!("{:?}: {:#}", word, e))
            })
            .collect();

        if !failures.is_empty() {
            error!(
                "{}/{} translation requests failed: {}",
                failures.len(),
                cleaned.len(),
                failures.join("; ")
            );
            return Err(TranslateError::Backend(failures.join("; ")));
        }

        let pairs = cleaned
            .into_iter()
            .zip(responses.into_iter().flatten())
            .map(|(original_word, translated_word)| TranslationPair {
                original_word,
                translated_word,
            })
            .collect::<Vec<_>>();

        info!("Translated {} words to {:?}", pairs.len(), target_language);
        Ok(pairs)
    }
}
