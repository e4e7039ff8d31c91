use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use word_translator::{
    config::Config, server, TranslationClient, Translator, WordList, WordListSpeller,
    WordNormalizer,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("word_translator=info".parse()?),
        )
        .init();

    info!("Starting word translator");

    let config = Config::from_env()?;

    info!("Loading dictionary from {}", config.dictionary_path);
    let dictionary = WordList::load(&config.dictionary_path)?;

    // Reuse the dictionary when both lexicons point at the same file
    let speller = if config.spellcheck_path == config.dictionary_path {
        WordListSpeller::new(dictionary.clone())
    } else {
        info!("Loading spellchecker word list from {}", config.spellcheck_path);
        WordListSpeller::load(&config.spellcheck_path)?
    };

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let translator = Translator::new(
        WordNormalizer::new(Arc::new(dictionary), Arc::new(speller)),
        TranslationClient::new(http, &config),
    );

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://{}", addr);
    info!("Translation backend: {}", config.translate_endpoint());

    axum::serve(listener, server::router(translator))
        .await
        .context("Server error")?;

    Ok(())
}
