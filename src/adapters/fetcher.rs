use crate::domain::model::{FetchOutcome, NO_CONTENT, NO_TITLE};
use crate::domain::ports::{ArticleFetcher, ConfigProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;

static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1").expect("valid h1 selector"));
static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("valid p selector"));

/// Pulls the first `h1` and every `p` out of an HTML document, substituting
/// the "No Title Found" / "No Content Found" sentinels when they are absent.
pub fn extract_article(html: &str) -> (String, String) {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(stripped_text)
        .unwrap_or_else(|| NO_TITLE.to_string());

    let paragraphs: Vec<String> = document.select(&PARAGRAPH_SELECTOR).map(stripped_text).collect();
    let body = if paragraphs.is_empty() {
        NO_CONTENT.to_string()
    } else {
        paragraphs.join(" ")
    };

    (title, body)
}

// 每個文字節點各自去除空白後直接串接
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .collect()
}

pub struct HttpArticleFetcher {
    client: Client,
}

impl HttpArticleFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();

        // 預設不設逾時，與逐篇同步抓取的行為一致
        if let Some(timeout) = config.request_timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        if let Some(user_agent) = config.user_agent() {
            builder = builder.user_agent(user_agent);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    async fn download(&self, url: &str) -> Result<String> {
        tracing::debug!("Making request to: {}", url);
        let response = self.client.get(url).send().await?;
        tracing::debug!("Response status for {}: {}", url, response.status());

        // 非 2xx 仍解析回傳內容
        Ok(response.text().await?)
    }
}

impl Default for HttpArticleFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleFetcher for HttpArticleFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        match self.download(url).await {
            Ok(html) => {
                let (title, body) = extract_article(&html);
                if title == NO_TITLE || body == NO_CONTENT {
                    tracing::debug!("Incomplete article markup at {}", url);
                }
                FetchOutcome::Fetched { title, body }
            }
            Err(e) => {
                tracing::warn!("⚠️ Error extracting {}: {}", url, e);
                FetchOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
