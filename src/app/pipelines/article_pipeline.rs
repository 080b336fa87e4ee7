use crate::adapters::fetcher::HttpArticleFetcher;
use crate::adapters::table;
use crate::core::lexicon::Lexicon;
use crate::core::scorer::ArticleScorer;
use crate::core::text_stats::HeuristicTextStats;
use crate::core::{
    Article, ArticleFetcher, BatchResult, ConfigProvider, FetchOutcome, Pipeline, Storage,
    TextStatistics,
};
use crate::utils::error::{AnalyzerError, Result};
use crate::utils::validation;
use std::path::Path;

/// Reads the URL list, fetches and stores each article, scores it and writes
/// one output row per input row, in input order.
pub struct ArticlePipeline<
    S: Storage,
    C: ConfigProvider,
    F: ArticleFetcher = HttpArticleFetcher,
    T: TextStatistics = HeuristicTextStats,
> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) fetcher: F,
    pub(crate) stats: T,
    pub(crate) lexicon: Lexicon,
}

impl<S: Storage, C: ConfigProvider> ArticlePipeline<S, C> {
    /// 載入詞典並建立 HTTP 抓取器；詞典缺失直接失敗
    pub fn new(storage: S, config: C) -> Result<Self> {
        let lexicon = Lexicon::load(
            config.positive_words(),
            config.negative_words(),
            config.stop_words_dir(),
        )?;
        let fetcher = HttpArticleFetcher::from_config(&config)?;
        Ok(Self::with_parts(
            storage,
            config,
            fetcher,
            HeuristicTextStats::new(),
            lexicon,
        ))
    }
}

impl<S: Storage, C: ConfigProvider, F: ArticleFetcher, T: TextStatistics> ArticlePipeline<S, C, F, T> {
    pub fn with_parts(storage: S, config: C, fetcher: F, stats: T, lexicon: Lexicon) -> Self {
        Self {
            storage,
            config,
            fetcher,
            stats,
            lexicon,
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    async fn fetch_entry(&self, url: &str) -> FetchOutcome {
        // 無效網址不送出請求，但仍產生一列
        if let Err(e) = validation::validate_url("URL", url) {
            tracing::warn!("⚠️ Error extracting {}: {}", url, e);
            return FetchOutcome::Failed {
                reason: e.to_string(),
            };
        }
        self.fetcher.fetch(url).await
    }

    async fn persist_article(&self, article: &Article) -> Result<()> {
        if let Err(e) = validation::validate_file_stem("URL_ID", &article.url_id) {
            tracing::warn!("⚠️ Not saving article text for '{}': {}", article.url_id, e);
            return Ok(());
        }

        let path = format!("{}/{}.txt", self.config.articles_dir(), article.url_id);
        self.storage.write_file(&path, article.text.as_bytes()).await?;
        tracing::debug!("Saved article text to {}", path);
        Ok(())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, F: ArticleFetcher, T: TextStatistics> Pipeline
    for ArticlePipeline<S, C, F, T>
{
    async fn extract(&self) -> Result<Vec<Article>> {
        let input_file = self.config.input_file();
        tracing::info!("📋 Reading URL list from: {}", input_file);

        let data = std::fs::read(input_file)?;
        let entries = table::read_url_entries(&data, input_file)?;
        let total = entries.len();

        let mut articles = Vec::with_capacity(total);
        for (index, entry) in entries.into_iter().enumerate() {
            tracing::info!("🌐 [{}/{}] {} {}", index + 1, total, entry.url_id, entry.url);

            let outcome = self.fetch_entry(&entry.url).await;
            let article = Article::new(entry, outcome);
            self.persist_article(&article).await?;
            articles.push(article);
        }

        Ok(articles)
    }

    async fn transform(&self, articles: Vec<Article>) -> Result<BatchResult> {
        let scorer = ArticleScorer::with_stats(&self.lexicon, &self.stats);
        let mut result = BatchResult::default();

        for article in &articles {
            if article.outcome.is_failed() {
                result.failed += 1;
            } else {
                result.fetched += 1;
            }
            result.rows.push(scorer.score(article));
        }

        Ok(result)
    }

    async fn load(&self, result: BatchResult) -> Result<String> {
        let mut primary = None;

        for format in self.config.output_formats() {
            let (extension, data) = table::render(&result.rows, format)?;
            let filename = format!("{}.{}", self.config.output_filename(), extension);

            tracing::debug!("Writing {} ({} bytes) to storage", filename, data.len());
            self.storage.write_file(&filename, &data).await?;

            if primary.is_none() {
                primary = Some(filename);
            }
        }

        let filename = primary.ok_or_else(|| AnalyzerError::MissingConfigError {
            field: "output_formats".to_string(),
        })?;

        Ok(Path::new(self.config.output_path())
            .join(filename)
            .display()
            .to_string())
    }
}
