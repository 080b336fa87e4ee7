use crate::domain::model::{Article, BatchResult, FetchOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_filename(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn articles_dir(&self) -> &str;
    fn positive_words(&self) -> &str;
    fn negative_words(&self) -> &str;
    fn stop_words_dir(&self) -> &str;
    fn request_timeout_seconds(&self) -> Option<u64>;
    fn user_agent(&self) -> Option<&str>;
}

#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    /// 任何網路或解析錯誤都以 `FetchOutcome::Failed` 回傳，不會中斷批次
    async fn fetch(&self, url: &str) -> FetchOutcome;
}

/// 音節與句子統計，評分時透過參照取用
pub trait TextStatistics: Send + Sync {
    fn syllable_count(&self, word: &str) -> usize;
    fn sentence_count(&self, text: &str) -> usize;
    fn avg_sentence_length(&self, text: &str) -> f64;
    fn gunning_fog(&self, text: &str) -> f64;
}

impl<T: TextStatistics + ?Sized> TextStatistics for &T {
    fn syllable_count(&self, word: &str) -> usize {
        (**self).syllable_count(word)
    }

    fn sentence_count(&self, text: &str) -> usize {
        (**self).sentence_count(text)
    }

    fn avg_sentence_length(&self, text: &str) -> f64 {
        (**self).avg_sentence_length(text)
    }

    fn gunning_fog(&self, text: &str) -> f64 {
        (**self).gunning_fog(text)
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Article>>;
    async fn transform(&self, articles: Vec<Article>) -> Result<BatchResult>;
    async fn load(&self, result: BatchResult) -> Result<String>;
}
