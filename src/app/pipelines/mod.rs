pub mod article_pipeline;

pub use article_pipeline::ArticlePipeline;
