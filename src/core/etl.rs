use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting article analysis");

        // Extract：讀取清單並逐篇抓取
        let articles = self.pipeline.extract().await?;
        tracing::info!("📥 Fetched {} articles", articles.len());
        self.monitor.log_phase("extract");

        // Transform：逐篇評分
        let result = self.pipeline.transform(articles).await?;
        let total = result.rows.len();
        tracing::info!(
            "🔧 Scored {} articles ({} fetched, {} failed)",
            total,
            result.fetched,
            result.failed
        );
        self.monitor.log_phase("transform");

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("💾 Output saved to: {}", output_path);
        self.monitor.log_final(total);

        Ok(output_path)
    }
}
