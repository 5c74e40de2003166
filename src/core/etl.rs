use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
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
        tracing::info!("Querying suggestions...");
        let suggestions = self.pipeline.extract().await?;
        tracing::info!("Received {} suggestions", suggestions.len());
        self.monitor.log_stats("Extract");

        tracing::info!("Formatting CSV...");
        let document = self.pipeline.transform(suggestions).await?;
        tracing::info!("Formatted {} lines", document.lines.len());
        self.monitor.log_stats("Transform");

        tracing::info!("Writing output...");
        let output_path = self.pipeline.load(document).await?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");

        self.monitor.log_final_stats();
        Ok(output_path)
    }
}
