//! Background recording of click events.
//!
//! The redirect handler only enqueues a [`ClickEvent`]; classification and the
//! database insert happen here, after the response has been sent.

use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{error, info};

use crate::application::services::AnalyticsService;
use crate::domain::classifiers::{DeviceClassifier, RegionClassifier};
use crate::domain::click_event::ClickEvent;
use crate::domain::entities::Click;

/// Turns click events into stored clicks.
pub struct ClickWorker {
    analytics: Arc<AnalyticsService>,
    regions: Arc<dyn RegionClassifier>,
    devices: Arc<dyn DeviceClassifier>,
}

impl ClickWorker {
    pub fn new(
        analytics: Arc<AnalyticsService>,
        regions: Arc<dyn RegionClassifier>,
        devices: Arc<dyn DeviceClassifier>,
    ) -> Self {
        Self {
            analytics,
            regions,
            devices,
        }
    }

    /// Classifies and records a single event. Returns `None` if the insert failed.
    pub async fn process(&self, event: ClickEvent) -> Option<Click> {
        let region = self.regions.classify_region(event.ip.as_deref());
        let device = self.devices.classify_device(event.user_agent.as_deref());

        self.analytics
            .record_click(
                event.link_id,
                event.ip,
                event.user_agent,
                region,
                device.to_string(),
            )
            .await
    }
}

/// Consumes click events until every sender is dropped.
///
/// At most `concurrency` events are processed at once. Events already received
/// when the channel closes are still recorded before this returns, so awaiting
/// it after dropping the senders drains the queue.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    worker: Arc<ClickWorker>,
    concurrency: usize,
) {
    let permits = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();

    info!(concurrency, "Click worker started");

    while let Some(event) = rx.recv().await {
        let Ok(permit) = permits.clone().acquire_owned().await else {
            break;
        };

        let worker = worker.clone();
        tasks.spawn(async move {
            let _permit = permit;
            worker.process(event).await;
        });

        while let Some(finished) = tasks.try_join_next() {
            if let Err(e) = finished {
                error!("Click task panicked: {}", e);
            }
        }
    }

    while let Some(finished) = tasks.join_next().await {
        if let Err(e) = finished {
            error!("Click task panicked: {}", e);
        }
    }

    info!("Click worker stopped");
}
