use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    log_requests: AtomicU64,
    log_errors: AtomicU64,
    refreshes: AtomicU64,
    refresh_failures: AtomicU64,
    dashboard_events: AtomicU64,
}

impl Metrics {
    pub fn record_log_request(&self) {
        self.log_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_log_error(&self) {
        self.log_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_refresh(&self, event_count: usize) {
        self.refreshes.fetch_add(1, Ordering::Relaxed);
        self.dashboard_events
            .store(event_count as u64, Ordering::Relaxed);
    }

    pub fn record_refresh_failure(&self) {
        self.refresh_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let requests = self.log_requests.load(Ordering::Relaxed);
        let errors = self.log_errors.load(Ordering::Relaxed);
        let refreshes = self.refreshes.load(Ordering::Relaxed);
        let failures = self.refresh_failures.load(Ordering::Relaxed);
        let events = self.dashboard_events.load(Ordering::Relaxed);

        format!(
            "# TYPE trashvision_log_requests_total counter\n\
trashvision_log_requests_total {}\n\
# TYPE trashvision_log_errors_total counter\n\
trashvision_log_errors_total {}\n\
# TYPE trashvision_dashboard_refreshes_total counter\n\
trashvision_dashboard_refreshes_total {}\n\
# TYPE trashvision_dashboard_refresh_failures_total counter\n\
trashvision_dashboard_refresh_failures_total {}\n\
# TYPE trashvision_dashboard_events gauge\n\
trashvision_dashboard_events {}\n",
            requests, errors, refreshes, failures, events
        )
    }
}
