use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    fetch_requests: AtomicU64,
    fetched_records: AtomicU64,
    fetch_errors: AtomicU64,
    dashboards_built: AtomicU64,
}

impl Metrics {
    pub fn record_fetch(&self, record_count: usize) {
        self.fetch_requests.fetch_add(1, Ordering::Relaxed);
        self.fetched_records
            .fetch_add(record_count as u64, Ordering::Relaxed);
    }

    pub fn record_fetch_error(&self) {
        self.fetch_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dashboard(&self) {
        self.dashboards_built.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let requests = self.fetch_requests.load(Ordering::Relaxed);
        let records = self.fetched_records.load(Ordering::Relaxed);
        let errors = self.fetch_errors.load(Ordering::Relaxed);
        let dashboards = self.dashboards_built.load(Ordering::Relaxed);

        format!(
            "# TYPE rekt_fetch_requests_total counter\n\
rekt_fetch_requests_total {}\n\
# TYPE rekt_fetched_records_total counter\n\
rekt_fetched_records_total {}\n\
# TYPE rekt_fetch_errors_total counter\n\
rekt_fetch_errors_total {}\n\
# TYPE rekt_dashboards_built_total counter\n\
rekt_dashboards_built_total {}\n",
            requests, records, errors, dashboards
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_counters() {
        let metrics = Metrics::default();
        metrics.record_fetch(100);
        metrics.record_fetch(20);
        metrics.record_fetch_error();
        let text = metrics.render_prometheus();
        assert!(text.contains("rekt_fetch_requests_total 2\n"));
        assert!(text.contains("rekt_fetched_records_total 120\n"));
        assert!(text.contains("rekt_fetch_errors_total 1\n"));
        assert!(text.contains("rekt_dashboards_built_total 0\n"));
    }
}
