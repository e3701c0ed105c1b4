//! Prometheus metrics for the poll loop.

use prometheus::{Counter, Histogram, HistogramOpts, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: prometheus::Registry,
    pub processed_cycles: prometheus::Counter,
    pub alarms_total: prometheus::Counter,
    pub learned_total: prometheus::Counter,
    pub neighbor_rows: prometheus::Histogram,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let processed_cycles =
            Counter::new("arpvakt_cycles_total", "Total completed poll cycles").unwrap();
        let alarms_total =
            Counter::new("arpvakt_alarms_total", "Total alarm events raised").unwrap();
        let learned_total = Counter::new(
            "arpvakt_learned_bindings_total",
            "Dynamic bindings learned this run",
        )
        .unwrap();

        let neighbor_rows = Histogram::with_opts(
            HistogramOpts::new("arpvakt_neighbor_rows", "Neighbor-table rows per snapshot")
                .buckets(vec![4.0, 16.0, 64.0, 256.0, 1024.0]),
        )
        .unwrap();

        registry
            .register(Box::new(processed_cycles.clone()))
            .unwrap();
        registry.register(Box::new(alarms_total.clone())).unwrap();
        registry.register(Box::new(learned_total.clone())).unwrap();
        registry.register(Box::new(neighbor_rows.clone())).unwrap();

        Self {
            registry,
            processed_cycles,
            alarms_total,
            learned_total,
            neighbor_rows,
        }
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    pub fn inc_processed_cycles(&self) {
        self.processed_cycles.inc();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_render_as_text() {
        let metrics = MetricsRecorder::new();
        metrics.inc_processed_cycles();
        metrics.alarms_total.inc();
        let text = metrics.gather_metrics().unwrap();
        assert!(text.contains("arpvakt_cycles_total"));
        assert!(text.contains("arpvakt_alarms_total"));
    }
}
