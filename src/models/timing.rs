use chrono::Duration;

use crate::lib::format::{duration_nanos, fmt_duration};

/// Lifecycle shared by the indexed and keyed timer sets.
///
/// Implementors provide `resolve` and the labelled durations; the three
/// renderers are built on top of them.
pub trait Timing {
    /// Recompute every duration as end minus start.
    fn resolve(&mut self);

    /// Label and duration of every slot, in the set's iteration order.
    fn durations(&self) -> Vec<(String, Duration)>;

    /// The token `render_keyed` embeds after the label.
    fn render_embedded(&self) -> String {
        self.render_flat()
    }

    fn render_flat(&self) -> String {
        self.durations()
            .iter()
            .map(|(_, d)| fmt_duration(d))
            .collect::<Vec<String>>()
            .join(" ")
    }

    // the whole collection goes in as one token, not one entry per slot
    fn render_keyed(&self, label: &str) -> String {
        format!("{}:[{}],", label, self.render_embedded())
    }

    fn render_table(&self, sep: &str) -> String {
        self.durations()
            .iter()
            .map(|(label, d)| format!("{} {}", label, duration_nanos(d)))
            .collect::<Vec<String>>()
            .join(sep)
    }
}
