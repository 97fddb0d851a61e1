//! Display-window pagination
//!
//! Tracks how many catalog entries are rendered and appends fixed-size
//! batches on demand. The window is a prefix of the catalog and only ever
//! grows within a session.
//!
//! The controller is timer-free: the UI layer calls `begin_load`, waits
//! out the load delay, calls `complete_load`, waits out the entry
//! animation, then calls `finish_animation`. The loading flag stays set
//! across that whole span, which is what debounces repeated triggers.

use std::ops::Range;

/// Batch sizes and timings for the gallery window
#[derive(Debug, Clone)]
pub struct PaginationConfig {
    /// Entries shown before any user interaction
    pub initial_count: usize,
    /// Entries appended per load
    pub batch_size: usize,
    /// Simulated network latency before a batch lands, in ms
    pub load_delay_ms: u32,
    /// How long appended entries keep their entry-animation mark, in ms
    pub entry_animation_ms: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            initial_count: 6,
            batch_size: 4,
            load_delay_ms: 800,
            entry_animation_ms: 600,
        }
    }
}

/// Pagination state over a catalog of known size
#[derive(Debug, Clone)]
pub struct Paginator {
    config: PaginationConfig,
    total: usize,
    visible: usize,
    loading: bool,
    entering: Option<Range<usize>>,
}

impl Paginator {
    pub fn new(config: PaginationConfig, total: usize) -> Self {
        Self {
            config,
            total,
            visible: 0,
            loading: false,
            entering: None,
        }
    }

    /// Show the first batch
    pub fn load_initial(&mut self) {
        self.visible = self.total.min(self.config.initial_count);
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Current window length
    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn has_more(&self) -> bool {
        self.visible < self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a load. Returns false (and does nothing) while a load is in
    /// flight or the catalog is exhausted.
    pub fn begin_load(&mut self) -> bool {
        if self.loading || !self.has_more() {
            return false;
        }
        self.loading = true;
        true
    }

    /// Append the next batch and mark the appended indices as entering.
    /// Returns the appended range; empty unless a load is in flight.
    pub fn complete_load(&mut self) -> Range<usize> {
        if !self.loading {
            return self.visible..self.visible;
        }
        let start = self.visible;
        self.visible = self.total.min(self.visible + self.config.batch_size);
        self.entering = Some(start..self.visible);
        start..self.visible
    }

    /// Clear the loading flag and the entry-animation mark
    pub fn finish_animation(&mut self) {
        self.loading = false;
        self.entering = None;
    }

    /// Whether the entry at `index` was appended by the load in flight
    pub fn is_entering(&self, index: usize) -> bool {
        self.entering
            .as_ref()
            .map(|range| range.contains(&index))
            .unwrap_or(false)
    }

    /// The rendered prefix of `items`
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible.min(items.len())]
    }
}
