//! Bounded cache of measured text widths.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use super::TextMeasurer;
use crate::types::TextStyle;

/// Default number of cached measurements.
pub const DEFAULT_MEASURE_CACHE_CAPACITY: usize = 4096;

/// Widths keyed by `(css font, text)`.
///
/// Eviction is by insertion order; lookups do not promote entries.
#[derive(Debug, Clone)]
pub struct MeasureCache {
    widths: HashMap<(String, String), f32>,
    order: VecDeque<(String, String)>,
    capacity: usize,
}

impl Default for MeasureCache {
    fn default() -> Self {
        Self::new(DEFAULT_MEASURE_CACHE_CAPACITY)
    }
}

impl MeasureCache {
    /// A capacity of 0 disables caching.
    pub fn new(capacity: usize) -> Self {
        Self {
            widths: HashMap::new(),
            order: VecDeque::new(),
            capacity,
        }
    }

    pub fn get(&self, font: &str, text: &str) -> Option<f32> {
        if self.capacity == 0 {
            return None;
        }
        self.widths
            .get(&(font.to_string(), text.to_string()))
            .copied()
    }

    pub fn insert(&mut self, font: &str, text: &str, width: f32) {
        if self.capacity == 0 {
            return;
        }
        let key = (font.to_string(), text.to_string());
        if self.widths.contains_key(&key) {
            return;
        }
        self.widths.insert(key.clone(), width);
        self.order.push_back(key);
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.widths.remove(&oldest);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn clear(&mut self) {
        self.widths.clear();
        self.order.clear();
    }
}

/// Wraps a measurer with a [`MeasureCache`].
///
/// Failed measurements are not cached, so a later call may still succeed.
#[derive(Debug)]
pub struct CachedMeasurer<M> {
    inner: M,
    cache: RefCell<MeasureCache>,
}

impl<M: TextMeasurer> CachedMeasurer<M> {
    pub fn new(inner: M) -> Self {
        Self::with_capacity(inner, DEFAULT_MEASURE_CACHE_CAPACITY)
    }

    pub fn with_capacity(inner: M, capacity: usize) -> Self {
        Self {
            inner,
            cache: RefCell::new(MeasureCache::new(capacity)),
        }
    }

    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<M: TextMeasurer> TextMeasurer for CachedMeasurer<M> {
    fn measure_text_width(&self, text: &str, style: &TextStyle) -> Option<f32> {
        let font = style.css_font();
        if let Some(width) = self.cache.borrow().get(&font, text) {
            return Some(width);
        }
        let width = self.inner.measure_text_width(text, style)?;
        self.cache.borrow_mut().insert(&font, text, width);
        Some(width)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Counting {
        calls: Cell<usize>,
    }

    impl TextMeasurer for Counting {
        fn measure_text_width(&self, text: &str, _style: &TextStyle) -> Option<f32> {
            self.calls.set(self.calls.get() + 1);
            Some(text.len() as f32)
        }
    }

    #[test]
    fn test_cache_evicts_oldest() {
        let mut cache = MeasureCache::new(2);
        cache.insert("f", "a", 1.0);
        cache.insert("f", "b", 2.0);
        cache.insert("f", "c", 3.0);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("f", "a"), None);
        assert_eq!(cache.get("f", "c"), Some(3.0));
    }

    #[test]
    fn test_zero_capacity_disables() {
        let mut cache = MeasureCache::new(0);
        cache.insert("f", "a", 1.0);
        assert!(cache.is_empty());
        assert_eq!(cache.get("f", "a"), None);
    }

    #[test]
    fn test_cached_measurer_hits() {
        let measurer = CachedMeasurer::new(Counting { calls: Cell::new(0) });
        let style = TextStyle::default();
        assert_eq!(measurer.measure_text_width("abc", &style), Some(3.0));
        assert_eq!(measurer.measure_text_width("abc", &style), Some(3.0));
        assert_eq!(measurer.inner.calls.get(), 1);
        assert_eq!(measurer.cached_len(), 1);
    }
}
