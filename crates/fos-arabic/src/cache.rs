//! Render Cache
//!
//! Caches rendered strings so UI labels redrawn every frame are shaped
//! once.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::render::{RenderConfig, Renderer};

/// Render cache key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderKey {
    /// Source text hash
    pub text_hash: u64,
    /// Configuration the text was rendered with
    pub config: RenderConfig,
}

impl RenderKey {
    /// Create a new render key
    pub fn new(text: &str, config: RenderConfig) -> Self {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);

        Self {
            text_hash: hasher.finish(),
            config,
        }
    }
}

#[derive(Debug, Clone)]
struct CachedRender {
    /// Source text, checked on lookup so hash collisions miss
    source: String,
    output: String,
    /// Tick of the last insert or hit
    last_used: u64,
}

/// Rendered text cache with LRU eviction
#[derive(Debug)]
pub struct RenderCache {
    cache: HashMap<RenderKey, CachedRender>,
    max_entries: usize,
    tick: u64,
    hits: u64,
    misses: u64,
    evictions: u64,
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new(256)
    }
}

impl RenderCache {
    /// Create a cache holding at most `max_entries` strings
    pub fn new(max_entries: usize) -> Self {
        Self {
            cache: HashMap::with_capacity(max_entries),
            max_entries,
            tick: 0,
            hits: 0,
            misses: 0,
            evictions: 0,
        }
    }

    /// Get the cached rendering of `text` under `config`
    pub fn get(&mut self, text: &str, config: RenderConfig) -> Option<&str> {
        let key = RenderKey::new(text, config);
        match self.cache.get_mut(&key) {
            Some(entry) if entry.source == text => {
                self.tick += 1;
                entry.last_used = self.tick;
                self.hits += 1;
                Some(entry.output.as_str())
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insert a rendered string
    pub fn insert(&mut self, text: &str, config: RenderConfig, output: String) {
        if self.max_entries == 0 {
            return;
        }

        let key = RenderKey::new(text, config);
        if !self.cache.contains_key(&key) && self.cache.len() >= self.max_entries {
            self.evict_lru();
        }

        self.tick += 1;
        self.cache.insert(
            key,
            CachedRender {
                source: text.to_owned(),
                output,
                last_used: self.tick,
            },
        );
    }

    /// Return the cached rendering, rendering and caching it on a miss
    pub fn get_or_render(&mut self, renderer: &Renderer<'_>, text: &str) -> String {
        let config = renderer.config();
        if let Some(output) = self.get(text, config) {
            return output.to_owned();
        }

        let output = renderer.render(text);
        self.insert(text, config, output.clone());
        output
    }

    /// Drop the entry with the oldest tick
    fn evict_lru(&mut self) {
        let oldest = self
            .cache
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(key, _)| *key);

        if let Some(key) = oldest {
            self.cache.remove(&key);
            self.evictions += 1;
        }
    }

    pub fn stats(&self) -> RenderCacheStats {
        RenderCacheStats {
            size: self.cache.len(),
            max_size: self.max_entries,
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
        }
    }

    /// Drop all entries and reset the counters
    pub fn clear(&mut self) {
        self.cache.clear();
        self.tick = 0;
        self.hits = 0;
        self.misses = 0;
        self.evictions = 0;
    }
}

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderCacheStats {
    pub size: usize,
    pub max_size: usize,
    pub hits: u64,
    pub misses: u64,
    /// Entries dropped to make room
    pub evictions: u64,
}

impl RenderCacheStats {
    /// Total lookups (hits plus misses)
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of lookups served from the cache; 0.0 before any lookup
    pub fn hit_rate(&self) -> f64 {
        match self.lookups() {
            0 => 0.0,
            n => self.hits as f64 / n as f64,
        }
    }
}
