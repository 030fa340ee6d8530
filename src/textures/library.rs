//! Texture handles and their load outcomes.

use bevy::prelude::*;
use std::collections::HashMap;

/// Final state of a single texture request.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    Loaded,
    Failed(String),
}

/// Per-key record of settled requests.
#[derive(Default, Debug)]
pub struct LoadTracker {
    total: usize,
    outcomes: HashMap<&'static str, LoadOutcome>,
}

impl LoadTracker {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            outcomes: HashMap::new(),
        }
    }

    /// Record an outcome. The first outcome for a key wins; returns whether
    /// this call recorded anything.
    pub fn record(&mut self, key: &'static str, outcome: LoadOutcome) -> bool {
        if self.outcomes.contains_key(key) {
            return false;
        }
        self.outcomes.insert(key, outcome);
        true
    }

    pub fn is_settled(&self, key: &str) -> bool {
        self.outcomes.contains_key(key)
    }

    pub fn is_loaded(&self, key: &str) -> bool {
        matches!(self.outcomes.get(key), Some(LoadOutcome::Loaded))
    }

    /// (settled, total)
    pub fn progress(&self) -> (usize, usize) {
        (self.outcomes.len(), self.total)
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.len() >= self.total
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    /// (key, reason) for every failed request, sorted by key.
    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &str)> {
        let mut failed: Vec<_> = self
            .outcomes
            .iter()
            .filter_map(|(key, outcome)| match outcome {
                LoadOutcome::Failed(reason) => Some((*key, reason.as_str())),
                LoadOutcome::Loaded => None,
            })
            .collect();
        failed.sort_by_key(|(key, _)| *key);
        failed.into_iter()
    }
}

/// Every requested texture, keyed by name.
#[derive(Resource, Default)]
pub struct TextureLibrary {
    pub requested: Vec<(&'static str, Handle<Image>)>,
    pub tracker: LoadTracker,
}

impl TextureLibrary {
    pub fn from_handles(requested: Vec<(&'static str, Handle<Image>)>) -> Self {
        let tracker = LoadTracker::new(requested.len());
        Self { requested, tracker }
    }

    /// Handle for a successfully loaded texture; `None` if it failed, is
    /// still pending or was never requested.
    pub fn texture(&self, key: &str) -> Option<Handle<Image>> {
        if !self.tracker.is_loaded(key) {
            return None;
        }
        self.requested
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, handle)| handle.clone())
    }

    /// Lit surface material for a body: textured when available, otherwise
    /// the flat fallback color.
    pub fn surface_material(&self, texture: Option<&str>, fallback: Color) -> StandardMaterial {
        match texture.and_then(|key| self.texture(key)) {
            Some(image) => StandardMaterial {
                base_color: Color::WHITE,
                base_color_texture: Some(image),
                perceptual_roughness: 1.0,
                metallic: 0.0,
                ..default()
            },
            None => StandardMaterial {
                base_color: fallback,
                perceptual_roughness: 1.0,
                metallic: 0.0,
                ..default()
            },
        }
    }
}
