//! Texture loading
//!
//! All body textures are requested in one batch at startup. The scene is not
//! built until each request has either loaded or failed; a failed texture
//! only degrades its own body to a flat color.

use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::bodies::catalog::TEXTURE_FILES;
use crate::core::{AppState, SolarConfig};

pub mod library;

pub use library::{LoadOutcome, LoadTracker, TextureLibrary};

/// Plugin for the startup texture batch
pub struct TexturePlugin;

impl Plugin for TexturePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TextureLibrary>()
            .add_systems(Startup, request_textures)
            .add_systems(
                Update,
                (poll_texture_loads, finish_texture_loading)
                    .chain()
                    .run_if(in_state(AppState::Loading)),
            );
    }
}

fn request_textures(
    mut library: ResMut<TextureLibrary>,
    asset_server: Res<AssetServer>,
    config: Res<SolarConfig>,
) {
    let requested = TEXTURE_FILES
        .iter()
        .map(|(key, file)| {
            let path = format!("{}/{}", config.texture_dir, file);
            (*key, asset_server.load::<Image>(path))
        })
        .collect();
    *library = TextureLibrary::from_handles(requested);
    info!("Requested {} textures", TEXTURE_FILES.len());
}

/// Outcome for a handle's current load state, `None` while still pending.
pub fn settled_outcome(state: Option<LoadState>) -> Option<LoadOutcome> {
    match state? {
        LoadState::Loaded => Some(LoadOutcome::Loaded),
        LoadState::Failed(err) => Some(LoadOutcome::Failed(err.to_string())),
        _ => None,
    }
}

/// Record every outstanding handle that has loaded or failed since last frame.
pub fn poll_texture_loads(asset_server: Res<AssetServer>, mut library: ResMut<TextureLibrary>) {
    let TextureLibrary { requested, tracker } = &mut *library;

    for &(key, ref handle) in requested.iter() {
        if tracker.is_settled(key) {
            continue;
        }
        let Some(outcome) = settled_outcome(asset_server.get_load_state(handle.id())) else {
            continue;
        };
        match &outcome {
            LoadOutcome::Loaded => info!("Loaded texture: {}", key),
            LoadOutcome::Failed(reason) => warn!("Failed to load texture {}: {}", key, reason),
        }
        tracker.record(key, outcome);
    }
}

/// Advance to [`AppState::Running`] once every request has settled.
pub fn finish_texture_loading(
    library: Res<TextureLibrary>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let tracker = &library.tracker;
    if !tracker.is_complete() {
        return;
    }

    let failed = tracker.failed_count();
    if failed == 0 {
        info!("All textures loaded successfully");
    } else {
        for (key, reason) in tracker.failures() {
            info!("Using fallback color for {} ({})", key, reason);
        }
        info!(
            "Texture loading finished: {} failed, using fallback colors",
            failed
        );
    }
    next_state.set(AppState::Running);
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    fn tracking_world(outcomes: &[(&'static str, Option<LoadOutcome>)]) -> World {
        let mut world = World::new();
        let requested = outcomes
            .iter()
            .map(|(key, _)| (*key, Handle::<Image>::default()))
            .collect();
        let mut library = TextureLibrary::from_handles(requested);
        for (key, outcome) in outcomes {
            if let Some(outcome) = outcome {
                library.tracker.record(key, outcome.clone());
            }
        }
        world.insert_resource(library);
        world.init_resource::<NextState<AppState>>();
        world
    }

    #[test]
    fn test_failed_texture_still_starts_the_scene() {
        let mut world = tracking_world(&[
            ("earth", Some(LoadOutcome::Loaded)),
            ("mars", Some(LoadOutcome::Failed("not found".to_string()))),
        ]);

        world.run_system_once(finish_texture_loading).unwrap();

        assert!(matches!(
            *world.resource::<NextState<AppState>>(),
            NextState::Pending(AppState::Running)
        ));
    }

    #[test]
    fn test_pending_texture_keeps_loading() {
        let mut world = tracking_world(&[
            ("earth", Some(LoadOutcome::Loaded)),
            ("mars", None),
        ]);

        world.run_system_once(finish_texture_loading).unwrap();

        assert!(matches!(
            *world.resource::<NextState<AppState>>(),
            NextState::Unchanged
        ));
    }

    #[test]
    fn test_settled_outcome() {
        assert_eq!(
            settled_outcome(Some(LoadState::Loaded)),
            Some(LoadOutcome::Loaded)
        );
        assert_eq!(settled_outcome(Some(LoadState::Loading)), None);
        assert_eq!(settled_outcome(Some(LoadState::NotLoaded)), None);
        assert_eq!(settled_outcome(None), None);
    }
}
