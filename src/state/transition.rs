//! Route crossfade bookkeeping.
//!
//! DESIGN
//! ======
//! Every navigation creates a new layer keyed by a generation number. The
//! layers that were live at that moment start exiting and the new one starts
//! entering; both stay mounted until the fade timer for that generation
//! fires. `settle(g)` is that timer: layer `g` becomes settled and every
//! layer retired at or before `g` is dropped. The first layer is mounted
//! already settled, so initial page load does not animate.
//!
//! The shell renders `layers()` keyed by `Layer::key`, so a screen keeps its
//! DOM and state while it changes from entering to settled to exiting.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use std::time::Duration;

use crate::routes::Route;

/// Length of the crossfade between two screens.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerPhase {
    Entering,
    Entered,
    Exiting { retired_at: u64 },
}

impl LayerPhase {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Entering => "route-layer fade-enter fade-enter-active",
            Self::Entered => "route-layer fade-enter-done",
            Self::Exiting { .. } => "route-layer fade-exit fade-exit-active",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    pub key: u64,
    pub path: String,
    /// `None` for unmatched paths, which render nothing.
    pub route: Option<Route>,
    pub phase: LayerPhase,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionState {
    generation: u64,
    layers: Vec<Layer>,
}

impl TransitionState {
    #[must_use]
    pub fn new(initial_path: &str) -> Self {
        let layer = Layer {
            key: 0,
            path: initial_path.to_owned(),
            route: Route::from_path(initial_path),
            phase: LayerPhase::Entered,
        };
        Self { generation: 0, layers: vec![layer] }
    }

    /// Mounted layers, oldest first.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The newest layer that is not on its way out.
    #[must_use]
    pub fn current(&self) -> Option<&Layer> {
        self.layers
            .iter()
            .rev()
            .find(|layer| !matches!(layer.phase, LayerPhase::Exiting { .. }))
    }

    /// CSS class for the layer with `key`; empty once it is gone.
    #[must_use]
    pub fn class_for(&self, key: u64) -> &'static str {
        self.layers
            .iter()
            .find(|layer| layer.key == key)
            .map_or("", |layer| layer.phase.class())
    }

    /// Start a transition to `path`. Returns the generation whose timer must
    /// later call [`settle`](Self::settle), or `None` if `path` already shows
    /// the current screen. Matched paths compare by route, so `/login` and
    /// `/login/` are the same screen; unmatched paths compare verbatim.
    pub fn navigate(&mut self, path: &str) -> Option<u64> {
        let route = Route::from_path(path);
        let same_screen = self.current().is_some_and(|layer| match (layer.route, route) {
            (Some(shown), Some(next)) => shown == next,
            (None, None) => layer.path == path,
            _ => false,
        });
        if same_screen {
            return None;
        }
        self.generation += 1;
        let generation = self.generation;
        for layer in &mut self.layers {
            if !matches!(layer.phase, LayerPhase::Exiting { .. }) {
                layer.phase = LayerPhase::Exiting { retired_at: generation };
            }
        }
        self.layers.push(Layer {
            key: generation,
            path: path.to_owned(),
            route,
            phase: LayerPhase::Entering,
        });
        Some(generation)
    }

    /// Fade timer for `generation` elapsed.
    pub fn settle(&mut self, generation: u64) {
        self.layers.retain(|layer| match layer.phase {
            LayerPhase::Exiting { retired_at } => retired_at > generation,
            _ => true,
        });
        for layer in &mut self.layers {
            if layer.key == generation && layer.phase == LayerPhase::Entering {
                layer.phase = LayerPhase::Entered;
            }
        }
    }
}
