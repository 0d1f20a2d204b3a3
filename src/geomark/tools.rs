//! Drawing tool state machines.
//!
//! The map UI has two independent tool families (line tools, marker tools),
//! each with the same shape: a visibility flag for the toolbar and one active
//! mode out of add/delete/edit. The modes are mutually exclusive; toggling the
//! active mode switches back to idle, toggling another mode switches to it
//! and clears the previous one.
//!
//! Both families live in an explicitly constructed [`MapUiState`] container,
//! together with the fly-to [`MapStore`], that consumers receive by
//! injection, never as an ambient global.

use crate::map::MapStore;

/// The active interaction mode of one tool family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Idle,
    Adding,
    Deleting,
    Editing,
}

/// State for one tool family. Starts idle with the toolbar hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToolState {
    mode: ToolMode,
    tools_visible: bool,
}

impl ToolState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn tools_visible(&self) -> bool {
        self.tools_visible
    }

    /// Flip toolbar visibility. Independent of the active mode.
    pub fn toggle_tools(&mut self) {
        self.tools_visible = !self.tools_visible;
    }

    pub fn toggle_add(&mut self) {
        self.toggle(ToolMode::Adding);
    }

    pub fn toggle_delete(&mut self) {
        self.toggle(ToolMode::Deleting);
    }

    pub fn toggle_edit(&mut self) {
        self.toggle(ToolMode::Editing);
    }

    pub fn is_adding(&self) -> bool {
        self.mode == ToolMode::Adding
    }

    pub fn is_deleting(&self) -> bool {
        self.mode == ToolMode::Deleting
    }

    pub fn is_editing(&self) -> bool {
        self.mode == ToolMode::Editing
    }

    fn toggle(&mut self, target: ToolMode) {
        self.mode = if self.mode == target {
            ToolMode::Idle
        } else {
            target
        };
    }
}

/// The shared, observable UI state container: one tool family for lines, one
/// for markers, plus the map store. Constructed once and passed to every
/// consumer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapUiState {
    pub line_tools: ToolState,
    pub marker_tools: ToolState,
    pub map: MapStore,
}

impl MapUiState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_hidden() {
        let state = ToolState::new();
        assert_eq!(state.mode(), ToolMode::Idle);
        assert!(!state.tools_visible());
    }

    #[test]
    fn toggling_the_same_mode_twice_returns_to_idle() {
        let mut state = ToolState::new();
        state.toggle_add();
        assert!(state.is_adding());
        state.toggle_add();
        assert_eq!(state.mode(), ToolMode::Idle);
    }

    #[test]
    fn toggling_another_mode_clears_the_active_one() {
        let mut state = ToolState::new();
        state.toggle_add();
        state.toggle_delete();
        assert!(state.is_deleting());
        assert!(!state.is_adding());

        state.toggle_edit();
        assert!(state.is_editing());
        assert!(!state.is_deleting());
    }

    #[test]
    fn visibility_is_orthogonal_to_mode() {
        let mut state = ToolState::new();
        state.toggle_add();
        state.toggle_tools();
        assert!(state.tools_visible());
        assert!(state.is_adding());

        state.toggle_tools();
        assert!(!state.tools_visible());
        assert!(state.is_adding());
    }

    #[test]
    fn mutual_exclusion_holds_for_arbitrary_toggle_sequences() {
        let toggles: [fn(&mut ToolState); 4] = [
            ToolState::toggle_add,
            ToolState::toggle_delete,
            ToolState::toggle_edit,
            ToolState::toggle_tools,
        ];

        // Exhaustive walk over all toggle sequences of length 4.
        for a in 0..4 {
            for b in 0..4 {
                for c in 0..4 {
                    for d in 0..4 {
                        let mut state = ToolState::new();
                        for idx in [a, b, c, d] {
                            toggles[idx](&mut state);
                            let active = [state.is_adding(), state.is_deleting(), state.is_editing()]
                                .iter()
                                .filter(|&&f| f)
                                .count();
                            assert!(active <= 1);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn tool_families_are_independent() {
        let mut ui = MapUiState::new();
        ui.line_tools.toggle_add();
        ui.marker_tools.toggle_delete();
        assert!(ui.line_tools.is_adding());
        assert!(ui.marker_tools.is_deleting());

        ui.map.request_fly_to(5);
        assert!(ui.line_tools.is_adding());
        assert_eq!(ui.map.fly_to_request().unwrap().feature_id, 5);
    }
}
