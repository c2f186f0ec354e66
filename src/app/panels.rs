/// Number of selectable views: three editors plus the preview.
pub const PANEL_COUNT: usize = 4;

/// Index of the preview panel.
pub const PREVIEW_PANEL: usize = 3;

/// The navigation controls and content panels of the UI shell, addressed by
/// panel index (0 = markup, 1 = style, 2 = script, 3 = preview).
pub trait PanelHost {
    fn set_nav_active(&mut self, index: usize, active: bool);
    fn set_panel_visible(&mut self, index: usize, visible: bool);
    /// Ask the editor in panel `index` to recompute its layout. Needed when a
    /// panel becomes visible again: the widget cached its size while hidden.
    fn relayout_editor(&mut self, index: usize);
}

/// Finite state machine selecting exactly one of the four views for display.
pub struct PanelSwitcher {
    current: usize,
}

impl PanelSwitcher {
    pub fn new() -> Self {
        Self { current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Show panel `index` and hide the other three, keeping the nav controls'
    /// active markers in lockstep. Entering an editor panel triggers a
    /// relayout of its editor; entering the preview does not.
    pub fn switch_panel(&mut self, index: usize, host: &mut dyn PanelHost) {
        debug_assert!(index < PANEL_COUNT);
        self.current = index;

        for i in 0..PANEL_COUNT {
            host.set_nav_active(i, i == index);
            host.set_panel_visible(i, i == index);
        }

        if index < PREVIEW_PANEL {
            host.relayout_editor(index);
        }
    }
}

impl Default for PanelSwitcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Records nav/visibility flags and relayout calls.
    pub struct FakeHost {
        pub nav_active: [bool; PANEL_COUNT],
        pub panel_visible: [bool; PANEL_COUNT],
        pub relayouts: Vec<usize>,
    }

    impl Default for FakeHost {
        fn default() -> Self {
            Self {
                nav_active: [false; PANEL_COUNT],
                panel_visible: [false; PANEL_COUNT],
                relayouts: Vec::new(),
            }
        }
    }

    impl FakeHost {
        /// Index of the single active nav control, if consistent.
        pub fn active_index(&self) -> Option<usize> {
            let active: Vec<usize> = (0..PANEL_COUNT).filter(|&i| self.nav_active[i]).collect();
            match active.as_slice() {
                [one] => Some(*one),
                _ => None,
            }
        }

        pub fn visible_index(&self) -> Option<usize> {
            let visible: Vec<usize> =
                (0..PANEL_COUNT).filter(|&i| self.panel_visible[i]).collect();
            match visible.as_slice() {
                [one] => Some(*one),
                _ => None,
            }
        }
    }

    impl PanelHost for FakeHost {
        fn set_nav_active(&mut self, index: usize, active: bool) {
            self.nav_active[index] = active;
        }

        fn set_panel_visible(&mut self, index: usize, visible: bool) {
            self.panel_visible[index] = visible;
        }

        fn relayout_editor(&mut self, index: usize) {
            self.relayouts.push(index);
        }
    }
}
