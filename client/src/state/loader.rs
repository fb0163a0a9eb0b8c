//! Visibility of the global loading overlay.

/// Whether the overlay rendered by `LoaderOverlay` is currently shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoaderState {
    pub visible: bool,
}
