//! Navigation seam toward the hosting shell.

use crate::domain::value_objects::Screen;

/// Trait for requesting a screen switch from the hosting shell
///
/// The flow never routes by itself; it only names the screen it wants
/// shown next.
pub trait Navigator: Send + Sync {
    /// Ask the shell to display the given screen
    fn select_tab(&self, screen: Screen);
}
