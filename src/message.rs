use crate::state::{FavoriteCategory, PanelId, WindowId};
use std::path::PathBuf;

/// What the view layer reports to the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    // Navigation
    Activated { panel: PanelId, path: PathBuf },
    PathSubmitted { panel: PanelId, text: String },
    TreeRootSubmitted(String),
    Back(PanelId),
    Forward(PanelId),
    Up(PanelId),

    // Selection
    Selected { panel: PanelId, path: PathBuf },
    Focused(PanelId),

    // Favorites
    AddFavorite(PathBuf),
    AddSelectionToFavorites,
    RemoveFavorite { path: PathBuf, category: FavoriteCategory },

    // Folder windows
    OpenWindow(PathBuf),
    WindowClosed(WindowId),
}

/// What the coordinator asks the view layer to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    ReRoot { panel: PanelId, path: PathBuf },
    ClearSelection { panel: PanelId },
    OpenWindow { window: WindowId, path: PathBuf },
    Warning(String),
}
