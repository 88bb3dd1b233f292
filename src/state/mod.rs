pub mod favorites;
pub mod history;
pub mod panels;
pub mod selection;

pub use favorites::{FavoriteCategory, FavoriteItem, FavoritesRecord, FavoritesStore};
pub use history::NavigationHistory;
pub use panels::{PanelId, PanelRegistry, WindowId};
pub use selection::SelectionState;
