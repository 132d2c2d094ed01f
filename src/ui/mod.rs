pub mod icons;
pub mod output;
pub mod progress;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, header, load_summary, status, success, warn};
pub use progress::Spinner;
pub use table::stats_table;
pub use theme::{stderr_theme, theme, Theme};
