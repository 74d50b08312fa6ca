pub mod chart;
pub mod style;
pub mod table;
pub mod view;

pub use chart::TerminalChart;
pub use style::UiStyle;
pub use table::{Table, TableColumn};
pub use view::TerminalRenderer;
