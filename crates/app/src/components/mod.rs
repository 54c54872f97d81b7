pub mod nav_menu;
pub mod table;

pub use nav_menu::NavMenu;
pub use table::{Pager, SearchBox, StatusLine};
