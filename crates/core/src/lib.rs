//! Card layout resolution. Keep this crate free of IO and engine concerns.

pub mod cards;
pub mod compose;
pub mod layout;
pub mod sprites;
pub mod table;

pub use cards::*;
pub use compose::*;
pub use layout::*;
pub use sprites::*;
pub use table::{
    global, install, CardDefinitionTable, CardLayout, GlobalTable, LayoutError, LookupError,
};
