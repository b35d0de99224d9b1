pub mod index;
pub mod table;

pub use index::{NameIndex, Search};
pub use table::{ForwardTable, NameTable};
