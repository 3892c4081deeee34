pub mod compare;
pub mod import;
pub mod preview;
pub mod serve;
pub mod table;
pub use compare::handle_compare;
pub use import::handle_import;
pub use preview::handle_preview;
pub use serve::handle_serve;
