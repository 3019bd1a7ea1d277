// Re-export modules
pub mod config;
pub mod dom;
pub mod extract;
pub mod parsers;
pub mod records;
pub mod scrape;
pub mod session;
pub mod store;

// Re-export commonly used types for convenience
pub use dom::{DomPage, LiveDom, Sel};
pub use records::{ThesisLink, ThesisRecord};
pub use session::{Browser, WebSession};
