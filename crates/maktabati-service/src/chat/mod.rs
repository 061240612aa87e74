//! Section-scoped chat over indexed documents.
//!
//! [`threading`] turns stored turns into prompt-ready messages;
//! [`service`] runs the retrieval pipeline and persists the turns.

pub mod service;
pub mod threading;

pub use service::ChatService;
pub use threading::thread_history;
