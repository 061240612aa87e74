//! # maktabati-rag
//!
//! The retrieval-augmented-generation pipeline: document text extraction,
//! sliding-window chunking, and thin clients for the managed Gemini
//! (embeddings + generation) and Pinecone (vector index) HTTP APIs,
//! composed into indexing and query flows.
//!
//! There is no custom retrieval logic here: embedding,
//! similarity search, and generation are all managed-service calls.

pub mod chunker;
pub mod document;
pub mod gemini;
pub mod indexing;
pub mod pinecone;
pub mod query;

pub use gemini::GeminiClient;
pub use indexing::{IndexOutcome, Indexer};
pub use pinecone::PineconeClient;
pub use query::{QueryOutcome, QueryPipeline};
