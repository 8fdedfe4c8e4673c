//! Connection registry
//!
//! The registry is the only shared mutable state in the relay: a
//! concurrency-safe set of open connections tagged with the listener-side
//! address they arrived on. Listeners insert at accept time, connection
//! handlers remove at teardown, and broadcasts iterate a copy-on-read
//! snapshot.
//!
//! # Architecture
//!
//! ```text
//!                   Arc<ConnectionRegistry>
//!               ┌───────────────────────────┐
//!               │ conns: HashMap<u64,       │
//!               │   ConnEntry {             │
//!               │     local_addr,           │
//!               │     writer: Mutex<..>,    │
//!               │   }                       │
//!               │ >                         │
//!               └────────────┬──────────────┘
//!                            │
//!          ┌─────────────────┼─────────────────┐
//!          │                 │                 │
//!          ▼                 ▼                 ▼
//!     [Listener A]      [Listener B]     [Broadcast]
//!     insert()          insert()         snapshot() ──► write ──► TCP
//! ```
//!
//! Identity is a registry-assigned `u64`, not the socket itself, so entries
//! have stable value-independent keys for insert/remove.

pub mod entry;
pub mod store;

pub use entry::ConnEntry;
pub use store::ConnectionRegistry;
