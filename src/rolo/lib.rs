//! # Rolo Architecture
//!
//! Rolo is a **UI-agnostic address-book library** with a thin interactive
//! CLI client on top. The layering mirrors that split:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, render.rs)                    │
//! │  - Reads input lines, formats output, handles the terminal  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (dispatch.rs, commands/*.rs)                 │
//! │  - Maps command names to handlers, checks arity             │
//! │  - Pure business logic returning structured Result types    │
//! │  - Persists the book after every successful mutation        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model Layer (model.rs, book.rs)                            │
//! │  - Validated field types, Record, AddressBook               │
//! │  - Birthday projection with weekend roll-forward            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract ContactStore trait                              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `dispatch.rs` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>`, never writes to stdout/stderr, and never exits the
//! process. The same core could sit behind a different front end unchanged.
//!
//! Errors are one [`error::RoloError`] enum, one variant per failure kind,
//! each carrying the context (name, value, index) the presentation layer
//! needs to render a specific message. Handlers construct errors at the
//! point of detection and propagate them unchanged; the CLI boundary turns
//! them into colored one-liners and never into a crash.
//!
//! ## Module Overview
//!
//! - [`model`]: validated field values and the contact `Record`
//! - [`book`]: the `AddressBook` collection and the birthday report
//! - [`commands`]: one module per command family
//! - [`dispatch`]: command-name routing and the save-on-mutation policy
//! - [`store`]: storage abstraction and implementations
//! - [`error`]: the error taxonomy

pub mod book;
pub mod commands;
pub mod dispatch;
pub mod error;
pub mod model;
pub mod store;
