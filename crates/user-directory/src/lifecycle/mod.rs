//! # System Lifecycle & Orchestration
//!
//! Everything needed to run the directory as part of a process:
//!
//! 1. **Configuration** - [`DirectoryConfig`], loaded from JSON or defaults
//! 2. **Observability Setup** - [`setup_tracing`]
//! 3. **Actor Lifecycle** - [`DirectorySystem`] spawns the actor with its validation rules
//!    injected through `run(context)` and shuts it down on request
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` after pending requests
//! 3. **Actor logs final state** - `Shutdown size=N`
//! 4. **Await completion** - [`DirectorySystem::shutdown`] joins the actor task

pub mod config;
pub mod directory_system;
pub mod telemetry;

pub use config::*;
pub use directory_system::*;
pub use telemetry::*;
