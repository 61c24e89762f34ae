//! Run orchestration.
//!
//! Scan, gate, spawn-or-skip, load. The pieces are generic over [`Launcher`]
//! and [`ResultLoader`] so a run can be driven without a real simulator.

mod controller;
mod invoker;
mod post_process;

pub use controller::{round_millis, Orchestrator};
pub use invoker::{build_invocation, invoke, Launcher, SystemLauncher};
pub use post_process::ResultLoader;
