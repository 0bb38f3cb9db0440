//! Synthetic client and purchase dataset generation for dbgen.
//!
//! The client pipeline produces fictitious Brazilian identities; the purchase
//! pipeline reads their codes back and allocates purchase rows so that every
//! client is covered at least once. Both pipelines draw from a single seeded
//! stream and are reproducible.

pub mod allocator;
pub mod clients;
pub mod engine;
pub mod errors;
pub mod identity;
pub mod input;
pub mod model;
pub mod output;
pub mod purchases;
pub mod random;
pub mod samplers;

pub use allocator::{allocate, effective_rows};
pub use clients::ClientGenerator;
pub use engine::{GenerationEngine, OutputPaths};
pub use errors::GenerationError;
pub use input::{read_client_ids, read_client_ids_from_path};
pub use model::{DatasetKind, GenerationReport, OutputFile};
pub use purchases::{AllocationSummary, PurchaseBatch, PurchaseGenerator};
pub use random::{fresh_seed, seeded_rng};
pub use samplers::{AmountSampler, BranchSampler, DateSampler, PurchaseSampler, branch_codes};
