use rand::Rng;
use tracing::info;

use dbgen_core::{ClientId, Limits, PurchaseConfig, PurchaseRecord};

use crate::allocator::allocate;
use crate::errors::GenerationError;
use crate::random::seeded_rng;
use crate::samplers::PurchaseSampler;

/// How the requested row count was reconciled with the client set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationSummary {
    pub clients: usize,
    pub rows_requested: u64,
    pub rows_generated: usize,
}

impl AllocationSummary {
    pub fn baseline_rows(&self) -> usize {
        self.clients
    }

    pub fn remainder_rows(&self) -> usize {
        self.rows_generated - self.clients
    }

    /// True when the request was raised to cover every client.
    pub fn rows_adjusted(&self) -> bool {
        (self.rows_generated as u64) > self.rows_requested
    }
}

/// Purchase rows in allocation order.
#[derive(Debug, Clone)]
pub struct PurchaseBatch {
    pub records: Vec<PurchaseRecord>,
    pub summary: AllocationSummary,
}

/// Builds purchase rows for an existing client set.
#[derive(Debug, Clone)]
pub struct PurchaseGenerator {
    config: PurchaseConfig,
    limits: Limits,
}

impl PurchaseGenerator {
    pub fn new(config: PurchaseConfig, limits: Limits) -> Self {
        Self { config, limits }
    }

    /// Generates with a fresh stream seeded from the configuration.
    pub fn generate(&self, client_ids: &[ClientId]) -> Result<PurchaseBatch, GenerationError> {
        let mut rng = seeded_rng(self.config.seed);
        self.generate_with_rng(client_ids, &mut rng)
    }

    /// Allocates clients first, then samples amount, date and branch for each
    /// row in row order. Everything is validated before the first draw.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        client_ids: &[ClientId],
        rng: &mut R,
    ) -> Result<PurchaseBatch, GenerationError> {
        self.config.validate(&self.limits)?;
        let sampler = PurchaseSampler::from_config(&self.config)?;

        let refs = allocate(client_ids, self.config.rows, rng)?;
        let summary = AllocationSummary {
            clients: client_ids.len(),
            rows_requested: self.config.rows as u64,
            rows_generated: refs.len(),
        };

        if summary.rows_adjusted() {
            info!(
                rows_requested = summary.rows_requested,
                rows_generated = summary.rows_generated,
                clients = summary.clients,
                "row count raised to cover every client"
            );
        }

        let records = refs
            .into_iter()
            .map(|client_ref| {
                let (amount, date, branch_code) = sampler.sample(rng);
                PurchaseRecord {
                    client_ref,
                    date,
                    amount,
                    branch_code,
                }
            })
            .collect();

        info!(
            clients = summary.clients,
            baseline_rows = summary.baseline_rows(),
            remainder_rows = summary.remainder_rows(),
            "purchases allocated"
        );

        Ok(PurchaseBatch { records, summary })
    }
}
