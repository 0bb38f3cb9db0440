use std::collections::HashSet;

use rand::Rng;
use tracing::info;

use dbgen_core::{ClientConfig, ClientId, ClientRecord, Limits};

use crate::errors::GenerationError;
use crate::identity::{cpf, email_local_part, mobile, person_name};

/// Generates fictitious client identities.
///
/// Codes are sequential (`C00001`, ...). CPFs and e-mails are unique within a
/// single batch; names and phone numbers may repeat.
#[derive(Debug, Clone)]
pub struct ClientGenerator {
    config: ClientConfig,
    limits: Limits,
}

impl ClientGenerator {
    pub fn new(config: ClientConfig, limits: Limits) -> Self {
        Self { config, limits }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Draws, per client: name, CPF (redrawn until unique), mobile.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<Vec<ClientRecord>, GenerationError> {
        self.config.validate(&self.limits)?;

        let count = self.config.count;
        let domain = self.config.domain.trim();
        let mut used_cpfs = HashSet::new();
        let mut used_emails = HashSet::new();
        let mut records = Vec::with_capacity(count as usize);

        for index in 1..=count {
            let full_name = person_name(rng);

            let mut cpf_value = cpf(rng);
            while !used_cpfs.insert(cpf_value.clone()) {
                cpf_value = cpf(rng);
            }

            let email = unique_email(&full_name, domain, &mut used_emails);
            let mobile = mobile(rng);

            records.push(ClientRecord {
                code: ClientId::sequential(index),
                full_name,
                mobile,
                cpf: cpf_value,
                email,
            });
        }

        info!(clients = records.len(), domain = %domain, "clients generated");
        Ok(records)
    }
}

fn unique_email(name: &str, domain: &str, used: &mut HashSet<String>) -> String {
    let local = email_local_part(name);
    let mut email = format!("{local}@{domain}");
    let mut suffix = 2_u64;
    while used.contains(&email) {
        email = format!("{local}{suffix}@{domain}");
        suffix += 1;
    }
    used.insert(email.clone());
    email
}
