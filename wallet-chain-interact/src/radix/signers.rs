use nonempty::NonEmpty;
use std::collections::BTreeMap;
use wallet_types::chain::{address::AccountAddress, entity::Entity};

/// Who signs the transaction intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentSigning {
    /// No entity needs to sign, the ephemeral notary key signs the intent itself.
    NotaryIsSignatory,
    IntentSigners(NonEmpty<Entity>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSigners {
    pub notary_public_key: String,
    pub intent_signing: IntentSigning,
}

impl TransactionSigners {
    /// Builds the signer set from the entities requiring auth, duplicates dropped, order kept.
    pub fn new(notary_public_key: &str, entities: Vec<Entity>) -> Self {
        let mut unique: Vec<Entity> = Vec::with_capacity(entities.len());
        for entity in entities {
            if !unique.contains(&entity) {
                unique.push(entity);
            }
        }

        let intent_signing = match NonEmpty::from_vec(unique) {
            Some(signers) => IntentSigning::IntentSigners(signers),
            None => IntentSigning::NotaryIsSignatory,
        };

        Self {
            notary_public_key: notary_public_key.to_string(),
            intent_signing,
        }
    }

    pub fn notary_is_signatory(&self) -> bool {
        matches!(self.intent_signing, IntentSigning::NotaryIsSignatory)
    }

    pub fn intent_signer_entities_or_empty(&self) -> Vec<Entity> {
        match &self.intent_signing {
            IntentSigning::NotaryIsSignatory => Vec::new(),
            IntentSigning::IntentSigners(signers) => signers.iter().cloned().collect(),
        }
    }

    pub fn contains_account(&self, address: &AccountAddress) -> bool {
        match &self.intent_signing {
            IntentSigning::NotaryIsSignatory => false,
            IntentSigning::IntentSigners(signers) => signers.iter().any(|e| e.is_account(address)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FactorSourceKind {
    Device,
    LedgerHqHardwareWallet,
    OffDeviceMnemonic,
    ArculusCard,
}

/// An entity together with how many instances of a factor it needs signed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signer {
    pub entity: Entity,
    pub factor_instances_required: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningFactor {
    pub factor_source_id: String,
    pub signers: NonEmpty<Signer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SigningFactors(pub BTreeMap<FactorSourceKind, NonEmpty<SigningFactor>>);

impl SigningFactors {
    pub fn expected_signature_count(&self) -> usize {
        self.0
            .values()
            .flat_map(|factors| factors.iter())
            .flat_map(|factor| factor.signers.iter())
            .map(|signer| signer.factor_instances_required)
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignTransactionPurpose {
    ManifestFromDapp,
    InternalManifest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigningPurpose {
    SignAuth,
    SignTransaction(SignTransactionPurpose),
}
