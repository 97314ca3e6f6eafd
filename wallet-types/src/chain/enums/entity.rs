use super::{
    address::{AccountAddress, IdentityAddress},
    network::NetworkId,
};

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub address: AccountAddress,
    pub display_name: String,
}

impl Account {
    pub fn new(address: AccountAddress, display_name: &str) -> Self {
        Self {
            address,
            display_name: display_name.to_string(),
        }
    }

    pub fn network_id(&self) -> NetworkId {
        self.address.network_id()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    pub address: IdentityAddress,
    pub display_name: String,
}

impl Persona {
    pub fn new(address: IdentityAddress, display_name: &str) -> Self {
        Self {
            address,
            display_name: display_name.to_string(),
        }
    }
}

/// An account or persona of the wallet that may have to sign a transaction intent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "entity", rename_all = "camelCase")]
pub enum Entity {
    Account(Account),
    Persona(Persona),
}

impl Entity {
    pub fn address(&self) -> &str {
        match self {
            Entity::Account(account) => account.address.as_str(),
            Entity::Persona(persona) => persona.address.as_str(),
        }
    }

    pub fn network_id(&self) -> NetworkId {
        match self {
            Entity::Account(account) => account.address.network_id(),
            Entity::Persona(persona) => persona.address.network_id(),
        }
    }

    pub fn as_account(&self) -> Option<&Account> {
        match self {
            Entity::Account(account) => Some(account),
            Entity::Persona(_) => None,
        }
    }

    pub fn is_account(&self, address: &AccountAddress) -> bool {
        matches!(self, Entity::Account(account) if &account.address == address)
    }
}

impl From<Account> for Entity {
    fn from(value: Account) -> Self {
        Entity::Account(value)
    }
}

impl From<Persona> for Entity {
    fn from(value: Persona) -> Self {
        Entity::Persona(value)
    }
}
