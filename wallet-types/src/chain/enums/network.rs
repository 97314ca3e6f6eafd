use crate::constant::{network_hrp, network_id, network_name, xrd_address};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    Mainnet,
    Stokenet,
    Simulator,
}

impl NetworkId {
    pub fn discriminant(&self) -> u8 {
        match self {
            NetworkId::Mainnet => network_id::MAINNET,
            NetworkId::Stokenet => network_id::STOKENET,
            NetworkId::Simulator => network_id::SIMULATOR,
        }
    }

    pub fn hrp(&self) -> &'static str {
        match self {
            NetworkId::Mainnet => network_hrp::MAINNET,
            NetworkId::Stokenet => network_hrp::STOKENET,
            NetworkId::Simulator => network_hrp::SIMULATOR,
        }
    }

    /// Address of the XRD resource on this network.
    pub fn xrd_address(&self) -> &'static str {
        match self {
            NetworkId::Mainnet => xrd_address::MAINNET,
            NetworkId::Stokenet => xrd_address::STOKENET,
            NetworkId::Simulator => xrd_address::SIMULATOR,
        }
    }

    /// Finds the network from the part of an address that follows its entity prefix.
    pub fn from_address_body(body: &str) -> Option<Self> {
        [NetworkId::Stokenet, NetworkId::Mainnet, NetworkId::Simulator]
            .into_iter()
            .find(|network| body.starts_with(&format!("{}1", network.hrp())))
    }
}

impl TryFrom<u8> for NetworkId {
    type Error = crate::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let res = match value {
            network_id::MAINNET => NetworkId::Mainnet,
            network_id::STOKENET => NetworkId::Stokenet,
            network_id::SIMULATOR => NetworkId::Simulator,
            other => return Err(crate::Error::UnknownNetworkId(other)),
        };
        Ok(res)
    }
}

impl TryFrom<&str> for NetworkId {
    type Error = crate::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_ref() {
            network_name::MAINNET => Ok(NetworkId::Mainnet),
            network_name::STOKENET => Ok(NetworkId::Stokenet),
            network_name::SIMULATOR => Ok(NetworkId::Simulator),
            _ => Err(crate::Error::UnknownNetworkName(value.to_string())),
        }
    }
}

impl std::fmt::Display for NetworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NetworkId::Mainnet => network_name::MAINNET,
            NetworkId::Stokenet => network_name::STOKENET,
            NetworkId::Simulator => network_name::SIMULATOR,
        })
    }
}
