use super::network::NetworkId;
use crate::constant::address_prefix;

macro_rules! radix_address {
    ($name:ident, $prefix:expr) => {
        #[derive(
            Clone,
            Debug,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name {
            address: String,
            network_id: NetworkId,
        }

        impl $name {
            pub fn network_id(&self) -> NetworkId {
                self.network_id
            }

            pub fn as_str(&self) -> &str {
                &self.address
            }
        }

        impl TryFrom<&str> for $name {
            type Error = crate::Error;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                let network_id = parse_network($prefix, value)?;
                Ok(Self {
                    address: value.to_string(),
                    network_id,
                })
            }
        }

        impl TryFrom<String> for $name {
            type Error = crate::Error;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::try_from(value.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.address
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.address
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.address)
            }
        }
    };
}

radix_address!(AccountAddress, address_prefix::ACCOUNT);
radix_address!(IdentityAddress, address_prefix::IDENTITY);
radix_address!(ResourceAddress, address_prefix::RESOURCE);

fn parse_network(prefix: &str, value: &str) -> Result<NetworkId, crate::Error> {
    let body = value
        .strip_prefix(prefix)
        .ok_or_else(|| crate::Error::InvalidAddress(value.to_string()))?;
    NetworkId::from_address_body(body).ok_or_else(|| crate::Error::InvalidAddress(value.to_string()))
}

impl ResourceAddress {
    pub fn xrd(network_id: NetworkId) -> Self {
        Self {
            address: network_id.xrd_address().to_string(),
            network_id,
        }
    }

    pub fn is_xrd(&self) -> bool {
        self.address == self.network_id.xrd_address()
    }
}
