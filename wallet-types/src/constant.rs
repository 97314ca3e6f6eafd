pub mod network_id {
    pub const MAINNET: u8 = 0x01;
    pub const STOKENET: u8 = 0x02;
    pub const SIMULATOR: u8 = 0xf2;
}

pub mod network_name {
    pub const MAINNET: &str = "mainnet";
    pub const STOKENET: &str = "stokenet";
    pub const SIMULATOR: &str = "simulator";
}

/// Bech32m human readable part suffix of each network, e.g. `account_rdx1...`.
pub mod network_hrp {
    pub const MAINNET: &str = "rdx";
    pub const STOKENET: &str = "tdx_2_";
    pub const SIMULATOR: &str = "sim";
}

pub mod address_prefix {
    pub const ACCOUNT: &str = "account_";
    pub const IDENTITY: &str = "identity_";
    pub const RESOURCE: &str = "resource_";
}

pub mod xrd_address {
    pub const MAINNET: &str =
        "resource_rdx1tknxxxxxxxxxradxrdxxxxxxxxx009923554798xxxxxxxxxradxrd";
    pub const STOKENET: &str =
        "resource_tdx_2_1tknxxxxxxxxxradxrdxxxxxxxxx009923554798xxxxxxxxxtfd2jc";
    pub const SIMULATOR: &str =
        "resource_sim1tknxxxxxxxxxradxrdxxxxxxxxx009923554798xxxxxxxxxakj8n3";
}
