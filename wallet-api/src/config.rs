use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub fee: FeeConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct LogConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    wallet_utils::log::DEFAULT_LOG_LEVEL.to_string()
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct FeeConfig {
    // 查询候选付款账户余额时是否强制刷新
    #[serde(default)]
    pub refresh_balances: bool,
}

impl Config {
    pub fn new(config_content: &str) -> Result<Self, crate::ServiceError> {
        let config: Config = wallet_utils::serde_func::serde_yaml_from_str(config_content)?;
        Ok(config)
    }

    pub fn init_log(&self) -> Result<(), crate::ServiceError> {
        wallet_utils::init_log(Some(&self.log.level))?;
        Ok(())
    }
}
