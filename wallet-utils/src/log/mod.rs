use chrono::Local;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub const DEFAULT_LOG_LEVEL: &str = "info";

static LOG_LEVEL: once_cell::sync::Lazy<std::sync::RwLock<Option<String>>> =
    once_cell::sync::Lazy::new(|| std::sync::RwLock::new(None));

pub fn set_log_level(level: &str) {
    if let Ok(mut log_level_lock) = LOG_LEVEL.write() {
        *log_level_lock = Some(level.to_string());
    }
}

pub fn get_log_level() -> String {
    LOG_LEVEL
        .read()
        .ok()
        .and_then(|lock| lock.clone())
        .unwrap_or(DEFAULT_LOG_LEVEL.to_string())
}

pub fn init_test_log() {
    // 多个测试共用一个进程，重复初始化直接忽略
    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn init_log(level: Option<&str>) -> Result<(), crate::Error> {
    use tracing_subscriber::EnvFilter;

    // 未指定时沿用之前 set_log_level 设置的级别
    if let Some(level) = level {
        set_log_level(level);
    }
    let level = get_log_level();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .event_format(CustomEventFormat)
        .try_init()
        .map_err(|e| crate::Error::Other(format!("init log failed: {e}")))?;

    tracing::info!("[init log] Init log success");
    Ok(())
}

// 自定义事件格式实现
struct CustomEventFormat;

impl<S, N> FormatEvent<S, N> for CustomEventFormat
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        // 时间
        write!(writer, "{} ", Local::now().format("%Y-%m-%d %H:%M:%S"))?;

        // 日志级别
        write!(writer, "{} ", meta.level())?;

        // 日志目标
        write!(writer, "{} ", meta.target())?;

        // 事件字段
        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
