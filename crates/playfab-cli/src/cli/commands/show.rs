//! `playfab show` – print the effective shared settings.

use playfab_core::settings::SharedSettings;
use playfab_core::{BUILD_IDENTIFIER, VERSION_STRING};

pub fn run_show(settings: &SharedSettings) {
    println!("{VERSION_STRING} (build {BUILD_IDENTIFIER})");
    println!();
    row(
        "title_id",
        if settings.title_id.is_empty() {
            "-"
        } else {
            &settings.title_id
        },
    );
    row_opt("vertical_name", settings.vertical_name.as_deref());
    row_opt(
        "production_environment_url",
        settings.production_environment_url.as_deref(),
    );
    row(
        "developer_secret_key",
        if settings.developer_secret_key.is_some() {
            "set (redacted)"
        } else {
            "-"
        },
    );
    row(
        "request_transport",
        &format!("{:?}", settings.request_transport).to_lowercase(),
    );
    row("request_timeout_ms", &settings.request_timeout_ms.to_string());
    row("request_keep_alive", &settings.request_keep_alive.to_string());
    row("compress_api_data", &settings.compress_api_data.to_string());
    row("log_level", settings.log_level.filter_directive());
    row_opt("logger_host", settings.logger_host.as_deref());
    row("logger_port", &settings.logger_port.to_string());
    row(
        "enable_real_time_logging",
        &settings.enable_real_time_logging.to_string(),
    );
    row("log_cap_limit", &settings.log_cap_limit.to_string());
    row(
        "disable_advertising",
        &settings.disable_advertising.to_string(),
    );
    row(
        "disable_device_info",
        &settings.disable_device_info.to_string(),
    );
    row(
        "disable_focus_time_collection",
        &settings.disable_focus_time_collection.to_string(),
    );
    row_opt("local_api_server", settings.local_api_server.as_deref());
}

fn row(name: &str, value: &str) {
    println!("{name:<30} {value}");
}

fn row_opt(name: &str, value: Option<&str>) {
    row(name, value.filter(|v| !v.is_empty()).unwrap_or("-"));
}
