pub mod monitor;

pub use monitor::{MonitorConfig, load_monitor_config};
