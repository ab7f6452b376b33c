pub mod analysis;
pub mod environment;
pub mod logging;
pub mod ranking;
pub mod sources;
pub mod web;

pub const TARGET_WEB_REQUEST: &str = "web_request";
pub const TARGET_ANALYSIS: &str = "analysis";
