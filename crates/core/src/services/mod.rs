pub mod format_service;
pub mod series_service;
pub mod stats_service;
