pub mod earning;
pub mod stats;
pub mod timeframe;
