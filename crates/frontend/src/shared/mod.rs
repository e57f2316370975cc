pub mod api_utils;
pub mod coerce;
pub mod export;
pub mod fetch;
pub mod format;
