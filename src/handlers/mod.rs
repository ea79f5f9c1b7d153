pub mod helpers;
pub mod metrics;
pub mod pages;
