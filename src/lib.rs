//! Survey Report Library
//!
//! Descriptive-statistics report generator for the Stack Overflow 2021
//! developer survey.
//!
//! Module organization:
//! - `data`: CSV loading, sentinel preprocessing, grouped aggregation
//! - `charts`: bar/pie/boxplot rendering to SVG
//! - `report`: narrative sections and markdown assembly
//! - `pipeline`: the load → clean → group → render batch run
//! - `config`: report configuration
//! - `schema`: fixed survey column names

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod schema;
