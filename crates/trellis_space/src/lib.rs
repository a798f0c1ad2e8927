//! This crate provides abstractions for modeling resources in a
//! linked data platform storage space, and the contract through
//! which other components look them up.
//!

#![warn(missing_docs)]
#![cfg_attr(doc_cfg, feature(doc_auto_cfg))]
#![deny(unused_qualifications)]

pub mod resource;
pub mod service;
