//! This crate provides the web access control authorization
//! engine guarding resources of a linked data platform storage
//! space. It resolves the set of access modes a session holds on
//! a target resource by walking the resource's ancestor chain and
//! folding the applicable authorization statements.
//!

#![warn(missing_docs)]
#![cfg_attr(doc_cfg, feature(doc_auto_cfg))]
#![deny(unused_qualifications)]

pub mod cache;
pub mod engine;
pub mod evaluator;
pub mod group;
pub mod model;
