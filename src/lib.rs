//! Hexa AI - MBTI relationship coaching backend
//!
//! Users hold a short consult with an AI counselor and receive an analysis
//! of their relationship situation, convert messages into tones that suit
//! the receiver's MBTI, and the crawler ingests article analyses.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
