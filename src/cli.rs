//! CLI infrastructure for the Teeko agent
//!
//! This module provides the command-line interface for playing
//! interactive games against the agent and analyzing positions.

pub mod commands;
pub mod output;
