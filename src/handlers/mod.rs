//! MCP tool handlers for Todoist server
//!
//! This module contains the implementation of all MCP tool handlers,
//! one file per resource plus the GTD review tools.

pub mod comments;
pub mod labels;
pub mod projects;
pub mod review;
pub mod sections;
pub mod tasks;
