//! Test suite for Todolist
//!
//! This module organizes all tests

pub mod common;
