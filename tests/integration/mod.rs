//! Integration tests for card snapshots and dump documents

mod cli_commands;
mod fs_snapshot;
mod malformed_input;
mod round_trip;
