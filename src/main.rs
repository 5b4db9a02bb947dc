/*
MIT License

Copyright (c) 2026 qwell-rs contributors
All rights reserved.
*/

//! Main executable for qwell-rs

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    qwell_rs::cli::run()
}
