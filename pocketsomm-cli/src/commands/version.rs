//! Version command.

use anyhow::Result;

pub fn run() -> Result<()> {
    println!("pocketsomm {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
