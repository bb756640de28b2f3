//! `depot package` — invoke the external build toolchain.

use std::process::Command;

use anyhow::Result;
use log::debug;

use crate::commands::project_store;

/// Run `depot package [--no-wheel] [--no-sdist]` — build the requested
/// distribution formats by shelling out to the packaging toolchain.
///
/// # Errors
///
/// This function reports build failures as output rather than errors; it
/// only fails on internal I/O problems.
pub fn run_package(no_wheel: bool, no_sdist: bool) -> Result<()> {
    if project_store().is_none() {
        return Ok(());
    }

    let mut args = vec!["-m", "build"];
    if !no_wheel {
        args.push("--wheel");
    }
    if !no_sdist {
        args.push("--sdist");
    }
    if args.len() == 2 {
        println!("No formats to build!");
        return Ok(());
    }

    debug!("python3 {}", args.join(" "));
    match Command::new("python3").args(&args).status() {
        Ok(status) if status.success() => println!("Package built"),
        Ok(status) => println!(
            "Build failed with status {}",
            status.code().unwrap_or(-1)
        ),
        Err(cause) => println!("Failed to run the build toolchain: {cause}"),
    }
    Ok(())
}
