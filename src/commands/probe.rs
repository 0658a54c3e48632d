use crate::core::collector::collect_inventory;
use crate::core::config::{OutputFormat, ProbeConfig};
use crate::core::driver::OpenClApi;
use crate::platform::opencl::DynamicOpenCl;
use crate::ui::report;
use anyhow::{Context, Result};
use std::io::{self, IsTerminal, Write};

pub fn execute(config: &ProbeConfig) -> Result<()> {
    let driver = DynamicOpenCl::from_config(config);

    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let mut out = stdout.lock();

    run(&driver, config.format, color, &mut out)?;

    if let Some(path) = driver.loaded_from() {
        log::debug!("Report generated using {}", path.display());
    }

    Ok(())
}

/// Collect the inventory from `api` and write it to `out`
///
/// Nothing is written unless the whole inventory was collected.
pub fn run<A, W>(api: &A, format: OutputFormat, color: bool, out: &mut W) -> Result<()>
where
    A: OpenClApi + ?Sized,
    W: Write,
{
    let inventory = collect_inventory(api).context("OpenCL enumeration failed")?;

    match format {
        OutputFormat::Text => report::write_text(out, &inventory, color)?,
        OutputFormat::Json => report::write_json(out, &inventory)?,
    }
    out.flush().context("Failed to flush report")?;

    Ok(())
}
