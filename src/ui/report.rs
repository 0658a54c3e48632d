use crate::core::types::{DeviceInfo, Inventory, PlatformInfo};
use crate::error::Result;
use colored::*;
use std::io::Write;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Bytes to whole megabytes, truncating
pub fn format_megabytes(bytes: u64) -> String {
    format!("{}MB", bytes / BYTES_PER_MB)
}

/// Write the indented text report
///
/// With `color` set, platform headers are emphasized; the text is otherwise
/// identical.
pub fn write_text<W: Write>(out: &mut W, inventory: &Inventory, color: bool) -> Result<()> {
    let total = inventory.platforms.len();
    writeln!(out, "Number of OpenCL platforms: {}", total)?;

    for (index, platform) in inventory.platforms.iter().enumerate() {
        let header = format!("Platform #{}/{}", index + 1, total);
        if color {
            writeln!(out, "{}", header.bold().bright_cyan())?;
        } else {
            writeln!(out, "{}", header)?;
        }
        write_platform(out, platform, color)?;
    }

    Ok(())
}

fn write_platform<W: Write>(out: &mut W, platform: &PlatformInfo, color: bool) -> Result<()> {
    writeln!(out, "    Platform name: {}", platform.name)?;
    writeln!(out, "    Platform vendor: {}", platform.vendor)?;
    writeln!(out, "    Number of OpenCL devices: {}", platform.devices.len())?;

    for device in &platform.devices {
        write_device(out, device, color)?;
    }

    Ok(())
}

fn write_device<W: Write>(out: &mut W, device: &DeviceInfo, color: bool) -> Result<()> {
    let category = device.category.to_string();
    let category = if color {
        category.green().to_string()
    } else {
        category
    };

    writeln!(out, "        Platform device name: {}", device.name)?;
    writeln!(out, "        Platform device type: {}", category)?;
    writeln!(
        out,
        "        Platform device global memory size: {}",
        format_megabytes(device.global_mem_bytes)
    )?;
    writeln!(
        out,
        "        Platform device max memory alloc size: {}",
        format_megabytes(device.max_mem_alloc_bytes)
    )?;
    writeln!(
        out,
        "        Platform device max work group size: {}",
        device.max_work_group_size
    )?;

    Ok(())
}

/// Write the inventory as pretty-printed JSON
pub fn write_json<W: Write>(out: &mut W, inventory: &Inventory) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, inventory)?;
    writeln!(out)?;
    Ok(())
}
