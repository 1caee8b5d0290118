//! `fcu-overlay` - replay recorded FCU host data through the overlay panel
//!
//! Usage: `fcu-overlay <replay.json>`
//!
//! Each frame is applied to an in-memory host, the panel is refreshed and the
//! lines that fit in the configured window are printed to stdout. When serial
//! passthrough is enabled in the configuration, the panel is also written to
//! the configured port.

use anyhow::{Context, Result};
use fcu_overlay::{
    config::{ConfigManager, SerialPreferences},
    host::MemoryHost,
    panel::{FcuPanel, LineLayout, TextRenderer, render_lines},
    replay,
    serial::{DeviceFileTransport, PortId, SerialLink},
    utils,
};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, warn};

fn main() -> Result<()> {
    let replay_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("Usage: fcu-overlay <replay.json>")?;

    let data_dir = ConfigManager::ensure_config_dir().context("Failed to create data directory")?;
    utils::init_logging(&data_dir).context("Failed to initialize logging system")?;

    let config = ConfigManager::load().context("Failed to load overlay configuration")?;
    if !ConfigManager::get_config_path().exists() {
        // Leave an editable file behind on first run
        if let Err(e) = ConfigManager::save(&config) {
            warn!("Could not write default configuration: {}", e);
        }
    }

    let frames = replay::load_frames(&replay_path)
        .with_context(|| format!("Failed to read replay file {}", replay_path.display()))?;
    info!(
        "Replaying {} frame(s) from {}",
        frames.len(),
        replay_path.display()
    );

    let mut link = open_serial_link(&config.serial);
    let layout = LineLayout::from_geometry(&config.window);
    let interval = Duration::from_millis(config.refresh_interval_ms);

    let mut panel = FcuPanel::new(&config.signals);
    let mut host = MemoryHost::new();
    let mut renderer = TextRenderer::new();
    let mut out = std::io::stdout().lock();

    for (index, frame) in frames.iter().enumerate() {
        replay::apply_frame(&mut host, frame);

        let lines = match link.as_mut() {
            Some(link) => panel.refresh_with_link(&host, link),
            None => panel.refresh(&host),
        };

        let drawn = render_lines(&mut renderer, &layout, &lines);
        if drawn < lines.len() {
            debug!("Frame {}: {} line(s) clipped", index, lines.len() - drawn);
        }

        for line in renderer.take() {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        out.flush()?;

        if index + 1 < frames.len() {
            std::thread::sleep(interval);
        }
    }

    info!("Replay finished");
    Ok(())
}

/// Open the configured serial port, if passthrough is enabled
///
/// A port that fails to open still yields a link, so the failure shows up in
/// the status lines.
fn open_serial_link(prefs: &SerialPreferences) -> Option<SerialLink<DeviceFileTransport>> {
    if !prefs.enabled {
        return None;
    }

    let mut link = SerialLink::new(DeviceFileTransport::default(), prefs.baud_rate);
    link.refresh_ports();

    if let Some(port) = &prefs.last_port
        && let Err(e) = link.connect(&PortId::new(port.as_str()))
    {
        warn!("Serial passthrough disabled: {}", e);
    }
    Some(link)
}
