//! Graphviz rendering
//!
//! Pipes DOT source through the Graphviz `dot` binary to produce an image
//! or document. The result is never read back.

use crate::{Error, Result};
use anyhow::Context;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Output formats accepted by `dot -T`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RenderFormat {
    #[default]
    Pdf,
    Png,
    Svg,
    Jpg,
    Gif,
    Bmp,
    Ps,
    Eps,
    Json,
    Plain,
    Dot,
}

impl RenderFormat {
    /// The `-T` argument and file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            RenderFormat::Pdf => "pdf",
            RenderFormat::Png => "png",
            RenderFormat::Svg => "svg",
            RenderFormat::Jpg => "jpg",
            RenderFormat::Gif => "gif",
            RenderFormat::Bmp => "bmp",
            RenderFormat::Ps => "ps",
            RenderFormat::Eps => "eps",
            RenderFormat::Json => "json",
            RenderFormat::Plain => "plain",
            RenderFormat::Dot => "dot",
        }
    }

    /// Path of the rendered file: `filename` with exactly one `.{format}` extension
    pub fn target_path(&self, filename: impl Into<PathBuf>) -> PathBuf {
        let path = filename.into();
        if path.extension().is_some_and(|ext| ext == self.extension()) {
            return path;
        }
        let mut name = path.into_os_string();
        name.push(".");
        name.push(self.extension());
        PathBuf::from(name)
    }
}

/// Runs the Graphviz layout binary
#[derive(Debug, Clone)]
pub struct Renderer {
    dot_binary: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new("dot")
    }
}

impl Renderer {
    pub fn new(dot_binary: impl Into<String>) -> Self {
        Self {
            dot_binary: dot_binary.into(),
        }
    }

    /// Render `source` into `filename` (extension added as needed) and
    /// return the path written.
    pub fn render(&self, source: &str, filename: &Path, format: RenderFormat) -> Result<PathBuf> {
        crate::ensure!(!self.dot_binary.is_empty(), "No Graphviz binary configured");

        let target = format.target_path(filename);
        tracing::info!("Rendering {} to {:?}", format.extension(), target);

        let mut child = Command::new(&self.dot_binary)
            .arg(format!("-T{}", format.extension()))
            .arg("-o")
            .arg(&target)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| {
                format!("Failed to run {:?}; is Graphviz installed?", self.dot_binary)
            })?;

        if let Some(mut stdin) = child.stdin.take()
            && let Err(e) = stdin.write_all(source.as_bytes())
            // the exit status below explains an early exit better
            && e.kind() != ErrorKind::BrokenPipe
        {
            return Err(e.into());
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Error::render(format!(
                "{} exited with {}: {}",
                self.dot_binary,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        tracing::debug!("Wrote {:?}", target);
        Ok(target)
    }
}

/// Open `path` with the platform's default viewer, without waiting for it
pub fn open_in_viewer(path: &Path) -> Result<()> {
    let mut command = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]);
        command
    } else {
        Command::new("xdg-open")
    };

    command
        .arg(path)
        .spawn()
        .with_context(|| format!("Failed to open {:?} in a viewer", path))?;
    Ok(())
}
