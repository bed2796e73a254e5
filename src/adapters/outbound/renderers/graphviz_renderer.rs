use super::{with_extension_appended, DotDocument};
use crate::adapters::outbound::filesystem::OutputFileWriter;
use crate::application::dto::{LayoutEngine, OutputFormat};
use crate::ports::outbound::GraphRenderer;
use crate::shared::error::DepgraphError;
use crate::shared::Result;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

/// Graphviz executable looked up on PATH when no explicit program is given
pub const DEFAULT_GRAPHVIZ_PROGRAM: &str = "dot";

/// GraphvizRenderer adapter drawing the graph with the Graphviz executable
///
/// Nodes and edges are collected into DOT source, which `render` pipes to
/// `<program> -K<engine> -T<format> -o <output>`.
pub struct GraphvizRenderer {
    document: DotDocument,
    engine: LayoutEngine,
    format: OutputFormat,
    program: PathBuf,
}

impl GraphvizRenderer {
    pub fn new(engine: LayoutEngine, format: OutputFormat) -> Self {
        Self::with_program(engine, format, PathBuf::from(DEFAULT_GRAPHVIZ_PROGRAM))
    }

    pub fn with_program(engine: LayoutEngine, format: OutputFormat, program: PathBuf) -> Self {
        Self {
            document: DotDocument::new(),
            engine,
            format,
            program,
        }
    }

    fn render_error(&self, output: &Path, details: String, hint: &str) -> anyhow::Error {
        DepgraphError::RenderError {
            output: output.to_path_buf(),
            details,
            hint: hint.to_string(),
        }
        .into()
    }

    fn command(&self, output: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg(format!("-K{}", self.engine))
            .arg(format!("-T{}", self.format.extension()))
            .arg("-o")
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        command
    }
}

impl GraphRenderer for GraphvizRenderer {
    fn add_node(&mut self, name: &str) {
        self.document.add_node(name);
    }

    fn add_edge(&mut self, from: &str, to: &str) {
        self.document.add_edge(from, to);
    }

    fn render(&mut self, output: &Path) -> Result<PathBuf> {
        let output = with_extension_appended(output, self.format.extension());
        OutputFileWriter::validate_output_path(&output)?;

        let mut child = self.command(&output).spawn().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                self.render_error(
                    &output,
                    format!("Graphviz executable '{}' was not found", self.program.display()),
                    "Install Graphviz (e.g. `apt install graphviz`), pass --graphviz-bin, or use --format dot",
                )
            } else {
                self.render_error(
                    &output,
                    format!("Failed to start '{}': {}", self.program.display(), e),
                    "Check that the Graphviz executable is runnable",
                )
            }
        })?;

        // stdin is fed from its own thread while stderr is drained here, so a
        // chatty Graphviz cannot block on a full pipe
        let source = self.document.source();
        let stdin = child.stdin.take();
        let (result, sent) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(source.as_bytes()),
                None => Ok(()),
            });
            let result = child.wait_with_output();
            (result, writer.join())
        });

        match sent {
            Ok(Ok(())) => {}
            // Graphviz exited early; its status is checked below
            Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => {
                return Err(self.render_error(
                    &output,
                    format!("Failed to send graph to Graphviz: {}", e),
                    "Check that the Graphviz executable is runnable",
                ));
            }
            Err(_) => {
                return Err(self.render_error(
                    &output,
                    "Graphviz input writer panicked".to_string(),
                    "Check that the Graphviz executable is runnable",
                ));
            }
        }

        let result = result.map_err(|e| {
            self.render_error(
                &output,
                format!("Failed to wait for Graphviz: {}", e),
                "Check that the Graphviz executable is runnable",
            )
        })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(self.render_error(
                &output,
                format!("Graphviz exited with {}: {}", result.status, stderr.trim()),
                &format!(
                    "Verify that the '{}' layout engine and '{}' format are supported by your Graphviz build",
                    self.engine, self.format
                ),
            ));
        }

        Ok(output)
    }
}
