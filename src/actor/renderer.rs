//! Renderer Actor: Dedicated thread for rendering to the terminal.
//!
//! Owns the double buffers and the terminal handle. Receives buffer
//! snapshots from the main loop, diffs them against what is on screen,
//! and flushes the minimal ANSI in a single write.

use super::messages::RenderCommand;
use crate::buffer::diff::{render_diff, render_full, DiffState};
use crate::buffer::Buffer;
use crate::terminal::OutputBuffer;
use crossbeam_channel::Receiver;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Renderer actor that handles terminal output.
pub struct RendererActor {
    /// Handle to the render thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

/// Internal renderer state.
struct Renderer {
    /// What is currently on screen.
    current: Buffer,
    /// The incoming frame.
    next: Buffer,
    /// Terminal-side cursor/attribute tracking.
    diff_state: DiffState,
    /// Pre-allocated ANSI output.
    output: OutputBuffer,
    /// Terminal stdout handle.
    stdout: Stdout,
    /// Whether the next render must repaint everything.
    needs_full_redraw: bool,
}

impl Renderer {
    fn new(width: u16, height: u16) -> Self {
        Self {
            current: Buffer::new(width, height),
            next: Buffer::new(width, height),
            diff_state: DiffState::new(),
            output: OutputBuffer::new(),
            stdout: io::stdout(),
            needs_full_redraw: true,
        }
    }

    /// Diff (or repaint) and flush in a single write.
    fn render(&mut self) -> io::Result<()> {
        self.output.clear();

        if self.needs_full_redraw {
            render_full(&self.next, &mut self.output, &mut self.diff_state);
            self.needs_full_redraw = false;
        } else {
            render_diff(
                &self.current,
                &self.next,
                &mut self.output,
                &mut self.diff_state,
            );
        }

        // The card never shows a cursor.
        self.output.cursor_hide();

        if !self.output.is_empty() {
            self.output.flush_to(&mut self.stdout)?;
        }

        self.current.copy_from(&self.next);
        Ok(())
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.current.resize(width, height);
        self.next.resize(width, height);
        self.needs_full_redraw = true;
        self.diff_state.reset();
    }
}

impl RendererActor {
    /// Spawn the renderer actor thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(receiver: Receiver<RenderCommand>, width: u16, height: u16) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("keepsake-render".to_string())
            .spawn(move || {
                if let Err(e) = run_loop(&receiver, &shutdown_clone, width, height) {
                    eprintln!("Render thread error: {e}");
                }
            })
            .expect("Failed to spawn render thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the render thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the render thread to finish.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Main render loop.
fn run_loop(
    receiver: &Receiver<RenderCommand>,
    shutdown: &Arc<AtomicBool>,
    width: u16,
    height: u16,
) -> io::Result<()> {
    let mut renderer = Renderer::new(width, height);

    loop {
        if shutdown.load(Ordering::Relaxed) {
            break;
        }

        // Wait for a command with a timeout so shutdown is noticed.
        if let Ok(command) = receiver.recv_timeout(Duration::from_millis(16)) {
            match command {
                RenderCommand::FullRedraw(buffer) => {
                    renderer.next = *buffer;
                    renderer.needs_full_redraw = true;
                    renderer.render()?;
                }
                RenderCommand::Update(buffer) => {
                    renderer.next = *buffer;
                    renderer.render()?;
                }
                RenderCommand::Resize { width, height } => {
                    renderer.resize(width, height);
                }
                RenderCommand::Shutdown => {
                    break;
                }
            }
        }
    }

    Ok(())
}
