// src/engine/runtime.rs

use std::fmt;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::board::Board;
use crate::errors::Result;
use crate::store::BoardSnapshot;

use super::{BoardCommand, EngineStep};

/// Feeds `BoardCommand`s from a channel into a [`Board`].
///
/// This is a thin IO shell: all drag semantics live in the synchronous
/// board and engine. Commands are handled one at a time, in arrival order,
/// on the task that awaits [`BoardRuntime::run`].
pub struct BoardRuntime {
    board: Board,
    command_rx: mpsc::Receiver<BoardCommand>,
}

impl fmt::Debug for BoardRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardRuntime")
            .field("board", &self.board)
            .finish_non_exhaustive()
    }
}

impl BoardRuntime {
    pub fn new(board: Board, command_rx: mpsc::Receiver<BoardCommand>) -> Self {
        Self { board, command_rx }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Main command loop.
    ///
    /// - Consumes `BoardCommand`s from `command_rx`.
    /// - Routes input through the sensors and CRUD calls into the store.
    /// - Stops on `Shutdown` or when every sender is dropped.
    ///
    /// Returns the final board order.
    pub async fn run(mut self) -> Result<BoardSnapshot> {
        info!("taskboard runtime started");

        while let Some(command) = self.command_rx.recv().await {
            debug!(?command, "runtime received command");

            if matches!(command, BoardCommand::Shutdown) {
                info!("shutdown requested; stopping runtime");
                break;
            }

            self.execute(command);
        }

        info!(
            phase = ?self.board.phase(),
            revision = self.board.store().revision(),
            "runtime exiting"
        );
        Ok(self.board.snapshot())
    }

    /// Apply one command. CRUD failures are logged, never fatal.
    fn execute(&mut self, command: BoardCommand) {
        let steps = match command {
            BoardCommand::Pointer(input) => self.board.handle_pointer(&input),
            BoardCommand::Tick { at_ms } => self.board.tick(at_ms),
            BoardCommand::Key(key) => self.board.handle_key(key),
            BoardCommand::Focus(task) => {
                self.board.focus(task);
                Vec::new()
            }
            BoardCommand::Drag(event) => vec![self.board.dispatch(event)],
            BoardCommand::Create(new) => {
                match self.board.create_task(new) {
                    Ok(id) => info!(task = %id, "task created"),
                    Err(e) => warn!(error = %e, "create rejected"),
                }
                Vec::new()
            }
            BoardCommand::Edit { id, patch } => {
                if let Err(e) = self.board.edit_task(&id, patch) {
                    warn!(task = %id, error = %e, "edit rejected");
                }
                Vec::new()
            }
            BoardCommand::Delete { id } => {
                match self.board.delete_task(&id) {
                    Ok(_) => info!(task = %id, "task deleted"),
                    Err(e) => warn!(task = %id, error = %e, "delete rejected"),
                }
                Vec::new()
            }
            BoardCommand::Shutdown => Vec::new(),
        };

        log_steps(&steps);
    }
}

fn log_steps(steps: &[EngineStep]) {
    for step in steps {
        debug!(outcome = ?step.outcome, phase = ?step.phase, "engine step");
    }
}
