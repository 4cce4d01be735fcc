// src/lib.rs

pub mod board;
pub mod cli;
pub mod collision;
pub mod config;
pub mod engine;
pub mod errors;
pub mod layout;
pub mod logging;
pub mod sensor;
pub mod store;
pub mod types;

use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::board::Board;
use crate::cli::CliArgs;
use crate::config::{load_and_validate, load_script, BoardFile};
use crate::engine::{BoardCommand, BoardRuntime};
use crate::store::BoardSnapshot;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - board file loading
/// - the optional replay script
/// - the board runtime
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;

    let board = Board::from_config(&cfg)?;

    if args.dry_run {
        print_dry_run(&cfg, &board);
        return Ok(());
    }

    // Parse the whole script up front so a bad event fails before any input.
    let commands = match &args.script {
        Some(path) => {
            let script = load_script(path)?;
            let commands = script.commands()?;
            info!(path = %path.display(), events = commands.len(), "replay script loaded");
            Some(commands)
        }
        None => None,
    };

    let (tx, rx) = mpsc::channel::<BoardCommand>(64);

    // Ctrl-C → graceful shutdown.
    {
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(BoardCommand::Shutdown).await;
        });
    }

    // Replay producer; shuts the runtime down once the script is exhausted.
    if let Some(commands) = commands {
        let tx = tx.clone();
        tokio::spawn(async move {
            for command in commands {
                if tx.send(command).await.is_err() {
                    return;
                }
            }
            let _ = tx.send(BoardCommand::Shutdown).await;
        });
    }
    drop(tx);

    let runtime = BoardRuntime::new(board, rx);
    let snapshot = runtime.run().await?;

    print_board(&cfg, &snapshot);
    Ok(())
}

/// Print the final order of every column.
fn print_board(cfg: &BoardFile, snapshot: &BoardSnapshot) {
    for (column, ids) in &snapshot.columns {
        let title = cfg
            .column
            .iter()
            .find(|c| &c.id == column)
            .and_then(|c| c.title.as_deref())
            .unwrap_or(column.as_str());
        println!("{title} [{column}]: {}", ids.join(", "));
    }
}

/// Simple dry-run output: print columns, tasks and the measured droppables.
fn print_dry_run(cfg: &BoardFile, board: &Board) {
    println!("taskboard dry-run");
    println!(
        "  sensor.activation_distance = {}",
        cfg.sensor.activation_distance
    );
    println!("  sensor.touch_delay_ms = {}", cfg.sensor.touch_delay_ms);
    println!("  sensor.touch_tolerance = {}", cfg.sensor.touch_tolerance);
    println!("  sensor.collision_padding = {}", cfg.sensor.collision_padding);
    println!();

    println!("columns ({}):", cfg.column.len());
    for column in board.store().columns() {
        println!("  - {} ({}, ordinal {})", column.id, column.title, column.ordinal);
        for task in board.tasks_by_column(&column.id).unwrap_or_default() {
            println!("      {}: {} [{}]", task.id, task.title, task.priority);
            if !task.assignees.is_empty() {
                println!("        assignees: {:?}", task.assignees);
            }
        }
    }
    println!();

    println!("droppables ({}):", board.droppables().len());
    for (target, rect) in board.droppables().iter() {
        println!(
            "  - {target}: x={} y={} w={} h={}",
            rect.x, rect.y, rect.width, rect.height
        );
    }

    debug!("dry-run complete (no input replayed)");
}
