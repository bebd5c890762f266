// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # shiftboard
//!
//! Maintenance command line for a shiftboard database.
//!
//! - `shiftboard resync shift-type <ID>` and `shiftboard resync workline <ID>`
//!   re-apply the stored display fields to every snapshot embedding a copy,
//!   printing the audit record of each rewritten aggregate.
//! - `shiftboard history <KIND> <ID>` prints the audit history of one entity.
//!
//! Output is one JSON document per line on stdout; logs go to stderr.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use shiftboard_audit::{AuditContext, AuditRecord, Platform};
use shiftboard_domain::EntityKind;
use shiftboard_persistence::Persistence;
use time::OffsetDateTime;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[cfg(test)]
mod tests;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(args.log_level().into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .without_time()
        .init();

    args.run(&mut io::stdout().lock())
}

/// Shiftboard maintenance tool
#[derive(Debug, Parser)]
#[command(name = "shiftboard", author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to the `SQLite` database file. If not provided, uses an in-memory database.
    #[arg(short, long, env = "SHIFTBOARD_DATABASE", global = true)]
    database: Option<PathBuf>,

    /// Platform recorded on the audit records this command writes
    #[arg(long, default_value = "system", global = true)]
    platform: Platform,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Re-apply a dimension entity to every snapshot that embeds it
    #[command(subcommand)]
    Resync(ResyncTarget),

    /// Print the audit history of one entity, oldest first
    #[command(visible_alias = "h")]
    History {
        /// Entity kind: shift-type, workline, monthly-schedule or vacancy
        kind: EntityKind,

        /// Entity id
        id: Uuid,
    },
}

#[derive(Clone, Debug, Subcommand)]
enum ResyncTarget {
    /// Resynchronize a shift type
    ShiftType {
        /// Shift type id
        id: Uuid,
    },

    /// Resynchronize a workline
    Workline {
        /// Workline id
        id: Uuid,
    },
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn open(&self) -> Result<Persistence> {
        match &self.database {
            Some(path) => {
                info!(path = %path.display(), "Using file-based database");
                Persistence::new_with_file(path)
                    .wrap_err_with(|| format!("Failed to open database {}", path.display()))
            }
            None => {
                info!("Using in-memory database");
                Persistence::new_in_memory().wrap_err("Failed to create in-memory database")
            }
        }
    }

    fn run<W: Write>(self, out: &mut W) -> Result<()> {
        let mut persistence: Persistence = self.open()?;
        let ctx = AuditContext::new(
            String::from("resync"),
            self.platform,
            OffsetDateTime::now_utc(),
        );

        match self.command {
            Command::Resync(target) => {
                let synced = match target {
                    ResyncTarget::ShiftType { id } => persistence
                        .resync_shift_type(id, &ctx)
                        .wrap_err_with(|| format!("Failed to resync shift type {id}"))?,
                    ResyncTarget::Workline { id } => persistence
                        .resync_workline(id, &ctx)
                        .wrap_err_with(|| format!("Failed to resync workline {id}"))?,
                };
                info!(
                    schedules = synced.schedules.len(),
                    vacancies = synced.vacancies.len(),
                    "Resync complete"
                );
                write_records(out, synced.audit_records())
            }
            Command::History { kind, id } => {
                let records: Vec<AuditRecord> = persistence
                    .history_for(kind, id)
                    .wrap_err_with(|| format!("Failed to load history of {kind} {id}"))?;
                info!(entity = %kind, %id, records = records.len(), "Loaded history");
                write_records(out, &records)
            }
        }
    }
}

/// Writes each record as one JSON line.
fn write_records<'a, W: Write>(
    out: &mut W,
    records: impl IntoIterator<Item = &'a AuditRecord>,
) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record).wrap_err("Failed to encode audit record")?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
