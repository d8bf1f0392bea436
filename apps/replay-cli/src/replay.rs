//! Feed a move script through a game and report every step as a JSON line.

use std::io::{self, BufRead, Write};

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use euchre_engine::{ErrorCode, Game, Phase, Seat};

use crate::encoder::{error_object, public_state};
use crate::script::{is_skippable, ScriptLine};

/// Counts gathered over one replay.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    pub applied: usize,
    pub rejected: usize,
}

/// Replay every line of `script` against `game`, writing one JSON object per line to `out`.
///
/// Rejected moves are reported and skipped. A summary line follows once the game ends.
pub fn run<R, W>(
    game: &mut Game,
    script: R,
    out: &mut W,
    viewer: Option<Seat>,
) -> io::Result<ReplayReport>
where
    R: BufRead,
    W: Write,
{
    let mut report = ReplayReport::default();
    emit(out, &json!({ "line": 0, "state": public_state(game.state(), viewer)? }))?;

    for (idx, line) in script.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        if is_skippable(&line) {
            continue;
        }

        let step = match ScriptLine::parse(&line) {
            Ok(step) => step,
            Err(e) => {
                warn!(line = line_no, error = %e, "Unreadable script line");
                report.rejected += 1;
                let error = error_object(ErrorCode::InvalidArgument, &e.to_string());
                emit(out, &json!({ "line": line_no, "error": error }))?;
                continue;
            }
        };

        let args = step.arg_strings();
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        let entry = match game.perform_move(&step.name, step.seat, &arg_refs) {
            Ok(phase) => {
                report.applied += 1;
                json!({ "line": line_no, "state": public_state(phase, viewer)? })
            }
            Err(e) => {
                debug!(line = line_no, seat = step.seat, error = %e, "Move rejected");
                report.rejected += 1;
                json!({ "line": line_no, "error": error_object(e.code(), &e.to_string()) })
            }
        };
        emit(out, &entry)?;
    }

    if let Phase::GameOver(over) = game.state() {
        info!(winning_team = over.winning_team, "Replay reached game over");
        emit(
            out,
            &json!({
                "summary": {
                    "winning_team": over.winning_team,
                    "score": over.score,
                    "moves_applied": report.applied,
                    "moves_rejected": report.rejected,
                }
            }),
        )?;
    }

    Ok(report)
}

fn emit<W: Write>(out: &mut W, value: &Value) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    out.write_all(b"\n")
}
