use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::quiz::animal::Animal;
use crate::quiz::error::QuizError;
use crate::quiz::index::NodeIndex;
use crate::quiz::{QuizEngine, SessionOutcome};

/// Outcome of a single play-through.
#[derive(Debug, PartialEq)]
pub enum RoundOutcome {
    /// Player reached a result.
    Finished { result_id: String, answers: usize },
    /// Player typed quit, or input ran out.
    Quit,
    /// The engine rejected the session; carries the error message.
    Aborted(String),
}

// ---------------------------------------------------------------------------
// Screens
// ---------------------------------------------------------------------------

fn show_cover(out: &mut impl Write) -> Result<()> {
    writeln!(out, "\n========================================")?;
    writeln!(out, "         動物人格測驗  ANIMAL QUIZ")?;
    writeln!(out, "========================================")?;
    writeln!(out, "Answer by number. [b] goes back, [quit] leaves.\n")?;
    Ok(())
}

fn show_result(out: &mut impl Write, animal: &Animal, friends: &[&Animal]) -> Result<()> {
    let tier = animal.tier();

    writeln!(out, "\n========================================")?;
    writeln!(out, "  {}  {}", animal.title, animal.overview)?;
    writeln!(
        out,
        "  [{}] {:<8} {}",
        tier.badge_key(),
        tier.label(),
        "★".repeat(usize::from(tier.stars()))
    )?;
    writeln!(out, "----------------------------------------")?;
    writeln!(out, "  {}", animal.description)?;

    let names: Vec<&str> = friends.iter().map(|f| f.title.as_str()).collect();
    writeln!(out, "  好朋友: {}", names.join("、"))?;
    writeln!(out, "========================================")?;
    Ok(())
}

/// Engine errors end the session, not the program.
fn abort(out: &mut impl Write, err: QuizError) -> Result<RoundOutcome> {
    warn!("Session aborted: {err}");
    writeln!(out, "\n(This session cannot continue: {err})")?;
    Ok(RoundOutcome::Aborted(err.to_string()))
}

fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let n = input.read_line(&mut line).context("failed to read input")?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Read the player's post-round choice. Returns `true` to restart.
fn prompt_restart(input: &mut impl BufRead, out: &mut impl Write) -> Result<bool> {
    loop {
        write!(out, "> ")?;
        out.flush()?;
        match read_line(input)?.map(|s| s.to_lowercase()).as_deref() {
            Some("r") => return Ok(true),
            Some("q") | None => return Ok(false),
            _ => writeln!(out, "  Press [r] to restart or [q] to quit.")?,
        }
    }
}

// ---------------------------------------------------------------------------
// Single round
// ---------------------------------------------------------------------------

pub fn play_round(
    engine: &QuizEngine<'_>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<RoundOutcome> {
    let mut session = engine.start();
    let depth = engine.questions().longest_path(NodeIndex::ENTRY);

    loop {
        let node = match engine.current_prompt(&session) {
            Ok(node) => node,
            Err(err) => return abort(out, err),
        };
        writeln!(out, "\n[{}/{}] {}", session.hops() + 1, depth, node.prompt)?;
        for (i, label) in node.labels().enumerate() {
            writeln!(out, "  {}. {}", i + 1, label)?;
        }

        write!(out, "\n> ")?;
        out.flush()?;
        let line = match read_line(input)? {
            Some(line) => line,
            None => return Ok(RoundOutcome::Quit),
        };

        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            return Ok(RoundOutcome::Quit);
        }
        if line.eq_ignore_ascii_case("b") || line.eq_ignore_ascii_case("back") {
            if engine.step_back(&mut session).is_err() {
                writeln!(out, "(Already at the first question.)")?;
            }
            continue;
        }

        let choice = match line.parse::<usize>() {
            Ok(n) if (1..=node.choices.len()).contains(&n) => n - 1,
            _ => {
                writeln!(out, "(Please pick 1-{}.)", node.choices.len())?;
                continue;
            }
        };

        debug!("Player picked choice {} on {}", choice, node.id);
        match engine.submit_choice(&mut session, choice) {
            Ok(SessionOutcome::Continued(_)) => {}
            Ok(SessionOutcome::Terminated(_)) => {
                let finished = engine
                    .result(&session)
                    .and_then(|animal| Ok((animal, engine.resolve_friends(animal)?)));
                let (animal, friends) = match finished {
                    Ok(found) => found,
                    Err(err) => return abort(out, err),
                };
                show_result(out, animal, &friends)?;
                return Ok(RoundOutcome::Finished {
                    result_id: animal.id.clone(),
                    answers: session.hops(),
                });
            }
            Err(err) => return abort(out, err),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry point: rounds in a loop until the player quits
// ---------------------------------------------------------------------------

pub fn run(engine: &QuizEngine<'_>, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    loop {
        show_cover(out)?;

        let outcome = play_round(engine, input, out)?;
        info!("Round over: {:?}", outcome);

        if outcome == RoundOutcome::Quit {
            writeln!(out, "Thanks for playing!")?;
            break;
        }

        writeln!(out, "\n  [r] Restart    [q] Quit\n")?;
        if !prompt_restart(input, out)? {
            writeln!(out, "Thanks for playing!")?;
            break;
        }

        info!("Player chose to restart");
    }

    Ok(())
}
