//! Dialogue resolution - what a suspect says when asked about a clue.
//!
//! Resolution runs in three steps:
//! 1. **Match**: Compare the questioning style with the speaker's and the player's personalities
//! 2. **Select**: Draw a line from the category that branch uses
//! 3. **Substitute**: Name either the killer or a decoy, and add a location hint where earned
//!
//! The killer never names themselves truthfully, and a decoy is never the speaker.
//! On a partial match the decoy is never the real killer either, and red herrings
//! send the player after a decoy even when the speaker is innocent.

mod branch;

pub use branch::*;

use log::debug;
use mystery_rules::{
    fill_suspect, Clue, Npc, Personality, RulesError, CLUE_PLACEHOLDER, NONE_RESPONSES, RESPONSES,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Everything resolution needs to know about the session.
#[derive(Debug, Clone, Copy)]
pub struct DialogueContext<'a> {
    /// The whole cast, used to draw decoys.
    pub roster: &'a [Npc],
    /// The real killer.
    pub killer: &'a Npc,
    /// Name of the room whose hint reads "outside".
    pub outdoor_room: &'a str,
}

impl<'a> DialogueContext<'a> {
    /// Build a context, finding the killer in the roster.
    pub fn new(roster: &'a [Npc], outdoor_room: &'a str) -> CoreResult<Self> {
        let killer = roster
            .iter()
            .find(|npc| npc.is_killer())
            .ok_or(CoreError::RolesNotAssigned)?;
        Ok(Self {
            roster,
            killer,
            outdoor_room,
        })
    }
}

/// A resolved line of speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// The final text, placeholders already filled in.
    pub text: String,
    pub branch: MatchBranch,
    /// The suspect the line points at, if any.
    pub named: Option<String>,
    /// True if `named` is a decoy rather than the killer.
    pub misleading: bool,
}

impl Response {
    fn naming(text: String, branch: MatchBranch, named: &str, misleading: bool) -> Self {
        Self {
            text,
            branch,
            named: Some(named.to_string()),
            misleading,
        }
    }
}

/// Resolve a question about `clue`, asked in `style` by a player of personality `player`.
pub fn resolve(
    speaker: &Npc,
    clue: &Clue,
    style: Personality,
    player: Personality,
    ctx: &DialogueContext<'_>,
    rng: &mut impl Rng,
) -> CoreResult<Response> {
    let branch = MatchBranch::select(speaker.personality(), style, player);
    debug!(
        "{} asked about {} ({} style, {} player): {:?} match",
        speaker.name(),
        clue.name(),
        style,
        player,
        branch
    );

    match branch {
        MatchBranch::Perfect => {
            let line = fill_clue(pick_line(speaker, RESPONSES, rng)?, clue);

            // A perfect match gets the truth out of everyone but the killer,
            // red herring or not.
            if speaker.is_killer() {
                let decoy = choose_decoy(ctx, speaker.name(), &[speaker.name()], rng)?;
                return Ok(Response::naming(fill_suspect(&line, decoy), branch, decoy, true));
            }

            let killer = ctx.killer;
            let mut text = fill_suspect(&line, killer.name());
            text.push(' ');
            text.push_str(&location_hint(killer.room(), ctx.outdoor_room));
            Ok(Response::naming(text, branch, killer.name(), false))
        }
        MatchBranch::Partial => {
            let line = fill_clue(pick_line(speaker, RESPONSES, rng)?, clue);

            if speaker.is_killer() || clue.is_red_herring() {
                let excluded = [speaker.name(), ctx.killer.name()];
                let decoy = choose_decoy(ctx, speaker.name(), &excluded, rng)?;
                return Ok(Response::naming(fill_suspect(&line, decoy), branch, decoy, true));
            }

            let killer = ctx.killer.name();
            Ok(Response::naming(fill_suspect(&line, killer), branch, killer, false))
        }
        MatchBranch::None => {
            let line = pick_line(speaker, NONE_RESPONSES, rng)?;
            Ok(Response {
                text: line.to_string(),
                branch,
                named: None,
                misleading: false,
            })
        }
    }
}

/// Where the killer was last seen.
pub fn location_hint(room: &str, outdoor_room: &str) -> String {
    if room == outdoor_room {
        "Last I saw them, they were outside.".to_string()
    } else {
        format!("Last I saw them, they were in the {}.", room)
    }
}

fn fill_clue(template: &str, clue: &Clue) -> String {
    template.replace(CLUE_PLACEHOLDER, clue.name())
}

fn pick_line<'n>(speaker: &'n Npc, category: &str, rng: &mut impl Rng) -> CoreResult<&'n str> {
    speaker
        .templates(category)?
        .choose(rng)
        .map(String::as_str)
        .ok_or_else(|| RulesError::missing_category(speaker.name(), category).into())
}

/// Draw a living suspect whose name is not in `excluded`.
fn choose_decoy<'a>(
    ctx: &DialogueContext<'a>,
    speaker: &str,
    excluded: &[&str],
    rng: &mut impl Rng,
) -> CoreResult<&'a str> {
    let candidates: Vec<&'a str> = ctx
        .roster
        .iter()
        .filter(|npc| !npc.is_victim())
        .map(|npc| npc.name())
        .filter(|name| !excluded.iter().any(|ex| ex == name))
        .collect();

    candidates
        .choose(rng)
        .copied()
        .ok_or_else(|| CoreError::NoDecoyAvailable {
            speaker: speaker.to_string(),
        })
}
