//! Role assignment - who dies, who did it, and why.
//!
//! The victim is picked first. The killer is then drawn from the characters
//! allowed to be the killer, excluding the victim, and must have a motive
//! authored against that victim. A victim nobody can have killed is re-rolled.

use log::{debug, info};
use mystery_rules::{Npc, RulesError};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{CoreError, CoreResult};

/// The outcome of role assignment, as indices into the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    pub victim: usize,
    pub killer: usize,
    /// Other possible killers with no motive authored against the victim.
    pub suspects_without_motive: Vec<String>,
}

/// Reset every character's role and motive.
pub fn clear_roles(roster: &mut [Npc]) {
    for npc in roster.iter_mut() {
        npc.clear_roles();
    }
}

/// Pick a random victim and build the scenario around them.
///
/// Victims are tried in random order until one admits a killer with a motive.
/// If none does, the error for the last victim tried is returned.
pub fn assign_roles(roster: &mut [Npc], rng: &mut impl Rng) -> CoreResult<RoleAssignment> {
    if roster.is_empty() {
        return Err(CoreError::EmptyRoster);
    }

    let mut victims: Vec<usize> = (0..roster.len()).collect();
    victims.shuffle(rng);

    let mut last_error = None;
    for victim in victims {
        let victim_name = roster[victim].name().to_string();
        match assign_roles_for_victim(roster, &victim_name, rng) {
            Ok(assignment) => return Ok(assignment),
            Err(err) => {
                debug!("Cannot build a scenario around {}: {}", victim_name, err);
                last_error = Some(err);
            }
        }
    }

    Err(last_error.unwrap_or(CoreError::EmptyRoster))
}

/// Build the scenario around a chosen victim.
///
/// On failure every role is cleared again, so the roster can be retried.
pub fn assign_roles_for_victim(
    roster: &mut [Npc],
    victim_name: &str,
    rng: &mut impl Rng,
) -> CoreResult<RoleAssignment> {
    let victim = roster
        .iter()
        .position(|npc| npc.name() == victim_name)
        .ok_or_else(|| CoreError::UnknownNpc(victim_name.to_string()))?;

    clear_roles(roster);
    // Roles were just cleared, so nobody is the killer yet.
    roster[victim].set_victim();

    let mut candidates: Vec<usize> = roster
        .iter()
        .enumerate()
        .filter(|(i, npc)| *i != victim && npc.can_be_killer())
        .map(|(i, _)| i)
        .collect();
    candidates.shuffle(rng);

    let mut missing_motive: Option<RulesError> = None;
    let mut killer = None;
    for candidate in candidates.iter().copied() {
        if let Err(err) = roster[candidate].set_motive(victim_name) {
            missing_motive = Some(err);
            continue;
        }
        if roster[candidate].set_killer() {
            killer = Some(candidate);
            break;
        }
    }

    let Some(killer) = killer else {
        clear_roles(roster);
        return Err(match missing_motive {
            Some(err) => err.into(),
            None => CoreError::NoEligibleKiller {
                victim: victim_name.to_string(),
            },
        });
    };

    let mut suspects_without_motive = Vec::new();
    for &suspect in candidates.iter().filter(|&&c| c != killer) {
        if roster[suspect].motive().is_none() && roster[suspect].set_motive(victim_name).is_err() {
            suspects_without_motive.push(roster[suspect].name().to_string());
        }
    }

    info!(
        "{} killed {}: {}",
        roster[killer].name(),
        victim_name,
        roster[killer].motive().unwrap_or_default()
    );

    Ok(RoleAssignment {
        victim,
        killer,
        suspects_without_motive,
    })
}
