//! The battle state machine.

use thiserror::Error;

use super::{BattlePhase, BattleStep, Outcome, Stage};
use crate::cards::CharacterKind;
use crate::core::{CharacterId, TeamSide, Teams, Timings};
use crate::zones::Lineup;

/// Why a fight did not start. Nothing changes in either case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FightRejection {
    #[error("Both teams must have at least one character to fight!")]
    EmptyTeam,

    #[error("A fight is already in progress")]
    InProgress,
}

/// Drives one fight at a time between the front characters of each team.
///
/// ## Exchange order
///
/// Team 2's fighter always strikes first. Team 1's fighter only strikes
/// back if it survived. A defeated fighter is marked, then removed after
/// the removal delay; the exchange is settled once that removal is done.
#[derive(Clone, Debug)]
pub struct BattleSequencer {
    timings: Timings,
    team_kinds: Teams<CharacterKind>,
    phase: BattlePhase,
    round: u32,
    fighters: Option<Teams<CharacterId>>,
}

impl BattleSequencer {
    /// Create an idle sequencer.
    #[must_use]
    pub fn new(timings: Timings, team_kinds: Teams<CharacterKind>) -> Self {
        Self {
            timings,
            team_kinds,
            phase: BattlePhase::Idle,
            round: 0,
            fighters: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// Check if a fight is in progress.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase != BattlePhase::Idle
    }

    /// Rounds started in the current (or last) fight.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The characters fighting in the current round.
    #[must_use]
    pub fn fighters(&self) -> Option<Teams<CharacterId>> {
        self.fighters
    }

    /// Start a fight. The first round starts immediately.
    pub fn start(&mut self, stage: &mut Stage<'_>) -> Result<(), FightRejection> {
        if self.is_running() {
            log::warn!("{}", FightRejection::InProgress);
            return Err(FightRejection::InProgress);
        }

        if stage.teams.iter().any(|(_, lineup)| lineup.is_empty()) {
            log::warn!("{}", FightRejection::EmptyTeam);
            return Err(FightRejection::EmptyTeam);
        }

        log::info!(
            "Fight starts: {} {} vs {} {}",
            stage.teams.team1.len(),
            self.team_kinds.team1.plural(),
            stage.teams.team2.len(),
            self.team_kinds.team2.plural()
        );

        self.round = 0;
        self.round_start(stage);
        Ok(())
    }

    /// Run a step that came due. Returns the outcome when the fight ends.
    pub fn step(&mut self, step: BattleStep, stage: &mut Stage<'_>) -> Option<Outcome> {
        log::trace!("{step:?} at {}ms", stage.scheduler.now());

        match step {
            BattleStep::ClearAttack { side } => {
                stage.renderer.clear_attack(side);
                None
            }
            _ if !self.is_running() => {
                log::debug!("Ignoring {step:?}: no fight in progress");
                None
            }
            BattleStep::RoundStart => {
                self.round_start(stage);
                None
            }
            BattleStep::Resolve => {
                self.resolve(stage);
                None
            }
            BattleStep::Strike { attacker } => {
                self.strike(attacker, stage);
                None
            }
            BattleStep::Remove { side, id } => {
                self.remove(side, id, stage);
                None
            }
            BattleStep::Announce => Some(self.announce(stage)),
        }
    }

    fn round_start(&mut self, stage: &mut Stage<'_>) {
        let (Some(front1), Some(front2)) = (stage.teams.team1.front(), stage.teams.team2.front())
        else {
            self.settle(stage);
            return;
        };

        let fighters = Teams::new(front1.id, front2.id);
        self.phase = BattlePhase::RoundStart;
        self.round += 1;
        self.fighters = Some(fighters);

        log::debug!("Round {}: {} vs {}", self.round, fighters.team1, fighters.team2);

        for side in TeamSide::ALL {
            stage.renderer.move_to_center(side, fighters[side]);
        }
        stage
            .scheduler
            .schedule(self.timings.move_to_center, BattleStep::Resolve);
    }

    fn resolve(&mut self, stage: &mut Stage<'_>) {
        self.phase = BattlePhase::Resolve;

        if !self.fighters_standing(stage.teams) {
            self.settle(stage);
            return;
        }

        stage.scheduler.schedule(
            self.timings.strike,
            BattleStep::Strike {
                attacker: TeamSide::Team2,
            },
        );
    }

    fn strike(&mut self, attacker: TeamSide, stage: &mut Stage<'_>) {
        let defender = attacker.opponent();

        let Some(fighters) = self.fighters else {
            self.settle(stage);
            return;
        };

        let Some((kind, damage)) = stage.teams[attacker]
            .get(fighters[attacker])
            .filter(|c| !c.is_defeated())
            .map(|c| (c.kind, c.attack()))
        else {
            self.settle(stage);
            return;
        };

        let target_id = fighters[defender];
        let Some(health) = stage.teams[defender]
            .get_mut(target_id)
            .map(|target| target.take_damage(damage))
        else {
            self.settle(stage);
            return;
        };

        log::debug!(
            "{attacker} {} hits {defender} {target_id} for {damage}, health now {health}",
            fighters[attacker]
        );

        stage.renderer.show_attack(attacker, kind);
        stage
            .scheduler
            .schedule(self.timings.attack_effect, BattleStep::ClearAttack { side: attacker });
        stage.renderer.update_health(defender, target_id, health);

        if health == 0 {
            log::info!("{defender} {target_id} is defeated");
            stage.renderer.mark_defeated(defender, target_id);
            stage.scheduler.schedule(
                self.timings.removal,
                BattleStep::Remove {
                    side: defender,
                    id: target_id,
                },
            );
        } else if attacker == TeamSide::Team2 {
            stage.scheduler.schedule(
                self.timings.strike,
                BattleStep::Strike {
                    attacker: TeamSide::Team1,
                },
            );
        } else {
            self.settle(stage);
        }
    }

    fn remove(&mut self, side: TeamSide, id: CharacterId, stage: &mut Stage<'_>) {
        if stage.teams[side].remove(id).is_none() {
            log::debug!("{id} already gone from {side}");
        }
        stage.renderer.remove_card(side, id);
        self.settle(stage);
    }

    /// The exchange is over: next round if both sides stand, else announce.
    fn settle(&mut self, stage: &mut Stage<'_>) {
        self.fighters = None;

        if stage.teams.iter().all(|(_, lineup)| !lineup.is_empty()) {
            self.phase = BattlePhase::RoundStart;
            stage
                .scheduler
                .schedule(self.timings.next_round, BattleStep::RoundStart);
        } else {
            self.phase = BattlePhase::Announce;
            stage
                .scheduler
                .schedule(self.timings.announce, BattleStep::Announce);
        }
    }

    fn announce(&mut self, stage: &mut Stage<'_>) -> Outcome {
        let outcome = Outcome::decide(stage.teams, &self.team_kinds);
        let message = outcome.announcement();

        log::info!("{message} (after {} rounds)", self.round);
        stage.renderer.announce(&message);

        self.phase = BattlePhase::Idle;
        self.fighters = None;
        outcome
    }

    fn fighters_standing(&self, teams: &Teams<Lineup>) -> bool {
        let Some(fighters) = self.fighters else {
            return false;
        };

        TeamSide::ALL.iter().all(|&side| {
            teams[side]
                .front()
                .is_some_and(|c| c.id == fighters[side] && !c.is_defeated())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Character;
    use crate::render::{RecordingRenderer, Renderer, VisualCue};
    use crate::schedule::{Scheduler, VirtualClock};

    struct Harness {
        teams: Teams<Lineup>,
        renderer: RecordingRenderer,
        clock: VirtualClock<BattleStep>,
        sequencer: BattleSequencer,
    }

    impl Harness {
        fn new(team1: &[(u8, u8)], team2: &[(u8, u8)]) -> Self {
            let mut next = CharacterId::FIRST;
            let mut renderer = RecordingRenderer::new(1000.0, 100.0);
            let mut teams: Teams<Lineup> = Teams::default();

            for (side, stats, kind) in [
                (TeamSide::Team1, team1, CharacterKind::Murloc),
                (TeamSide::Team2, team2, CharacterKind::Demon),
            ] {
                for &(health, attack) in stats {
                    let c = Character::new(next.bump(), kind, health, attack, "x.jpg");
                    renderer.render_card(side, &c);
                    teams[side].push(c);
                }
            }
            renderer.clear_cues();

            Self {
                teams,
                renderer,
                clock: VirtualClock::new(),
                sequencer: BattleSequencer::new(
                    Timings::default(),
                    Teams::new(CharacterKind::Murloc, CharacterKind::Demon),
                ),
            }
        }

        fn start(&mut self) -> Result<(), FightRejection> {
            let mut stage = Stage {
                teams: &mut self.teams,
                renderer: &mut self.renderer,
                scheduler: &mut self.clock,
            };
            self.sequencer.start(&mut stage)
        }

        fn run(&mut self) -> Option<Outcome> {
            let mut outcome = None;
            while let Some(step) = self.clock.next_task() {
                let mut stage = Stage {
                    teams: &mut self.teams,
                    renderer: &mut self.renderer,
                    scheduler: &mut self.clock,
                };
                if let Some(o) = self.sequencer.step(step, &mut stage) {
                    outcome = Some(o);
                }
            }
            outcome
        }
    }

    #[test]
    fn test_empty_team_rejected() {
        let mut h = Harness::new(&[(5, 5)], &[]);
        assert_eq!(h.start(), Err(FightRejection::EmptyTeam));
        assert_eq!(h.sequencer.phase(), BattlePhase::Idle);
        assert!(h.clock.is_idle());
        assert!(h.renderer.cues().is_empty());
        assert_eq!(h.teams.team1.len(), 1);
    }

    #[test]
    fn test_start_moves_fronts_to_center() {
        let mut h = Harness::new(&[(5, 5), (5, 5)], &[(5, 5)]);
        h.start().unwrap();

        assert_eq!(h.sequencer.phase(), BattlePhase::RoundStart);
        assert_eq!(h.sequencer.round(), 1);
        assert_eq!(
            h.sequencer.fighters(),
            Some(Teams::new(CharacterId(0), CharacterId(2)))
        );
        assert_eq!(
            h.renderer.cues(),
            &[
                VisualCue::MovedToCenter { side: TeamSide::Team1, id: CharacterId(0) },
                VisualCue::MovedToCenter { side: TeamSide::Team2, id: CharacterId(2) },
            ]
        );
        assert_eq!(h.clock.next_due(), Some(1000));
    }

    #[test]
    fn test_second_start_rejected_while_running() {
        let mut h = Harness::new(&[(5, 5)], &[(5, 5)]);
        h.start().unwrap();
        assert_eq!(h.start(), Err(FightRejection::InProgress));
    }

    #[test]
    fn test_team2_strikes_first_and_kills() {
        let mut h = Harness::new(&[(5, 3)], &[(3, 10)]);
        h.start().unwrap();
        let outcome = h.run().unwrap();

        assert_eq!(outcome.winner_name(), "demons");
        assert!(h.teams.team1.is_empty());
        // Team 1 never struck back.
        assert_eq!(h.teams.team2.front().unwrap().health(), 3);
        assert!(!h
            .renderer
            .cues()
            .contains(&VisualCue::AttackShown { side: TeamSide::Team1, kind: CharacterKind::Murloc }));
        assert_eq!(h.clock.now(), 2400);
        assert_eq!(h.sequencer.phase(), BattlePhase::Idle);
    }

    #[test]
    fn test_exchange_timeline() {
        let mut h = Harness::new(&[(10, 4)], &[(4, 1)]);
        h.start().unwrap();

        let mut times = Vec::new();
        while let Some(step) = h.clock.next_task() {
            times.push((h.clock.now(), step));
            let mut stage = Stage {
                teams: &mut h.teams,
                renderer: &mut h.renderer,
                scheduler: &mut h.clock,
            };
            h.sequencer.step(step, &mut stage);
        }

        let team1 = TeamSide::Team1;
        let team2 = TeamSide::Team2;
        assert_eq!(
            times,
            vec![
                (1000, BattleStep::Resolve),
                (1500, BattleStep::Strike { attacker: team2 }),
                (2000, BattleStep::ClearAttack { side: team2 }),
                (2000, BattleStep::Strike { attacker: team1 }),
                (2500, BattleStep::ClearAttack { side: team1 }),
                (2500, BattleStep::Remove { side: team2, id: CharacterId(1) }),
                (2900, BattleStep::Announce),
            ]
        );
        assert_eq!(h.teams.team1.front().unwrap().health(), 9);
    }

    #[test]
    fn test_survivors_fight_another_round() {
        let mut h = Harness::new(&[(10, 1)], &[(10, 1)]);
        h.start().unwrap();

        // One full exchange without deaths, then the next round is queued.
        while h.sequencer.round() < 2 {
            let step = h.clock.next_task().unwrap();
            let mut stage = Stage {
                teams: &mut h.teams,
                renderer: &mut h.renderer,
                scheduler: &mut h.clock,
            };
            h.sequencer.step(step, &mut stage);
        }

        assert_eq!(h.clock.now(), 3000);
        assert_eq!(h.teams.team1.front().unwrap().health(), 9);
        assert_eq!(h.teams.team2.front().unwrap().health(), 9);

        let outcome = h.run().unwrap();
        assert_eq!(outcome, Outcome::Winner { side: TeamSide::Team2, kind: CharacterKind::Demon });
        assert_eq!(h.sequencer.round(), 10);
    }

    #[test]
    fn test_next_front_steps_up() {
        let mut h = Harness::new(&[(1, 10), (2, 10)], &[(1, 1)]);
        h.start().unwrap();
        let outcome = h.run().unwrap();

        // Demon kills the first murloc, the second murloc then kills the demon.
        assert!(outcome.is_winner(TeamSide::Team1));
        let ids: Vec<_> = h.teams.team1.ids().collect();
        assert_eq!(ids, vec![CharacterId(1)]);
        assert!(h.renderer.cues().contains(&VisualCue::MovedToCenter {
            side: TeamSide::Team1,
            id: CharacterId(1)
        }));
    }

    #[test]
    fn test_stray_step_ignored_when_idle() {
        let mut h = Harness::new(&[(5, 5)], &[(5, 5)]);
        let mut stage = Stage {
            teams: &mut h.teams,
            renderer: &mut h.renderer,
            scheduler: &mut h.clock,
        };
        assert_eq!(h.sequencer.step(BattleStep::Announce, &mut stage), None);
        assert_eq!(h.sequencer.phase(), BattlePhase::Idle);
        assert!(h.renderer.cues().is_empty());
    }

    #[test]
    fn test_can_fight_again_after_announce() {
        let mut h = Harness::new(&[(10, 10), (10, 10)], &[(1, 1)]);
        h.start().unwrap();
        h.run().unwrap();

        assert_eq!(h.start(), Err(FightRejection::EmptyTeam));
        assert!(!h.sequencer.is_running());
    }
}
