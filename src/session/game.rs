//! `GameSession` implementation.

use tracing::{info, warn};

use crate::core::{Coordinate, Error, Mark, PlayerActionBudget, PlayerId, Result, SessionConfig};
use crate::grid::Grid;
use crate::paths::PathCatalog;
use crate::rules::{ConnectivityJudge, PropagationSummary};

/// What an applied action did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Counts from the propagation pass that followed the action.
    pub propagation: PropagationSummary,
    /// Adjustment applied to the actor's remaining actions.
    pub adjustment: i32,
    /// The actor's turn ended with this action.
    pub turn_ended: bool,
    /// Cell hit by a cannon shot.
    pub target: Option<Coordinate>,
}

/// Owns the grid, the judge, and one action budget per player.
///
/// Players are seated in mark order (`X`, `O`, `A`, ...). The first player
/// starts with one action. When a budget is spent the next seat that can
/// still place gets a fresh single action; when no seat can place, the game
/// is over.
///
/// ## Example
///
/// ```
/// use mark_link::core::{Coordinate, Mark, SessionConfig};
/// use mark_link::session::GameSession;
///
/// let mut session = GameSession::new(SessionConfig::new(2));
/// assert_eq!(session.grid().width(), 9);
///
/// session.place(Coordinate::new(0, 0)).unwrap();
/// assert_eq!(session.grid().root_of(Mark('X')), Some(Coordinate::new(0, 0)));
/// assert_eq!(session.active_mark(), Mark('O'));
/// ```
#[derive(Clone, Debug)]
pub struct GameSession {
    judge: ConnectivityJudge,
    grid: Grid,
    budgets: Vec<PlayerActionBudget>,
    active: PlayerId,
    over: bool,
}

impl GameSession {
    /// Create a session with the built-in path catalog.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_catalog(config, PathCatalog::default())
    }

    /// Create a session with an injected path catalog.
    ///
    /// # Panics
    ///
    /// If `config` fails [`SessionConfig::validate`].
    #[must_use]
    pub fn with_catalog(config: SessionConfig, catalog: PathCatalog) -> Self {
        if let Err(err) = config.validate() {
            panic!("{}", err);
        }
        let side = config.side();
        let budgets = Mark::first(config.player_count)
            .map(PlayerActionBudget::new)
            .collect();

        Self {
            judge: ConnectivityJudge::with_catalog(config.options, catalog),
            grid: Grid::square(side),
            budgets,
            active: PlayerId::new(0),
            over: false,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn judge(&self) -> &ConnectivityJudge {
        &self.judge
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.budgets.len()
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn active_mark(&self) -> Mark {
        self.budgets[self.active.index()].mark
    }

    #[must_use]
    pub fn budget(&self, player: PlayerId) -> &PlayerActionBudget {
        &self.budgets[player.index()]
    }

    #[must_use]
    pub fn budgets(&self) -> &[PlayerActionBudget] {
        &self.budgets
    }

    /// True once no player has a legal placement left.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    // === Actions ===

    /// Place the active mark at `c`. The first placement becomes the root.
    pub fn place(&mut self, c: Coordinate) -> Result<ActionOutcome> {
        self.ensure_playable(c)?;
        let mark = self.active_mark();

        if !self.judge.check_placement_legal(&self.grid, c, mark) {
            warn!(%c, %mark, "illegal placement rejected");
            return Err(Error::IllegalPlacement { coordinate: c, mark });
        }

        let before = self.grid.clone();
        self.grid.set_mark(c, Some(mark));
        if self.grid.register_root(mark, c) {
            info!(%mark, root = %c, "root registered");
        }

        Ok(self.finish_action(&before, None))
    }

    /// Turn the active mark's cell at `c` into a cannon.
    pub fn make_cannon(&mut self, c: Coordinate) -> Result<ActionOutcome> {
        self.ensure_playable(c)?;
        let mark = self.active_mark();

        if !self.judge.check_cannon_eligible(&self.grid, c, mark) {
            warn!(%c, %mark, "cannon change rejected");
            return Err(Error::CannonNotAllowed { coordinate: c, mark });
        }

        let before = self.grid.clone();
        self.grid.update_status(c, |s| s.is_cannon = true);

        Ok(self.finish_action(&before, None))
    }

    /// Fire the active mark's cannon at `c` towards `direction`.
    ///
    /// The hit cell is emptied (its root flag, if any, survives) and the
    /// cannon's shot is spent. A blocked or wasted shot is rejected and
    /// leaves the cannon loaded.
    pub fn fire_cannon(&mut self, c: Coordinate, direction: Coordinate) -> Result<ActionOutcome> {
        self.ensure_playable(c)?;
        let mark = self.active_mark();

        if !self.judge.catalog().is_fire_direction(direction) {
            return Err(Error::UnknownDirection(direction));
        }

        let Some(target) = self.judge.resolve_cannon_fire(&self.grid, c, direction, mark) else {
            warn!(%c, %direction, %mark, "cannon fire without target");
            return Err(Error::NoCannonTarget { coordinate: c, direction });
        };

        let before = self.grid.clone();
        let hit = self.grid.status(target).cleared();
        self.grid.set_mark(target, None);
        self.grid.set_status(target, hit);
        self.grid.update_status(c, |s| s.is_cannon_used = true);

        Ok(self.finish_action(&before, Some(target)))
    }

    fn ensure_playable(&self, c: Coordinate) -> Result<()> {
        if self.over {
            return Err(Error::GameOver);
        }
        if !self.grid.is_valid(c) {
            return Err(Error::OutOfBounds(c));
        }
        Ok(())
    }

    /// Propagate, score, and advance the turn if the actor is done.
    fn finish_action(&mut self, before: &Grid, target: Option<Coordinate>) -> ActionOutcome {
        let propagation = self.judge.propagate_missing_nodes(&mut self.grid);

        let budget = &mut self.budgets[self.active.index()];
        let adjustment = self.judge.apply_combo(before, &self.grid, budget);
        let mark = budget.mark;

        let turn_ended =
            !budget.has_actions() || !self.judge.can_take_action(&self.grid, mark);
        if turn_ended {
            self.advance_turn();
        }

        ActionOutcome {
            propagation,
            adjustment,
            turn_ended,
            target,
        }
    }

    /// Hand the turn to the next seat that can place, or end the game.
    fn advance_turn(&mut self) {
        let count = self.player_count();
        let mut seat = self.active;

        for _ in 0..count {
            seat = seat.next(count);
            let mark = self.budgets[seat.index()].mark;
            if self.judge.can_take_action(&self.grid, mark) {
                self.budgets[seat.index()].refill();
                self.active = seat;
                info!(player = %seat, %mark, "turn started");
                return;
            }
        }

        self.over = true;
        info!("no player can act, game over");
    }
}
