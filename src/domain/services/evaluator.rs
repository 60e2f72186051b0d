//! Plan evaluator
//!
//! Walks a [`Plan`] one Action at a time and maintains the ledger: entity
//! locations, per-item quantities and the since-last-read deltas. Every
//! Action is processed in a fixed order:
//!
//! 1. location changes (last write wins)
//! 2. gear transfers, gated on co-location unless the stash is involved
//! 3. possession asserts, which never mutate state
//!
//! Problems are recorded as [`Finding`]s. Nothing aborts the pass: a plan with
//! ten mistakes produces ten findings in a single evaluation.
//!
//! Each call to [`PlanEvaluator::evaluate`] starts from an empty ledger, so
//! results never leak between runs.

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::entities::{
    Action, EntityRegistry, GearTransfer, ItemCatalog, Plan, PossessionAssert,
};
use crate::domain::value_objects::{same_place, Finding, FindingKind, GearItem, StashIdentity};

use super::ChangeTracker;

/// Quantity and since-last-read delta of one (entity, item) cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CellReading {
    pub quantity: i64,
    pub delta: i64,
}

/// What happened in one Action, handed to an [`ActionObserver`]
#[derive(Debug, Clone, Copy)]
pub struct ActionOutcome<'a> {
    pub index: usize,
    pub action: &'a Action,
    pub findings: &'a [Finding],
}

/// Read access to the ledger between two Actions.
///
/// Cell reads are destructive: the delta of a cell is zeroed once read, so a
/// renderer must read each cell exactly once per Action to get correct diffs.
pub struct LedgerCursor<'a> {
    registry: &'a EntityRegistry,
    catalog: &'a ItemCatalog,
    tracker: &'a mut ChangeTracker,
}

impl LedgerCursor<'_> {
    pub fn registry(&self) -> &EntityRegistry {
        self.registry
    }

    pub fn catalog(&self) -> &ItemCatalog {
        self.catalog
    }

    pub fn read_cell(&mut self, entity: &str, item: &GearItem) -> CellReading {
        CellReading {
            quantity: self.registry.quantity(entity, item),
            delta: self.tracker.read_and_reset(entity, item.name()),
        }
    }
}

/// Receives control after every evaluated Action
pub trait ActionObserver {
    fn action_evaluated(&mut self, outcome: &ActionOutcome<'_>, ledger: &mut LedgerCursor<'_>);
}

impl<F> ActionObserver for F
where
    F: FnMut(&ActionOutcome<'_>, &mut LedgerCursor<'_>),
{
    fn action_evaluated(&mut self, outcome: &ActionOutcome<'_>, ledger: &mut LedgerCursor<'_>) {
        self(outcome, ledger)
    }
}

struct NoObserver;

impl ActionObserver for NoObserver {
    fn action_evaluated(&mut self, _: &ActionOutcome<'_>, _: &mut LedgerCursor<'_>) {}
}

/// Outcome of evaluating a whole plan
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub catalog: ItemCatalog,
    pub registry: EntityRegistry,
    pub findings: Vec<Finding>,
    /// Location mismatches, deficits or failed asserts were found
    pub had_errors: bool,
    /// The plan contained malformed transfers
    pub had_usage_errors: bool,
    pub action_count: usize,
    #[serde(skip)]
    tracker: ChangeTracker,
}

impl EvaluationResult {
    /// Current quantity plus the delta since the previous read of this cell.
    /// Zeroes the delta.
    pub fn read_cell(&mut self, entity: &str, item: &GearItem) -> CellReading {
        CellReading {
            quantity: self.registry.quantity(entity, item),
            delta: self.tracker.read_and_reset(entity, item.name()),
        }
    }

    /// Final quantity of an item held by an entity
    pub fn quantity(&self, entity: &str, item: &str) -> i64 {
        self.registry.quantity(entity, &GearItem::new(item))
    }

    pub fn location(&self, entity: &str) -> Option<&str> {
        self.registry.get(entity).map(|e| e.location())
    }

    pub fn findings_of(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }

    pub fn error_count(&self) -> usize {
        self.findings.iter().filter(|f| f.kind.is_plan_error()).count()
    }

    pub fn usage_error_count(&self) -> usize {
        self.findings.iter().filter(|f| f.kind.is_usage_error()).count()
    }

    /// No plan errors and no usage errors
    pub fn is_clean(&self) -> bool {
        !self.had_errors && !self.had_usage_errors
    }
}

/// The ledger-and-validation engine
#[derive(Debug, Clone, Default)]
pub struct PlanEvaluator {
    stash: StashIdentity,
}

impl PlanEvaluator {
    pub fn new(stash: StashIdentity) -> Self {
        Self { stash }
    }

    pub fn stash(&self) -> &StashIdentity {
        &self.stash
    }

    pub fn evaluate(&self, plan: &Plan) -> EvaluationResult {
        self.evaluate_with(plan, &mut NoObserver)
    }

    /// Evaluate, handing the ledger to `observer` after each Action.
    pub fn evaluate_with<O>(&self, plan: &Plan, observer: &mut O) -> EvaluationResult
    where
        O: ActionObserver + ?Sized,
    {
        let mut pass = Pass::new(&self.stash);

        for (index, action) in plan.actions.iter().enumerate() {
            let first_finding = pass.findings.len();
            pass.apply_action(index, action);

            let outcome = ActionOutcome {
                index,
                action,
                findings: &pass.findings[first_finding..],
            };
            let mut cursor = LedgerCursor {
                registry: &pass.registry,
                catalog: &pass.catalog,
                tracker: &mut pass.tracker,
            };
            observer.action_evaluated(&outcome, &mut cursor);
        }

        info!(
            actions = plan.actions.len(),
            findings = pass.findings.len(),
            had_errors = pass.had_errors,
            had_usage_errors = pass.had_usage_errors,
            "plan evaluated"
        );

        EvaluationResult {
            catalog: pass.catalog,
            registry: pass.registry,
            findings: pass.findings,
            had_errors: pass.had_errors,
            had_usage_errors: pass.had_usage_errors,
            action_count: plan.actions.len(),
            tracker: pass.tracker,
        }
    }
}

/// Mutable state of a single evaluation
struct Pass<'s> {
    stash: &'s StashIdentity,
    registry: EntityRegistry,
    catalog: ItemCatalog,
    tracker: ChangeTracker,
    findings: Vec<Finding>,
    had_errors: bool,
    had_usage_errors: bool,
}

impl<'s> Pass<'s> {
    fn new(stash: &'s StashIdentity) -> Self {
        Self {
            stash,
            registry: EntityRegistry::new(),
            catalog: ItemCatalog::new(),
            tracker: ChangeTracker::new(),
            findings: Vec::new(),
            had_errors: false,
            had_usage_errors: false,
        }
    }

    fn apply_action(&mut self, index: usize, action: &Action) {
        debug!(index, title = %action.title, "evaluating action");

        for change in &action.location_changes {
            if is_blank(&change.entity) {
                continue;
            }
            self.registry
                .get_or_insert(&change.entity)
                .set_location(change.new_location.as_str());
        }

        for transfer in &action.gear_transfers {
            self.apply_transfer(index, transfer);
        }

        for assertion in &action.possession_asserts {
            self.check_assertion(index, assertion);
        }
    }

    fn apply_transfer(&mut self, index: usize, transfer: &GearTransfer) {
        let from = transfer.from_entity.as_str();
        let to = transfer.to_entity.as_str();
        let quantity = transfer.quantity;

        if is_blank(&transfer.gear_item) || is_blank(from) || is_blank(to) {
            return;
        }

        if quantity < 0 {
            debug!(index, from, to, quantity, "negative transfer quantity");
            self.had_usage_errors = true;
            self.record(
                index,
                FindingKind::Usage,
                format!(
                    "{} => {}: transfer quantity of {} must not be negative (got {})",
                    from, to, transfer.gear_item, quantity
                ),
            );
            return;
        }

        let item = GearItem::new(transfer.gear_item.as_str());
        let from_location = self.registry.get_or_insert(from).location().to_string();
        let to_location = self.registry.get_or_insert(to).location().to_string();
        self.catalog.register(&item);

        let reachable = same_place(&from_location, &to_location)
            || self.stash.matches(&from_location)
            || self.stash.matches(&to_location);

        if !reachable {
            debug!(index, from, to, %item, "transfer rejected, not co-located");
            self.had_errors = true;
            self.record(
                index,
                FindingKind::LocationMismatch,
                format!(
                    "{} ({}) cannot pass {} x {} to {} ({}): not at the same location",
                    from, from_location, item, quantity, to, to_location
                ),
            );
            return;
        }

        let debit_fits = self.registry.quantity(from, &item).checked_sub(quantity).is_some();
        let credit_fits = self.registry.quantity(to, &item).checked_add(quantity).is_some();
        if !debit_fits || !credit_fits {
            debug!(index, from, to, %item, quantity, "transfer would overflow");
            self.had_usage_errors = true;
            self.record(
                index,
                FindingKind::Usage,
                format!(
                    "{} => {}: passing {} x {} would overflow the quantity range",
                    from, to, item, quantity
                ),
            );
            return;
        }

        self.registry.get_or_insert(from).remove_item(&item, quantity);
        self.registry.get_or_insert(to).assign_item(&item, quantity);
        self.tracker.add(to, item.name(), quantity);
        self.tracker.subtract(from, item.name(), quantity);

        let remaining = self.registry.quantity(from, &item);
        if remaining < 0 && !self.stash.matches(from) {
            self.had_errors = true;
            self.record(
                index,
                FindingKind::Deficit,
                format!(
                    "{} is short {} {} after passing {} to {}",
                    from, remaining.unsigned_abs(), item, quantity, to
                ),
            );
        }

        if let Some(note) = transfer.note() {
            self.record(
                index,
                FindingKind::Info,
                format!("{} => {} ({} x {}): {}", from, to, item, quantity, note),
            );
        }
    }

    fn check_assertion(&mut self, index: usize, assertion: &PossessionAssert) {
        if is_blank(&assertion.entity) || is_blank(&assertion.gear_item) {
            return;
        }

        let item = GearItem::new(assertion.gear_item.as_str());
        let held = self.registry.get_or_insert(&assertion.entity).quantity(&item);
        self.catalog.register(&item);

        if held < assertion.quantity {
            self.had_errors = true;
            self.record(
                index,
                FindingKind::AssertionFailed,
                format!(
                    "{} requires {} {} but has {}",
                    assertion.entity, assertion.quantity, item, held
                ),
            );
        }
    }

    fn record(&mut self, index: usize, kind: FindingKind, message: String) {
        self.findings.push(Finding::new(index, kind, message));
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
