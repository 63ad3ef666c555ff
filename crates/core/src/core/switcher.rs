//! Category tab switching.
//!
//! A click updates the active tab at once, then the item list fades out, is
//! swapped, settles, and enters with a per-item stagger. All of it is driven by
//! deadlines held here; the caller only has to call [`CategorySwitcher::tick`]
//! at [`CategorySwitcher::next_deadline`].
//!
//! At most one transition is in flight. A click during a transition replaces
//! it, and the replaced transition's remaining steps never fire.

use tracing::debug;

use crate::catalog::Category;
use crate::config::MenuTiming;
use crate::time::Millis;

/// Identifies one tab click's transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionToken(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchEvent {
    /// The rendered item list now shows this category.
    Swapped(Category),
    /// The fading flag was cleared.
    Settled,
    /// New items are in the document; the scroll reveal helper should rescan.
    RescanDue,
}

// Declaration order breaks ties between steps due at the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Step {
    Swap,
    Settle,
    Rescan,
}

#[derive(Debug, Clone)]
struct Transition {
    token: TransitionToken,
    target: Category,
    settle_at: Millis,
    /// Pending steps sorted by deadline.
    steps: Vec<(Millis, Step)>,
}

impl Transition {
    fn new(token: TransitionToken, target: Category, now: Millis, timing: &MenuTiming) -> Self {
        let swap_at = now.saturating_add(timing.fade_out_ms);
        let settle_at = swap_at.saturating_add(timing.settle_ms);
        let rescan_at = swap_at.saturating_add(timing.rescan_delay_ms);

        let mut steps = vec![
            (swap_at, Step::Swap),
            (settle_at, Step::Settle),
            (rescan_at, Step::Rescan),
        ];
        steps.sort_unstable();

        Self {
            token,
            target,
            settle_at,
            steps,
        }
    }

    fn entrance_points(&self, stagger_ms: Millis) -> impl Iterator<Item = Millis> + '_ {
        (0..self.target.items().len() as Millis)
            .map(move |i| self.settle_at.saturating_add(stagger_ms.saturating_mul(i)))
    }
}

#[derive(Debug, Clone)]
pub struct CategorySwitcher {
    timing: MenuTiming,
    active: Category,
    displayed: Category,
    changing: bool,
    generation: u64,
    transition: Option<Transition>,
    /// Origin of the staggered entrance for the displayed items. `None` until
    /// the first swap; those items are left to the scroll reveal helper.
    entrance_at: Option<Millis>,
    last_tick: Millis,
}

impl CategorySwitcher {
    pub fn new(timing: MenuTiming) -> Self {
        Self {
            timing,
            active: Category::default(),
            displayed: Category::default(),
            changing: false,
            generation: 0,
            transition: None,
            entrance_at: None,
            last_tick: 0,
        }
    }

    /// Highlighted tab.
    pub fn active(&self) -> Category {
        self.active
    }

    /// Category whose items are rendered. Lags [`Self::active`] during a transition.
    pub fn displayed(&self) -> Category {
        self.displayed
    }

    pub fn is_changing(&self) -> bool {
        self.changing
    }

    pub fn in_flight(&self) -> Option<TransitionToken> {
        self.transition.as_ref().map(|t| t.token)
    }

    pub fn is_current(&self, token: TransitionToken) -> bool {
        self.in_flight() == Some(token)
    }

    /// Handles a tab click at `now`.
    ///
    /// Returns `None` when `category` is already active; nothing changes and no
    /// deadline is scheduled in that case.
    pub fn select(&mut self, category: Category, now: Millis) -> Option<TransitionToken> {
        if category == self.active {
            debug!("category {} already active", category);
            return None;
        }

        self.generation += 1;
        let token = TransitionToken(self.generation);
        if let Some(prev) = &self.transition {
            debug!(
                "transition to {} superseded by {} before it settled",
                prev.target, category
            );
        }

        self.active = category;
        self.changing = true;
        self.last_tick = self.last_tick.max(now);
        self.transition = Some(Transition::new(token, category, now, &self.timing));
        debug!("switching menu {} -> {}", self.displayed, category);
        Some(token)
    }

    /// Fires every step due at or before `now`, in deadline order.
    pub fn tick(&mut self, now: Millis) -> Vec<SwitchEvent> {
        let mut events = Vec::new();
        self.last_tick = self.last_tick.max(now);

        let Some(transition) = self.transition.as_mut() else {
            return events;
        };

        while let Some(&(at, step)) = transition.steps.first() {
            if at > now {
                break;
            }
            transition.steps.remove(0);
            match step {
                Step::Swap => {
                    self.displayed = transition.target;
                    self.entrance_at = Some(transition.settle_at);
                    events.push(SwitchEvent::Swapped(transition.target));
                }
                Step::Settle => {
                    self.changing = false;
                    events.push(SwitchEvent::Settled);
                }
                Step::Rescan => events.push(SwitchEvent::RescanDue),
            }
        }

        let finished = transition.steps.is_empty()
            && transition
                .entrance_points(self.timing.stagger_ms)
                .all(|at| at <= self.last_tick);
        if finished {
            self.transition = None;
        }

        events
    }

    /// [`Self::tick`] for a timer armed by `token`. Returns `None` without
    /// touching any state once `token` has been superseded or has finished.
    pub fn tick_if_current(
        &mut self,
        token: TransitionToken,
        now: Millis,
    ) -> Option<Vec<SwitchEvent>> {
        if !self.is_current(token) {
            debug!("ignoring tick for stale transition {:?}", token);
            return None;
        }
        Some(self.tick(now))
    }

    /// Next instant at which [`Self::tick`] has work to do, including the
    /// per-item entrance points. `None` when idle.
    pub fn next_deadline(&self) -> Option<Millis> {
        let transition = self.transition.as_ref()?;
        let next_step = transition.steps.first().map(|&(at, _)| at);
        let next_entrance = transition
            .entrance_points(self.timing.stagger_ms)
            .find(|&at| at > self.last_tick);
        next_step.into_iter().chain(next_entrance).min()
    }

    /// Whether the item at `index` has entered, as of `now`.
    pub fn item_animated(&self, index: usize, now: Millis) -> bool {
        self.entrance_at
            .is_some_and(|origin| now >= origin.saturating_add(self.stagger_delay_ms(index)))
    }

    pub fn stagger_delay_ms(&self, index: usize) -> Millis {
        self.timing.stagger_ms.saturating_mul(index as Millis)
    }
}

impl Default for CategorySwitcher {
    fn default() -> Self {
        Self::new(MenuTiming::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_until_idle(s: &mut CategorySwitcher) -> Vec<(Millis, SwitchEvent)> {
        let mut out = Vec::new();
        while let Some(at) = s.next_deadline() {
            out.extend(s.tick(at).into_iter().map(|e| (at, e)));
        }
        out
    }

    #[test]
    fn starts_on_starters() {
        let s = CategorySwitcher::default();
        assert_eq!(s.active(), Category::Starters);
        assert_eq!(s.displayed(), Category::Starters);
        assert!(!s.is_changing());
        assert_eq!(s.next_deadline(), None);
        assert!(!s.item_animated(0, 10_000));
    }

    #[test]
    fn clicking_active_tab_is_a_no_op() {
        let mut s = CategorySwitcher::default();
        assert_eq!(s.select(Category::Starters, 5), None);
        assert_eq!(s.next_deadline(), None);
        assert!(s.tick(10_000).is_empty());
        assert_eq!(s.active(), Category::Starters);
        assert!(!s.is_changing());
    }

    #[test]
    fn default_timeline_for_one_click() {
        let mut s = CategorySwitcher::default();
        let token = s.select(Category::Drinks, 1_000).unwrap();

        assert_eq!(s.active(), Category::Drinks);
        assert_eq!(s.displayed(), Category::Starters);
        assert!(s.is_changing());
        assert!(s.is_current(token));
        assert_eq!(s.next_deadline(), Some(1_300));

        assert!(s.tick(1_299).is_empty());
        assert_eq!(s.tick(1_300), vec![SwitchEvent::Swapped(Category::Drinks)]);
        assert_eq!(s.displayed(), Category::Drinks);
        assert!(s.is_changing());
        assert!(!s.item_animated(0, 1_300));
        assert_eq!(s.next_deadline(), Some(1_350));

        assert_eq!(s.tick(1_350), vec![SwitchEvent::Settled]);
        assert!(!s.is_changing());
        assert!(s.item_animated(0, 1_350));
        assert!(!s.item_animated(1, 1_350));
        assert_eq!(s.next_deadline(), Some(1_400));

        assert!(s.tick(1_400).is_empty());
        assert!(s.item_animated(1, 1_400));
        assert!(!s.item_animated(2, 1_400));
        assert_eq!(s.next_deadline(), Some(1_450));

        assert!(s.tick(1_450).is_empty());
        assert!(s.item_animated(2, 1_450));
        assert_eq!(s.next_deadline(), Some(1_650));

        assert_eq!(s.tick(1_650), vec![SwitchEvent::RescanDue]);
        assert_eq!(s.next_deadline(), None);
        assert!(!s.is_current(token));
    }

    #[test]
    fn late_tick_fires_everything_in_order() {
        let mut s = CategorySwitcher::default();
        s.select(Category::Mains, 0);
        assert_eq!(
            s.tick(10_000),
            vec![
                SwitchEvent::Swapped(Category::Mains),
                SwitchEvent::Settled,
                SwitchEvent::RescanDue,
            ]
        );
        assert_eq!(s.next_deadline(), None);
    }

    #[test]
    fn every_tab_eventually_displays_its_items() {
        let mut s = CategorySwitcher::default();
        let mut now = 0;
        for &c in Category::all().iter().rev() {
            s.select(c, now);
            run_until_idle(&mut s);
            now += 1_000;
            assert_eq!(s.displayed(), c);
            assert_eq!(s.displayed().items(), c.items());
            assert!(!s.is_changing());
        }
    }

    #[test]
    fn newer_click_supersedes_in_flight_transition() {
        let mut s = CategorySwitcher::default();
        let first = s.select(Category::Mains, 0).unwrap();
        assert!(s.tick(100).is_empty());

        let second = s.select(Category::Desserts, 200).unwrap();
        assert_ne!(first, second);
        assert!(!s.is_current(first));
        assert!(s.is_current(second));

        // The first click's swap would have been due at 300.
        assert!(s.tick(300).is_empty());
        assert_eq!(s.displayed(), Category::Starters);
        assert_eq!(s.next_deadline(), Some(500));

        let events = run_until_idle(&mut s);
        let swaps: Vec<_> = events
            .iter()
            .filter_map(|(_, e)| match e {
                SwitchEvent::Swapped(c) => Some(*c),
                _ => None,
            })
            .collect();
        assert_eq!(swaps, vec![Category::Desserts]);
        assert_eq!(s.displayed(), Category::Desserts);
        assert!(!s.is_changing());
    }

    #[test]
    fn switching_back_mid_transition_never_shows_the_abandoned_tab() {
        let mut s = CategorySwitcher::default();
        s.select(Category::Mains, 0);
        assert!(s.select(Category::Starters, 100).is_some());

        let events = run_until_idle(&mut s);
        assert!(!events
            .iter()
            .any(|(_, e)| *e == SwitchEvent::Swapped(Category::Mains)));
        assert_eq!(s.displayed(), Category::Starters);
        assert_eq!(s.active(), Category::Starters);
    }

    #[test]
    fn stale_timer_cannot_advance_the_newer_transition() {
        let mut s = CategorySwitcher::default();
        let first = s.select(Category::Mains, 0).unwrap();
        let second = s.select(Category::Desserts, 200).unwrap();

        // A timer armed for the first click goes off after the second one's
        // swap is due; it must not fire that swap early or at all.
        assert_eq!(s.tick_if_current(first, 600), None);
        assert_eq!(s.displayed(), Category::Starters);
        assert!(s.is_changing());
        assert_eq!(s.next_deadline(), Some(500));

        assert_eq!(
            s.tick_if_current(second, 500),
            Some(vec![SwitchEvent::Swapped(Category::Desserts)])
        );
        run_until_idle(&mut s);
        assert_eq!(s.tick_if_current(second, 10_000), None);
    }

    #[test]
    fn fading_flag_stays_set_across_superseded_clicks() {
        let mut s = CategorySwitcher::default();
        s.select(Category::Mains, 0);
        s.tick(320);
        assert_eq!(s.displayed(), Category::Mains);

        s.select(Category::Drinks, 330);
        s.tick(360);
        // The first transition's settle step at 350 was dropped with it.
        assert!(s.is_changing());
        assert_eq!(s.tick(630), vec![SwitchEvent::Swapped(Category::Drinks)]);
        assert!(s.is_changing());
        assert_eq!(s.tick(730), vec![SwitchEvent::Settled]);
        assert!(!s.is_changing());
    }

    #[test]
    fn stagger_delay_scales_with_index() {
        let s = CategorySwitcher::default();
        assert_eq!(s.stagger_delay_ms(0), 0);
        assert_eq!(s.stagger_delay_ms(2), 100);
    }

    #[test]
    fn zero_delays_fire_in_one_tick() {
        let timing = MenuTiming {
            fade_out_ms: 0,
            settle_ms: 0,
            stagger_ms: 0,
            rescan_delay_ms: 0,
        };
        let mut s = CategorySwitcher::new(timing);
        let token = s.select(Category::Drinks, 40).unwrap();
        assert_eq!(s.next_deadline(), Some(40));
        assert_eq!(
            s.tick(40),
            vec![
                SwitchEvent::Swapped(Category::Drinks),
                SwitchEvent::Settled,
                SwitchEvent::RescanDue,
            ]
        );
        assert!(!s.is_changing());
        assert!(!s.is_current(token));
        assert_eq!(s.next_deadline(), None);
        for i in 0..Category::Drinks.items().len() {
            assert!(s.item_animated(i, 40));
        }
    }

    #[test]
    fn huge_delays_saturate_instead_of_overflowing() {
        let timing = MenuTiming {
            fade_out_ms: Millis::MAX,
            settle_ms: Millis::MAX,
            stagger_ms: Millis::MAX,
            rescan_delay_ms: Millis::MAX,
        };
        let mut s = CategorySwitcher::new(timing);
        s.select(Category::Mains, 5);
        assert_eq!(s.next_deadline(), Some(Millis::MAX));
        assert!(s.tick(10_000).is_empty());
        assert_eq!(s.displayed(), Category::Starters);
        assert_eq!(s.stagger_delay_ms(3), Millis::MAX);
        assert!(!s.item_animated(3, Millis::MAX));
    }

    #[test]
    fn step_ties_and_custom_order() {
        let timing = MenuTiming {
            fade_out_ms: 100,
            settle_ms: 100,
            stagger_ms: 10,
            rescan_delay_ms: 50,
        };
        let mut s = CategorySwitcher::new(timing);
        s.select(Category::Desserts, 0);
        let events: Vec<_> = run_until_idle(&mut s).into_iter().collect();
        assert_eq!(
            events,
            vec![
                (100, SwitchEvent::Swapped(Category::Desserts)),
                (150, SwitchEvent::RescanDue),
                (200, SwitchEvent::Settled),
            ]
        );
    }
}
