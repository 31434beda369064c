//! Windowed list box over the four catalogs.
//!
//! The list shows a `page_size` window of the active catalog with one
//! highlighted row. Moving past either edge wraps around. A bounded stack of
//! [`MenuContext`] snapshots supports drill-down and back navigation, and a
//! repeat-avoiding random picker walks a catalog in a fresh permutation every
//! cycle.
//!
//! Invariants (whenever `count > 0`):
//! - `selection < count`
//! - `window <= selection < window + page_size` unless `count <= page_size`
//! - stack depth never exceeds [`CONTEXT_STACK_DEPTH`]

use library::{Catalog, Catalogs, Domain, Scanner};
use platform::config::{
    CONTEXT_STACK_DEPTH, MAX_LINE_LENGTH, MAX_PAGE_SIZE, MAX_SPINS, MAX_TITLE_BYTES, MAX_TITLE_LENGTH,
};
use platform::{ListView, Row};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::fairness::VisitSet;

/// Bounded list title. Holds any [`MAX_TITLE_LENGTH`] characters.
pub type Title = heapless::String<MAX_TITLE_BYTES>;

/// Context stack precondition violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ContextError {
    /// `push` with the stack already full
    Overflow,
    /// `pop` or `update_push` with an empty stack
    Underflow,
}

impl core::fmt::Display for ContextError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Overflow => write!(f, "menu stack overflow (depth {CONTEXT_STACK_DEPTH})"),
            Self::Underflow => f.write_str("menu stack underflow"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ContextError {}

/// Saved list state for one drill-down level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuContext {
    /// List title at that level
    pub title: Title,
    /// Selected catalog index
    pub selection: usize,
    /// First visible catalog index
    pub window: usize,
    /// Rows were centered
    pub centered: bool,
    /// Catalog that was active
    pub domain: Domain,
}

/// One visited set per domain.
#[derive(Debug, Clone, Default)]
struct DomainVisits {
    operations: VisitSet,
    artists: VisitSet,
    albums: VisitSet,
    songs: VisitSet,
}

impl DomainVisits {
    fn get_mut(&mut self, domain: Domain) -> &mut VisitSet {
        match domain {
            Domain::Operations => &mut self.operations,
            Domain::Artists => &mut self.artists,
            Domain::Albums => &mut self.albums,
            Domain::Songs => &mut self.songs,
        }
    }

    fn get(&self, domain: Domain) -> &VisitSet {
        match domain {
            Domain::Operations => &self.operations,
            Domain::Artists => &self.artists,
            Domain::Albums => &self.albums,
            Domain::Songs => &self.songs,
        }
    }

    fn clear_all(&mut self) {
        for domain in Domain::ALL {
            self.get_mut(domain).clear();
        }
    }
}

/// Truncate `s` to at most `width` characters.
pub fn clip(s: &str, width: usize) -> &str {
    match s.char_indices().nth(width) {
        Some((end, _)) => s.get(..end).unwrap_or(s),
        None => s,
    }
}

/// First `width` characters of `s` in a fixed buffer. `N` is sized for
/// four bytes per character, so the push only fails past that.
fn bounded<const N: usize>(s: &str, width: usize) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in s.chars().take(width) {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Selection and scroll-window state over the active catalog.
#[derive(Debug, Clone)]
pub struct WindowedList {
    catalogs: Catalogs,
    domain: Domain,
    count: usize,
    selection: usize,
    window: usize,
    centered: bool,
    title: Title,
    page_size: usize,
    clip_width: usize,
    stack: heapless::Vec<MenuContext, CONTEXT_STACK_DEPTH>,
    visited: DomainVisits,
    spins: u32,
    rng: SmallRng,
    repaint: bool,
}

impl WindowedList {
    /// Empty list showing `page_size` rows of at most `clip_width`
    /// characters. Both are clamped to the display limits.
    pub fn new(page_size: usize, clip_width: usize, seed: u64) -> Self {
        Self {
            catalogs: Catalogs::default(),
            domain: Domain::Operations,
            count: 0,
            selection: 0,
            window: 0,
            centered: false,
            title: Title::new(),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            clip_width: clip_width.clamp(1, MAX_LINE_LENGTH),
            stack: heapless::Vec::new(),
            visited: DomainVisits::default(),
            spins: 0,
            rng: SmallRng::seed_from_u64(seed),
            repaint: false,
        }
    }

    // ── Catalogs ────────────────────────────────────────────────────────────

    /// Replace the catalog behind `domain` and forget its visited entries.
    pub fn populate(&mut self, domain: Domain, catalog: Catalog) {
        self.catalogs.set(domain, catalog);
        self.visited.get_mut(domain).clear();
        if domain == self.domain {
            self.count = self.catalogs.get(domain).len();
        }
    }

    /// Switch the active domain. Selection and window are left as they are.
    pub fn set_domain(&mut self, domain: Domain) {
        self.domain = domain;
        self.count = self.catalogs.get(domain).len();
    }

    /// Reset selection, window, centering, title and the active domain's
    /// picker state.
    pub fn clear(&mut self) {
        self.selection = 0;
        self.window = 0;
        self.centered = false;
        self.title.clear();
        self.visited.get_mut(self.domain).clear();
        self.spins = 0;
    }

    /// Drop the context stack and every picker state, then [`clear`].
    ///
    /// [`clear`]: WindowedList::clear
    pub fn reset(&mut self) {
        self.stack.clear();
        self.visited.clear_all();
        self.clear();
        self.repaint = false;
    }

    // ── Context stack ───────────────────────────────────────────────────────

    /// Save the current level.
    pub fn push(&mut self) -> Result<(), ContextError> {
        let ctx = MenuContext {
            title: self.title.clone(),
            selection: self.selection,
            window: self.window,
            centered: self.centered,
            domain: self.domain,
        };
        self.stack.push(ctx).map_err(|_| ContextError::Overflow)
    }

    /// Overwrite the saved selection and window of the top level.
    pub fn update_push(&mut self) -> Result<(), ContextError> {
        let top = self.stack.last_mut().ok_or(ContextError::Underflow)?;
        top.selection = self.selection;
        top.window = self.window;
        Ok(())
    }

    /// Restore the top level and request a repaint.
    pub fn pop(&mut self) -> Result<(), ContextError> {
        let ctx = self.stack.pop().ok_or(ContextError::Underflow)?;
        self.title = ctx.title;
        self.selection = ctx.selection;
        self.window = ctx.window;
        self.centered = ctx.centered;
        self.set_domain(ctx.domain);
        self.repaint = true;
        Ok(())
    }

    /// Number of saved levels.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    // ── Movement ────────────────────────────────────────────────────────────

    /// One step towards the top, wrapping to the last entry.
    pub fn selection_up(&mut self, repaint: bool) {
        if self.count == 0 {
            return;
        }
        if self.selection > 0 {
            if self.selection > self.window {
                self.selection = self.selection.saturating_sub(1);
            } else if self.window > 0 {
                self.selection = self.selection.saturating_sub(1);
                self.window = self.window.saturating_sub(1);
            }
        } else {
            self.selection = self.count.saturating_sub(1);
            self.window = self.count.saturating_sub(self.page_size);
        }
        self.repaint |= repaint;
    }

    /// One step towards the bottom, wrapping to the first entry.
    pub fn selection_down(&mut self, repaint: bool) {
        if self.count == 0 {
            return;
        }
        let last = self.count.saturating_sub(1);
        if self.selection < last {
            let inside = self
                .window
                .saturating_add(self.page_size)
                .checked_sub(2)
                .is_some_and(|end| self.selection >= self.window && self.selection <= end);
            if inside {
                self.selection = self.selection.saturating_add(1);
            } else if self.window.saturating_add(self.page_size) < self.count {
                self.selection = self.selection.saturating_add(1);
                self.window = self.window.saturating_add(1);
            }
        } else {
            self.selection = 0;
            self.window = 0;
        }
        self.repaint |= repaint;
    }

    /// Put the selection on `index` (clamped), scrolling just enough to keep
    /// it in the window.
    pub fn jump_to(&mut self, index: usize) {
        if self.count == 0 {
            return;
        }
        let index = index.min(self.count.saturating_sub(1));
        self.selection = index;
        if index < self.window {
            self.window = index;
        } else if index >= self.window.saturating_add(self.page_size) {
            self.window = index.saturating_add(1).saturating_sub(self.page_size);
        }
    }

    // ── Random picks ────────────────────────────────────────────────────────

    /// Mark the current entry visited, then move to a random unvisited one.
    pub fn select_random_entry(&mut self, repaint: bool) {
        self.pick(true, repaint);
    }

    /// Move to a random unvisited entry without marking the current one
    /// first. Used right after the catalog was repopulated.
    pub fn select_random_fresh(&mut self, repaint: bool) {
        self.pick(false, repaint);
    }

    fn pick(&mut self, mark_current: bool, repaint: bool) {
        let count = self.count;
        if count == 0 {
            return;
        }
        self.repaint |= repaint;
        if count == 1 {
            self.selection = 0;
            self.window = 0;
            self.visited.get_mut(self.domain).insert(0);
            return;
        }
        let current = self.selection;
        let domain = self.domain;
        if mark_current {
            self.visited.get_mut(domain).insert(current);
        }
        if self.visited.get(domain).covers(count) {
            // New cycle; the entry just played stays marked.
            let set = self.visited.get_mut(domain);
            set.clear();
            if mark_current {
                set.insert(current);
            }
            tracing::debug!(domain = domain.name(), "fairness cycle restarted");
        }
        self.spins = 0;
        loop {
            let steps = self.rng.gen_range(0..count);
            self.step_down(steps);
            if self.visited.get_mut(domain).insert(self.selection) {
                break;
            }
            self.spins = self.spins.saturating_add(1);
            if self.spins > MAX_SPINS {
                // Deliberately not clearing the visited set here: choosing among
                // the unvisited entries keeps every cycle a full permutation.
                self.pick_remaining(domain, count);
                break;
            }
        }
        self.spins = 0;
    }

    /// Uniform choice among the unvisited entries once blind draws keep
    /// landing on visited ones.
    fn pick_remaining(&mut self, domain: Domain, count: usize) {
        let set = self.visited.get(domain);
        let remaining = count.saturating_sub(set.count_below(count));
        if remaining == 0 {
            return;
        }
        let n = self.rng.gen_range(0..remaining);
        let Some(target) = set.nth_unvisited(n, count) else {
            return;
        };
        let steps = if target >= self.selection {
            target.saturating_sub(self.selection)
        } else {
            count.saturating_sub(self.selection).saturating_add(target)
        };
        self.step_down(steps);
        self.visited.get_mut(domain).insert(self.selection);
    }

    fn step_down(&mut self, steps: usize) {
        for _ in 0..steps {
            self.selection_down(false);
        }
    }

    // ── Accessors ───────────────────────────────────────────────────────────

    /// Full text of the selected entry.
    pub fn selection(&self) -> Option<&str> {
        self.entry(self.selection, false)
    }

    /// Entry `index` of the active catalog, optionally clipped to the row
    /// width. The catalog itself is never modified.
    pub fn entry(&self, index: usize, clipped: bool) -> Option<&str> {
        let name = self.catalogs.get(self.domain).get(index)?;
        Some(if clipped {
            clip(name, self.clip_width)
        } else {
            name
        })
    }

    /// Catalog index of the highlighted entry.
    pub fn selection_index(&self) -> usize {
        self.selection
    }

    /// Catalog index of the first visible row.
    pub fn window_start(&self) -> usize {
        self.window
    }

    /// Entries in the active catalog.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Rows visible at once.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Active catalog.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Current title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the title, keeping the first [`MAX_TITLE_LENGTH`] characters.
    pub fn set_title(&mut self, title: &str) {
        self.title = bounded(title, MAX_TITLE_LENGTH);
    }

    /// Center rows instead of left-aligning them.
    pub fn set_center(&mut self, centered: bool) {
        self.centered = centered;
    }

    /// Whether rows are centered.
    pub fn is_centered(&self) -> bool {
        self.centered
    }

    /// Whether `index` was already picked in the current cycle.
    pub fn visited(&self, index: usize) -> bool {
        self.visited.get(self.domain).contains(index)
    }

    /// Ask for a repaint on the next [`take_repaint`](Self::take_repaint).
    pub fn request_repaint(&mut self) {
        self.repaint = true;
    }

    /// Consume the pending repaint request.
    pub fn take_repaint(&mut self) -> bool {
        core::mem::take(&mut self.repaint)
    }

    /// The visible window, ready to paint.
    pub fn view(&self) -> ListView<'_> {
        let mut rows: heapless::Vec<Row, MAX_PAGE_SIZE> = heapless::Vec::new();
        let end = self.window.saturating_add(self.page_size).min(self.count);
        for index in self.window..end {
            let Some(name) = self.catalogs.get(self.domain).get(index) else {
                break;
            };
            let shown = if self.domain == Domain::Songs {
                Scanner::display_name(name)
            } else {
                name
            };
            if rows.push(bounded(shown, self.clip_width)).is_err() {
                break;
            }
        }
        let selected_row = self
            .selection
            .checked_sub(self.window)
            .filter(|row| *row < rows.len());
        ListView {
            title: self.title.as_str(),
            rows,
            selected_row,
            centered: self.centered,
        }
    }
}
