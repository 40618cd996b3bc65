//! The core state bridging the composed page and the terminal.
//!
//! A scrolling page needs a single place where scroll input, section observation, navigation
//! highlight and reveal state meet. Every scroll, whether from a key press or a smooth-scroll
//! frame, goes through [`AppState::on_scroll`], which is the only place the tracker, the
//! commander's signals and the reveal animator are fed, so no consumer listens on its own.

use crate::active::Subscription;
use crate::boundary::ErrorBoundary;
use crate::config::Config;
use crate::error::Result;
use crate::filter::ProjectFilter;
use crate::geometry::Viewport;
use crate::page::Page;
use crate::profile::Profile;
use crate::responsive::{Breakpoints, Responsive};
use crate::reveal::{BlockId, RevealAnimator};
use crate::scroll::ScrollCommander;
use crate::section::SectionId;
use crate::throttle::Debounce;
use crate::tracker::VisibilityTracker;
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Quiet period before a resize re-lays the page.
const RESIZE_DEBOUNCE: Duration = Duration::from_millis(150);
/// Rows below the body reserved for the help bar.
const HELP_ROWS: u16 = 1;

/// Navigation bar state: which item is highlighted and whether the compact menu is open.
///
/// The highlight is never computed here. It follows the active-section state through a
/// subscription taken when the view is attached, and the subscription is released with the view.
pub struct NavigationView {
    items: Vec<SectionId>,
    highlighted: Rc<Cell<Option<SectionId>>>,
    menu_open: bool,
    _subscription: Subscription,
}

impl NavigationView {
    #[must_use]
    /// Subscribes to the tracker's active section.
    pub fn attach(tracker: &VisibilityTracker) -> Self {
        let highlighted = Rc::new(Cell::new(tracker.active()));
        let slot = Rc::clone(&highlighted);
        let subscription = tracker.subscribe(move |section| slot.set(Some(section)));
        Self {
            items: tracker.registry().iter().collect(),
            highlighted,
            menu_open: false,
            _subscription: subscription,
        }
    }

    #[must_use]
    /// Navigation items in page order.
    pub fn items(&self) -> &[SectionId] {
        &self.items
    }

    #[must_use]
    /// Item to highlight.
    pub fn highlighted(&self) -> Option<SectionId> {
        self.highlighted.get()
    }

    #[must_use]
    /// Whether the compact menu is showing.
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Opens or closes the compact menu.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Closes the compact menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

/// Everything the frame loop reads and mutates.
pub struct AppState {
    /// Viewer preferences.
    pub config: Config,
    /// Content the page is composed from.
    pub profile: Profile,
    /// Where the profile came from, for reloads; `None` for the built-in sample.
    pub profile_path: Option<PathBuf>,
    /// Composed page.
    pub page: Page,
    /// Visible window onto the page body.
    pub viewport: Viewport,
    /// Active-section tracker.
    pub tracker: VisibilityTracker,
    /// Smooth scrolling and scroll-derived signals.
    pub commander: ScrollCommander,
    /// One-time block reveals.
    pub reveal: RevealAnimator,
    /// Reveal handle per page block, indexed like [`Page::block_extents`].
    pub block_ids: Vec<BlockId>,
    /// Navigation bar state.
    pub nav: NavigationView,
    /// Current device class and size.
    pub responsive: Responsive,
    /// Failure containment for page composition.
    pub boundary: ErrorBoundary,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Criteria narrowing the projects section.
    pub filter: ProjectFilter,
    searching: bool,
    breakpoints: Breakpoints,
    resize: Debounce,
}

impl AppState {
    /// Composes the page for a terminal of the given size and takes the first observation.
    ///
    /// A profile that cannot be laid out starts the viewer with the error panel up over a blank
    /// page, so the file can be fixed and reloaded without restarting.
    ///
    /// # Errors
    ///
    /// Returns an error if not even the blank page can be laid out.
    pub fn new(
        config: Config,
        profile: Profile,
        profile_path: Option<PathBuf>,
        (width, height): (u16, u16),
        now: Instant,
    ) -> Result<Self> {
        let breakpoints = Breakpoints::terminal();
        let responsive = Responsive::from_size(width.into(), height.into(), &breakpoints);
        let wrap = Self::wrap_width(&config, width);
        let mut boundary = ErrorBoundary::new();
        let page = match boundary.render(|| Page::compose(&profile, wrap)) {
            Some(page) => page,
            None => Page::compose(&Profile::blank(&profile.name), wrap)?,
        };
        let tracker = VisibilityTracker::new(page.registry.clone(), config.tracker_options());
        let nav = NavigationView::attach(&tracker);
        let commander = ScrollCommander::new(config.scroll_options());
        let reveal = RevealAnimator::new(config.reveal_policy(responsive.is_mobile()));
        let viewport = Viewport::new(Self::body_height(height), page_height(&page));

        let mut state = Self {
            config,
            profile,
            profile_path,
            page,
            viewport,
            tracker,
            commander,
            reveal,
            block_ids: Vec::new(),
            nav,
            responsive,
            boundary,
            message: None,
            filter: ProjectFilter::new(),
            searching: false,
            breakpoints,
            resize: Debounce::new(RESIZE_DEBOUNCE),
        };
        state.mount_blocks(now);
        state.on_scroll(now);
        Ok(state)
    }

    fn wrap_width(config: &Config, width: u16) -> usize {
        usize::from(width.saturating_sub(2)).min(config.wrap_width)
    }

    fn body_height(height: u16) -> f64 {
        f64::from(height.saturating_sub(HELP_ROWS))
    }

    fn mount_blocks(&mut self, now: Instant) {
        self.reveal.clear();
        self.block_ids = self
            .page
            .block_extents
            .iter()
            .map(|&extent| self.reveal.mount(extent, now))
            .collect();
    }

    /// Feeds the current scroll position to every observer.
    pub fn on_scroll(&mut self, now: Instant) {
        self.tracker.observe(&self.page.layout, &self.viewport);
        self.commander.record_scroll(&self.viewport, now);
        self.reveal.observe(&self.viewport, now);
    }

    /// Advances one frame: smooth scroll, throttled signals, reveal fallback, pending resize.
    pub fn tick(&mut self, now: Instant) {
        if self.commander.tick(&mut self.viewport) {
            self.on_scroll(now);
        }
        self.commander.poll(&self.viewport, now);
        self.reveal.observe(&self.viewport, now);
        if self.resize.poll(now) {
            self.relayout(now);
        }
    }

    /// Manual scroll by a number of rows; cancels any smooth scroll in flight.
    pub fn scroll_by(&mut self, rows: f64, now: Instant) {
        self.commander.cancel();
        self.viewport.scroll_by(rows);
        self.on_scroll(now);
    }

    /// Scrolls one body height down (positive) or up (negative).
    pub fn page_by(&mut self, pages: f64, now: Instant) {
        let rows = (self.viewport.height - self.config.header_height).max(1.0) * pages;
        self.scroll_by(rows, now);
    }

    /// Smooth-scrolls to a section. Sections not on this page are ignored.
    pub fn go_to_section(&mut self, id: SectionId) {
        self.nav.close_menu();
        self.commander.scroll_to_section(&self.page.layout, id);
    }

    /// Smooth-scrolls to the n-th navigation item (zero-based).
    pub fn go_to_item(&mut self, index: usize) {
        if let Some(id) = self.nav.items().get(index).copied() {
            self.go_to_section(id);
        }
    }

    /// Smooth-scrolls to the section after the highlighted one.
    pub fn next_section(&mut self) {
        let registry = self.tracker.registry();
        let target = match self.nav.highlighted() {
            Some(current) => registry.next(current),
            None => registry.at(1),
        };
        if let Some(id) = target {
            self.go_to_section(id);
        }
    }

    /// Smooth-scrolls to the section before the highlighted one.
    pub fn prev_section(&mut self) {
        let target = self
            .nav
            .highlighted()
            .and_then(|current| self.tracker.registry().prev(current));
        match target {
            Some(id) => self.go_to_section(id),
            None => self.scroll_to_top(),
        }
    }

    /// Smooth-scrolls to the top of the page.
    pub fn scroll_to_top(&mut self) {
        self.nav.close_menu();
        self.commander.scroll_to_top();
    }

    /// Records a terminal resize; the page is re-laid once resizing settles.
    pub fn resize(&mut self, width: u16, height: u16, now: Instant) {
        self.viewport.height = Self::body_height(height);
        self.viewport.scroll_by(0.0);
        self.responsive = Responsive::from_size(width.into(), height.into(), &self.breakpoints);
        self.resize.trigger(now);
    }

    fn relayout(&mut self, now: Instant) {
        if !self.responsive.is_mobile() {
            self.nav.close_menu();
        }
        self.reveal
            .set_policy(self.config.reveal_policy(self.responsive.is_mobile()));
        let width = u16::try_from(self.responsive.width).unwrap_or(u16::MAX);
        self.recompose(width, now);
    }

    /// Lays the current profile out again, keeping the scroll position where possible.
    ///
    /// Failures trip the error boundary instead of propagating.
    pub fn recompose(&mut self, width: u16, now: Instant) {
        let profile = self.filter.apply(&self.profile);
        let wrap = Self::wrap_width(&self.config, width);
        let Some(page) = self.boundary.render(|| Page::compose(&profile, wrap)) else {
            return;
        };
        self.page = page;
        self.viewport.document_height = page_height(&self.page);
        self.viewport.scroll_by(0.0);
        if self.page.registry != *self.tracker.registry() {
            self.tracker.disconnect();
            self.tracker =
                VisibilityTracker::new(self.page.registry.clone(), self.config.tracker_options());
            self.nav = NavigationView::attach(&self.tracker);
        }
        self.mount_blocks(now);
        self.on_scroll(now);
    }

    /// Re-reads the profile file and composes it from scratch.
    ///
    /// Used by the error panel's reload action; a failure trips the boundary again.
    pub fn reload(&mut self, now: Instant) {
        self.boundary.retry();
        if let Some(path) = &self.profile_path {
            match Profile::load(path) {
                Ok(profile) => self.profile = profile,
                Err(e) => {
                    self.boundary.trip(&e);
                    return;
                }
            }
        }
        let width = u16::try_from(self.responsive.width).unwrap_or(u16::MAX);
        self.recompose(width, now);
        if !self.boundary.is_tripped() {
            self.message = Some("Reloaded".to_string());
        }
    }

    /// Clears the error panel without reloading.
    pub fn retry(&mut self, now: Instant) {
        self.boundary.retry();
        let width = u16::try_from(self.responsive.width).unwrap_or(u16::MAX);
        self.recompose(width, now);
    }

    /// Steps the projects filter to the next category and shows the projects.
    pub fn cycle_category(&mut self, now: Instant) {
        let available = self.profile.project_categories();
        if available.is_empty() {
            self.message = Some("No project categories".to_string());
            return;
        }
        let label = self.filter.cycle_category(&available).unwrap_or("all");
        self.message = Some(format!("Projects: {label}"));
        self.refilter(now);
    }

    /// Starts typing a project search term.
    pub fn begin_search(&mut self) {
        if self.tracker.registry().contains(SectionId::Projects) {
            self.searching = true;
        } else {
            self.message = Some("No projects to search".to_string());
        }
    }

    #[must_use]
    /// Whether key presses are going into the search term.
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Adds a character to the search term and filters as you type.
    pub fn search_input(&mut self, c: char, now: Instant) {
        self.filter.push_search(c);
        self.refilter(now);
    }

    /// Removes the last character of the search term.
    pub fn search_backspace(&mut self, now: Instant) {
        self.filter.pop_search();
        self.refilter(now);
    }

    /// Stops typing, keeping the term.
    pub fn end_search(&mut self) {
        self.searching = false;
    }

    /// Stops typing and shows every project again.
    pub fn clear_filter(&mut self, now: Instant) {
        self.searching = false;
        if self.filter.is_active() {
            self.filter.clear();
            self.refilter(now);
        }
    }

    fn refilter(&mut self, now: Instant) {
        let width = u16::try_from(self.responsive.width).unwrap_or(u16::MAX);
        self.recompose(width, now);
        self.commander.scroll_to_section(&self.page.layout, SectionId::Projects);
    }

    #[must_use]
    /// Whether the header is drawn: it follows the scroll direction, but stays while the
    /// compact menu is open.
    pub fn is_header_shown(&self) -> bool {
        self.commander.is_header_visible() || self.nav.is_menu_open()
    }

    #[must_use]
    /// Whether the page block at `index` has been revealed.
    pub fn is_block_revealed(&self, index: usize) -> bool {
        self.block_ids
            .get(index)
            .is_some_and(|&id| self.reveal.is_revealed(id))
    }

    #[must_use]
    /// First page row visible in the body.
    pub fn first_visible_row(&self) -> usize {
        // Scroll offsets are non-negative and bounded by the page height.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let row = self.viewport.scroll_y.floor() as usize;
        row
    }

    /// Stops all observation, as when the page goes away.
    pub fn teardown(&mut self) {
        self.tracker.disconnect();
        self.reveal.clear();
        self.resize.cancel();
        self.commander.cancel();
    }
}

#[allow(clippy::cast_precision_loss)]
fn page_height(page: &Page) -> f64 {
    page.height() as f64
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
