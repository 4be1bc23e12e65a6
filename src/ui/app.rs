use crate::catalog::{Alien, Catalog, CatalogError};
use crate::config::{Config, ScrollConfig};
use crate::ui::briefing::{BriefingSequence, BriefingState};
use crate::ui::scroll::ScrollSelector;
use crate::ui::sequencer::{OverlayState, Screen, SequencerError, SequencerTimings, ViewSequencer};
use crate::ui::timer::SharedClock;

/// Everything the renderer needs, plus the glue between input and the
/// state machines.
///
/// The scroll selector owns the highlighted gallery index, the sequencer
/// owns screens and overlays, and the briefing runs while the Alien X page
/// is visible. Timers only fire from [`App::on_tick`].
#[derive(Debug)]
pub struct App {
    should_quit: bool,
    catalog: Catalog,
    scroll: ScrollSelector,
    scroll_config: ScrollConfig,
    sequencer: ViewSequencer,
    briefing: BriefingSequence,
    /// Bumped whenever the highlighted alien changes; the preview clip
    /// restarts on each bump.
    media_generation: u64,
    animation_tick: u64,
    notice: Option<String>,
}

impl App {
    pub fn new(config: &Config, clock: SharedClock) -> Result<Self, CatalogError> {
        let catalog = config.catalog()?;
        Ok(Self::with_catalog(
            catalog,
            config.timings.sequencer_timings(),
            config.scroll.clone(),
            clock,
        ))
    }

    pub fn with_catalog(
        catalog: Catalog,
        timings: SequencerTimings,
        scroll_config: ScrollConfig,
        clock: SharedClock,
    ) -> Self {
        let item_count = catalog.len();
        Self {
            should_quit: false,
            scroll: ScrollSelector::new(item_count),
            scroll_config,
            sequencer: ViewSequencer::new(item_count, timings, clock.clone()),
            briefing: BriefingSequence::new(clock),
            catalog,
            media_generation: 0,
            animation_tick: 0,
            notice: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn screen(&self) -> Screen {
        self.sequencer.screen()
    }

    pub fn overlays(&self) -> OverlayState {
        self.sequencer.overlays()
    }

    pub fn is_transitioning(&self) -> bool {
        self.sequencer.is_busy()
    }

    /// Index highlighted by the gallery scroll position.
    pub fn highlighted(&self) -> usize {
        self.scroll.index()
    }

    pub fn highlighted_alien(&self) -> Option<&Alien> {
        self.catalog.get(self.scroll.index())
    }

    /// Alien chosen for the detail page.
    pub fn selected_alien(&self) -> Option<&Alien> {
        self.sequencer
            .selection()
            .and_then(|index| self.catalog.get(index))
    }

    pub fn selection(&self) -> Option<usize> {
        self.sequencer.selection()
    }

    pub fn scroll_progress(&self) -> f64 {
        self.scroll.progress()
    }

    pub fn media_generation(&self) -> u64 {
        self.media_generation
    }

    pub fn animation_tick(&self) -> u64 {
        self.animation_tick
    }

    pub fn briefing(&self) -> &BriefingState {
        self.briefing.state()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Scroll the gallery by a fraction of its height.
    pub fn scroll_by(&mut self, delta: f64) {
        if self.screen() != Screen::Selection {
            return;
        }
        if let Some(index) = self.scroll.scroll_by(delta) {
            self.on_highlight_changed(index);
        }
    }

    pub fn scroll_to(&mut self, progress: f64) {
        if self.screen() != Screen::Selection {
            return;
        }
        if let Some(index) = self.scroll.set_progress(progress) {
            self.on_highlight_changed(index);
        }
    }

    pub fn scroll_step(&mut self, steps: i32) {
        self.scroll_by(self.scroll_config.step * f64::from(steps));
    }

    pub fn scroll_page(&mut self, pages: i32) {
        self.scroll_by(self.scroll_config.page_step * f64::from(pages));
    }

    /// Transform into the alien highlighted by the scroll position.
    pub fn select_highlighted(&mut self) -> bool {
        // The scroll index is always in bounds.
        self.select(self.scroll.index()).unwrap_or(false)
    }

    /// Transform into the alien at `index` (a card click).
    pub fn select(&mut self, index: usize) -> Result<bool, SequencerError> {
        let result = self.sequencer.select_item(index);
        match &result {
            Ok(true) => self.notice = None,
            Ok(false) => {}
            Err(err) => {
                tracing::warn!(%err, "Rejected alien selection");
                self.notice = Some(err.to_string());
            }
        }
        result
    }

    pub fn request_special(&mut self) -> bool {
        self.navigate(ViewSequencer::request_special)
    }

    pub fn back(&mut self) -> bool {
        self.navigate(ViewSequencer::back)
    }

    pub fn transform_back(&mut self) -> bool {
        self.navigate(ViewSequencer::transform_back)
    }

    /// Show the wiki page of the alien on the detail page.
    pub fn learn_more(&mut self) -> Option<String> {
        if self.screen() != Screen::Detail {
            return None;
        }
        let alien = self.selected_alien()?;
        let notice = match alien.wiki_url.as_deref() {
            Some(url) => format!("Learn more: {url}"),
            None => {
                tracing::warn!(alien = %alien.name, "No wiki URL for alien");
                format!("No wiki page for {}", alien.name)
            }
        };
        self.notice = Some(notice.clone());
        Some(notice)
    }

    pub fn on_tick(&mut self) {
        self.animation_tick = self.animation_tick.wrapping_add(1);
        let previous = self.screen();
        if self.sequencer.poll() {
            self.on_screen_changed(previous);
        }
        self.briefing.poll();
    }

    /// Cancel every pending timer. Nothing changes state afterwards.
    pub fn teardown(&mut self) {
        self.sequencer.teardown();
        self.briefing.stop();
    }

    pub fn is_torn_down(&self) -> bool {
        self.sequencer.is_torn_down()
    }

    fn navigate(&mut self, op: fn(&mut ViewSequencer) -> bool) -> bool {
        let previous = self.screen();
        let accepted = op(&mut self.sequencer);
        if accepted {
            self.on_screen_changed(previous);
        }
        accepted
    }

    fn on_screen_changed(&mut self, previous: Screen) {
        let current = self.screen();
        if current == previous {
            return;
        }
        tracing::info!(from = ?previous, to = ?current, "Screen changed");
        self.notice = None;
        match (previous, current) {
            (_, Screen::Special) => self.briefing.start(),
            (Screen::Special, _) => self.briefing.stop(),
            _ => {}
        }
    }

    fn on_highlight_changed(&mut self, index: usize) {
        self.media_generation = self.media_generation.wrapping_add(1);
        if let Some(alien) = self.catalog.get(index) {
            tracing::debug!(
                index,
                video = %alien.video,
                generation = self.media_generation,
                "Reloading preview"
            );
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.teardown();
    }
}
