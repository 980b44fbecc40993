//! Application
//!
//! Owns every piece of page state and ties them together: the loading
//! sequencer gates the hero reveal, the viewport feeds the scroll
//! reveals, and a frame tick advances all animation clocks with real
//! elapsed time. Input and frames are multiplexed on one task with
//! `tokio::select!`; input is handled first so a quit never waits on a
//! frame.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use futures::StreamExt;
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::Frame;
use ratatui::Terminal;

use folio_core::{ContentStore, HeroReveal, LoadingSequencer, ScrollReveals};

use crate::compositor::Compositor;
use crate::nav::{self, MenuState};
use crate::particles::{ParticleField, DEFAULT_COUNT};
use crate::sections::{contact, experience, hero, projects, PageLayout};
use crate::theme::Palette;
use crate::viewport::{SectionId, Viewport};
use crate::widgets::loading_screen;

/// Frame cadence, ~30fps.
const FRAME: Duration = Duration::from_millis(33);

/// Rows a mouse wheel notch scrolls.
const WHEEL_ROWS: i32 = 3;

pub struct App {
    content: ContentStore,
    palette: Palette,
    sequencer: LoadingSequencer,
    hero: HeroReveal,
    reveals: ScrollReveals,
    viewport: Viewport,
    menu: MenuState,
    particles: ParticleField,
    /// Session clock for cursor blink and the loading sweep
    elapsed: Duration,
    last_frame: Instant,
    view: Rect,
    running: bool,
}

impl App {
    pub fn new(content: ContentStore) -> Self {
        let palette = Palette::from_theme(content.theme());
        Self {
            content,
            palette,
            sequencer: LoadingSequencer::standard(),
            hero: HeroReveal::new(),
            reveals: ScrollReveals::new(),
            viewport: Viewport::new(),
            menu: MenuState::default(),
            particles: ParticleField::new(DEFAULT_COUNT),
            elapsed: Duration::ZERO,
            last_frame: Instant::now(),
            view: Rect::new(0, 0, 80, 24),
            running: true,
        }
    }

    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut events = crossterm::event::EventStream::new();
        let mut ticker = tokio::time::interval(FRAME);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        self.sequencer.start();
        self.last_frame = Instant::now();
        tracing::info!("session started");

        while self.running {
            tokio::select! {
                biased;

                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                },

                _ = ticker.tick() => {
                    self.advance();
                    terminal.draw(|frame| self.draw(frame))?;
                }
            }
        }

        tracing::info!("session ended");
        Ok(())
    }

    /// Advance every animation clock by the real frame delta.
    fn advance(&mut self) {
        let now = Instant::now();
        let delta = now - self.last_frame;
        self.last_frame = now;
        self.elapsed += delta;

        self.sequencer.tick(delta);
        if self.sequencer.take_completion() {
            self.hero.begin(&self.content);
        }
        self.hero.tick(delta);
        self.reveals.tick(delta);
        self.particles.tick(delta);
        self.viewport.observe_all(&mut self.reveals);
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Esc => {
                if self.menu.is_open() {
                    self.menu.close();
                } else {
                    self.running = false;
                }
            }
            _ if !self.sequencer.is_complete() => {
                // The page is frozen behind the loading overlay
            }
            KeyCode::Char('m') if nav::is_narrow(self.view.width) => self.menu.toggle(),
            KeyCode::Char(c @ '1'..='4') => {
                let section = SectionId::ALL[c as usize - '1' as usize];
                self.viewport.jump_to(section);
                self.menu.close();
            }
            KeyCode::Up | KeyCode::Char('k') => self.viewport.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.viewport.scroll_by(1),
            KeyCode::PageUp => self.viewport.scroll_by(-(self.page_rows())),
            KeyCode::PageDown => self.viewport.scroll_by(self.page_rows()),
            KeyCode::Home => self.viewport.scroll_to(0),
            KeyCode::End => {
                let end = self.viewport.max_offset();
                self.viewport.scroll_to(end);
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.sequencer.is_complete() {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollUp => self.viewport.scroll_by(-WHEEL_ROWS),
            MouseEventKind::ScrollDown => self.viewport.scroll_by(WHEEL_ROWS),
            _ => {}
        }
    }

    fn page_rows(&self) -> i32 {
        self.view.height.saturating_sub(nav::BAR_HEIGHT) as i32
    }

    fn draw(&mut self, frame: &mut Frame) {
        self.view = frame.area();
        let area = self.view;
        if area.width == 0 || area.height == 0 {
            return;
        }

        let layout = PageLayout::compute(&self.content, area.width, area.height);
        self.viewport.begin_layout(layout.total_height, area.height);
        layout.register(&self.content, &mut self.viewport);

        let offset = self.viewport.offset();
        let cursor_on = self.elapsed.as_millis() % 1_000 < 500;

        let mut comp = Compositor::new();

        // Particles show through the hero's empty cells only
        let hero_rows = layout.hero.height.saturating_sub(offset).min(area.height);
        if hero_rows > 0 && self.hero.has_begun() {
            let bounds = Rect::new(area.x, area.y, area.width, hero_rows);
            let id = comp.create_layer(bounds, 0);
            let field = Rect::new(0, 0, bounds.width, bounds.height);
            self.particles
                .render(comp.buffer_mut(id), field, &self.palette);
        }

        // The page document, windowed by the scroll offset
        let page = comp.create_document_layer(area, 10, layout.total_height);
        {
            let buf = comp.buffer_mut(page);
            hero::render(
                buf,
                layout.hero,
                &self.content,
                &self.palette,
                &self.hero,
                cursor_on,
            );
            experience::render(buf, layout.experience, &self.content, &self.palette, &self.reveals);
            projects::render(buf, layout.projects, &self.content, &self.palette, &self.reveals);
            contact::render(buf, layout.contact, &self.content, &self.palette);
        }
        comp.set_scroll(page, offset);

        if self.sequencer.is_complete() {
            let bar = comp.create_layer(
                Rect::new(area.x, area.y, area.width, nav::BAR_HEIGHT),
                20,
            );
            nav::render_bar(
                comp.buffer_mut(bar),
                area.width,
                &self.content,
                &self.palette,
                self.viewport.active_section(),
            );

            if self.menu.is_open() && nav::is_narrow(area.width) {
                let overlay = comp.create_layer(area, 30);
                let active = self.viewport.active_section();
                let bounds = Rect::new(0, 0, area.width, area.height);
                nav::render_menu(
                    comp.buffer_mut(overlay),
                    bounds,
                    &self.content,
                    &self.palette,
                    active,
                );
            }
        } else {
            let overlay = comp.create_layer(area, 40);
            let bounds = Rect::new(0, 0, area.width, area.height);
            loading_screen::render(
                comp.buffer_mut(overlay),
                bounds,
                &self.sequencer,
                &self.palette,
                self.elapsed,
            );
        }

        comp.composite(frame.buffer_mut());
    }
}
