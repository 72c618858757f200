//! Keepsake: the card itself.
//!
//! Wires the engine, ticker, and widgets together and runs the main loop.
//! The first CLI argument is an optional route fragment (`final-card` or
//! `#final-card`); unknown fragments fall back to the first page.

use crossbeam_channel::select;
use keepsake::{
    Buffer, Button, CaptureGuard, Cell, CardConfig, CardFrame, Deck, Engine, FlowerConfig,
    FlowerField, HeartConfig, HeartField, HintBar, InputEvent, KeyCode, Modifiers, Placer,
    PlacerConfig, Rect, Rgb, RouteMap, RunawayButton, RunawayConfig, SectionKind, Tick,
    TickerActor, Widget,
};
use std::env;
use std::io;
use std::time::Duration;

/// Animation frame interval (~20 FPS is plenty for drifting hearts).
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Gap between the confirm and runaway buttons in their resting row.
const BUTTON_GAP: u16 = 4;

const SCREEN_BG: Rgb = Rgb::from_u32(0x14101C);
const CARD_BG: Rgb = Rgb::from_u32(0x241A2E);
const CARD_BORDER: Rgb = Rgb::from_u32(0xB03A5B);
const TITLE_FG: Rgb = Rgb::from_u32(0xF2D5DC);
const TEXT_FG: Rgb = Rgb::from_u32(0xCBB8D4);

fn main() -> io::Result<()> {
    let fragment = env::args().nth(1);

    let engine = Engine::new()?;
    let mut app = App::new(engine, fragment.as_deref());
    let ticker = TickerActor::spawn(TICK_INTERVAL);

    app.render();
    app.engine.request_redraw();

    while app.engine.is_running() {
        select! {
            recv(app.engine.input_receiver()) -> result => {
                if let Ok(event) = result {
                    app.handle_event(&event);
                }
            }

            recv(ticker.receiver()) -> result => {
                if let Ok(tick) = result {
                    app.handle_tick(tick);
                }
            }
        }
    }

    ticker.join();
    Ok(())
}

/// All card state, owned by the main loop.
struct App {
    engine: Engine,
    deck: Deck,
    routes: RouteMap,
    active: String,
    frame: CardFrame,
    guard: CaptureGuard,
    hearts: HeartField,
    flowers: FlowerField,
    yes: Button,
    runaway: RunawayButton,
    hints: HintBar,
}

impl App {
    fn new(engine: Engine, fragment: Option<&str>) -> Self {
        let config = CardConfig::default();
        let deck = Deck::standard();
        let routes = deck.route_map();
        let active = routes
            .resolve(fragment.unwrap_or(""))
            .unwrap_or_default()
            .to_string();

        let placer = Placer::with_config(PlacerConfig {
            padding: config.placement_padding,
            ..PlacerConfig::default()
        });
        let runaway = RunawayButton::new(&config.no_label, placer).with_config(RunawayConfig {
            max_escapes: config.max_escapes,
            ..RunawayConfig::default()
        });

        let mut hints = HintBar::new();
        hints.set_left("← → turn the pages · 1-4 jump");
        hints.set_right("Esc closes the card");

        let mut app = Self {
            frame: CardFrame::compute(engine.width(), engine.height()),
            engine,
            deck,
            routes,
            active,
            guard: CaptureGuard::new(),
            hearts: HeartField::new(HeartConfig::default()),
            flowers: FlowerField::new(FlowerConfig::default()),
            yes: Button::new(&config.yes_label),
            runaway,
            hints,
        };
        app.relayout();
        if app.routes.is_final(&app.active) {
            app.flowers.launch();
        }
        app
    }

    /// Recompute the frame and push fresh bounds into every widget.
    fn relayout(&mut self) {
        self.frame = CardFrame::compute(self.engine.width(), self.engine.height());
        self.hearts.set_bounds(self.frame.screen);
        self.flowers.set_bounds(self.frame.body);
        self.hints.set_bounds(self.frame.hint);

        // Resting button row, centered in the actions band.
        let actions = self.frame.actions;
        let yes_width = self.yes.desired_width();
        let runaway_width = self.runaway.desired_width();
        let row_width = yes_width + BUTTON_GAP + runaway_width;
        let start_x = actions.x + actions.width.saturating_sub(row_width) / 2;
        let row_y = actions.y + actions.height / 2;

        self.yes.set_bounds(Rect::new(start_x, row_y, yes_width, 1));
        let home = Rect::new(start_x + yes_width + BUTTON_GAP, row_y, runaway_width, 1);
        self.runaway
            .set_geometry(home, self.frame.boundary(), Some(self.yes.bounds()));
    }

    /// Switch sections through the shared resolve path.
    fn navigate(&mut self, fragment: &str) {
        let Some(route) = self.routes.resolve(fragment) else {
            return;
        };
        self.active = route.to_string();
        if self.routes.is_final(&self.active) {
            self.flowers.launch();
        }
    }

    fn navigate_next(&mut self) {
        if let Some(route) = self.routes.next_after(&self.active) {
            let route = route.to_string();
            self.navigate(&route);
        }
    }

    fn navigate_previous(&mut self) {
        if let Some(route) = self.routes.previous_before(&self.active) {
            let route = route.to_string();
            self.navigate(&route);
        }
    }

    fn on_question_page(&self) -> Option<String> {
        match &self.deck.get(&self.active)?.kind {
            SectionKind::Question { yes_route } => Some(yes_route.clone()),
            _ => None,
        }
    }

    fn handle_event(&mut self, event: &InputEvent) {
        if self.guard.intercepts(event) {
            return;
        }

        match event {
            InputEvent::Key { code, modifiers } => match code {
                KeyCode::Esc => self.engine.stop(),
                KeyCode::Char('c') if modifiers.control => self.engine.stop(),
                KeyCode::Left | KeyCode::Up | KeyCode::BackTab => self.navigate_previous(),
                KeyCode::Right | KeyCode::Down | KeyCode::Tab => self.navigate_next(),
                KeyCode::Home => {
                    if let Some(route) = self.routes.first() {
                        let route = route.to_string();
                        self.navigate(&route);
                    }
                }
                KeyCode::Char(c @ '1'..='9') => {
                    let index = *c as usize - '1' as usize;
                    if let Some(route) = self.routes.at(index) {
                        let route = route.to_string();
                        self.navigate(&route);
                    }
                }
                KeyCode::Enter => {
                    if let Some(yes_route) = self.on_question_page() {
                        self.yes.press();
                        self.yes.take_click();
                        self.navigate(&yes_route);
                    }
                }
                _ => {}
            },

            InputEvent::Resize { width, height } => {
                self.engine.handle_resize(*width, *height);
                self.relayout();
            }

            InputEvent::MouseMove(_) | InputEvent::MouseDown(_) | InputEvent::MouseUp(_) => {
                // Buttons only live on the question page.
                if let Some(yes_route) = self.on_question_page() {
                    self.runaway.handle_input(event);
                    self.yes.handle_input(event);
                    if self.yes.take_click() {
                        self.navigate(&yes_route);
                    }
                }
            }

            InputEvent::Shutdown => self.engine.stop(),

            _ => {}
        }

        self.render();
        self.engine.request_update();
    }

    fn handle_tick(&mut self, tick: Tick) {
        self.hearts.tick(tick.elapsed);
        self.flowers.tick(tick.elapsed);
        self.render();
        self.engine.request_update();
    }

    /// Compose the frame back-to-front.
    fn render(&mut self) {
        let frame = self.frame;
        let Some(section) = self.deck.get(&self.active).cloned() else {
            return;
        };

        self.engine
            .fill_rect(frame.screen, Cell::new(' ').with_bg(SCREEN_BG));
        self.hearts.render(self.engine.buffer_mut());

        draw_card_box(self.engine.buffer_mut(), frame.card);

        // Title, centered in the header band.
        draw_centered(
            self.engine.buffer_mut(),
            frame.header,
            frame.header.y,
            &section.title,
            TITLE_FG,
            CARD_BG,
            Modifiers::BOLD,
        );

        // Body lines, centered, clipped to the band.
        for (index, line) in section.lines.iter().enumerate() {
            let y = frame.body.y + 1 + index as u16;
            if y >= frame.body.bottom() {
                break;
            }
            draw_centered(
                self.engine.buffer_mut(),
                frame.body,
                y,
                line,
                TEXT_FG,
                CARD_BG,
                Modifiers::empty(),
            );
        }

        match section.kind {
            SectionKind::Question { .. } => {
                self.yes.render(self.engine.buffer_mut());
                self.runaway.render(self.engine.buffer_mut());
            }
            SectionKind::Final => {
                self.flowers.render(self.engine.buffer_mut());
            }
            SectionKind::Message => {}
        }

        self.hints.render(self.engine.buffer_mut());
    }
}

/// Draw the card's rounded border and fill its interior.
fn draw_card_box(buffer: &mut Buffer, card: Rect) {
    if card.width < 2 || card.height < 2 {
        return;
    }
    buffer.fill_rect(
        card.x,
        card.y,
        card.width,
        card.height,
        Cell::new(' ').with_bg(CARD_BG),
    );

    let border = |c: char| Cell::new(c).with_fg(CARD_BORDER).with_bg(CARD_BG);
    let right = card.right() - 1;
    let bottom = card.bottom() - 1;

    for x in card.x + 1..right {
        buffer.set(x, card.y, border('─'));
        buffer.set(x, bottom, border('─'));
    }
    for y in card.y + 1..bottom {
        buffer.set(card.x, y, border('│'));
        buffer.set(right, y, border('│'));
    }
    buffer.set(card.x, card.y, border('╭'));
    buffer.set(right, card.y, border('╮'));
    buffer.set(card.x, bottom, border('╰'));
    buffer.set(right, bottom, border('╯'));
}

/// Draw a line of text centered within a band's width.
fn draw_centered(
    buffer: &mut Buffer,
    band: Rect,
    y: u16,
    text: &str,
    fg: Rgb,
    bg: Rgb,
    modifiers: Modifiers,
) {
    let len = text.chars().count() as u16;
    let x = band.x + band.width.saturating_sub(len) / 2;
    buffer.draw_styled(x, y, text, fg, bg, modifiers);
}
