//! Main application struct and event loop for the tally TUI.
//!
//! The app owns exactly one `SessionState` snapshot and the read-only
//! catalog. Every key press either edits local widget state (cursors,
//! input buffers) or is translated into a session [`Op`]; an accepted
//! operation replaces the snapshot, a rejected one becomes a status-line
//! message and the snapshot stands.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use tally_core::{Catalog, Op, Phase, SessionState};

use crate::theme::{Theme, tally_default};
use crate::views::{BudgetView, CART_VISIBLE, RESULTS_VISIBLE, ReviewView, ShoppingView, ViewRenderer};
use crate::widgets::{CartListWidget, ItemListWidget, TextInput};
use crate::{TallyTerminal, restore_terminal, setup_terminal};

/// Which panel of the shopping view receives input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Search,
    Cart,
}

/// Main TUI application.
#[derive(Debug)]
pub struct App {
    /// Current session snapshot; replaced wholesale on every accepted op.
    pub state: SessionState,
    /// The static catalog, loaded once at startup.
    pub catalog: Catalog,
    pub theme: Theme,
    pub running: bool,
    /// Message from the last rejected operation, cleared on the next success.
    pub status: Option<String>,
    /// Which shopping panel has input focus.
    pub focus: Focus,
    /// Input buffer for the budget prompt.
    pub budget_input: TextInput,
    /// Input buffer for the search box.
    pub search_input: TextInput,
    /// Cursor state for the search-result list.
    pub results: ItemListWidget,
    /// Cursor state for the cart panel.
    pub cart: CartListWidget,
}

impl App {
    /// Creates a new app over the given catalog, at session start.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: SessionState::new(),
            catalog,
            theme: tally_default(),
            running: true,
            status: None,
            focus: Focus::default(),
            budget_input: TextInput::default(),
            search_input: TextInput::default(),
            results: ItemListWidget::new(),
            cart: CartListWidget::new(),
        }
    }

    /// Applies a session operation and records the outcome.
    ///
    /// On success the snapshot is replaced and any status message cleared;
    /// on rejection the snapshot is untouched and the error becomes the
    /// status message.
    fn dispatch(&mut self, op: Op) {
        match self.state.apply(op) {
            Ok(next) => {
                self.state = next;
                self.status = None;
            }
            Err(err) => {
                tracing::debug!(%err, "operation rejected");
                self.status = Some(err.to_string());
            }
        }
    }

    /// Handles a key event, routed by session phase.
    ///
    /// Ctrl-C always quits, regardless of phase or focus.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        match self.state.phase() {
            Phase::AwaitingBudget => self.handle_budget_key(key),
            Phase::Shopping => self.handle_shopping_key(key),
            Phase::ReviewingFinalList => self.handle_review_key(key),
        }
    }

    fn handle_budget_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.running = false,
            KeyCode::Enter => {
                self.dispatch(Op::SetBudget(self.budget_input.buffer.clone()));
                if self.state.phase() == Phase::Shopping {
                    self.budget_input.clear();
                }
            }
            KeyCode::Backspace => self.budget_input.backspace(),
            KeyCode::Delete => self.budget_input.delete(),
            KeyCode::Left => self.budget_input.move_left(),
            KeyCode::Right => self.budget_input.move_right(),
            KeyCode::Home => self.budget_input.move_to_start(),
            KeyCode::End => self.budget_input.move_to_end(),
            KeyCode::Char(c) => self.budget_input.insert(c),
            _ => {}
        }
    }

    fn handle_shopping_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.running = false;
                return;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Search => Focus::Cart,
                    Focus::Cart => Focus::Search,
                };
                return;
            }
            KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.dispatch(Op::Finalize);
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Cart => self.handle_cart_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let result_count = self.state.search_results(&self.catalog).len();

        match key.code {
            KeyCode::Up => {
                self.results.select_prev(result_count);
                self.results.ensure_visible(RESULTS_VISIBLE);
            }
            KeyCode::Down => {
                self.results.select_next(result_count);
                self.results.ensure_visible(RESULTS_VISIBLE);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.results.increment_quantity(),
            KeyCode::Char('-') => self.results.decrement_quantity(),
            KeyCode::Enter => self.add_selected(),
            KeyCode::Backspace => {
                self.search_input.backspace();
                self.submit_search();
            }
            KeyCode::Delete => {
                self.search_input.delete();
                self.submit_search();
            }
            KeyCode::Left => self.search_input.move_left(),
            KeyCode::Right => self.search_input.move_right(),
            KeyCode::Home => self.search_input.move_to_start(),
            KeyCode::End => self.search_input.move_to_end(),
            KeyCode::Char(c) => {
                self.search_input.insert(c);
                self.submit_search();
            }
            _ => {}
        }
    }

    fn handle_cart_key(&mut self, key: KeyEvent) {
        let len = self.state.cart().len();

        match key.code {
            KeyCode::Up => {
                self.cart.select_prev(len);
                self.cart.ensure_visible(CART_VISIBLE);
            }
            KeyCode::Down => {
                self.cart.select_next(len);
                self.cart.ensure_visible(CART_VISIBLE);
            }
            KeyCode::Enter | KeyCode::Delete | KeyCode::Char('d') => {
                if len > 0 {
                    self.dispatch(Op::RemoveItem(self.cart.selected));
                    self.cart.clamp(self.state.cart().len());
                }
            }
            _ => {}
        }
    }

    fn handle_review_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            self.dispatch(Op::CloseReview);
        }
    }

    /// Re-submits the search term and returns the result cursor to the top.
    fn submit_search(&mut self) {
        self.dispatch(Op::Search(self.search_input.buffer.clone()));
        self.results.reset();
    }

    /// Adds the selected search result with the pending quantity.
    fn add_selected(&mut self) {
        let item = self
            .state
            .search_results(&self.catalog)
            .get(self.results.selected)
            .map(|item| (*item).clone());

        if let Some(item) = item {
            self.dispatch(Op::AddItem {
                item,
                quantity: self.results.quantity,
            });
            self.results.quantity = 1;
        }
    }

    /// Renders the view for the current session phase.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        match self.state.phase() {
            Phase::AwaitingBudget => BudgetView.render(frame, area, self),
            Phase::Shopping => ShoppingView.render(frame, area, self),
            Phase::ReviewingFinalList => ReviewView.render(frame, area, self),
        }
    }

    /// Runs the main event loop.
    ///
    /// Sets up the terminal, enters the render/input loop, and restores
    /// the terminal on exit. Returns an error if terminal setup fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = setup_terminal()?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the event loop failed
        restore_terminal(&mut terminal)?;

        result
    }

    /// The core event loop. Separated from `run` for testability.
    fn event_loop(&mut self, terminal: &mut TallyTerminal) -> io::Result<()> {
        while self.running {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key(key);
            }
        }

        Ok(())
    }
}
