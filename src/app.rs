//! Application state and core logic

use crate::client::{
    CancellationSource, PlanningPokerClient, PlanningPokerClientTrait,
};
use crate::config::TuiConfig;
use crate::controllers::{CreateTeamController, PlanningPokerController, ERROR_TITLE};
use crate::services::{
    ChannelNavigator, MessageBoxService, Route, TuiBusyIndicator, TuiMessageBox,
};
use crate::state::{AppState, CreateTeamButton, CreateTeamForm, CreateTeamRow, Deck, Form, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A create team request running in the background
struct PendingCreateTeam {
    task: JoinHandle<bool>,
    cancellation: CancellationSource,
    scrum_master_name: String,
    deck: Deck,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Session state of the team the user is in
    pub planning_poker: PlanningPokerController,
    /// Busy overlay state
    pub busy_indicator: TuiBusyIndicator,
    /// Messages waiting to be dismissed
    pub message_box: TuiMessageBox,
    config: TuiConfig,
    /// Where the config is persisted, `None` to keep it in memory
    config_path: Option<PathBuf>,
    controller: Arc<CreateTeamController>,
    navigation: mpsc::UnboundedReceiver<String>,
    pending: Option<PendingCreateTeam>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured Planning Poker service
    pub fn new(config: TuiConfig) -> Result<Self> {
        let client = PlanningPokerClient::new(&config.service_address(), config.request_timeout())?;
        tracing::info!("Using Planning Poker service at {}", client.base_url());
        Ok(Self::with_client(
            config,
            TuiConfig::config_path(),
            Arc::new(client),
        ))
    }

    /// Create an App around an existing client
    pub fn with_client(
        config: TuiConfig,
        config_path: Option<PathBuf>,
        client: Arc<dyn PlanningPokerClientTrait>,
    ) -> Self {
        let planning_poker = PlanningPokerController::new();
        let busy_indicator = TuiBusyIndicator::new();
        let message_box = TuiMessageBox::new();
        let (navigator, navigation) = ChannelNavigator::new();

        let controller = CreateTeamController::new(
            client,
            Arc::new(planning_poker.clone()),
            Arc::new(message_box.clone()),
            Arc::new(busy_indicator.clone()),
            Arc::new(navigator),
        );

        let state = AppState {
            create_team_form: CreateTeamForm::with_defaults(
                config.last_scrum_master_name.as_deref(),
                config.last_deck,
            ),
            ..Default::default()
        };

        Self {
            state,
            planning_poker,
            busy_indicator,
            message_box,
            config,
            config_path,
            controller: Arc::new(controller),
            navigation,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Decks offered by the create team form
    pub fn estimation_decks(&self) -> &'static BTreeMap<Deck, String> {
        self.controller.estimation_decks()
    }

    /// A create team request is outstanding
    pub fn is_busy(&self) -> bool {
        self.pending.is_some() || self.busy_indicator.is_busy()
    }

    /// Per-frame housekeeping: collect a finished request and apply navigation
    pub async fn tick(&mut self) {
        self.state.advance_tick();
        self.collect_finished_request().await;
        while let Ok(path) = self.navigation.try_recv() {
            self.navigate(&path);
        }
    }

    async fn collect_finished_request(&mut self) {
        let finished = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.task.is_finished());
        if !finished {
            return;
        }
        let Some(pending) = self.pending.take() else {
            return;
        };

        match pending.task.await {
            Ok(true) => {
                self.config
                    .remember_team_creation(&pending.scrum_master_name, pending.deck);
                if let Err(e) = self.save_config() {
                    tracing::warn!("Failed to save configuration: {e:#}");
                }
            }
            Ok(false) => {
                if pending.cancellation.is_cancelled() {
                    self.state.status_message = Some("Team creation cancelled".to_string());
                }
            }
            Err(e) => {
                tracing::error!("Create team request failed: {e}");
                self.message_box
                    .show_message("Creating the team failed unexpectedly.", ERROR_TITLE);
            }
        }
    }

    fn save_config(&self) -> Result<()> {
        match &self.config_path {
            Some(path) => self.config.save_to(path),
            None => Ok(()),
        }
    }

    /// Switch to the view at `path`
    fn navigate(&mut self, path: &str) {
        match Route::parse(path) {
            Some(Route::PlanningPoker { .. }) if !self.planning_poker.is_initialized() => {
                tracing::warn!("Not in a team, ignoring navigation to {path}");
            }
            Some(route) => {
                tracing::debug!("Navigating to {path}");
                self.state.apply_route(route);
            }
            None => tracing::warn!("No view for navigation path {path}"),
        }
    }

    /// Submit the create team form in the background
    pub fn submit_create_team(&mut self) {
        if self.pending.is_some() {
            return;
        }

        let form = &self.state.create_team_form;
        if !form.is_complete() {
            self.state.status_message =
                Some("Enter a team name and a Scrum Master name".to_string());
            return;
        }

        let team_name = form.team_name.as_text().to_string();
        let scrum_master_name = form.scrum_master_name.as_text().to_string();
        let deck = form.deck;
        let cancellation = CancellationSource::new();
        let signal = cancellation.signal();
        let controller = Arc::clone(&self.controller);
        let name = scrum_master_name.clone();

        let task = tokio::spawn(async move {
            controller
                .create_team(&team_name, &name, deck, signal)
                .await
        });

        self.state.status_message = None;
        self.pending = Some(PendingCreateTeam {
            task,
            cancellation,
            scrum_master_name,
            deck,
        });
    }

    /// Ask the outstanding request to stop
    pub fn cancel_pending(&mut self) {
        if let Some(pending) = &self.pending {
            pending.cancellation.cancel();
            self.state.status_message = Some("Cancelling...".to_string());
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Message dialog is modal
        if self.message_box.has_message() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.message_box.dismiss();
            }
            return Ok(());
        }

        // Busy overlay is modal too, Esc cancels the request
        if self.is_busy() {
            if key.code == KeyCode::Esc {
                self.cancel_pending();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::CreateTeam => self.handle_create_team_key(key),
            View::PlanningPoker => self.handle_planning_poker_key(key),
        }
    }

    fn handle_create_team_key(&mut self, key: KeyEvent) -> Result<()> {
        let form = &mut self.state.create_team_form;
        let row = form.active_row();

        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left if row == CreateTeamRow::Deck => form.prev_deck(),
            KeyCode::Right if row == CreateTeamRow::Deck => form.next_deck(),
            KeyCode::Left | KeyCode::Right if row == CreateTeamRow::Buttons => {
                form.selected_button.toggle();
            }
            KeyCode::Enter
                if row == CreateTeamRow::Buttons
                    && form.selected_button == CreateTeamButton::Quit =>
            {
                self.quit = true;
            }
            KeyCode::Enter => self.submit_create_team(),
            KeyCode::Esc => self.quit = true,
            KeyCode::Backspace => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c) => match form.get_active_field_mut() {
                Some(field) => field.push_char(c),
                None if c == 'q' => self.quit = true,
                None => {}
            },
            _ => {}
        }
        Ok(())
    }

    fn handle_planning_poker_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('y') => {
                if let Some(path) = self.planning_poker.session_path() {
                    self.state.status_message = Some(match copy_to_clipboard(&path) {
                        Ok(()) => "Copied session path".to_string(),
                        Err(e) => {
                            tracing::warn!("Failed to copy session path: {e}");
                            format!("Copy failed: {e}")
                        }
                    });
                }
            }
            KeyCode::Esc => {
                self.planning_poker.reset();
                self.state.reset_create_team_form();
                self.state.apply_route(Route::Home);
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
        Ok(())
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
