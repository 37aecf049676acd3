//! Implements InputPort. Inquire-based interactive menu and a one-shot runner.

use crate::adapters::ui::progress::analyzing_spinner;
use crate::adapters::ui::render::{LineKind, print_lines, print_view, status_line};
use crate::domain::{DomainError, SelectedFile};
use crate::ports::InputPort;
use crate::usecases::{SubmitOutcome, UploadClient};
use async_trait::async_trait;
use inquire::ui::{Color, RenderConfig, StyleSheet, Styled};
use inquire::{Select, Text};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{info, warn};

const MENU_SELECT: &str = "Select photo";
const MENU_LOCATE: &str = "Get my location";
const MENU_SUBMIT: &str = "Upload & analyze";
const MENU_CLEAR: &str = "Clear photo";
const MENU_QUIT: &str = "Quit";

/// Red prompt prefix and highlighted option, applied to every inquire prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("📍").with_fg(Color::LightRed))
        .with_highlighted_option_prefix(Styled::new("➜").with_fg(Color::LightRed))
        .with_selected_option(Some(StyleSheet::new().with_fg(Color::LightRed)));
    inquire::set_global_render_config(config);
}

async fn load_photo(client: &mut UploadClient, path: &Path) -> Result<(), DomainError> {
    let file = SelectedFile::from_path(path).await?;
    info!(path = %path.display(), bytes = file.len(), "photo selected");
    client.select_file(Some(file));
    Ok(())
}

/// Submit with a spinner and draw whatever was stored.
async fn submit_and_render(client: &mut UploadClient) -> SubmitOutcome {
    let spinner = client
        .selected_file()
        .filter(|_| client.can_submit())
        .map(|f| analyzing_spinner(&f.filename));
    let outcome = client.submit().await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    if let Some(view) = client.view() {
        print_view(&view);
    }
    outcome
}

fn print_error(e: &DomainError) {
    print_lines(&[(LineKind::Error, e.to_string())]);
}

/// TUI adapter. Menu loop until Quit.
pub struct TuiInputPort {
    client: Mutex<UploadClient>,
}

impl TuiInputPort {
    pub fn new(client: UploadClient) -> Self {
        Self {
            client: Mutex::new(client),
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        let mut client = self.client.lock().await;
        loop {
            println!("{}", status_line(&client));
            let choice = Select::new(
                "What next?",
                vec![MENU_SELECT, MENU_LOCATE, MENU_SUBMIT, MENU_CLEAR, MENU_QUIT],
            )
            .prompt()
            .map_err(|e| DomainError::Ui(e.to_string()))?;

            match choice {
                MENU_SELECT => {
                    let raw = Text::new("Photo path:")
                        .prompt()
                        .map_err(|e| DomainError::Ui(e.to_string()))?;
                    let raw = raw.trim();
                    if raw.is_empty() {
                        client.select_file(None);
                        continue;
                    }
                    if let Err(e) = load_photo(&mut client, Path::new(raw)).await {
                        warn!(error = %e, "photo not loaded");
                        print_error(&e);
                    }
                }
                MENU_LOCATE => {
                    // Failures already surfaced as notices.
                    let _ = client.request_location().await;
                }
                MENU_SUBMIT => {
                    submit_and_render(&mut client).await;
                }
                MENU_CLEAR => client.select_file(None),
                _ => break,
            }
        }
        Ok(())
    }
}

/// Non-interactive: select, locate, submit once, render.
pub struct OneShotInput {
    client: Mutex<UploadClient>,
    photo: PathBuf,
    print_json: bool,
}

impl OneShotInput {
    pub fn new(client: UploadClient, photo: PathBuf, print_json: bool) -> Self {
        Self {
            client: Mutex::new(client),
            photo,
            print_json,
        }
    }
}

#[async_trait]
impl InputPort for OneShotInput {
    async fn run(&self) -> Result<(), DomainError> {
        let mut client = self.client.lock().await;
        load_photo(&mut client, &self.photo).await?;
        if client.route().requires_coordinates() {
            // Notice already printed; submit will refuse without coordinates.
            let _ = client.request_location().await;
        }

        let outcome = if self.print_json {
            let outcome = client.submit().await;
            if let Some(resp) = client.response() {
                let json = serde_json::to_string_pretty(resp)
                    .map_err(|e| DomainError::Parse(e.to_string()))?;
                println!("{}", json);
            }
            outcome
        } else {
            submit_and_render(&mut client).await
        };

        match outcome {
            SubmitOutcome::Stored => Ok(()),
            SubmitOutcome::Skipped => Err(DomainError::MissingInput),
            SubmitOutcome::Failed => Err(DomainError::Upload("no analysis received".to_string())),
        }
    }
}
