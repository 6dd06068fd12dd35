//! Implements InputPort. Inquire-based interactive session.
//!
//! One action at a time: the menu is not offered again until the outstanding
//! model call resolves.

use super::cards;
use crate::domain::{
    ChatMessage, DomainError, ImagePayload, STYLE_TAGS, SessionState, Transcript, WeatherData,
};
use crate::ports::{CapturePort, InputPort};
use crate::usecases::StylistService;
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{Confirm, InquireError, MultiSelect, Select, Text};
use std::fmt;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    DailyOutfit,
    Chat,
    Workout,
    BodyShape,
    Beauty,
    Palette,
    EditStyles,
    ShowProfile,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 9] = [
        MenuItem::DailyOutfit,
        MenuItem::Chat,
        MenuItem::Workout,
        MenuItem::BodyShape,
        MenuItem::Beauty,
        MenuItem::Palette,
        MenuItem::EditStyles,
        MenuItem::ShowProfile,
        MenuItem::Quit,
    ];
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MenuItem::DailyOutfit => "Today's outfit",
            MenuItem::Chat => "Chat with Ixora",
            MenuItem::Workout => "Workout plan",
            MenuItem::BodyShape => "Analyze body shape (photo)",
            MenuItem::Beauty => "Beauty & lip colour analysis (photo)",
            MenuItem::Palette => "Seasonal colour palette (photo)",
            MenuItem::EditStyles => "Edit style preferences",
            MenuItem::ShowProfile => "Show profile",
            MenuItem::Quit => "Quit",
        })
    }
}

fn input_err(e: InquireError) -> DomainError {
    DomainError::Input(e.to_string())
}

fn is_cancel(e: &InquireError) -> bool {
    matches!(
        e,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Show a spinner while `fut` runs.
async fn with_spinner<F: Future>(message: &'static str, fut: F) -> F::Output {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    let out = fut.await;
    pb.finish_and_clear();
    out
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    stylist: Arc<StylistService>,
    capture: Arc<dyn CapturePort>,
    session: Arc<SessionState>,
    weather: WeatherData,
    transcript: Mutex<Transcript>,
}

impl TuiInputPort {
    pub fn new(
        stylist: Arc<StylistService>,
        capture: Arc<dyn CapturePort>,
        session: Arc<SessionState>,
        weather: WeatherData,
        greeting_name: &str,
    ) -> Self {
        Self {
            stylist,
            capture,
            session,
            weather,
            transcript: Mutex::new(Transcript::with_greeting(greeting_name)),
        }
    }

    async fn daily_outfit(&self) -> Result<(), DomainError> {
        println!("{}", cards::weather_card(&self.weather));
        let profile = self.session.profile().await;
        let outfit = with_spinner(
            "Styling your day...",
            self.stylist.generate_daily_outfit(&profile, &self.weather),
        )
        .await;
        match outfit {
            Some(outfit) => println!("{}", cards::outfit_card(&outfit)),
            None => println!("Couldn't put a look together right now. Try again in a moment."),
        }
        Ok(())
    }

    async fn chat(&self) -> Result<(), DomainError> {
        {
            let transcript = self.transcript.lock().await;
            for msg in transcript.messages() {
                println!("{}: {}", msg.role.as_str(), msg.text);
            }
        }
        println!("(empty line to return to the menu)");

        loop {
            let text = match Text::new("You:").prompt() {
                Ok(t) => t,
                Err(e) if is_cancel(&e) => return Ok(()),
                Err(e) => return Err(input_err(e)),
            };
            let text = text.trim();
            if text.is_empty() {
                return Ok(());
            }

            let profile = self.session.profile().await;
            let mut transcript = self.transcript.lock().await;
            let reply = with_spinner(
                "Ixora is typing...",
                self.stylist
                    .chat_with_stylist(transcript.messages(), &profile, text),
            )
            .await;

            println!("Ixora: {}", reply.text);
            if let Some(outfit) = &reply.outfit {
                println!("{}", cards::outfit_card(outfit));
            }
            transcript.push(ChatMessage::user(text));
            transcript.push(ChatMessage::from_reply(reply));
        }
    }

    async fn workout(&self) -> Result<(), DomainError> {
        let profile = self.session.profile().await;
        let plan = with_spinner(
            "Designing your routine...",
            self.stylist.generate_workout_plan(&profile),
        )
        .await;
        match plan {
            Some(plan) => println!("{}", cards::workout_card(&plan)),
            None => println!("Couldn't build a workout right now. Try again in a moment."),
        }
        Ok(())
    }

    /// Ask for a photo until one loads or the user gives up. Errors are shown
    /// inline with a retry choice.
    async fn capture_with_retry(&self) -> Result<Option<ImagePayload>, DomainError> {
        loop {
            let path = match Text::new("Path to photo:").prompt() {
                Ok(p) => p,
                Err(e) if is_cancel(&e) => return Ok(None),
                Err(e) => return Err(input_err(e)),
            };
            match self.capture.capture(Path::new(path.trim())).await {
                Ok(payload) => return Ok(Some(payload)),
                Err(e) => {
                    println!("⚠ {}", e);
                    let retry = Confirm::new("Try again?")
                        .with_default(true)
                        .prompt()
                        .map_err(input_err)?;
                    if !retry {
                        return Ok(None);
                    }
                }
            }
        }
    }

    async fn body_shape(&self) -> Result<(), DomainError> {
        let Some(photo) = self.capture_with_retry().await? else {
            return Ok(());
        };
        let analysis = with_spinner(
            "Analyzing silhouette...",
            self.stylist.analyze_body_shape(&photo.to_data_url()),
        )
        .await;
        let Some(analysis) = analysis else {
            println!("Could not analyze image. Please try again with better lighting.");
            return Ok(());
        };
        println!("{}", cards::body_shape_card(&analysis));
        let apply = Confirm::new(&format!("Update your profile to {}?", analysis.shape))
            .with_default(true)
            .prompt()
            .map_err(input_err)?;
        if apply {
            self.session
                .update_profile(|p| p.with_body_shape(analysis.shape))
                .await;
        }
        Ok(())
    }

    async fn beauty(&self) -> Result<(), DomainError> {
        let Some(photo) = self.capture_with_retry().await? else {
            return Ok(());
        };
        let analysis = with_spinner(
            "Reading your colouring...",
            self.stylist.analyze_beauty_profile(&photo.to_data_url()),
        )
        .await;
        let Some(analysis) = analysis else {
            println!("Could not analyze image. Please try again with better lighting.");
            return Ok(());
        };
        println!("{}", cards::beauty_card(&analysis));

        let favorites = self.session.profile().await.favorite_shades.clone();
        let options: Vec<String> = analysis
            .recommended_lip_colors
            .iter()
            .map(|hex| {
                let saved = favorites.iter().any(|f| f.eq_ignore_ascii_case(hex));
                format!("{}{}", hex, if saved { " ♥" } else { "" })
            })
            .collect();
        match Select::new("Save or remove a lip shade (Esc to skip):", options).prompt() {
            Ok(choice) => {
                let hex = choice.trim_end_matches(" ♥").to_string();
                let updated = self
                    .session
                    .update_profile(|p| p.with_favorite_shade_toggled(&hex))
                    .await;
                println!("Favourite shades: {}", updated.favorite_shades.join(" "));
                Ok(())
            }
            Err(e) if is_cancel(&e) => Ok(()),
            Err(e) => Err(input_err(e)),
        }
    }

    async fn palette(&self) -> Result<(), DomainError> {
        let Some(photo) = self.capture_with_retry().await? else {
            return Ok(());
        };
        let analysis = with_spinner(
            "Finding your season...",
            self.stylist.analyze_color_palette(&photo.to_data_url()),
        )
        .await;
        match analysis {
            Some(analysis) => println!("{}", cards::palette_card(&analysis)),
            None => println!("Could not analyze image. Please try again with better lighting."),
        }
        Ok(())
    }

    async fn edit_styles(&self) -> Result<(), DomainError> {
        let current = self.session.profile().await;
        let defaults: Vec<usize> = STYLE_TAGS
            .iter()
            .enumerate()
            .filter(|(_, tag)| current.style_preferences.iter().any(|s| s == *tag))
            .map(|(i, _)| i)
            .collect();
        let selected = match MultiSelect::new("Your styles:", STYLE_TAGS.to_vec())
            .with_default(&defaults)
            .prompt()
        {
            Ok(s) => s,
            Err(e) if is_cancel(&e) => return Ok(()),
            Err(e) => return Err(input_err(e)),
        };
        // Tags outside the editor's list (e.g. "Chic") are kept.
        let mut styles: Vec<String> = current
            .style_preferences
            .iter()
            .filter(|s| !STYLE_TAGS.contains(&s.as_str()))
            .cloned()
            .collect();
        styles.extend(selected.into_iter().map(str::to_string));
        self.session
            .update_profile(|p| p.with_style_preferences(styles))
            .await;
        Ok(())
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let choice = match Select::new("What would you like to do?", MenuItem::ALL.to_vec())
                .prompt()
            {
                Ok(c) => c,
                Err(e) if is_cancel(&e) => return Ok(()),
                Err(e) => return Err(input_err(e)),
            };

            let result = match choice {
                MenuItem::DailyOutfit => self.daily_outfit().await,
                MenuItem::Chat => self.chat().await,
                MenuItem::Workout => self.workout().await,
                MenuItem::BodyShape => self.body_shape().await,
                MenuItem::Beauty => self.beauty().await,
                MenuItem::Palette => self.palette().await,
                MenuItem::EditStyles => self.edit_styles().await,
                MenuItem::ShowProfile => {
                    println!("{}", cards::profile_card(&*self.session.profile().await));
                    Ok(())
                }
                MenuItem::Quit => return Ok(()),
            };

            if let Err(e) = result {
                warn!(error = %e, action = %choice, "action failed");
                println!("⚠ {}", e);
            }
        }
    }
}
