//! Human-readable rendering of clips and events
//!
//! Labels come in English, Portuguese and Spanish.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::model::{ClipEvent, ClipRecord, ClipStatus, Platform};
use crate::domain::rules::PlatformDetector;
use crate::error::ClipMasterError;

/// Display language for rendered output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
    Es,
}

impl FromStr for Language {
    type Err = ClipMasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            "es" => Ok(Language::Es),
            _ => Err(ClipMasterError::Config {
                message: format!("Unsupported language: {}. Valid languages: en, pt, es", s),
            }),
        }
    }
}

/// Fixed strings for one language
pub struct Labels {
    pub processing: &'static str,
    pub ready: &'static str,
    pub error: &'static str,
    pub my_clips: &'static str,
    pub no_clips: &'static str,
    pub clip_duration: &'static str,
    pub supported_platforms: &'static str,
    pub share_clip: &'static str,
    share_text: fn(&str) -> String,
}

fn share_text_en(duration: &str) -> String {
    format!("Check out this {} clip!", duration)
}

fn share_text_pt(duration: &str) -> String {
    format!("Confira este clipe de {}!", duration)
}

fn share_text_es(duration: &str) -> String {
    format!("¡Mira este clip de {}!", duration)
}

static EN: Labels = Labels {
    processing: "Processing...",
    ready: "Ready",
    error: "Error",
    my_clips: "My Clips",
    no_clips: "No clips created yet",
    clip_duration: "Clip duration",
    supported_platforms: "Supported platforms",
    share_clip: "Share",
    share_text: share_text_en,
};

static PT: Labels = Labels {
    processing: "Processando...",
    ready: "Pronto",
    error: "Erro",
    my_clips: "Meus Cortes",
    no_clips: "Nenhum corte criado ainda",
    clip_duration: "Duração do corte",
    supported_platforms: "Plataformas suportadas",
    share_clip: "Compartilhar",
    share_text: share_text_pt,
};

static ES: Labels = Labels {
    processing: "Procesando...",
    ready: "Listo",
    error: "Error",
    my_clips: "Mis Cortes",
    no_clips: "Aún no se han creado cortes",
    clip_duration: "Duración del corte",
    supported_platforms: "Plataformas compatibles",
    share_clip: "Compartir",
    share_text: share_text_es,
};

impl Language {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Language::En => &EN,
            Language::Pt => &PT,
            Language::Es => &ES,
        }
    }
}

pub fn status_label(status: ClipStatus, language: Language) -> &'static str {
    let labels = language.labels();
    match status {
        ClipStatus::Processing => labels.processing,
        ClipStatus::Ready => labels.ready,
        ClipStatus::Error => labels.error,
    }
}

/// One line per clip, newest first, or the empty-list message
pub fn render_clip_list(clips: &[ClipRecord], language: Language) -> String {
    let labels = language.labels();
    let mut out = String::new();
    let _ = writeln!(out, "{}", labels.my_clips);

    if clips.is_empty() {
        let _ = writeln!(out, "  {}", labels.no_clips);
        return out;
    }

    for clip in clips {
        let _ = writeln!(
            out,
            "  #{:<4} {}  {:<16} {:<10} {} - {}  {}: {}  {}",
            clip.id,
            clip.title,
            status_label(clip.status, language),
            clip.platform,
            clip.start_time,
            clip.end_time,
            labels.clip_duration,
            clip.duration,
            clip.source_url
        );
    }
    out
}

/// Payload handed to whatever shares a clip: title, message and link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareMessage {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// Build the share payload for a ready clip
pub fn share_message(clip: &ClipRecord, language: Language) -> Result<ShareMessage, DomainError> {
    if !clip.is_shareable() {
        return Err(DomainError::NotShareable {
            id: clip.id,
            status: clip.status,
        });
    }

    Ok(ShareMessage {
        title: clip.title.clone(),
        text: (language.labels().share_text)(&clip.duration),
        url: clip.source_url.clone(),
    })
}

/// One share line for a ready clip, or a localized notice saying it is not ready
pub fn render_share(clip: &ClipRecord, language: Language) -> String {
    let labels = language.labels();
    match share_message(clip, language) {
        Ok(message) => format!(
            "#{} {}: {} - {} {}",
            clip.id, labels.share_clip, message.title, message.text, message.url
        ),
        Err(_) => format!(
            "#{} {}: [{}]",
            clip.id,
            labels.share_clip,
            status_label(clip.status, language)
        ),
    }
}

pub fn render_event(event: &ClipEvent, language: Language) -> String {
    match event {
        ClipEvent::Created { clip } => format!(
            "#{} {} [{}] {}",
            clip.id,
            clip.platform,
            status_label(clip.status, language),
            clip.source_url
        ),
        ClipEvent::StatusChanged { id, to, .. } => {
            format!("#{} [{}]", id, status_label(*to, language))
        }
    }
}

pub fn render_platforms(language: Language) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", language.labels().supported_platforms);
    for platform in Platform::SUPPORTED {
        let _ = writeln!(
            out,
            "  {:<10} {}",
            platform,
            PlatformDetector::fragments_for(platform).join(", ")
        );
    }
    out
}
