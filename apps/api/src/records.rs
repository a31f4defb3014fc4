//! Record Writer — persists one plain-text summary per completed session.
//!
//! Filenames embed the candidate name and a second-resolution local
//! timestamp. Same name in the same second collides; known gap.

use std::path::PathBuf;

use chrono::Local;
use tokio::fs;
use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::CandidateProfile;

#[derive(Clone)]
pub struct RecordWriter {
    dir: PathBuf,
}

impl RecordWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Writes the candidate record and returns its path.
    /// No retry and no partial-file cleanup on failure.
    pub async fn save(
        &self,
        profile: &CandidateProfile,
        average_score: f64,
    ) -> Result<PathBuf, AppError> {
        fs::create_dir_all(&self.dir).await?;

        let name = profile.full_name.as_deref().unwrap_or("candidate");
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = self
            .dir
            .join(format!("{}_{stamp}.txt", name.replace(' ', "_")));

        fs::write(&path, render_record(profile, average_score)).await?;

        info!("Candidate record written to {}", path.display());
        Ok(path)
    }
}

fn render_record(profile: &CandidateProfile, average_score: f64) -> String {
    let mut contents = String::from("Candidate Information:\n");
    for (key, value) in profile.fields() {
        contents.push_str(&format!("{}: {value}\n", capitalize(key)));
    }
    contents.push_str(&format!("Average Score: {average_score:.2}\n"));
    contents
}

/// Uppercases the first character only: `full_name` -> `Full_name`.
fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
