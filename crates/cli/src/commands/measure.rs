//! Measurement draft commands.

use tracing::info;

use begeto_session::measurements::{
    DraftStore, JsonDraftStore, MeasurementDraft, MeasurementUnit,
};

use crate::config::CliConfig;

/// Field values passed to `measure set`. `None` leaves the stored value.
#[derive(Debug, Default)]
pub struct Fields {
    pub height: Option<String>,
    pub weight: Option<String>,
    pub chest: Option<String>,
    pub waist: Option<String>,
    pub hips: Option<String>,
    pub shoulders: Option<String>,
    pub inseam: Option<String>,
    pub sleeve_length: Option<String>,
    pub bust: Option<String>,
    pub under_bust: Option<String>,
    pub dress_length: Option<String>,
    pub head_circumference: Option<String>,
    pub unit: Option<MeasurementUnit>,
}

/// Merge the given fields into the stored draft and save it.
///
/// # Errors
///
/// Returns an error if the draft file cannot be read or written.
pub fn set(config: &CliConfig, fields: Fields) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonDraftStore::new(&config.measurements_path);
    let mut draft = store.load()?.unwrap_or_default();

    let mut apply = |target: &mut String, value: Option<String>| {
        if let Some(value) = value {
            *target = value;
        }
    };
    apply(&mut draft.height, fields.height);
    apply(&mut draft.weight, fields.weight);
    apply(&mut draft.chest, fields.chest);
    apply(&mut draft.waist, fields.waist);
    apply(&mut draft.hips, fields.hips);
    apply(&mut draft.shoulders, fields.shoulders);
    apply(&mut draft.inseam, fields.inseam);
    apply(&mut draft.sleeve_length, fields.sleeve_length);
    apply(&mut draft.bust, fields.bust);
    apply(&mut draft.under_bust, fields.under_bust);
    apply(&mut draft.dress_length, fields.dress_length);
    apply(&mut draft.head_circumference, fields.head_circumference);
    if let Some(unit) = fields.unit {
        draft.unit = unit;
    }

    store.save(&draft)?;
    info!(path = %store.path().display(), "Measurement draft saved");
    Ok(())
}

/// Display the stored draft.
///
/// # Errors
///
/// Returns an error if an existing draft file cannot be read.
pub fn show(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonDraftStore::new(&config.measurements_path);

    let Some(draft) = store.load()? else {
        info!("No measurement draft saved yet");
        return Ok(());
    };

    info!("Measurement draft ({})", draft.unit);
    let rows = [
        ("height", &draft.height),
        ("weight", &draft.weight),
        ("chest", &draft.chest),
        ("waist", &draft.waist),
        ("hips", &draft.hips),
        ("shoulders", &draft.shoulders),
        ("inseam", &draft.inseam),
        ("sleeve_length", &draft.sleeve_length),
        ("bust", &draft.bust),
        ("under_bust", &draft.under_bust),
        ("dress_length", &draft.dress_length),
        ("head_circumference", &draft.head_circumference),
    ];
    for (name, value) in rows {
        if !value.trim().is_empty() {
            info!("  {name}: {value}");
        }
    }
    if draft.is_blank() {
        info!("  (all fields blank)");
    }

    Ok(())
}
