//! Fire report submission form
//!
//! Holds the draft a user is editing, the geolocation sources that can fill
//! in its location, and the validation applied before submission.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;

use crate::data::{regions::FALLBACK_FIRE_BASE, Coordinates, Intensity, ReportStatus, UserReport};

/// Maximum number of images attached to one report
pub const MAX_IMAGES: usize = 3;

/// Errors raised while editing or submitting a report
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportFormError {
    /// Adding the batch would exceed the image limit
    #[error("Image limit exceeded: you can attach at most {max} images ({attempted} selected)")]
    TooManyImages { max: usize, attempted: usize },

    /// A required field is empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

/// Errors returned by a position source
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("Location access was denied. Check that you allowed access to your location.")]
    PermissionDenied,

    #[error("Your position could not be determined.")]
    Unavailable,

    #[error("Geolocation is not supported on this system.")]
    Unsupported,
}

/// A source of the user's current position
pub trait Geolocator {
    fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// Reports a position configured at startup
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocator(pub Coordinates);

impl Geolocator for FixedGeolocator {
    fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Ok(self.0)
    }
}

/// Used when no position source is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableGeolocator;

impl Geolocator for UnavailableGeolocator {
    fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::Unsupported)
    }
}

/// The form field that currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Location,
    Intensity,
    Description,
    Images,
}

impl FormField {
    pub const ORDER: [FormField; 4] = [
        FormField::Location,
        FormField::Intensity,
        FormField::Description,
        FormField::Images,
    ];

    pub fn next(&self) -> Self {
        let i = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn previous(&self) -> Self {
        let i = Self::ORDER.iter().position(|f| f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Location => "Location",
            FormField::Intensity => "Fire intensity",
            FormField::Description => "Description",
            FormField::Images => "Images",
        }
    }
}

/// A report being written by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReportDraft {
    pub location: String,
    pub coordinates: Option<Coordinates>,
    pub intensity: Option<Intensity>,
    pub description: String,
    pub images: Vec<PathBuf>,
    /// Path being typed into the image field
    #[serde(skip)]
    pub image_input: String,
}

impl ReportDraft {
    /// Fills the location from a position source
    ///
    /// On success the location text becomes the coordinates with six
    /// decimals. On failure the draft is left untouched.
    pub fn locate(&mut self, source: &dyn Geolocator) -> Result<Coordinates, GeolocationError> {
        let coords = source.current_position()?;
        self.coordinates = Some(coords);
        self.location = format!("{:.6}, {:.6}", coords.lat, coords.lng);
        Ok(coords)
    }

    /// Attaches a batch of images
    ///
    /// A batch that would take the draft past [`MAX_IMAGES`] is rejected
    /// whole.
    pub fn add_images(&mut self, batch: Vec<PathBuf>) -> Result<(), ReportFormError> {
        let attempted = self.images.len() + batch.len();
        if attempted > MAX_IMAGES {
            return Err(ReportFormError::TooManyImages {
                max: MAX_IMAGES,
                attempted,
            });
        }
        self.images.extend(batch);
        Ok(())
    }

    /// Attaches the comma-separated paths typed into the image field
    pub fn commit_image_input(&mut self) -> Result<usize, ReportFormError> {
        let batch: Vec<PathBuf> = self
            .image_input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect();
        let added = batch.len();
        self.add_images(batch)?;
        self.image_input.clear();
        Ok(added)
    }

    /// Removes the image at `index`, if present
    pub fn remove_image(&mut self, index: usize) -> Option<PathBuf> {
        (index < self.images.len()).then(|| self.images.remove(index))
    }

    pub fn can_add_images(&self) -> bool {
        self.images.len() < MAX_IMAGES
    }

    /// Selects the next intensity, starting from Low
    pub fn cycle_intensity(&mut self) {
        self.intensity = Some(match self.intensity {
            None | Some(Intensity::Extreme) => Intensity::Low,
            Some(Intensity::Low) => Intensity::Medium,
            Some(Intensity::Medium) => Intensity::High,
            Some(Intensity::High) => Intensity::Extreme,
        });
    }

    /// Checks that location, intensity and description are filled in
    pub fn validate(&self) -> Result<Intensity, ReportFormError> {
        if self.location.trim().is_empty() {
            return Err(ReportFormError::MissingField("location"));
        }
        let intensity = self
            .intensity
            .ok_or(ReportFormError::MissingField("intensity"))?;
        if self.description.trim().is_empty() {
            return Err(ReportFormError::MissingField("description"));
        }
        Ok(intensity)
    }

    /// Builds the pending report this draft describes
    ///
    /// Drafts without geolocated coordinates are pinned to the centre of
    /// the country.
    pub fn to_report(&self, id: String, now: NaiveDateTime) -> Result<UserReport, ReportFormError> {
        let intensity = self.validate()?;
        Ok(UserReport {
            id,
            reported_at: now,
            location: self.location.trim().to_string(),
            coordinates: self.coordinates.unwrap_or(FALLBACK_FIRE_BASE),
            status: ReportStatus::Pending,
            intensity,
            description: self.description.trim().to_string(),
            has_images: !self.images.is_empty(),
        })
    }

    /// Resets every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
