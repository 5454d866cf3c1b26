//! Table reservation hand-off.
//!
//! Like checkout, a reservation is not booked here: the validated form is
//! turned into a chat message and handed to the restaurant's messaging
//! deep-link, where staff confirm it by hand.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use tandoor_core::{Email, EmailError, NotificationLevel, PhoneNumber, PhoneNumberError};
use thiserror::Error;
use tracing::{debug, info, instrument};
use url::Url;

use crate::link::{DeepLink, LinkOpener};
use crate::notify::NotificationSink;

/// Largest party accepted through the form; bigger groups call ahead.
pub const MAX_GUESTS: u8 = 50;

/// Reservation form validation failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReservationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("invalid phone number: {0}")]
    InvalidPhone(#[from] PhoneNumberError),

    #[error("number of guests must be between 1 and 50")]
    InvalidGuests,

    #[error("date must be in YYYY-MM-DD format")]
    InvalidDate,

    #[error("reservation date {date} is in the past")]
    DateInPast { date: NaiveDate },

    #[error("time must be in HH:MM format")]
    InvalidTime,
}

impl ReservationError {
    /// Message shown to the visitor.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingField(_) => "Please fill all required fields".to_string(),
            other => format!("Please check your reservation: {other}"),
        }
    }
}

/// Raw reservation form input, as typed by the visitor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub guests: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub notes: String,
}

/// A validated reservation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    pub name: String,
    pub phone: PhoneNumber,
    pub email: Email,
    pub guests: u8,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub notes: Option<String>,
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ReservationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ReservationError::MissingField(field));
    }
    Ok(trimmed)
}

impl ReservationForm {
    /// Validate the form against `today`.
    ///
    /// Every field except notes is required. Missing fields are reported
    /// before malformed ones, in form order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ReservationError`] found.
    pub fn validate(&self, today: NaiveDate) -> Result<ReservationRequest, ReservationError> {
        let name = required(&self.name, "name")?;
        let phone = required(&self.phone, "phone")?;
        let email = required(&self.email, "email")?;
        let guests = required(&self.guests, "guests")?;
        let date = required(&self.date, "date")?;
        let time = required(&self.time, "time")?;

        let phone = PhoneNumber::parse(phone)?;
        let email = Email::parse(email)?;
        let guests = guests
            .parse::<u8>()
            .ok()
            .filter(|g| (1..=MAX_GUESTS).contains(g))
            .ok_or(ReservationError::InvalidGuests)?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ReservationError::InvalidDate)?;
        if date < today {
            return Err(ReservationError::DateInPast { date });
        }
        let time =
            NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| ReservationError::InvalidTime)?;

        let notes = self.notes.trim();
        Ok(ReservationRequest {
            name: name.to_owned(),
            phone,
            email,
            guests,
            date,
            time,
            notes: (!notes.is_empty()).then(|| notes.to_owned()),
        })
    }
}

impl ReservationRequest {
    /// Chat message sent to the restaurant.
    #[must_use]
    pub fn message(&self) -> String {
        let mut message = format!(
            "Hello! I'd like to make a reservation:\n\n\
             Name: {}\nPhone: {}\nEmail: {}\nDate: {}\nTime: {}\nGuests: {}\n",
            self.name,
            self.phone,
            self.email,
            self.date.format("%Y-%m-%d"),
            self.time.format("%H:%M"),
            self.guests,
        );
        if let Some(notes) = &self.notes {
            message.push_str(&format!("Special Requests: {notes}\n"));
        }
        message.push_str("\nPlease confirm my reservation. Thank you!");
        message
    }
}

/// Validates reservation forms and hands them to the restaurant's chat.
#[derive(Debug, Clone)]
pub struct ReservationDispatcher<O> {
    link: DeepLink,
    opener: O,
}

impl<O: LinkOpener> ReservationDispatcher<O> {
    #[must_use]
    pub const fn new(link: DeepLink, opener: O) -> Self {
        Self { link, opener }
    }

    /// Validate `form` and open the prefilled link.
    ///
    /// Validation failures are reported to `notifier` as errors and nothing
    /// is opened. Returns the opened URL on success.
    #[instrument(skip_all)]
    pub fn submit(
        &self,
        form: &ReservationForm,
        today: NaiveDate,
        notifier: &dyn NotificationSink,
    ) -> Option<Url> {
        let request = match form.validate(today) {
            Ok(request) => request,
            Err(e) => {
                debug!(error = %e, "Rejected reservation form");
                notifier.notify(&e.user_message(), NotificationLevel::Error);
                return None;
            }
        };

        let url = self.link.with_text(&request.message());
        self.opener.open(&url);
        info!(
            guests = request.guests,
            date = %request.date,
            "Reservation request handed off to messaging"
        );
        notifier.notify(
            "Opening chat with your reservation details...",
            NotificationLevel::Success,
        );
        Some(url)
    }
}
