//! Table reservation command.
//!
//! # Usage
//!
//! ```bash
//! tandoor reserve --name "Asha Rao" --phone "+91 98765 43210" \
//!     --email asha@example.com --guests 4 --date 2026-10-20 --time 19:30 \
//!     --notes "Window seat"
//! ```
//!
//! # Environment Variables
//!
//! - `TANDOOR_MESSAGING_BASE_URL` - Messaging deep-link base
//! - `TANDOOR_MESSAGING_DESTINATION` - Restaurant's chat number

use clap::Args;
use tandoor_cart::{CartConfig, ReservationDispatcher, ReservationForm};

use super::console::{ConsoleNotifier, PrintOpener};

/// Reservation form fields. Values are validated by the cart library, not
/// by the argument parser, so the visitor sees the same messages as on the
/// site.
#[derive(Debug, Args)]
pub struct ReserveArgs {
    /// Guest name
    #[arg(long, default_value = "")]
    name: String,
    /// Contact phone number
    #[arg(long, default_value = "")]
    phone: String,
    /// Contact email
    #[arg(long, default_value = "")]
    email: String,
    /// Party size (1-50)
    #[arg(long, default_value = "")]
    guests: String,
    /// Date as YYYY-MM-DD
    #[arg(long, default_value = "")]
    date: String,
    /// Time as HH:MM
    #[arg(long, default_value = "")]
    time: String,
    /// Special requests
    #[arg(long, default_value = "")]
    notes: String,
}

impl From<ReserveArgs> for ReservationForm {
    fn from(args: ReserveArgs) -> Self {
        Self {
            name: args.name,
            phone: args.phone,
            email: args.email,
            guests: args.guests,
            date: args.date,
            time: args.time,
            notes: args.notes,
        }
    }
}

/// Validate the form and print the prefilled chat link.
pub fn reserve(config: &CartConfig, args: ReserveArgs) {
    let dispatcher = ReservationDispatcher::new(config.messaging.deep_link().clone(), PrintOpener);
    let today = chrono::Local::now().date_naive();
    let form = ReservationForm::from(args);
    if dispatcher.submit(&form, today, &ConsoleNotifier).is_none() {
        tracing::info!("Reservation not sent");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: ReserveArgs,
    }

    #[test]
    fn test_args_map_onto_form() {
        let harness = Harness::try_parse_from([
            "reserve",
            "--name",
            "Asha Rao",
            "--phone",
            "+91 98765 43210",
            "--email",
            "asha@example.com",
            "--guests",
            "4",
            "--date",
            "2026-10-20",
            "--time",
            "19:30",
        ])
        .unwrap();
        let form = ReservationForm::from(harness.args);

        assert_eq!(form.name, "Asha Rao");
        assert_eq!(form.guests, "4");
        assert!(form.notes.is_empty());

        let today = chrono::NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let request = form.validate(today).unwrap();
        assert_eq!(request.guests, 4);
    }

    #[test]
    fn test_missing_flags_become_blank_fields() {
        let harness = Harness::try_parse_from(["reserve", "--name", "Asha"]).unwrap();
        let form = ReservationForm::from(harness.args);
        assert!(form.phone.is_empty());
    }
}
