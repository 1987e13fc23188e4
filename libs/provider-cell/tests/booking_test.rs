// libs/provider-cell/tests/booking_test.rs
mod common;

use assert_matches::assert_matches;

use provider_cell::{BookingOutcome, BookingService, ProviderError};

use common::{directory_with, dr_a, ms, sample_providers};

fn service() -> BookingService {
    BookingService::new(directory_with(vec![dr_a()]))
}

#[tokio::test]
async fn booking_inside_window_succeeds() {
    let outcome = service().book("Dr. A", Some("3000")).await.unwrap();

    assert_eq!(
        outcome,
        BookingOutcome::Booked {
            name: "Dr. A".to_string(),
            date: ms(3000),
        }
    );
    assert!(outcome.is_booked());
}

#[tokio::test]
async fn booking_outside_window_is_rejected() {
    assert_matches!(
        service().book("Dr. A", Some("6000")).await,
        Ok(BookingOutcome::ProviderNotAvailable)
    );
}

#[tokio::test]
async fn booking_unknown_provider_is_rejected() {
    assert_matches!(
        service().book("Unknown", Some("3000")).await,
        Ok(BookingOutcome::ProviderNotFound)
    );
}

#[tokio::test]
async fn provider_name_is_case_sensitive() {
    assert_matches!(
        service().book("dr. a", Some("3000")).await,
        Ok(BookingOutcome::ProviderNotFound)
    );
}

#[tokio::test]
async fn booking_on_window_edges_succeeds() {
    let service = service();
    assert_matches!(service.book("Dr. A", Some("1000")).await, Ok(BookingOutcome::Booked { .. }));
    assert_matches!(service.book("Dr. A", Some("5000")).await, Ok(BookingOutcome::Booked { .. }));
}

#[tokio::test]
async fn unparseable_date_is_invalid_param() {
    assert_matches!(
        service().book("Dr. A", Some("soon")).await,
        Err(ProviderError::InvalidParam("date"))
    );
    assert_matches!(
        service().book("Unknown", None).await,
        Err(ProviderError::InvalidParam("date"))
    );
}

#[tokio::test]
async fn repeated_bookings_are_independent() {
    let service = service();

    let first = service.book("Dr. A", Some("3000")).await.unwrap();
    let second = service.book("Dr. A", Some("3000")).await.unwrap();

    assert!(first.is_booked());
    assert_eq!(first, second);
}

#[tokio::test]
async fn any_window_of_the_provider_counts() {
    let service = BookingService::new(directory_with(sample_providers()));

    assert_matches!(service.book("Dr. B", Some("1500")).await, Ok(BookingOutcome::Booked { .. }));
    assert_matches!(service.book("Dr. B", Some("2200")).await, Ok(BookingOutcome::ProviderNotAvailable));
    assert_matches!(service.book("Dr. B", Some("9000")).await, Ok(BookingOutcome::Booked { .. }));
    assert_matches!(service.book("Dr. F", Some("9000")).await, Ok(BookingOutcome::ProviderNotAvailable));
}
