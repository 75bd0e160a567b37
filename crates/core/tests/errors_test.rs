use std::error::Error;
use clinicdesk_core::errors::{ClinicError, ClinicResult};

#[test]
fn test_clinic_error_display() {
    let not_found = ClinicError::NotFound("Holiday not found".to_string());
    let validation = ClinicError::Validation("Invalid input".to_string());
    let conflict = ClinicError::Conflict("Doctor already has holiday scheduled.".to_string());
    let authentication = ClinicError::Authentication("Missing role".to_string());
    let authorization = ClinicError::Authorization("Not authorized".to_string());
    let database = ClinicError::Database(eyre::eyre!("Database connection failed"));
    let internal = ClinicError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(not_found.to_string(), "Resource not found: Holiday not found");
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(conflict.to_string(), "Doctor already has holiday scheduled.");
    assert_eq!(authentication.to_string(), "Authentication error: Missing role");
    assert_eq!(authorization.to_string(), "Authorization error: Not authorized");
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let clinic_error = ClinicError::Internal(Box::new(io_error));

    assert!(clinic_error.source().is_some());
}

#[test]
fn test_clinic_result() {
    let result: ClinicResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: ClinicResult<i32> = Err(ClinicError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_question_mark_wraps_eyre_as_database_error() {
    fn failing() -> ClinicResult<()> {
        let outcome: eyre::Result<()> = Err(eyre::eyre!("connection reset"));
        outcome?;
        Ok(())
    }

    match failing() {
        Err(ClinicError::Database(report)) => {
            assert!(report.to_string().contains("connection reset"))
        }
        other => panic!("Expected Database error, got: {:?}", other),
    }
}
