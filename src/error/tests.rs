//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod sleepy_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error = SleepyError::from(json_error);

        match error {
            SleepyError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SleepyError::from(io_error);

        match error {
            SleepyError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let error = SleepyError::from(header_error);

        match error {
            SleepyError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "twenty-twenty-four".parse::<u16>().unwrap_err();
        let error = SleepyError::from(parse_error);

        match error {
            SleepyError::InvalidSeason(_) => (),
            _ => panic!("Expected InvalidSeason error variant"),
        }
    }

    #[test]
    fn test_config_error_message() {
        let error = SleepyError::Config {
            message: "bad base url".to_string(),
        };
        assert_eq!(error.to_string(), "Configuration error: bad base url");
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_engine_error_is_transparent() {
        let error = SleepyError::from(EngineError::not_found("User not found"));
        assert_eq!(error.to_string(), "User not found");
    }

    #[test]
    fn test_exit_codes_distinguish_absence_kinds() {
        let not_found = SleepyError::from(EngineError::not_found("League not found"));
        let unavailable =
            SleepyError::from(EngineError::unavailable("Unable to fetch trending players"));

        assert_eq!(not_found.exit_code(), 2);
        assert_eq!(unavailable.exit_code(), 3);
    }
}
