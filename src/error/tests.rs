//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod ffl_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let ffl_error = FflError::from(json_error);

        match ffl_error {
            FflError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let ffl_error = FflError::from(io_error);

        match ffl_error {
            FflError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let ffl_error = FflError::from(header_error);

        match ffl_error {
            FflError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let ffl_error = FflError::from(parse_error);

        match ffl_error {
            FflError::InvalidLeagueId(_) => (),
            _ => panic!("Expected InvalidLeagueId error variant"),
        }
    }

    #[test]
    fn test_system_time_error_conversion() {
        use std::time::{Duration, SystemTime, UNIX_EPOCH};

        let future_time = SystemTime::now() + Duration::from_secs(100);
        let system_time_error = UNIX_EPOCH.duration_since(future_time).unwrap_err();
        let ffl_error = FflError::from(system_time_error);

        match ffl_error {
            FflError::SystemTime(_) => (),
            _ => panic!("Expected SystemTime error variant"),
        }
    }

    #[test]
    fn test_missing_league_id_error() {
        let error = FflError::MissingLeagueId {
            env_var: "YAHOO_FFL_LEAGUE_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League ID not provided"));
        assert!(error_string.contains("YAHOO_FFL_LEAGUE_ID"));
    }

    #[test]
    fn test_invalid_week_error() {
        let error = FflError::InvalidWeek {
            value: "19".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid week: 19 (expected 1-18)");
    }

    #[test]
    fn test_missing_credentials_message_names_env_vars() {
        let error_string = FflError::MissingCredentials.to_string();
        assert!(error_string.contains("YAHOO_CONSUMER_KEY"));
        assert!(error_string.contains("YAHOO_CONSUMER_SECRET"));
    }

    #[test]
    fn test_unexpected_response_helper() {
        let error = FflError::unexpected("fantasy_content.league");
        match &error {
            FflError::UnexpectedResponse { context } => {
                assert_eq!(context, "fantasy_content.league")
            }
            _ => panic!("Expected UnexpectedResponse error variant"),
        }
        assert!(error.to_string().contains("fantasy_content.league"));
    }

    #[test]
    fn test_exit_code_team_not_found() {
        let error = FflError::TeamNotFound {
            name: "Nobody".to_string(),
        };
        assert_eq!(error.exit_code(), EXIT_TEAM_NOT_FOUND);
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_other_errors() {
        assert_eq!(FflError::MissingCredentials.exit_code(), 1);
        assert_eq!(
            FflError::MissingToken {
                path: "oauth2.json".to_string()
            }
            .exit_code(),
            EXIT_FAILURE
        );
        assert_eq!(
            FflError::TokenRefresh {
                message: "401".to_string()
            }
            .exit_code(),
            EXIT_FAILURE
        );
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let ffl_error = FflError::from(io_error);

        let error_trait: &dyn std::error::Error = &ffl_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(FflError::MissingCredentials)
        }

        match test_function().unwrap_err() {
            FflError::MissingCredentials => (),
            _ => panic!("Expected MissingCredentials error"),
        }
    }
}
