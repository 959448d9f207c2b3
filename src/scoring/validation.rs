use super::config::ScoringConfig;
use super::weights::FACTORS;
use crate::client::ClientRecord;

/// Check a client record before scoring.
/// Returns every violated rule (not just the first), each naming the row.
pub fn validate_record(client: &ClientRecord, row: usize) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if client.age <= 0 || client.age > 120 {
        errors.push(format!("Row {}: Invalid age: {}", row, client.age));
    }

    if client.income.is_nan() {
        errors.push(format!("Row {}: Invalid income: NaN", row));
    } else if client.income < 0.0 {
        errors.push(format!("Row {}: Negative income", row));
    }

    if client.employment.is_empty() || client.industry.is_empty() {
        errors.push(format!("Row {}: Missing employment or industry info", row));
    }

    if client.debt.is_nan() {
        errors.push(format!("Row {}: Invalid debt: NaN", row));
    } else if client.debt < 0.0 {
        errors.push(format!("Row {}: Negative debt", row));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// [`validate_record`] with each violation logged as a warning.
pub fn validate_and_log(client: &ClientRecord, row: usize) -> Result<(), Vec<String>> {
    validate_record(client, row).inspect_err(|errors| {
        for error in errors {
            tracing::warn!(client = %client.id, "{}", error);
        }
    })
}

/// Boolean form of [`validate_and_log`]; the caller decides whether to skip
/// the record.
pub fn is_valid_record(client: &ClientRecord, row: usize) -> bool {
    validate_and_log(client, row).is_ok()
}

/// Validate the scoring section of the config at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref weights) = config.weights {
        for (factor, weight) in weights.iter() {
            if !FACTORS.contains(&factor) {
                errors.push(format!(
                    "scoring.weights.{}: unknown factor (expected one of: {})",
                    factor,
                    FACTORS.join(", ")
                ));
            }
            if !weight.is_finite() || weight < 0.0 {
                errors.push(format!(
                    "scoring.weights.{}: must be a non-negative number, got {}",
                    factor, weight
                ));
            }
        }
    }

    if let Some(ref countries) = config.countries {
        for (code, multiplier) in countries {
            if code.trim().is_empty() {
                errors.push("scoring.countries: empty country code".to_string());
            }
            if !multiplier.is_finite() || *multiplier < 0.0 {
                errors.push(format!(
                    "scoring.countries.{}: must be a non-negative number, got {}",
                    code, multiplier
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::WeightTable;
    use std::collections::BTreeMap;

    fn valid_client() -> ClientRecord {
        ClientRecord {
            id: "C001".to_string(),
            name: "Test Client".to_string(),
            country: "AT".to_string(),
            client_type: "retail".to_string(),
            age: 45,
            income: 100_000.0,
            employment: "permanent".to_string(),
            industry: "finance".to_string(),
            debt: 2_000.0,
            score: 0.0,
        }
    }

    #[test]
    fn test_valid_record() {
        assert!(validate_record(&valid_client(), 1).is_ok());
        assert!(is_valid_record(&valid_client(), 1));
    }

    #[test]
    fn test_age_bounds() {
        let mut client = valid_client();
        client.age = 0;
        assert!(validate_record(&client, 1).is_err());
        client.age = -5;
        assert!(validate_record(&client, 1).is_err());
        client.age = 121;
        assert!(validate_record(&client, 1).is_err());
        client.age = 120;
        assert!(validate_record(&client, 1).is_ok());
        client.age = 1;
        assert!(validate_record(&client, 1).is_ok());
    }

    #[test]
    fn test_invalid_age_names_row() {
        let mut client = valid_client();
        client.age = -5;
        let errors = validate_record(&client, 7).unwrap_err();
        assert_eq!(errors, vec!["Row 7: Invalid age: -5".to_string()]);
    }

    #[test]
    fn test_zero_income_and_debt_allowed() {
        let mut client = valid_client();
        client.income = 0.0;
        client.debt = 0.0;
        assert!(validate_record(&client, 1).is_ok());
    }

    #[test]
    fn test_negative_income() {
        let mut client = valid_client();
        client.income = -1.0;
        let errors = validate_record(&client, 2).unwrap_err();
        assert!(errors[0].contains("Negative income"));
    }

    #[test]
    fn test_missing_employment_or_industry() {
        let mut client = valid_client();
        client.employment.clear();
        assert!(validate_record(&client, 1).is_err());

        let mut client = valid_client();
        client.industry.clear();
        let errors = validate_record(&client, 3).unwrap_err();
        assert!(errors[0].contains("Missing employment or industry"));
    }

    #[test]
    fn test_nan_income_and_debt_rejected() {
        let mut client = valid_client();
        client.income = f64::NAN;
        let errors = validate_record(&client, 4).unwrap_err();
        assert_eq!(errors, vec!["Row 4: Invalid income: NaN"]);

        let mut client = valid_client();
        client.debt = f64::NAN;
        let errors = validate_record(&client, 4).unwrap_err();
        assert_eq!(errors, vec!["Row 4: Invalid debt: NaN"]);
        assert!(!is_valid_record(&client, 4));
    }

    #[test]
    fn test_validate_and_log_returns_reasons() {
        let mut client = valid_client();
        client.age = 0;
        client.debt = -1.0;
        let errors = validate_and_log(&client, 2).unwrap_err();
        assert_eq!(errors, validate_record(&client, 2).unwrap_err());
        assert_eq!(errors.len(), 2);
        assert!(validate_and_log(&valid_client(), 2).is_ok());
    }

    #[test]
    fn test_negative_debt() {
        let mut client = valid_client();
        client.debt = -0.01;
        let errors = validate_record(&client, 4).unwrap_err();
        assert!(errors[0].contains("Negative debt"));
    }

    #[test]
    fn test_collects_all_record_errors() {
        let mut client = valid_client();
        client.age = 200; // Error 1
        client.income = -5.0; // Error 2
        client.industry.clear(); // Error 3
        client.debt = -5.0; // Error 4
        let errors = validate_record(&client, 1).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(!is_valid_record(&client, 1));
    }

    #[test]
    fn test_valid_scoring_config() {
        let config = ScoringConfig {
            weights: Some(WeightTable::default_weights()),
            countries: Some(BTreeMap::from([("PL".to_string(), 0.9)])),
        };
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_empty_scoring_config() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_unknown_factor() {
        let mut weights = WeightTable::empty();
        weights.set_weight("salary", 0.3);
        let config = ScoringConfig {
            weights: Some(weights),
            countries: None,
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.weights.salary"));
        assert!(errors[0].contains("unknown factor"));
    }

    #[test]
    fn test_negative_weight() {
        let mut weights = WeightTable::empty();
        weights.set_weight("debt", -0.2);
        let config = ScoringConfig {
            weights: Some(weights),
            countries: None,
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.weights.debt"));
    }

    #[test]
    fn test_invalid_country_multiplier() {
        let config = ScoringConfig {
            weights: None,
            countries: Some(BTreeMap::from([("BR".to_string(), f64::NAN)])),
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.countries.BR"));
    }

    #[test]
    fn test_collects_all_config_errors() {
        let mut weights = WeightTable::empty();
        weights.set_weight("salary", -1.0); // Errors 1 and 2
        let config = ScoringConfig {
            weights: Some(weights),
            countries: Some(BTreeMap::from([("GR".to_string(), -0.7)])), // Error 3
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
