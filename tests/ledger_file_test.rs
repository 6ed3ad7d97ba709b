use anyhow::Result;
use staffing_ledger::{BillingTier, LedgerError, LedgerService, LocalStorage};
use tempfile::TempDir;

const COMPANY: &str = r#"[
  {
    "TeamName": "Alpha",
    "FullSalary": true,
    "Programmers": [
      {
        "FirstName": "John",
        "LastName": "Doe",
        "Activity": "API work",
        "StartDate": "2024-01-01T00:00:00",
        "Duration": 3
      },
      {
        "FirstName": "Zoë",
        "LastName": "Løvaas",
        "Activity": "Migrations – phase 2",
        "StartDate": "2023-11-15T09:30:00",
        "Duration": 41
      }
    ]
  },
  {
    "TeamName": "Beta",
    "FullSalary": false,
    "Programmers": [
      {
        "FirstName": "Alan",
        "LastName": "Turing",
        "Activity": "Proofs",
        "StartDate": "2024-02-29T00:00:00",
        "Duration": 0
      }
    ]
  },
  {
    "TeamName": "Bench",
    "FullSalary": false,
    "Programmers": []
  }
]"#;

fn service_with(content: &str) -> Result<(TempDir, LedgerService<LocalStorage>)> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("data.json"), content)?;
    let service = LedgerService::new(LocalStorage::new(temp_dir.path()));
    Ok((temp_dir, service))
}

#[test]
fn test_roundtrip_is_structurally_equal() -> Result<()> {
    let (temp_dir, service) = service_with(COMPANY)?;

    let ledger = service.load("data.json")?;
    service.save(&ledger, "copy.json")?;

    let original: serde_json::Value = serde_json::from_str(COMPANY)?;
    let copy: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(temp_dir.path().join("copy.json"))?)?;
    assert_eq!(original, copy);

    // Same formatter, so the bytes match too
    assert_eq!(std::fs::read_to_string(temp_dir.path().join("copy.json"))?, COMPANY);
    Ok(())
}

#[test]
fn test_load_preserves_order_and_tiers() -> Result<()> {
    let (_temp_dir, service) = service_with(COMPANY)?;
    let ledger = service.load("data.json")?;

    let names: Vec<&str> = ledger.teams().iter().map(|t| t.team_name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Bench"]);

    let tiers: Vec<BillingTier> = ledger.teams().iter().map(|t| t.tier).collect();
    assert_eq!(
        tiers,
        vec![BillingTier::FullSalary, BillingTier::Reduced, BillingTier::Reduced]
    );

    let last_names: Vec<&str> = ledger.programmers().map(|p| p.last_name.as_str()).collect();
    assert_eq!(last_names, vec!["Doe", "Løvaas", "Turing"]);
    Ok(())
}

#[test]
fn test_advance_then_save_changes_only_durations() -> Result<()> {
    let (temp_dir, service) = service_with(COMPANY)?;

    let mut ledger = service.load("data.json")?;
    ledger.advance();
    service.save(&ledger, "data.json")?;

    let mut expected: serde_json::Value = serde_json::from_str(COMPANY)?;
    for team in expected.as_array_mut().unwrap() {
        for programmer in team["Programmers"].as_array_mut().unwrap() {
            let duration = programmer["Duration"].as_i64().unwrap();
            programmer["Duration"] = serde_json::json!(duration + 1);
        }
    }

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(temp_dir.path().join("data.json"))?)?;
    assert_eq!(written, expected);
    Ok(())
}

#[test]
fn test_null_top_level_loads_empty() -> Result<()> {
    let (_temp_dir, service) = service_with("null")?;
    assert!(service.load("data.json")?.is_empty());
    Ok(())
}

#[test]
fn test_missing_file_is_data_load_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let service = LedgerService::new(LocalStorage::new(temp_dir.path()));

    let err = service.load("missing.json").unwrap_err();
    assert!(matches!(err, LedgerError::DataLoadError { .. }));
    assert!(err.user_friendly_message().starts_with("Error loading data: "));
    Ok(())
}

#[test]
fn test_wrong_shape_is_data_load_error() -> Result<()> {
    let (_temp_dir, service) =
        service_with(r#"[{"TeamName":"Alpha","FullSalary":"yes","Programmers":[]}]"#)?;
    assert!(matches!(
        service.load("data.json"),
        Err(LedgerError::DataLoadError { .. })
    ));
    Ok(())
}
