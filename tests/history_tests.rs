/// Integration tests for the file-backed history repository
use buscacep::history::{FileHistoryRepository, HistoryList, HistoryRepository};
use buscacep::models::AddressRecord;
use tempfile::TempDir;

fn record(code: &str, city: &str) -> AddressRecord {
    AddressRecord {
        code: code.to_string(),
        street: String::new(),
        complement: String::new(),
        neighborhood: String::new(),
        city: city.to_string(),
        state_abbreviation: "SP".to_string(),
        city_code: String::new(),
        gia_code: String::new(),
        area_code: String::new(),
        siafi_code: String::new(),
    }
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let repo = FileHistoryRepository::new(dir.path().join("buscaCEP-history.json"));

    let mut history = HistoryList::new();
    history.insert(record("01001-000", "São Paulo"));
    history.insert(record("20040-020", "Rio de Janeiro"));

    repo.save(&history).unwrap();
    let loaded = repo.load();

    assert_eq!(loaded, history);
    let codes: Vec<String> = loaded.entries().iter().map(|r| r.code.clone()).collect();
    assert_eq!(codes, vec!["01001-000", "20040-020"]);
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = TempDir::new().unwrap();
    let repo = FileHistoryRepository::new(dir.path().join("does-not-exist.json"));

    assert!(repo.load().is_empty());
}

#[test]
fn test_corrupt_file_degrades_to_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("buscaCEP-history.json");
    std::fs::write(&path, "not valid json").unwrap();

    let repo = FileHistoryRepository::new(path);
    assert!(repo.load().is_empty());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("dir").join("history.json");
    let repo = FileHistoryRepository::new(path.clone());

    let mut history = HistoryList::new();
    history.insert(record("01001-000", "São Paulo"));
    repo.save(&history).unwrap();

    assert!(path.exists());
    assert_eq!(repo.load().len(), 1);
}

#[test]
fn test_save_rewrites_full_list() {
    let dir = TempDir::new().unwrap();
    let repo = FileHistoryRepository::new(dir.path().join("history.json"));

    let mut history = HistoryList::new();
    history.insert(record("01001-000", "São Paulo"));
    repo.save(&history).unwrap();

    history.insert(record("20040-020", "Rio de Janeiro"));
    repo.save(&history).unwrap();

    assert_eq!(repo.load().len(), 2);
}

#[test]
fn test_stored_json_uses_wire_field_names() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    let repo = FileHistoryRepository::new(path.clone());

    let mut history = HistoryList::new();
    history.insert(record("01001-000", "São Paulo"));
    repo.save(&history).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["cep"], "01001-000");
    assert_eq!(value[0]["localidade"], "São Paulo");
    assert_eq!(value[0]["uf"], "SP");
}

#[test]
fn test_load_deduplicates_hand_edited_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    // Two entries with the same code modulo dashes.
    let raw = serde_json::json!([
        { "cep": "01001-000", "localidade": "São Paulo" },
        { "cep": "01001000", "localidade": "São Paulo (dup)" }
    ]);
    std::fs::write(&path, raw.to_string()).unwrap();

    let repo = FileHistoryRepository::new(path);
    let loaded = repo.load();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded.get(0).unwrap().code, "01001-000");
}
