use petme_core::db::open_db_in_memory;
use petme_core::{
    Animal, AnimalDomainService, AnimalRecord, AnimalRepository, AnimalService, RepoError,
    ServiceError, SqliteAnimalRepository,
};
use rusqlite::Connection;

fn record(id: &str, name: &str) -> AnimalRecord {
    AnimalRecord {
        id: Some(id.to_string()),
        name: Some(name.to_string()),
    }
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAnimalRepository::try_new(&conn).unwrap();

    let created = repo.create(&record("an123", "Dog")).unwrap();
    assert_eq!(created, record("an123", "Dog"));

    let loaded = repo.get_one("an123").unwrap().unwrap();
    assert_eq!(loaded, record("an123", "Dog"));
}

#[test]
fn create_without_id_assigns_one() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAnimalRepository::try_new(&conn).unwrap();

    let created = repo
        .create(&AnimalRecord {
            id: None,
            name: Some("Cat".to_string()),
        })
        .unwrap();

    let id = created.id.expect("store should assign an id");
    assert!(!id.is_empty());
    assert_eq!(
        repo.get_one(&id).unwrap().unwrap().name.as_deref(),
        Some("Cat")
    );
}

#[test]
fn create_with_existing_id_overwrites_in_place() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAnimalRepository::try_new(&conn).unwrap();

    repo.create(&record("an1", "Dog")).unwrap();
    repo.create(&record("an2", "Cat")).unwrap();
    repo.create(&record("an1", "Doggo")).unwrap();

    let all = repo.get_all().unwrap();
    assert_eq!(all, vec![record("an1", "Doggo"), record("an2", "Cat")]);
}

#[test]
fn get_all_on_empty_store_is_empty() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAnimalRepository::try_new(&conn).unwrap();

    assert!(repo.get_all().unwrap().is_empty());
}

#[test]
fn update_not_found_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAnimalRepository::try_new(&conn).unwrap();

    let err = repo.update(&record("ghost", "Ghost")).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { entity: "animal", ref id } if id == "ghost"));
}

#[test]
fn update_and_delete_require_an_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAnimalRepository::try_new(&conn).unwrap();
    let unsaved = AnimalRecord {
        id: None,
        name: Some("Dog".to_string()),
    };

    assert!(matches!(
        repo.update(&unsaved),
        Err(RepoError::MissingId { entity: "animal" })
    ));
    assert!(matches!(
        repo.delete(&unsaved),
        Err(RepoError::MissingId { entity: "animal" })
    ));
}

#[test]
fn delete_removes_record_and_ignores_unknown_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAnimalRepository::try_new(&conn).unwrap();

    repo.create(&record("an1", "Dog")).unwrap();
    repo.delete(&record("an1", "Dog")).unwrap();
    repo.delete(&record("an1", "Dog")).unwrap();

    assert!(repo.get_one("an1").unwrap().is_none());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteAnimalRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAnimalRepository::try_new(&conn).unwrap();
    let service = AnimalService::with_default_translator(repo);

    let created = service.create(&Animal::unsaved("Dog")).unwrap();
    let id = created.id.clone().unwrap();

    assert_eq!(service.get_one(&id).unwrap(), created);

    let renamed = Animal {
        name: Some("Hound".to_string()),
        ..created.clone()
    };
    service.update(&renamed).unwrap();
    assert_eq!(service.get_all().unwrap(), vec![renamed.clone()]);

    service.delete(&renamed).unwrap();
    let err = service.get_one(&id).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { .. }));
}

#[test]
fn service_update_of_unknown_animal_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = AnimalService::with_default_translator(SqliteAnimalRepository::try_new(&conn).unwrap());

    let err = service.update(&Animal::new("missing", "Dog")).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound { entity: "animal", .. }));
}
