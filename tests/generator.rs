use namegen::{BasicNameGenerator, NameGenerator, SqlNameGenerator, UsernameError};
use regex::Regex;
use std::collections::HashSet;

fn assert_unique(generate: impl Fn() -> String) {
    let mut seen = HashSet::new();
    for _ in 0..10 {
        let value = generate();
        assert!(seen.insert(value.clone()), "duplicate value: {}", value);
    }
}

#[test]
fn basic_generator_produces_a_name() {
    let generator = BasicNameGenerator::new();
    assert!(!generator.instance_name().is_empty());
}

#[test]
fn basic_generator_names_are_unique() {
    let generator = BasicNameGenerator::new();
    assert_unique(|| generator.instance_name());
}

#[test]
fn sql_generator_produces_names() {
    let generator = SqlNameGenerator::new();
    assert!(!generator.instance_name().is_empty());
    assert!(!generator.database_name().is_empty());
}

#[test]
fn sql_generator_names_are_unique() {
    let generator = SqlNameGenerator::new();
    assert_unique(|| generator.instance_name());
    assert_unique(|| generator.database_name());
}

#[test]
fn instance_names_satisfy_naming_rules() {
    let generator = SqlNameGenerator::new();
    let re = Regex::new(r"^[a-z][a-z0-9-]*$").unwrap();

    for _ in 0..10 {
        let name = generator.instance_name();
        assert!(re.is_match(&name), "illegal instance name: {}", name);
        assert!(name.len() <= 63);
    }
}

#[test]
fn database_names_satisfy_naming_rules() {
    let generator = SqlNameGenerator::new();
    let re = Regex::new(r"^[a-z][a-z0-9_]*$").unwrap();

    for _ in 0..10 {
        let name = generator.database_name();
        assert!(re.is_match(&name), "illegal database name: {}", name);
        assert!(name.len() <= 63);
    }
}

#[test]
fn instance_and_database_names_never_collide() {
    let generator = SqlNameGenerator::new();
    let instances: HashSet<String> = (0..10).map(|_| generator.instance_name()).collect();
    let databases: HashSet<String> = (0..10).map(|_| generator.database_name()).collect();
    assert!(instances.is_disjoint(&databases));
}

#[test]
fn custom_prefixes_are_honored() {
    let generator = SqlNameGenerator::with_prefixes("svc-", "svc_db_");
    assert!(generator.instance_name().starts_with("svc-"));
    assert!(generator.database_name().starts_with("svc_db_"));
}

#[test]
fn username_requires_an_identifier() {
    let generator = SqlNameGenerator::new();

    // the failure must be stable across calls, never a coin flip
    for _ in 0..3 {
        let err = generator.generate_username("", "").unwrap_err();
        assert!(matches!(err, UsernameError::MissingIdentifiers));
    }
}

#[test]
fn username_accepts_a_single_identifier() {
    let generator = SqlNameGenerator::new();
    assert!(generator.generate_username("foo", "").is_ok());
    assert!(generator.generate_username("", "bar").is_ok());
}

#[test]
fn generates_a_username() {
    let generator = SqlNameGenerator::new();
    let username = generator.generate_username("foo", "bar").unwrap();
    assert!(username.len() > 1);
}

#[test]
fn username_truncates_long_identifiers() {
    let generator = SqlNameGenerator::new();
    let long_id = "x".repeat(65);

    let username = generator.generate_username(&long_id, &long_id).unwrap();
    assert!(username.len() < long_id.len());
    assert!(username.len() <= 63);
}

#[test]
fn username_is_deterministic() {
    let generator = SqlNameGenerator::new();
    let a = generator.generate_username("inst-1", "bind-1").unwrap();
    let b = generator.generate_username("inst-1", "bind-1").unwrap();
    assert_eq!(a, b);
}

#[test]
fn distinct_pairs_produce_distinct_usernames() {
    let generator = SqlNameGenerator::new();
    let long_a = format!("{}alpha", "x".repeat(60));
    let long_b = format!("{}bravo", "x".repeat(60));

    let a = generator.generate_username(&long_a, &long_a).unwrap();
    let b = generator.generate_username(&long_b, &long_b).unwrap();
    assert_ne!(a, b);
}

#[test]
fn generates_a_password() {
    let generator = SqlNameGenerator::new();
    let password = generator.generate_password().unwrap();
    assert!(password.len() > 1);
}

#[test]
fn passwords_are_unique() {
    let generator = SqlNameGenerator::new();
    assert_unique(|| generator.generate_password().unwrap());
}
