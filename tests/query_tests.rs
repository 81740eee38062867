use cohort_roster::parser::parse_roster_file;
use cohort_roster::query::views;
use cohort_roster::{
    all_data, all_houses, all_names_by_house, find_duped_last_names, get_cohort_for,
    get_housemates_for, students_by_cohort,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/cohort_data.txt")
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_all_houses() {
    let houses = all_houses(fixture()).unwrap();
    assert_eq!(
        houses,
        set(&["Dumbledore's Army", "Gryffindor", "Hufflepuff", "Ravenclaw", "Slytherin"])
    );
}

#[test]
fn test_students_by_cohort_fall_2015() {
    let students = students_by_cohort(fixture(), Some("Fall 2015")).unwrap();
    assert_eq!(
        students,
        vec![
            "Cho Chang",
            "Draco Malfoy",
            "Harry Potter",
            "Hermione Granger",
            "Luna Lovegood",
            "Ron Weasley",
            "Seamus Finnigan",
            "Theodore Nott",
        ]
    );
}

#[test]
fn test_students_by_cohort_all_is_union_of_cohorts() {
    let all = students_by_cohort(fixture(), None).unwrap();
    assert_eq!(all.len(), 17);

    let records = parse_roster_file(fixture()).unwrap();
    let mut union: Vec<String> = views::all_cohorts(&records)
        .iter()
        .flat_map(|cohort| students_by_cohort(fixture(), Some(cohort.as_str())).unwrap())
        .collect();
    union.sort();

    assert_eq!(all, union);
    assert!(!all.contains(&"Severus Snape".to_string()));
    assert!(!all.contains(&"Moaning Myrtle".to_string()));
}

#[test]
fn test_all_names_by_house() {
    let rosters = all_names_by_house(fixture()).unwrap();
    let lists = rosters.lists();

    assert_eq!(lists.len(), 7);
    assert_eq!(lists[0], ["Fred Weasley", "George Weasley", "Luna Lovegood"].map(String::from));
    assert_eq!(lists[1].len(), 7);
    assert_eq!(lists[5], ["Fat Friar", "Moaning Myrtle", "Nearly Headless Nick"].map(String::from));
    assert_eq!(
        lists[6],
        ["Filius Flitwick", "Minerva McGonagall", "Severus Snape"].map(String::from)
    );

    for list in lists {
        assert!(list.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}

#[test]
fn test_all_names_by_house_subset_of_names() {
    let rosters = all_names_by_house(fixture()).unwrap();
    let names: BTreeSet<String> = all_data(fixture())
        .unwrap()
        .into_iter()
        .map(|row| row.full_name)
        .collect();

    for name in rosters.lists().iter().flat_map(|list| list.iter()) {
        assert!(names.contains(name));
    }
}

#[test]
fn test_all_data_in_file_order() {
    let rows = all_data(fixture()).unwrap();
    assert_eq!(rows.len(), 23);
    assert_eq!(
        rows[0].as_tuple(),
        ("Harry Potter", "Gryffindor", "McGonagall", "Fall 2015")
    );
    assert_eq!(rows[22].as_tuple(), ("Filius Flitwick", "", "", "I"));
}

#[test]
fn test_get_cohort_for_inverts_all_data() {
    for row in all_data(fixture()).unwrap() {
        let cohort = get_cohort_for(fixture(), &row.full_name).unwrap();
        assert_eq!(cohort.as_deref(), Some(row.cohort.as_str()));
    }
}

#[test]
fn test_get_cohort_for_examples() {
    assert_eq!(
        get_cohort_for(fixture(), "Hannah Abbott").unwrap(),
        Some("Winter 2016".to_string())
    );
    assert_eq!(get_cohort_for(fixture(), "Balloonicorn").unwrap(), None);
}

#[test]
fn test_find_duped_last_names() {
    assert_eq!(
        find_duped_last_names(fixture()).unwrap(),
        set(&["Creevey", "Patil", "Weasley"])
    );
}

#[test]
fn test_get_housemates_for_hermione() {
    assert_eq!(
        get_housemates_for(fixture(), "Hermione Granger").unwrap(),
        set(&["Harry Potter", "Ron Weasley", "Seamus Finnigan"])
    );
}

#[test]
fn test_housemates_exclude_self_and_are_symmetric() {
    for row in all_data(fixture()).unwrap() {
        let housemates = get_housemates_for(fixture(), &row.full_name).unwrap();
        assert!(!housemates.contains(&row.full_name));

        for other in &housemates {
            let back = get_housemates_for(fixture(), other).unwrap();
            assert!(back.contains(&row.full_name), "{} -> {}", row.full_name, other);
        }
    }
}

#[test]
fn test_get_housemates_for_unknown_name_is_empty() {
    assert!(get_housemates_for(fixture(), "Balloonicorn").unwrap().is_empty());
}

#[test]
fn test_harry_and_ron_end_to_end() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Harry|Potter|Gryffindor|McGonagall|Fall 2015").unwrap();
    writeln!(file, "Ron|Weasley|Gryffindor|McGonagall|Fall 2015").unwrap();

    assert_eq!(
        get_housemates_for(file.path(), "Harry Potter").unwrap(),
        set(&["Ron Weasley"])
    );
}

#[test]
fn test_queries_see_file_changes_between_calls() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Harry|Potter|Gryffindor|McGonagall|Fall 2015").unwrap();
    file.flush().unwrap();
    assert_eq!(all_houses(file.path()).unwrap(), set(&["Gryffindor"]));

    writeln!(file, "Draco|Malfoy|Slytherin|Snape|Fall 2015").unwrap();
    file.flush().unwrap();
    assert_eq!(all_houses(file.path()).unwrap(), set(&["Gryffindor", "Slytherin"]));
}

#[test]
fn test_every_query_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    assert!(all_houses(&missing).is_err());
    assert!(students_by_cohort(&missing, None).is_err());
    assert!(all_names_by_house(&missing).is_err());
    assert!(all_data(&missing).is_err());
    assert!(get_cohort_for(&missing, "Harry Potter").is_err());
    assert!(find_duped_last_names(&missing).is_err());
    assert!(get_housemates_for(&missing, "Harry Potter").is_err());
}
